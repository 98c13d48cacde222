//! Task template carried onto generated occurrences.

/// The task fields captured by the assignment form, carried unchanged onto
/// every occurrence of a recurring task.
///
/// This is a named-field record: calendar position or column order never
/// leaks past the adapter boundary.
///
/// # Examples
///
/// ```
/// use scheduler_models::tasks::TaskTemplate;
///
/// let task = TaskTemplate {
///     description: "Weekly stock count".to_string(),
///     doer: "asha".to_string(),
///     ..TaskTemplate::default()
/// };
/// assert!(!task.enable_reminders);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TaskTemplate {
    /// What the task is.
    pub description: String,
    /// Department the task belongs to.
    pub department: String,
    /// Who assigned the task.
    pub given_by: String,
    /// Who performs the task.
    pub doer: String,
    /// Whether reminder notifications are requested.
    pub enable_reminders: bool,
    /// Whether completing the task requires an attachment.
    pub require_attachment: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let task = TaskTemplate::default();
        assert!(task.description.is_empty());
        assert!(!task.enable_reminders);
        assert!(!task.require_attachment);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_camel_case_wire_names() {
            let task = TaskTemplate {
                description: "d".to_string(),
                department: "ops".to_string(),
                given_by: "m".to_string(),
                doer: "a".to_string(),
                enable_reminders: true,
                require_attachment: false,
            };
            let json = serde_json::to_string(&task).unwrap();
            assert!(json.contains("givenBy"));
            assert!(json.contains("enableReminders"));
            assert!(json.contains("requireAttachment"));
        }

        #[test]
        fn test_missing_fields_default() {
            let task: TaskTemplate =
                serde_json::from_str(r#"{"description":"only this"}"#).unwrap();
            assert_eq!(task.description, "only this");
            assert!(task.doer.is_empty());
        }
    }
}
