//! Request and result types for occurrence generation.

use scheduler_core::types::time::Date;

use super::frequency::Frequency;

/// One scheduling request: a start date, a recurrence frequency, and an
/// opaque metadata payload cloned unchanged onto every generated occurrence.
///
/// The request is consumed logically once per generation call; the generator
/// keeps no state between calls.
///
/// # Examples
///
/// ```
/// use scheduler_models::schedules::{Frequency, ScheduleRequest};
/// use scheduler_core::types::Date;
///
/// let request = ScheduleRequest::new(
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Frequency::Weekly,
///     "review inventory",
/// );
/// assert_eq!(request.frequency(), Frequency::Weekly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest<M> {
    start_date: Date,
    frequency: Frequency,
    metadata: M,
}

impl<M> ScheduleRequest<M> {
    /// Creates a new request.
    pub fn new(start_date: Date, frequency: Frequency, metadata: M) -> Self {
        Self {
            start_date,
            frequency,
            metadata,
        }
    }

    /// Returns the requested start date.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the recurrence frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the metadata payload.
    #[inline]
    pub fn metadata(&self) -> &M {
        &self.metadata
    }
}

/// One scheduled instance of a task, anchored to a specific working day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<M> {
    due_date: Date,
    metadata: M,
}

impl<M> Occurrence<M> {
    /// Creates a new occurrence.
    pub fn new(due_date: Date, metadata: M) -> Self {
        Self { due_date, metadata }
    }

    /// Returns the working day this occurrence falls due on.
    #[inline]
    pub fn due_date(&self) -> Date {
        self.due_date
    }

    /// Returns the metadata carried from the request.
    #[inline]
    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Consumes the occurrence, returning its parts.
    pub fn into_parts(self) -> (Date, M) {
        (self.due_date, self.metadata)
    }
}

/// How the first occurrence was anchored to the calendar.
///
/// `Substituted` is the warning-level signal that the requested start date
/// was not itself a working day and the next later working day was used
/// instead; generation still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The requested start date is a working day and was used directly.
    Exact(Date),
    /// The requested start date was not in the calendar; a later working
    /// day was substituted.
    Substituted {
        /// The start date as requested.
        requested: Date,
        /// The working day actually used for the first occurrence.
        actual: Date,
    },
}

impl Anchor {
    /// Returns the working day the first occurrence falls on.
    #[inline]
    pub fn date(&self) -> Date {
        match *self {
            Anchor::Exact(date) => date,
            Anchor::Substituted { actual, .. } => actual,
        }
    }

    /// Returns whether a substitute working day was used.
    #[inline]
    pub fn is_substituted(&self) -> bool {
        matches!(self, Anchor::Substituted { .. })
    }
}

/// The result of one successful generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOutcome<M> {
    anchor: Anchor,
    occurrences: Vec<Occurrence<M>>,
}

impl<M> ScheduleOutcome<M> {
    /// Creates a new outcome.
    pub(crate) fn new(anchor: Anchor, occurrences: Vec<Occurrence<M>>) -> Self {
        Self {
            anchor,
            occurrences,
        }
    }

    /// Returns how the first occurrence was anchored.
    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns the generated occurrences in due-date order.
    #[inline]
    pub fn occurrences(&self) -> &[Occurrence<M>] {
        &self.occurrences
    }

    /// Returns the number of generated occurrences.
    #[inline]
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// Returns whether no occurrences were generated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Returns an iterator over the due dates.
    pub fn due_dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.occurrences.iter().map(|o| o.due_date())
    }

    /// Consumes the outcome, returning the occurrences.
    pub fn into_occurrences(self) -> Vec<Occurrence<M>> {
        self.occurrences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_request_accessors() {
        let request = ScheduleRequest::new(d(2024, 1, 1), Frequency::Daily, 42u32);
        assert_eq!(request.start_date(), d(2024, 1, 1));
        assert_eq!(request.frequency(), Frequency::Daily);
        assert_eq!(*request.metadata(), 42);
    }

    #[test]
    fn test_occurrence_into_parts() {
        let occurrence = Occurrence::new(d(2024, 1, 2), "payload");
        let (date, metadata) = occurrence.into_parts();
        assert_eq!(date, d(2024, 1, 2));
        assert_eq!(metadata, "payload");
    }

    #[test]
    fn test_anchor_exact() {
        let anchor = Anchor::Exact(d(2024, 1, 1));
        assert_eq!(anchor.date(), d(2024, 1, 1));
        assert!(!anchor.is_substituted());
    }

    #[test]
    fn test_anchor_substituted() {
        let anchor = Anchor::Substituted {
            requested: d(2024, 1, 6),
            actual: d(2024, 1, 8),
        };
        assert_eq!(anchor.date(), d(2024, 1, 8));
        assert!(anchor.is_substituted());
    }

    #[test]
    fn test_outcome_due_dates() {
        let outcome = ScheduleOutcome::new(
            Anchor::Exact(d(2024, 1, 1)),
            vec![
                Occurrence::new(d(2024, 1, 1), ()),
                Occurrence::new(d(2024, 1, 2), ()),
            ],
        );
        assert_eq!(outcome.len(), 2);
        assert!(!outcome.is_empty());
        let dates: Vec<Date> = outcome.due_dates().collect();
        assert_eq!(dates, vec![d(2024, 1, 1), d(2024, 1, 2)]);
    }
}
