//! Recurrence frequency enumeration.

use std::fmt;
use std::str::FromStr;

/// Week-of-month selector for the `end-of-*-week` frequencies.
///
/// Weeks are the contiguous groups produced by the month partition described
/// on [`Frequency::EndOfWeek`]; `Last` always selects the final group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekOfMonth {
    /// The first week group of the month.
    First,
    /// The second week group of the month.
    Second,
    /// The third week group of the month.
    Third,
    /// The fourth week group of the month.
    Fourth,
    /// The final week group of the month, however many there are.
    Last,
}

impl WeekOfMonth {
    /// Returns the zero-based group index, or `None` for `Last`.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            WeekOfMonth::First => Some(0),
            WeekOfMonth::Second => Some(1),
            WeekOfMonth::Third => Some(2),
            WeekOfMonth::Fourth => Some(3),
            WeekOfMonth::Last => None,
        }
    }
}

/// Recurrence frequency for scheduled tasks.
///
/// Defines how the due date of each subsequent occurrence is derived from
/// the current one. The five `end-of-*-week` values of the task-assignment
/// vocabulary are carried by the nested [`WeekOfMonth`] selector.
///
/// # Examples
///
/// ```
/// use scheduler_models::schedules::{Frequency, WeekOfMonth};
///
/// let freq: Frequency = "end-of-2nd-week".parse().unwrap();
/// assert_eq!(freq, Frequency::EndOfWeek(WeekOfMonth::Second));
/// assert_eq!(freq.name(), "end-of-2nd-week");
/// assert!(freq.is_recurring());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// A single occurrence, no recurrence.
    OneTime,
    /// Every working day (positional: the next calendar entry).
    Daily,
    /// Every 7 calendar days, resolved to the next working day.
    Weekly,
    /// Every 14 calendar days, resolved to the next working day.
    Fortnightly,
    /// Every calendar month (same day-of-month, clipped), resolved to the
    /// next working day.
    Monthly,
    /// Every 3 calendar months, resolved to the next working day.
    Quarterly,
    /// Every calendar year, resolved to the next working day.
    Yearly,
    /// The last working day of the selected week group in the month after
    /// the current occurrence's month.
    EndOfWeek(WeekOfMonth),
}

impl Frequency {
    /// Returns the wire spelling for this frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_models::schedules::Frequency;
    ///
    /// assert_eq!(Frequency::OneTime.name(), "one-time");
    /// assert_eq!(Frequency::Fortnightly.name(), "fortnightly");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Fortnightly => "fortnightly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
            Frequency::EndOfWeek(WeekOfMonth::First) => "end-of-1st-week",
            Frequency::EndOfWeek(WeekOfMonth::Second) => "end-of-2nd-week",
            Frequency::EndOfWeek(WeekOfMonth::Third) => "end-of-3rd-week",
            Frequency::EndOfWeek(WeekOfMonth::Fourth) => "end-of-4th-week",
            Frequency::EndOfWeek(WeekOfMonth::Last) => "end-of-last-week",
        }
    }

    /// Returns whether this frequency produces more than one occurrence.
    #[inline]
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Frequency::OneTime)
    }

    /// Returns every supported frequency in wire order.
    pub fn all() -> [Frequency; 12] {
        [
            Frequency::OneTime,
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Fortnightly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Yearly,
            Frequency::EndOfWeek(WeekOfMonth::First),
            Frequency::EndOfWeek(WeekOfMonth::Second),
            Frequency::EndOfWeek(WeekOfMonth::Third),
            Frequency::EndOfWeek(WeekOfMonth::Fourth),
            Frequency::EndOfWeek(WeekOfMonth::Last),
        ]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = String;

    /// Parses a frequency from its wire spelling (case-insensitive;
    /// hyphens, underscores and spaces are interchangeable).
    ///
    /// Unknown spellings are an error: a frequency is never silently
    /// defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "onetime" => Ok(Frequency::OneTime),
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "fortnightly" => Ok(Frequency::Fortnightly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            "endof1stweek" => Ok(Frequency::EndOfWeek(WeekOfMonth::First)),
            "endof2ndweek" => Ok(Frequency::EndOfWeek(WeekOfMonth::Second)),
            "endof3rdweek" => Ok(Frequency::EndOfWeek(WeekOfMonth::Third)),
            "endof4thweek" => Ok(Frequency::EndOfWeek(WeekOfMonth::Fourth)),
            "endoflastweek" => Ok(Frequency::EndOfWeek(WeekOfMonth::Last)),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Frequency;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Frequency {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Frequency {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Frequency::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_for_all() {
        for freq in Frequency::all() {
            assert_eq!(freq.name().parse::<Frequency>().unwrap(), freq);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Frequency::OneTime), "one-time");
        assert_eq!(
            format!("{}", Frequency::EndOfWeek(WeekOfMonth::Last)),
            "end-of-last-week"
        );
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("one-time".parse::<Frequency>().unwrap(), Frequency::OneTime);
        assert_eq!("One-Time".parse::<Frequency>().unwrap(), Frequency::OneTime);
        assert_eq!("one_time".parse::<Frequency>().unwrap(), Frequency::OneTime);
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!(
            "fortnightly".parse::<Frequency>().unwrap(),
            Frequency::Fortnightly
        );
        assert_eq!(
            "end-of-1st-week".parse::<Frequency>().unwrap(),
            Frequency::EndOfWeek(WeekOfMonth::First)
        );
        assert_eq!(
            "End Of Last Week".parse::<Frequency>().unwrap(),
            Frequency::EndOfWeek(WeekOfMonth::Last)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("biweekly".parse::<Frequency>().is_err());
        assert!("".parse::<Frequency>().is_err());
        assert!("end-of-5th-week".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_is_recurring() {
        assert!(!Frequency::OneTime.is_recurring());
        assert!(Frequency::Daily.is_recurring());
        assert!(Frequency::EndOfWeek(WeekOfMonth::Third).is_recurring());
    }

    #[test]
    fn test_week_of_month_index() {
        assert_eq!(WeekOfMonth::First.index(), Some(0));
        assert_eq!(WeekOfMonth::Fourth.index(), Some(3));
        assert_eq!(WeekOfMonth::Last.index(), None);
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Frequency::Daily);
        set.insert(Frequency::Weekly);
        set.insert(Frequency::Daily);
        assert_eq!(set.len(), 2);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serde_roundtrip_all() {
            for freq in Frequency::all() {
                let json = serde_json::to_string(&freq).unwrap();
                let parsed: Frequency = serde_json::from_str(&json).unwrap();
                assert_eq!(parsed, freq);
            }
        }

        #[test]
        fn test_serde_wire_spelling() {
            let json = serde_json::to_string(&Frequency::EndOfWeek(WeekOfMonth::Second)).unwrap();
            assert_eq!(json, "\"end-of-2nd-week\"");
        }

        #[test]
        fn test_serde_rejects_unknown() {
            let result: Result<Frequency, _> = serde_json::from_str("\"hourly\"");
            assert!(result.is_err());
        }
    }
}
