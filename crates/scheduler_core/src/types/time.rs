//! Calendar date type and arithmetic.
//!
//! This module provides:
//! - `Date`: Type-safe calendar date wrapper around chrono::NaiveDate
//! - Checked day/month/year arithmetic with end-of-month clipping
//!
//! # Examples
//!
//! ```
//! use scheduler_core::types::time::Date;
//!
//! let start = Date::from_ymd(2024, 1, 31).unwrap();
//!
//! // Month arithmetic clips to the length of the target month
//! let next = start.checked_add_months(1).unwrap();
//! assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
//! ```

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe calendar date wrapper around chrono::NaiveDate.
///
/// A pure (year, month, day) triple with no time component. Equality and
/// ordering follow calendar order. Provides ISO 8601 serialisation and the
/// date arithmetic the scheduling kernel needs.
///
/// # Examples
///
/// ```
/// use scheduler_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2024)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::types::time::Date;
    ///
    /// // Valid date
    /// let date = Date::from_ymd(2024, 6, 15).unwrap();
    ///
    /// // Leap year February 29th
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    ///
    /// // Invalid date returns error
    /// let invalid = Date::from_ymd(2024, 2, 30);
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// let invalid = Date::parse("not-a-date");
    /// assert!(invalid.is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::types::time::Date;
    /// use chrono::Weekday;
    ///
    /// // 2024-01-01 was a Monday
    /// let date = Date::from_ymd(2024, 1, 1).unwrap();
    /// assert_eq!(date.weekday(), Weekday::Mon);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Adds the given number of calendar days.
    ///
    /// Returns `None` on arithmetic overflow (dates outside chrono's
    /// representable range).
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(
    ///     date.checked_add_days(2),
    ///     Some(Date::from_ymd(2024, 3, 1).unwrap())
    /// );
    /// ```
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Date)
    }

    /// Adds the given number of calendar months, clipping the day to the
    /// length of the target month.
    ///
    /// Returns `None` on arithmetic overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::types::time::Date;
    ///
    /// // January 31st + 1 month clips to February 29th (2024 is a leap year)
    /// let date = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(
    ///     date.checked_add_months(1),
    ///     Some(Date::from_ymd(2024, 2, 29).unwrap())
    /// );
    /// ```
    pub fn checked_add_months(self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Date)
    }

    /// Adds the given number of calendar years, clipping February 29th to
    /// February 28th on non-leap years.
    ///
    /// Returns `None` on arithmetic overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(
    ///     date.checked_add_years(1),
    ///     Some(Date::from_ymd(2025, 2, 28).unwrap())
    /// );
    /// ```
    pub fn checked_add_years(self, years: u32) -> Option<Self> {
        self.0
            .checked_add_months(Months::new(years.checked_mul(12)?))
            .map(Date)
    }

    /// Returns the (year, month) pair of the calendar month after this
    /// date's month.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 12, 15).unwrap();
    /// assert_eq!(date.following_month(), (2025, 1));
    /// ```
    pub fn following_month(&self) -> (i32, u32) {
        if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        }
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(inner: NaiveDate) -> Self {
        Date(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_from_ymd_leap_year() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
    }

    #[test]
    fn test_parse_valid() {
        let date = Date::parse("2024-06-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("15/06/2024").is_err());
    }

    #[test]
    fn test_from_str() {
        let date: Date = "2024-06-15".parse().unwrap();
        assert_eq!(date.year(), 2024);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(format!("{}", date), "2024-06-15");
    }

    #[test]
    fn test_subtraction() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 1, 11).unwrap();
        assert_eq!(end - start, 10);
        assert_eq!(start - end, -10);
    }

    #[test]
    fn test_ordering() {
        let earlier = Date::from_ymd(2024, 1, 1).unwrap();
        let later = Date::from_ymd(2024, 12, 31).unwrap();
        assert!(earlier < later);
        assert!(later > earlier);
        assert!(earlier <= earlier);
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday, 2024-01-07 a Sunday
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Mon);
        assert_eq!(Date::from_ymd(2024, 1, 7).unwrap().weekday(), Weekday::Sun);
    }

    #[test]
    fn test_checked_add_days() {
        let date = Date::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(
            date.checked_add_days(1),
            Some(Date::from_ymd(2024, 2, 29).unwrap())
        );
        assert_eq!(
            date.checked_add_days(2),
            Some(Date::from_ymd(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_checked_add_days_across_year() {
        let date = Date::from_ymd(2023, 12, 31).unwrap();
        assert_eq!(
            date.checked_add_days(7),
            Some(Date::from_ymd(2024, 1, 7).unwrap())
        );
    }

    #[test]
    fn test_checked_add_months_clips() {
        // 31 Jan + 1 month -> 29 Feb (leap year)
        let date = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(
            date.checked_add_months(1),
            Some(Date::from_ymd(2024, 2, 29).unwrap())
        );

        // 31 Jan + 1 month -> 28 Feb (non-leap year)
        let date = Date::from_ymd(2023, 1, 31).unwrap();
        assert_eq!(
            date.checked_add_months(1),
            Some(Date::from_ymd(2023, 2, 28).unwrap())
        );
    }

    #[test]
    fn test_checked_add_months_preserves_day() {
        let date = Date::from_ymd(2024, 3, 15).unwrap();
        assert_eq!(
            date.checked_add_months(3),
            Some(Date::from_ymd(2024, 6, 15).unwrap())
        );
    }

    #[test]
    fn test_checked_add_months_across_year() {
        let date = Date::from_ymd(2024, 11, 30).unwrap();
        assert_eq!(
            date.checked_add_months(3),
            Some(Date::from_ymd(2025, 2, 28).unwrap())
        );
    }

    #[test]
    fn test_checked_add_years() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(
            date.checked_add_years(1),
            Some(Date::from_ymd(2025, 6, 15).unwrap())
        );
    }

    #[test]
    fn test_checked_add_years_leap_day() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(
            date.checked_add_years(1),
            Some(Date::from_ymd(2025, 2, 28).unwrap())
        );
        assert_eq!(
            date.checked_add_years(4),
            Some(Date::from_ymd(2028, 2, 29).unwrap())
        );
    }

    #[test]
    fn test_following_month() {
        assert_eq!(
            Date::from_ymd(2024, 1, 15).unwrap().following_month(),
            (2024, 2)
        );
        assert_eq!(
            Date::from_ymd(2024, 12, 1).unwrap().following_month(),
            (2025, 1)
        );
    }

    #[test]
    fn test_into_inner() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(date.into_inner().year(), 2024);
    }

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let date: Date = naive.into();
        assert_eq!(date, Date::from_ymd(2024, 6, 15).unwrap());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serde_roundtrip() {
            let date = Date::from_ymd(2024, 6, 15).unwrap();
            let json = serde_json::to_string(&date).unwrap();
            assert_eq!(json, "\"2024-06-15\"");

            let parsed: Date = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, date);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    Date::from_ymd(year, month, day).ok()
                })
        }

        proptest! {
            #[test]
            fn test_add_days_is_monotonic(date in date_strategy(), days in 1u64..1000) {
                let later = date.checked_add_days(days).unwrap();
                prop_assert!(later > date);
                prop_assert_eq!(later - date, days as i64);
            }

            #[test]
            fn test_add_months_is_monotonic(date in date_strategy(), months in 1u32..48) {
                let later = date.checked_add_months(months).unwrap();
                prop_assert!(later > date);
            }

            #[test]
            fn test_add_months_never_exceeds_source_day(
                date in date_strategy(),
                months in 1u32..48,
            ) {
                // Clipping can only shrink the day-of-month component
                let later = date.checked_add_months(months).unwrap();
                prop_assert!(later.day() <= date.day());
            }

            #[test]
            fn test_display_parse_roundtrip(date in date_strategy()) {
                let parsed = Date::parse(&format!("{}", date)).unwrap();
                prop_assert_eq!(parsed, date);
            }
        }
    }
}
