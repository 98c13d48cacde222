//! Working-day calendar snapshot.
//!
//! This module provides [`WorkingDaySet`], an immutable, ascending-sorted,
//! deduplicated sequence of business days. It is rebuilt from the external
//! calendar source for each generation request and never mutated in place.

use crate::types::time::Date;

/// An immutable snapshot of the business working-day calendar.
///
/// Built from any collection of dates; the constructor sorts ascending and
/// removes duplicates, so lookups can rely on total ordering. The snapshot
/// carries no provenance: whatever the upstream calendar source flagged as a
/// working day is taken at face value.
///
/// # Examples
///
/// ```
/// use scheduler_core::calendar::WorkingDaySet;
/// use scheduler_core::types::Date;
///
/// let calendar = WorkingDaySet::from_dates(vec![
///     Date::from_ymd(2024, 1, 3).unwrap(),
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2024, 1, 3).unwrap(),
/// ]);
///
/// assert_eq!(calendar.len(), 2);
/// assert_eq!(calendar.first(), Some(Date::from_ymd(2024, 1, 1).unwrap()));
/// assert_eq!(calendar.last(), Some(Date::from_ymd(2024, 1, 3).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingDaySet {
    /// Strictly ascending working days.
    days: Vec<Date>,
}

impl WorkingDaySet {
    /// Builds a snapshot from an arbitrary collection of dates.
    ///
    /// The input is sorted ascending and deduplicated; input order is
    /// irrelevant.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::calendar::WorkingDaySet;
    /// use scheduler_core::types::Date;
    ///
    /// let calendar = WorkingDaySet::from_dates(vec![
    ///     Date::from_ymd(2024, 1, 2).unwrap(),
    ///     Date::from_ymd(2024, 1, 1).unwrap(),
    /// ]);
    /// assert_eq!(calendar.len(), 2);
    /// ```
    pub fn from_dates(mut dates: Vec<Date>) -> Self {
        dates.sort_unstable();
        dates.dedup();
        Self { days: dates }
    }

    /// Returns the working days as an ascending-sorted slice.
    #[inline]
    pub fn days(&self) -> &[Date] {
        &self.days
    }

    /// Returns the number of working days in the snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns whether the snapshot is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the working day at the given index, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Date> {
        self.days.get(index).copied()
    }

    /// Returns the earliest working day, if any.
    #[inline]
    pub fn first(&self) -> Option<Date> {
        self.days.first().copied()
    }

    /// Returns the latest working day, if any.
    #[inline]
    pub fn last(&self) -> Option<Date> {
        self.days.last().copied()
    }

    /// Returns whether the given date is a working day in this snapshot.
    pub fn contains(&self, date: Date) -> bool {
        self.days.binary_search(&date).is_ok()
    }

    /// Returns an iterator over the working days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.days.iter().copied()
    }

    /// Returns the index of the first working day on or after `date`.
    ///
    /// This is the anchoring rule used throughout the scheduler: a requested
    /// date that is itself a working day anchors exactly; otherwise the next
    /// later working day is chosen. Back-dating never occurs.
    ///
    /// Returns `None` when every working day lies strictly before `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::calendar::WorkingDaySet;
    /// use scheduler_core::types::Date;
    ///
    /// let calendar = WorkingDaySet::from_dates(vec![
    ///     Date::from_ymd(2024, 1, 8).unwrap(),
    ///     Date::from_ymd(2024, 1, 10).unwrap(),
    /// ]);
    ///
    /// // Exact hit
    /// let on = Date::from_ymd(2024, 1, 8).unwrap();
    /// assert_eq!(calendar.anchor_on_or_after(on), Some(0));
    ///
    /// // Between entries: next later entry
    /// let between = Date::from_ymd(2024, 1, 9).unwrap();
    /// assert_eq!(calendar.anchor_on_or_after(between), Some(1));
    ///
    /// // Past the end: no anchor
    /// let late = Date::from_ymd(2024, 1, 11).unwrap();
    /// assert_eq!(calendar.anchor_on_or_after(late), None);
    /// ```
    pub fn anchor_on_or_after(&self, date: Date) -> Option<usize> {
        let idx = self.days.partition_point(|&d| d < date);
        (idx < self.days.len()).then_some(idx)
    }

    /// Returns the index of the given date, if it is a working day.
    pub fn position(&self, date: Date) -> Option<usize> {
        self.days.binary_search(&date).ok()
    }

    /// Returns the contiguous sub-slice of working days falling in the given
    /// calendar month.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheduler_core::calendar::WorkingDaySet;
    /// use scheduler_core::types::Date;
    ///
    /// let calendar = WorkingDaySet::from_dates(vec![
    ///     Date::from_ymd(2024, 1, 31).unwrap(),
    ///     Date::from_ymd(2024, 2, 1).unwrap(),
    ///     Date::from_ymd(2024, 2, 29).unwrap(),
    ///     Date::from_ymd(2024, 3, 1).unwrap(),
    /// ]);
    ///
    /// let february = calendar.days_in_month(2024, 2);
    /// assert_eq!(february.len(), 2);
    /// ```
    pub fn days_in_month(&self, year: i32, month: u32) -> &[Date] {
        let start = self
            .days
            .partition_point(|d| (d.year(), d.month()) < (year, month));
        let end = self
            .days
            .partition_point(|d| (d.year(), d.month()) <= (year, month));
        &self.days[start..end]
    }
}

impl FromIterator<Date> for WorkingDaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self::from_dates(iter.into_iter().collect())
    }
}
