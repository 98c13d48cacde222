//! The occurrence generator.
//!
//! Pure, synchronous, single pass over an immutable working-day snapshot.
//! All I/O (fetching the calendar, submitting the generated occurrences)
//! belongs to the caller.

use scheduler_core::calendar::WorkingDaySet;
use scheduler_core::types::time::Date;

use super::error::ScheduleError;
use super::frequency::{Frequency, WeekOfMonth};
use super::request::{Anchor, Occurrence, ScheduleOutcome, ScheduleRequest};

/// Generates the ordered sequence of occurrences for one request.
///
/// The first occurrence falls on the first working day on or after the
/// requested start date (the anchor). Each subsequent occurrence is derived
/// from the current one by the frequency's target rule, then resolved to the
/// first working day on or after that target. Generation ends when the
/// calendar is exhausted or the resolved index fails to advance; both are
/// normal termination, and the sequence produced so far is returned.
///
/// The generator imposes no cap on the number of occurrences: a `daily`
/// request emits one occurrence per remaining calendar entry. Callers that
/// need a bound apply it to the returned sequence.
///
/// # Errors
///
/// - [`ScheduleError::NoWorkingDaysAvailable`] if the calendar is empty
/// - [`ScheduleError::NoFutureWorkingDay`] if every working day lies
///   strictly before the start date
///
/// # Examples
///
/// ```
/// use scheduler_core::calendar::WorkingDaySet;
/// use scheduler_core::types::Date;
/// use scheduler_models::schedules::{generate, Frequency, ScheduleRequest};
///
/// let calendar = WorkingDaySet::from_dates(
///     (1..=5)
///         .map(|day| Date::from_ymd(2024, 1, day).unwrap())
///         .collect(),
/// );
/// let request = ScheduleRequest::new(
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Frequency::Daily,
///     (),
/// );
///
/// let outcome = generate(&request, &calendar).unwrap();
/// assert_eq!(outcome.len(), 5);
/// ```
pub fn generate<M: Clone>(
    request: &ScheduleRequest<M>,
    calendar: &WorkingDaySet,
) -> Result<ScheduleOutcome<M>, ScheduleError> {
    if calendar.is_empty() {
        return Err(ScheduleError::NoWorkingDaysAvailable);
    }

    let start = request.start_date();
    let anchor_index = calendar
        .anchor_on_or_after(start)
        .ok_or(ScheduleError::NoFutureWorkingDay { start })?;

    let days = calendar.days();
    let anchor_date = days[anchor_index];
    let anchor = if anchor_date == start {
        Anchor::Exact(start)
    } else {
        Anchor::Substituted {
            requested: start,
            actual: anchor_date,
        }
    };

    let mut occurrences = Vec::new();
    let mut index = anchor_index;
    loop {
        occurrences.push(Occurrence::new(days[index], request.metadata().clone()));

        // A resolved index that fails to strictly advance would loop forever
        // on the same entry; treat it as exhaustion.
        match next_index(request.frequency(), calendar, index) {
            Some(next) if next > index => index = next,
            _ => break,
        }
    }

    Ok(ScheduleOutcome::new(anchor, occurrences))
}

/// Computes the index of the next occurrence, if one exists.
///
/// For the calendar-arithmetic frequencies the target date need not be a
/// working day; it is resolved to the first working day on or after it.
fn next_index(frequency: Frequency, calendar: &WorkingDaySet, current: usize) -> Option<usize> {
    let current_date = calendar.get(current)?;

    match frequency {
        Frequency::OneTime => None,
        // Positional: the next calendar entry, not current + 1 day.
        Frequency::Daily => {
            let next = current + 1;
            (next < calendar.len()).then_some(next)
        }
        Frequency::Weekly => resolve(calendar, current_date.checked_add_days(7)?),
        Frequency::Fortnightly => resolve(calendar, current_date.checked_add_days(14)?),
        Frequency::Monthly => resolve(calendar, current_date.checked_add_months(1)?),
        Frequency::Quarterly => resolve(calendar, current_date.checked_add_months(3)?),
        Frequency::Yearly => resolve(calendar, current_date.checked_add_years(1)?),
        Frequency::EndOfWeek(week) => {
            let (year, month) = current_date.following_month();
            let candidate = end_of_week_candidate(calendar.days_in_month(year, month), week)?;
            calendar.position(candidate)
        }
    }
}

/// Resolves a target date to the first working day on or after it.
fn resolve(calendar: &WorkingDaySet, target: Date) -> Option<usize> {
    calendar.anchor_on_or_after(target)
}

/// Selects the last working day of the requested week group within one
/// month's working days.
///
/// The month is partitioned into contiguous groups: a new group starts
/// whenever the day-of-week (Sunday-first numbering) does not strictly
/// increase from the previous entry, i.e. whenever the sequence wraps past
/// the end of a week. A month whose first working day falls late in the
/// week therefore gets a short leading group; that is the calendar
/// vocabulary the task forms were built around, so it is preserved rather
/// than corrected to ISO weeks.
///
/// If the requested group does not exist, the month's last working day is
/// used. An empty month yields `None`.
fn end_of_week_candidate(month_days: &[Date], week: WeekOfMonth) -> Option<Date> {
    if month_days.is_empty() {
        return None;
    }

    let mut group_ends: Vec<Date> = Vec::new();
    let mut previous_weekday: Option<u32> = None;
    for &day in month_days {
        let weekday = day.weekday().num_days_from_sunday();
        let continues_group =
            matches!(previous_weekday, Some(previous) if weekday > previous);
        if continues_group {
            if let Some(end) = group_ends.last_mut() {
                *end = day;
            }
        } else {
            group_ends.push(day);
        }
        previous_weekday = Some(weekday);
    }

    let selected = match week.index() {
        Some(index) => group_ends.get(index).copied(),
        None => group_ends.last().copied(),
    };

    selected.or_else(|| month_days.last().copied())
}
