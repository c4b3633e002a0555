use std::iter::successors;
use thiserror::Error;
use time::{util::days_in_month, Date, Duration, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

/// Seven consecutive dates, the first of which falls on the grid's week-start
/// weekday
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Week([Date; DAYS_IN_WEEK]);

impl Week {
    // Returns `None` if the week would run past the end of time
    fn starting(first: Date) -> Option<Week> {
        let mut days = [first; DAYS_IN_WEEK];
        let mut cursor = first;
        for slot in days.iter_mut().skip(1) {
            cursor = cursor.next_day()?;
            *slot = cursor;
        }
        Some(Week(days))
    }

    pub(crate) fn first(&self) -> Date {
        self.0[0]
    }

    pub(crate) fn last(&self) -> Date {
        self.0[DAYS_IN_WEEK - 1]
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Date> {
        self.0.iter()
    }
}

/// The weeks needed to show one whole month, padded at both ends with days
/// from the adjacent months
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarGrid {
    year: i32,
    month: Month,
    week_start: Weekday,
    weeks: Vec<Week>,
}

impl CalendarGrid {
    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub(crate) fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Column headers, starting from the week-start weekday
    pub(crate) fn weekday_labels(&self) -> [Weekday; DAYS_IN_WEEK] {
        weekdays_from(self.week_start)
    }

    /// True for the padding days that belong to the previous or next month
    pub(crate) fn is_outside_month(&self, date: Date) -> bool {
        date.year() != self.year || date.month() != self.month
    }
}

/// Lay out the month containing `reference` as whole weeks starting on
/// `week_start`.
///
/// The grid spans from the start of the week containing the first of the
/// month to the end of the week containing the last of the month, so every
/// day of the month appears exactly once.  The only failure is when that span
/// reaches outside the range of representable dates.
pub(crate) fn build_grid(
    reference: Date,
    week_start: Weekday,
) -> Result<CalendarGrid, OutOfTimeError> {
    let start = first_of_month(reference)
        .and_then(|d| start_of_week(d, week_start))
        .ok_or(OutOfTimeError)?;
    let end = last_of_month(reference)
        .and_then(|d| end_of_week(d, week_start))
        .ok_or(OutOfTimeError)?;
    let mut weeks = Vec::with_capacity(6);
    // Weeks are cut until the cursor passes `end`, so a misaligned `end`
    // would add padding rather than drop days.
    let mut cursor = Some(start);
    while let Some(first) = cursor.filter(|&d| d <= end) {
        let week = Week::starting(first).ok_or(OutOfTimeError)?;
        debug_assert_eq!(week.first().weekday(), week_start, "misaligned week");
        cursor = week.last().next_day();
        weeks.push(week);
    }
    Ok(CalendarGrid {
        year: reference.year(),
        month: reference.month(),
        week_start,
        weeks,
    })
}

/// The seven weekdays in column order for a grid starting on `week_start`
fn weekdays_from(week_start: Weekday) -> [Weekday; DAYS_IN_WEEK] {
    let mut days = [week_start; DAYS_IN_WEEK];
    let mut wd = week_start;
    for slot in days.iter_mut().skip(1) {
        wd = wd.next();
        *slot = wd;
    }
    days
}

pub(crate) fn first_of_month(date: Date) -> Option<Date> {
    date.checked_sub(Duration::days(i64::from(date.day()) - 1))
}

pub(crate) fn last_of_month(date: Date) -> Option<Date> {
    let length = days_in_month(date.month(), date.year());
    date.checked_add(Duration::days(i64::from(length - date.day())))
}

// Number of days from the start of the week back to `wd`
fn days_into_week(wd: Weekday, week_start: Weekday) -> u8 {
    (wd.number_days_from_monday() + 7 - week_start.number_days_from_monday()) % 7
}

fn start_of_week(date: Date, week_start: Weekday) -> Option<Date> {
    let back = days_into_week(date.weekday(), week_start);
    successors(Some(date), |d| d.previous_day()).nth(back.into())
}

fn end_of_week(date: Date, week_start: Weekday) -> Option<Date> {
    let forward = 6 - days_into_week(date.weekday(), week_start);
    successors(Some(date), |d| d.next_day()).nth(forward.into())
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::date;
    use time::Weekday::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};

    fn all_days(grid: &CalendarGrid) -> Vec<Date> {
        grid.weeks().iter().flat_map(Week::iter).copied().collect()
    }

    #[test]
    fn test_may_2024_monday_start() {
        let grid = build_grid(date!(2024 - 05 - 01), Monday).unwrap();
        assert_eq!(grid.weeks().len(), 5);
        assert_eq!(grid.weeks()[0].first(), date!(2024 - 04 - 29));
        assert_eq!(grid.weeks()[4].last(), date!(2024 - 06 - 02));
        assert_eq!(grid.month(), Month::May);
        assert_eq!(grid.year(), 2024);
    }

    #[test]
    fn test_reference_mid_month() {
        assert_eq!(
            build_grid(date!(2024 - 05 - 17), Monday),
            build_grid(date!(2024 - 05 - 01), Monday),
        );
    }

    #[test]
    fn test_may_2024_sunday_start() {
        let grid = build_grid(date!(2024 - 05 - 09), Sunday).unwrap();
        assert_eq!(grid.weeks()[0].first(), date!(2024 - 04 - 28));
        assert_eq!(
            grid.weeks().last().map(Week::last),
            Some(date!(2024 - 06 - 01))
        );
    }

    #[test]
    fn test_month_starting_on_week_start() {
        // April 2024 begins on a Monday
        let grid = build_grid(date!(2024 - 04 - 15), Monday).unwrap();
        assert_eq!(grid.weeks()[0].first(), date!(2024 - 04 - 01));
        assert!(!grid.is_outside_month(grid.weeks()[0].first()));
        assert_eq!(
            grid.weeks().last().map(Week::last),
            Some(date!(2024 - 05 - 05))
        );
    }

    #[test]
    fn test_exact_four_weeks() {
        // February 2021 runs Monday the 1st through Sunday the 28th
        let grid = build_grid(date!(2021 - 02 - 10), Monday).unwrap();
        assert_eq!(grid.weeks().len(), 4);
        assert!(all_days(&grid).iter().all(|&d| !grid.is_outside_month(d)));
    }

    #[test]
    fn test_six_week_month() {
        // September 2024 starts on a Sunday and ends on a Monday
        let grid = build_grid(date!(2024 - 09 - 01), Monday).unwrap();
        assert_eq!(grid.weeks().len(), 6);
        assert_eq!(grid.weeks()[0].first(), date!(2024 - 08 - 26));
        assert_eq!(grid.weeks()[5].last(), date!(2024 - 10 - 06));
    }

    #[test]
    fn test_outside_month() {
        let grid = build_grid(date!(2024 - 05 - 01), Monday).unwrap();
        assert!(grid.is_outside_month(date!(2024 - 04 - 30)));
        assert!(!grid.is_outside_month(date!(2024 - 05 - 31)));
        assert!(grid.is_outside_month(date!(2024 - 06 - 01)));
        assert!(grid.is_outside_month(date!(2023 - 05 - 15)));
    }

    #[test]
    fn test_deterministic() {
        let a = build_grid(date!(2025 - 01 - 22), Wednesday);
        let b = build_grid(date!(2025 - 01 - 22), Wednesday);
        assert_eq!(a, b);
    }

    #[rstest]
    fn test_covers_every_month(
        #[values(2023, 2024, 2025)] year: i32,
        #[values(Monday, Wednesday, Saturday, Sunday)] week_start: Weekday,
    ) {
        let mut month = Month::January;
        for _ in 0..12 {
            let reference = Date::from_calendar_date(year, month, 1).unwrap();
            let grid = build_grid(reference, week_start).unwrap();
            let days = all_days(&grid);
            assert_eq!(
                days.len() % DAYS_IN_WEEK,
                0,
                "ragged grid for {month} {year}"
            );
            for pair in days.windows(2) {
                assert_eq!(
                    pair[0].next_day(),
                    Some(pair[1]),
                    "gap in grid for {month} {year}"
                );
            }
            for week in grid.weeks() {
                assert_eq!(week.first().weekday(), week_start);
            }
            let in_month = days.iter().filter(|d| !grid.is_outside_month(**d)).count();
            assert_eq!(
                in_month,
                usize::from(days_in_month(month, year)),
                "wrong day count for {month} {year}"
            );
            // A padding row made entirely of another month would be a bug
            for week in grid.weeks() {
                assert!(week.iter().any(|&d| !grid.is_outside_month(d)));
            }
            month = month.next();
        }
    }

    #[test]
    fn test_start_of_time() {
        let week_start = Date::MIN.weekday().next();
        assert_eq!(build_grid(Date::MIN, week_start), Err(OutOfTimeError));
    }

    #[test]
    fn test_end_of_time() {
        let week_start = Date::MAX.weekday();
        assert_eq!(build_grid(Date::MAX, week_start), Err(OutOfTimeError));
    }

    #[test]
    fn test_weekdays_from() {
        assert_eq!(
            weekdays_from(Friday),
            [Friday, Saturday, Sunday, Monday, Tuesday, Wednesday, Thursday]
        );
    }

    #[test]
    fn test_month_bounds() {
        let feb = date!(2024 - 02 - 17);
        assert_eq!(first_of_month(feb), Some(date!(2024 - 02 - 01)));
        assert_eq!(last_of_month(feb), Some(date!(2024 - 02 - 29)));
        assert_eq!(
            last_of_month(date!(2023 - 02 - 01)),
            Some(date!(2023 - 02 - 28))
        );
        let eve = date!(2024 - 12 - 31);
        assert_eq!(last_of_month(eve), Some(eve));
    }
}
