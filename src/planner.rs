use crate::calendar::{build_grid, first_of_month, last_of_month, CalendarGrid, OutOfTimeError};
use crate::tasks::{
    DayKey, TaskDraft, TaskId, TaskRecord, TaskStore, TaskTypeCatalog, ValidationError,
};
use log::{debug, info, warn};
use time::{Date, Duration, Weekday};

/// State of one planning session: which month is on screen, which day is
/// selected, and the tasks entered so far
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Planner {
    today: Date,
    // Always the first of the displayed month
    month: Date,
    selected: Date,
    week_start: Weekday,
    store: TaskStore,
    catalog: TaskTypeCatalog,
}

impl Planner {
    pub(crate) fn new(today: Date, store: TaskStore) -> Planner {
        Planner {
            today,
            month: first_of_month(today).unwrap_or(today),
            selected: today,
            week_start: Weekday::Monday,
            store,
            catalog: TaskTypeCatalog::default(),
        }
    }

    pub(crate) fn starting_on(mut self, date: Date) -> Planner {
        self.select(date);
        self
    }

    pub(crate) fn week_starts_on(mut self, week_start: Weekday) -> Planner {
        self.week_start = week_start;
        self
    }

    pub(crate) fn task_types(mut self, catalog: TaskTypeCatalog) -> Planner {
        self.catalog = catalog;
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn selected(&self) -> Date {
        self.selected
    }

    pub(crate) fn type_catalog(&self) -> &TaskTypeCatalog {
        &self.catalog
    }

    /// Lay out the displayed month.  The grid is rebuilt on every call.
    pub(crate) fn grid(&self) -> Result<CalendarGrid, OutOfTimeError> {
        build_grid(self.month, self.week_start)
    }

    /// Show the previous month and select its first day
    pub(crate) fn previous_month(&mut self) -> Result<(), OutOfTimeError> {
        let first = self
            .month
            .previous_day()
            .and_then(first_of_month)
            .ok_or(OutOfTimeError)?;
        self.show_month(first);
        Ok(())
    }

    /// Show the next month and select its first day
    pub(crate) fn next_month(&mut self) -> Result<(), OutOfTimeError> {
        let first = last_of_month(self.month)
            .and_then(Date::next_day)
            .ok_or(OutOfTimeError)?;
        self.show_month(first);
        Ok(())
    }

    fn show_month(&mut self, first: Date) {
        debug!("event=month_changed month={first}");
        self.month = first;
        self.selected = first;
    }

    /// Select a day, switching the displayed month if the day lies outside
    /// it
    pub(crate) fn select(&mut self, date: Date) {
        self.selected = date;
        if let Some(first) = first_of_month(date) {
            self.month = first;
        }
    }

    pub(crate) fn move_selection(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        let date = self
            .selected
            .checked_add(Duration::days(days))
            .ok_or(OutOfTimeError)?;
        self.select(date);
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.select(self.today);
    }

    pub(crate) fn selected_key(&self) -> DayKey {
        DayKey::for_date(&self.selected)
    }

    pub(crate) fn selected_tasks(&self) -> Vec<&TaskRecord> {
        self.store.tasks_for(&self.selected_key())
    }

    pub(crate) fn has_tasks(&self, date: Date) -> bool {
        self.store.has_tasks(&DayKey::for_date(&date))
    }

    /// File a new task under the selected day
    pub(crate) fn add_task(&mut self, draft: TaskDraft) -> Result<TaskId, ValidationError> {
        let day = self.selected_key();
        let kind = draft.kind.key().to_owned();
        match self.store.add(day.clone(), draft) {
            Ok(id) => {
                info!("event=task_added day={day} id={id} type={kind}");
                Ok(id)
            }
            Err(e) => {
                warn!("event=task_rejected day={day} reason={e:?}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month;

    fn planner(today: Date) -> Planner {
        Planner::new(today, TaskStore::new())
    }

    fn draft(title: &str, time: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_owned(),
            time: time.to_owned(),
            ..TaskDraft::default()
        }
    }

    #[test]
    fn test_new() {
        let p = planner(date!(2024 - 05 - 07));
        assert_eq!(p.today(), date!(2024 - 05 - 07));
        assert_eq!(p.selected(), date!(2024 - 05 - 07));
        let grid = p.grid().unwrap();
        assert_eq!(grid.month(), Month::May);
        assert_eq!(grid.weeks()[0].first(), date!(2024 - 04 - 29));
    }

    #[test]
    fn test_week_start() {
        let p = planner(date!(2024 - 05 - 07)).week_starts_on(Weekday::Sunday);
        let grid = p.grid().unwrap();
        assert_eq!(grid.week_start(), Weekday::Sunday);
        assert_eq!(grid.weeks()[0].first(), date!(2024 - 04 - 28));
    }

    #[test]
    fn test_next_month_selects_first_day() {
        let mut p = planner(date!(2024 - 12 - 17));
        p.next_month().unwrap();
        assert_eq!(p.selected(), date!(2025 - 01 - 01));
        assert_eq!(p.grid().unwrap().month(), Month::January);
        assert_eq!(p.grid().unwrap().year(), 2025);
    }

    #[test]
    fn test_previous_month_selects_first_day() {
        let mut p = planner(date!(2024 - 03 - 31));
        p.previous_month().unwrap();
        assert_eq!(p.selected(), date!(2024 - 02 - 01));
        p.previous_month().unwrap();
        assert_eq!(p.selected(), date!(2024 - 01 - 01));
        p.previous_month().unwrap();
        assert_eq!(p.selected(), date!(2023 - 12 - 01));
    }

    #[test]
    fn test_move_across_month_boundary() {
        let mut p = planner(date!(2024 - 05 - 30));
        p.move_selection(7).unwrap();
        assert_eq!(p.selected(), date!(2024 - 06 - 06));
        assert_eq!(p.grid().unwrap().month(), Month::June);
        p.move_selection(-1).unwrap();
        p.move_selection(-6).unwrap();
        assert_eq!(p.selected(), date!(2024 - 05 - 30));
        assert_eq!(p.grid().unwrap().month(), Month::May);
    }

    #[test]
    fn test_select_padding_day_switches_month() {
        let mut p = planner(date!(2024 - 05 - 07));
        let grid = p.grid().unwrap();
        let padding = grid.weeks()[0].first();
        assert!(grid.is_outside_month(padding));
        p.select(padding);
        assert_eq!(p.grid().unwrap().month(), Month::April);
    }

    #[test]
    fn test_jump_to_today() {
        let mut p = planner(date!(2024 - 05 - 07)).starting_on(date!(2020 - 02 - 29));
        assert_eq!(p.grid().unwrap().year(), 2020);
        p.jump_to_today();
        assert_eq!(p.selected(), date!(2024 - 05 - 07));
        assert_eq!(p.grid().unwrap().month(), Month::May);
        assert_eq!(p.grid().unwrap().year(), 2024);
    }

    #[test]
    fn test_end_of_time() {
        let mut p = planner(Date::MAX);
        assert_eq!(p.move_selection(1), Err(OutOfTimeError));
        assert_eq!(p.next_month(), Err(OutOfTimeError));
        assert_eq!(p.selected(), Date::MAX);
    }

    #[test]
    fn test_add_task_to_selected_day() {
        let mut p = planner(date!(2024 - 05 - 07));
        p.add_task(draft("Monthly report", "16:00")).unwrap();
        p.add_task(draft("Pilates class", "09:00")).unwrap();
        let tasks = p.selected_tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Pilates class");
        assert!(p.has_tasks(date!(2024 - 05 - 07)));
        assert!(!p.has_tasks(date!(2024 - 05 - 08)));
        p.move_selection(1).unwrap();
        assert!(p.selected_tasks().is_empty());
    }

    #[test]
    fn test_add_task_rejected() {
        let mut p = planner(date!(2024 - 05 - 07));
        assert_eq!(
            p.add_task(draft("  ", "16:00")),
            Err(ValidationError::EmptyTitle)
        );
        assert!(p.selected_tasks().is_empty());
        assert!(!p.has_tasks(date!(2024 - 05 - 07)));
    }

    #[test]
    fn test_grid_every_row_full() {
        let p = planner(date!(2024 - 09 - 15));
        let grid = p.grid().unwrap();
        assert_eq!(grid.weeks().len(), 6);
        assert!(grid.weeks().iter().all(|w| w.iter().count() == 7));
    }
}
