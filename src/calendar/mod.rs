mod grid;
mod widget;
pub(crate) use self::grid::{
    build_grid, first_of_month, last_of_month, CalendarGrid, OutOfTimeError,
};
pub(crate) use self::widget::{Calendar, CALENDAR_HEIGHT};
