use super::grid::{CalendarGrid, DAYS_IN_WEEK};
use crate::planner::Planner;
use crate::theme::{
    BASE_STYLE, MONTH_STYLE, OUTSIDE_MONTH_STYLE, SELECTED_STYLE, TASK_DOT_STYLE, TODAY_STYLE,
    WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Span, Text},
    widgets::{Paragraph, Widget},
};
use std::iter::zip;
use time::Date;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 6;

/// Width of the calendar in columns
const CALENDAR_WIDTH: u16 = DAY_WIDTH * 7;

/// Number of lines taken up by the month title, the weekday header, and the
/// header's rule
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by each week of the calendar
const WEEK_LINES: u16 = 1;

/// No month spans more than six weeks
const MAX_WEEKS: u16 = 6;

pub(crate) const CALENDAR_HEIGHT: u16 = HEADER_LINES + MAX_WEEKS * WEEK_LINES;

/// Column, relative to the left edge of a day, at which the marker for days
/// with tasks is drawn
const DOT_OFFSET: u16 = 4;

const ACS_HLINE: char = '─';
const TASK_DOT: &str = "•";

/// Month view of the planner: the displayed month laid out as weeks, with
/// today, the selected day, and days with tasks marked
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<'a> {
    planner: &'a Planner,
}

impl<'a> Calendar<'a> {
    pub(crate) fn new(planner: &'a Planner) -> Calendar<'a> {
        Calendar { planner }
    }
}

impl Widget for Calendar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.planner;
        let width = CALENDAR_WIDTH.min(area.width);
        let area = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };
        let mut canvas = BufferCanvas::new(area, buf);
        let grid = match state.grid() {
            Ok(grid) => grid,
            Err(e) => {
                canvas.mvprint(0, 0, e.to_string(), Some(OUTSIDE_MONTH_STYLE));
                return;
            }
        };
        canvas.draw_title(&grid);
        canvas.draw_header(&grid);
        for (week_no, week) in zip(0u16.., grid.weeks()) {
            for (col, &date) in zip(0u16.., week.iter()) {
                let cell = DayCell {
                    date,
                    is_today: date == state.today(),
                    is_selected: date == state.selected(),
                    is_outside: grid.is_outside_month(date),
                    has_tasks: state.has_tasks(date),
                };
                canvas.draw_day(week_no, col, &cell);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DayCell {
    date: Date,
    is_today: bool,
    is_selected: bool,
    is_outside: bool,
    has_tasks: bool,
}

impl DayCell {
    fn show(&self) -> Span<'static> {
        let s = if self.is_today {
            format!("[{:2}]", self.date.day())
        } else {
            format!(" {:2} ", self.date.day())
        };
        let style = if self.is_selected {
            SELECTED_STYLE
        } else if self.is_outside {
            OUTSIDE_MONTH_STYLE
        } else if self.is_today {
            TODAY_STYLE
        } else {
            BASE_STYLE
        };
        Span::styled(s, style)
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, grid: &CalendarGrid) {
        let title = format!("{} {}", grid.month(), grid.year());
        let width = u16::try_from(title.len()).unwrap_or(u16::MAX);
        let x = CALENDAR_WIDTH.saturating_sub(width) / 2;
        self.mvprint(0, x, title, Some(MONTH_STYLE));
    }

    fn draw_header(&mut self, grid: &CalendarGrid) {
        for (col, wd) in zip(0u16.., grid.weekday_labels()) {
            let label = wd.to_string().chars().take(2).collect::<String>();
            self.mvprint(1, DAY_WIDTH * col + 1, label, Some(WEEKDAY_STYLE));
        }
        self.hline(2, 0, ACS_HLINE, CALENDAR_WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, col: u16, cell: &DayCell) {
        debug_assert!(usize::from(col) < DAYS_IN_WEEK, "column out of range");
        let y = week_no * WEEK_LINES + HEADER_LINES;
        let x = DAY_WIDTH * col;
        let s = cell.show();
        self.mvprint(y, x, s.content, Some(s.style));
        if cell.has_tasks {
            self.mvprint(y, x + DOT_OFFSET, TASK_DOT, Some(TASK_DOT_STYLE));
        }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
