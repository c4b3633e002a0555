use crate::tasks::{TaskRecord, TaskTypeCatalog};
use crate::theme::{
    agenda::{EMPTY_STYLE, NOTES_STYLE, TIME_STYLE, TITLE_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use time::Date;

/// Columns by which a task's notes are indented, lining them up with the
/// title
const NOTES_INDENT: &str = "       ";

/// The selected day's tasks, earliest first
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Agenda<'a> {
    date: Date,
    tasks: &'a [&'a TaskRecord],
    catalog: &'a TaskTypeCatalog,
}

impl<'a> Agenda<'a> {
    pub(crate) fn new(
        date: Date,
        tasks: &'a [&'a TaskRecord],
        catalog: &'a TaskTypeCatalog,
    ) -> Agenda<'a> {
        Agenda {
            date,
            tasks,
            catalog,
        }
    }

    fn heading(&self) -> Line<'static> {
        Line::styled(
            format!(
                "Agenda for {}, {} {}",
                self.date.weekday(),
                self.date.month(),
                self.date.day()
            ),
            TITLE_STYLE,
        )
    }

    fn task_lines(&self, task: &TaskRecord) -> Vec<Line<'static>> {
        let style = self.catalog.style_for(&task.kind);
        let chip = Style::new()
            .fg(style.accent)
            .add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from_iter([
            Span::styled(format!("{:<5}", task.time), TIME_STYLE),
            Span::raw("  "),
            Span::styled(format!("[{}]", style.label), chip),
            Span::raw(" "),
            Span::raw(task.title.clone()),
        ])];
        if let Some(notes) = &task.notes {
            lines.push(Line::styled(format!("{NOTES_INDENT}{notes}"), NOTES_STYLE));
        }
        lines
    }
}

impl Widget for Agenda<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![self.heading(), Line::raw("")];
        if self.tasks.is_empty() {
            lines.push(Line::styled("Nothing planned for this day.", EMPTY_STYLE));
            lines.push(Line::styled("Press a to add a task.", EMPTY_STYLE));
        } else {
            for task in self.tasks {
                lines.extend(self.task_lines(task));
            }
        }
        Paragraph::new(Text::from(lines))
            .style(BASE_STYLE)
            .render(area, buf);
    }
}
