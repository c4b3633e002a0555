use crate::popup;
use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    text::{Line, Text},
    widgets::{Block, Paragraph, Widget},
};

static TEXT: &[&str] = &[
    "h, LEFT          Previous day\n",
    "l, RIGHT         Next day\n",
    "k, UP            Same day last week\n",
    "j, DOWN          Same day next week\n",
    "p, PAGE UP       Previous month\n",
    "n, PAGE DOWN     Next month\n",
    "0, HOME          Jump to today\n",
    "a                Add a task to the selected day\n",
    "?                Show this help\n",
    "q, ESC           Quit\n",
    "\n",
    "In the task form:\n",
    "TAB, UP, DOWN    Move between fields\n",
    "LEFT, RIGHT      Change the task type\n",
    "ENTER            Save the task\n",
    "ESC              Discard the task\n",
    "\n",
    "Press the Any Key to dismiss.\n",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help;

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = TEXT.iter().map(|&s| Line::raw(s)).collect::<Vec<_>>();
        let text = Text::from(lines);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE);
        let outer_area = popup::centered(area, width.saturating_add(2), height);
        popup::backdrop(outer_area, buf);
        para.render(outer_area.inner(Margin::new(1, 0)), buf);
    }
}
