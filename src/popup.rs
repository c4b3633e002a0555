use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    widgets::{Block, Clear, Widget},
};

/// Return a `width` × `height` box centered in `area`, shrunk to fit if
/// `area` is smaller
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [popup_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
    let [popup_area] = Layout::vertical([height])
        .flex(Flex::Center)
        .areas(popup_area);
    popup_area
}

/// Erase whatever is drawn in `area` and paint it in the base colors
pub(crate) fn backdrop(area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    Block::new().style(BASE_STYLE).render(area, buf);
}
