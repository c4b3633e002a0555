use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const OUTSIDE_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const TODAY_STYLE: Style = BASE_STYLE
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

pub(crate) const SELECTED_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

pub(crate) const TASK_DOT_STYLE: Style = BASE_STYLE.fg(Color::LightCyan);

pub(crate) const FOOTER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) mod agenda {
    use super::*;

    pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const TIME_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const NOTES_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const EMPTY_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}

pub(crate) mod form {
    use super::*;

    pub(crate) const PLACEHOLDER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const FOCUSED_LABEL_STYLE: Style = BASE_STYLE
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    pub(crate) const ERROR_STYLE: Style = BASE_STYLE.fg(Color::LightRed);
}
