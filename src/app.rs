use crate::agenda::Agenda;
use crate::calendar::{Calendar, CALENDAR_HEIGHT};
use crate::form::{FormInput, FormOutput, TaskForm, TaskFormState};
use crate::help::Help;
use crate::planner::Planner;
use crate::theme::{BASE_STYLE, FOOTER_STYLE};
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{StatefulWidget, Widget},
    DefaultTerminal,
};
use std::io::{self, Write};

/// Maximum width of the agenda below the calendar
const AGENDA_WIDTH: u16 = 60;

const FOOTER: &str = "? Help   a Add task   q Quit";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    planner: Planner,
    state: AppState,
}

impl App {
    pub(crate) fn new(planner: Planner) -> App {
        App {
            planner,
            state: AppState::Browsing,
        }
    }

    pub(crate) fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or the key's action
    // could not be carried out
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Browsing => match key {
                KeyCode::Char('h') | KeyCode::Left => self.planner.move_selection(-1).is_ok(),
                KeyCode::Char('l') | KeyCode::Right => self.planner.move_selection(1).is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.planner.move_selection(-7).is_ok(),
                KeyCode::Char('j') | KeyCode::Down => self.planner.move_selection(7).is_ok(),
                KeyCode::Char('p') | KeyCode::PageUp => self.planner.previous_month().is_ok(),
                KeyCode::Char('n') | KeyCode::PageDown => self.planner.next_month().is_ok(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.planner.jump_to_today();
                    true
                }
                KeyCode::Char('a') => {
                    self.state = AppState::Adding(TaskFormState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Browsing;
                true
            }
            AppState::Adding(form) => {
                if key == KeyCode::Esc {
                    debug!("event=task_discarded day={}", self.planner.selected_key());
                    self.state = AppState::Browsing;
                    return true;
                }
                let input = match key {
                    KeyCode::Char(c) => FormInput::Char(c),
                    KeyCode::Backspace | KeyCode::Delete => FormInput::Backspace,
                    KeyCode::Tab | KeyCode::Down => FormInput::NextField,
                    KeyCode::BackTab | KeyCode::Up => FormInput::PreviousField,
                    KeyCode::Left => FormInput::Left,
                    KeyCode::Right => FormInput::Right,
                    KeyCode::Enter => FormInput::Submit,
                    _ => return false,
                };
                match form.handle_input(input, self.planner.type_catalog()) {
                    FormOutput::Ok => true,
                    FormOutput::Invalid => false,
                    FormOutput::Submit(draft) => match self.planner.add_task(draft) {
                        Ok(_) => {
                            self.state = AppState::Browsing;
                            true
                        }
                        Err(e) => {
                            form.reject(e);
                            false
                        }
                    },
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [calendar_area, _, agenda_area, footer_area] = Layout::vertical([
            Constraint::Length(CALENDAR_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        Calendar::new(&self.planner).render(calendar_area, buf);
        let [agenda_area] = Layout::horizontal([AGENDA_WIDTH])
            .flex(Flex::Center)
            .areas(agenda_area);
        let tasks = self.planner.selected_tasks();
        Agenda::new(self.planner.selected(), &tasks, self.planner.type_catalog())
            .render(agenda_area, buf);
        Line::styled(FOOTER, FOOTER_STYLE)
            .centered()
            .render(footer_area, buf);
        match self.state {
            AppState::Helping => Help.render(area, buf),
            AppState::Adding(ref mut form) => {
                TaskForm::new(self.planner.type_catalog()).render(area, buf, form);
            }
            AppState::Browsing | AppState::Quitting => (),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Browsing,
    Helping,
    Adding(TaskFormState),
    Quitting,
}
