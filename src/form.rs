use crate::popup;
use crate::tasks::{TaskDraft, TaskTypeCatalog, ValidationError};
use crate::theme::{
    form::{ERROR_STYLE, FOCUSED_LABEL_STYLE, PLACEHOLDER_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};

const OUTER_WIDTH: u16 = 46;
const OUTER_HEIGHT: u16 = 13;
const LABEL_WIDTH: usize = 7;
const CURSOR: &str = "_";

/// Popup for entering a new task on the selected day
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TaskForm<'a> {
    catalog: &'a TaskTypeCatalog,
}

impl<'a> TaskForm<'a> {
    pub(crate) fn new(catalog: &'a TaskTypeCatalog) -> TaskForm<'a> {
        TaskForm { catalog }
    }
}

impl StatefulWidget for TaskForm<'_> {
    type State = TaskFormState;

    /*
     * ..............................................
     * .┌──────────────── New Task ────────────────┐.
     * .│                                          │.
     * .│ Title  Team meeting_                     │.
     * .│ Time   HH:MM                             │.
     * .│ Type   ‹ Work ›                          │.
     * .│ Notes  Optional notes                    │.
     * .│                                          │.
     * .│ Title is required                        │.
     * .│                                          │.
     * .│       [ENTER] Save   [ESC] Cancel        │.
     * .└──────────────────────────────────────────┘.
     * ..............................................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let outer_area = popup::centered(area, OUTER_WIDTH, OUTER_HEIGHT);
        popup::backdrop(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" New Task ")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        Paragraph::new(state.to_text(self.catalog)).render(text_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Field {
    #[default]
    Title,
    Time,
    Kind,
    Notes,
}

impl Field {
    fn next(self) -> Field {
        match self {
            Field::Title => Field::Time,
            Field::Time => Field::Kind,
            Field::Kind => Field::Notes,
            Field::Notes => Field::Title,
        }
    }

    fn previous(self) -> Field {
        match self {
            Field::Title => Field::Notes,
            Field::Time => Field::Title,
            Field::Kind => Field::Time,
            Field::Notes => Field::Kind,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Time => "Time",
            Field::Kind => "Type",
            Field::Notes => "Notes",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Title => "What needs doing?",
            Field::Time => "HH:MM",
            Field::Kind => "",
            Field::Notes => "Optional notes",
        }
    }
}

/// The task being typed into the form, plus which field has focus
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct TaskFormState {
    draft: TaskDraft,
    field: Field,
    error: Option<ValidationError>,
}

impl TaskFormState {
    pub(crate) fn new() -> TaskFormState {
        TaskFormState::default()
    }

    /// Keep the draft on screen after the planner refused it
    pub(crate) fn reject(&mut self, error: ValidationError) {
        self.error = Some(error);
        self.field = Field::Title;
    }

    pub(crate) fn handle_input(
        &mut self,
        input: FormInput,
        catalog: &TaskTypeCatalog,
    ) -> FormOutput {
        match (input, self.field) {
            (FormInput::NextField, field) => {
                self.field = field.next();
                FormOutput::Ok
            }
            (FormInput::PreviousField, field) => {
                self.field = field.previous();
                FormOutput::Ok
            }
            (FormInput::Left, Field::Kind) => {
                self.draft.kind = catalog.previous_kind(&self.draft.kind);
                FormOutput::Ok
            }
            (FormInput::Right | FormInput::Char(' '), Field::Kind) => {
                self.draft.kind = catalog.next_kind(&self.draft.kind);
                FormOutput::Ok
            }
            (FormInput::Char(c), field) => match self.text_mut(field) {
                Some(text) => {
                    text.push(c);
                    self.error = None;
                    FormOutput::Ok
                }
                None => FormOutput::Invalid,
            },
            (FormInput::Backspace, field) => match self.text_mut(field) {
                Some(text) if !text.is_empty() => {
                    text.pop();
                    FormOutput::Ok
                }
                _ => FormOutput::Invalid,
            },
            (FormInput::Submit, _) => FormOutput::Submit(self.draft.clone()),
            _ => FormOutput::Invalid,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Title => Some(&mut self.draft.title),
            Field::Time => Some(&mut self.draft.time),
            Field::Kind => None,
            Field::Notes => Some(&mut self.draft.notes),
        }
    }

    fn text(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.draft.title,
            Field::Time => &self.draft.time,
            Field::Kind => self.draft.kind.key(),
            Field::Notes => &self.draft.notes,
        }
    }

    fn to_text(&self, catalog: &TaskTypeCatalog) -> Text<'static> {
        let error = match self.error {
            Some(ValidationError::EmptyTitle) => "Title is required",
            None => "",
        };
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.field_line(Field::Title),
            self.field_line(Field::Time),
            self.kind_line(catalog),
            self.field_line(Field::Notes),
            Line::styled("", BASE_STYLE),
            Line::styled(error, ERROR_STYLE),
            Line::styled("", BASE_STYLE),
            Line::styled("[ENTER] Save   [ESC] Cancel", BASE_STYLE).centered(),
        ])
    }

    fn label_span(&self, field: Field) -> Span<'static> {
        let style = if self.field == field {
            FOCUSED_LABEL_STYLE
        } else {
            BASE_STYLE
        };
        Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), style)
    }

    fn field_line(&self, field: Field) -> Line<'static> {
        let mut spans = vec![self.label_span(field)];
        let value = self.text(field);
        if value.is_empty() {
            if self.field == field {
                spans.push(Span::styled(CURSOR, BASE_STYLE));
            }
            spans.push(Span::styled(field.placeholder(), PLACEHOLDER_STYLE));
        } else {
            spans.push(Span::styled(value.to_owned(), BASE_STYLE));
            if self.field == field {
                spans.push(Span::styled(CURSOR, BASE_STYLE));
            }
        }
        Line::from_iter(spans)
    }

    fn kind_line(&self, catalog: &TaskTypeCatalog) -> Line<'static> {
        let style = catalog.style_for(&self.draft.kind);
        let accent = Style::new()
            .fg(style.accent)
            .add_modifier(Modifier::BOLD);
        Line::from_iter([
            self.label_span(Field::Kind),
            Span::styled("‹ ", BASE_STYLE),
            Span::styled(style.label.clone(), accent),
            Span::styled(" ›", BASE_STYLE),
        ])
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FormInput {
    Char(char),
    Backspace,
    NextField,
    PreviousField,
    Left,
    Right,
    Submit,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum FormOutput {
    Ok,
    Invalid,
    Submit(TaskDraft),
}
