use super::record::TaskKind;
use ratatui::style::Color;

/// How a task type is labelled and colored on screen
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TaskTypeStyle {
    pub(crate) label: String,
    pub(crate) accent: Color,
}

impl TaskTypeStyle {
    pub(crate) fn new<S: Into<String>>(label: S, accent: Color) -> TaskTypeStyle {
        TaskTypeStyle {
            label: label.into(),
            accent,
        }
    }
}

/// The known task types, in the order offered when creating a task.  Lookups
/// of any other type fall back to a neutral "Other" style.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TaskTypeCatalog {
    entries: Vec<(TaskKind, TaskTypeStyle)>,
    fallback: TaskTypeStyle,
}

impl TaskTypeCatalog {
    pub(crate) fn get(&self, kind: &TaskKind) -> Option<&TaskTypeStyle> {
        self.entries
            .iter()
            .find_map(|(k, style)| (k == kind).then_some(style))
    }

    pub(crate) fn style_for(&self, kind: &TaskKind) -> &TaskTypeStyle {
        self.get(kind).unwrap_or(&self.fallback)
    }

    /// Restyle a known type, or add a new one at the end
    pub(crate) fn set(&mut self, kind: TaskKind, style: TaskTypeStyle) {
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find_map(|(k, s)| (*k == kind).then_some(s))
        {
            *slot = style;
        } else {
            self.entries.push((kind, style));
        }
    }

    /// The kind after `kind` in catalog order, wrapping around.  A kind not
    /// in the catalog is followed by the first entry.
    pub(crate) fn next_kind(&self, kind: &TaskKind) -> TaskKind {
        let next = match self.position(kind) {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.kind_at(next, kind)
    }

    /// The kind before `kind` in catalog order, wrapping around.  A kind not
    /// in the catalog is preceded by the last entry.
    pub(crate) fn previous_kind(&self, kind: &TaskKind) -> TaskKind {
        let prev = match self.position(kind) {
            Some(0) | None => self.entries.len().saturating_sub(1),
            Some(i) => i - 1,
        };
        self.kind_at(prev, kind)
    }

    fn position(&self, kind: &TaskKind) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == kind)
    }

    fn kind_at(&self, i: usize, default: &TaskKind) -> TaskKind {
        self.entries
            .get(i)
            .map_or_else(|| default.clone(), |(k, _)| k.clone())
    }
}

impl Default for TaskTypeCatalog {
    fn default() -> TaskTypeCatalog {
        TaskTypeCatalog {
            entries: vec![
                (
                    TaskKind::Work,
                    TaskTypeStyle::new("Work", Color::Rgb(0x4F, 0x46, 0xE5)),
                ),
                (
                    TaskKind::Personal,
                    TaskTypeStyle::new("Personal", Color::Rgb(0xDB, 0x27, 0x77)),
                ),
                (
                    TaskKind::Wellbeing,
                    TaskTypeStyle::new("Wellbeing", Color::Rgb(0x05, 0x96, 0x69)),
                ),
            ],
            fallback: TaskTypeStyle::new("Other", Color::Rgb(0x38, 0xBD, 0xF8)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errands() -> TaskKind {
        TaskKind::Other(String::from("errands"))
    }

    #[test]
    fn test_default_styles() {
        let catalog = TaskTypeCatalog::default();
        assert_eq!(catalog.style_for(&TaskKind::Work).label, "Work");
        assert_eq!(catalog.style_for(&TaskKind::Personal).label, "Personal");
        assert_eq!(
            catalog.style_for(&TaskKind::Wellbeing).accent,
            Color::Rgb(0x05, 0x96, 0x69)
        );
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let catalog = TaskTypeCatalog::default();
        assert_eq!(catalog.get(&errands()), None);
        let style = catalog.style_for(&errands());
        assert_eq!(style.label, "Other");
        assert_eq!(style.accent, Color::Rgb(0x38, 0xBD, 0xF8));
    }

    #[test]
    fn test_set() {
        let mut catalog = TaskTypeCatalog::default();
        catalog.set(TaskKind::Work, TaskTypeStyle::new("Job", Color::Red));
        catalog.set(errands(), TaskTypeStyle::new("Errands", Color::Yellow));
        assert_eq!(catalog.style_for(&TaskKind::Work).label, "Job");
        assert_eq!(catalog.style_for(&errands()).label, "Errands");
        assert_eq!(catalog.next_kind(&TaskKind::Wellbeing), errands());
        assert_eq!(catalog.next_kind(&errands()), TaskKind::Work);
    }

    #[test]
    fn test_cycling() {
        let catalog = TaskTypeCatalog::default();
        assert_eq!(catalog.next_kind(&TaskKind::Work), TaskKind::Personal);
        assert_eq!(catalog.next_kind(&TaskKind::Wellbeing), TaskKind::Work);
        assert_eq!(catalog.previous_kind(&TaskKind::Work), TaskKind::Wellbeing);
        assert_eq!(
            catalog.previous_kind(&TaskKind::Personal),
            TaskKind::Work
        );
        assert_eq!(catalog.next_kind(&errands()), TaskKind::Work);
        assert_eq!(catalog.previous_kind(&errands()), TaskKind::Wellbeing);
    }
}
