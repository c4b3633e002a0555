use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a stored task
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct TaskId(String);

impl TaskId {
    pub(crate) fn new<S: Into<String>>(id: S) -> TaskId {
        TaskId(id.into())
    }

    pub(super) fn random() -> TaskId {
        TaskId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What sort of task something is.  Unrecognized type keys are kept as
/// `Other` rather than rejected.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum TaskKind {
    #[default]
    Work,
    Personal,
    Wellbeing,
    Other(String),
}

impl TaskKind {
    pub(crate) fn from_key(key: &str) -> TaskKind {
        let key = key.trim().to_ascii_lowercase();
        match key.as_str() {
            "work" => TaskKind::Work,
            "personal" => TaskKind::Personal,
            "wellbeing" => TaskKind::Wellbeing,
            _ => TaskKind::Other(key),
        }
    }

    pub(crate) fn key(&self) -> &str {
        match self {
            TaskKind::Work => "work",
            TaskKind::Personal => "personal",
            TaskKind::Wellbeing => "wellbeing",
            TaskKind::Other(key) => key,
        }
    }
}

/// A task as submitted by the user, before it has been validated and given an
/// ID
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct TaskDraft {
    pub(crate) title: String,
    pub(crate) time: String,
    pub(crate) kind: TaskKind,
    pub(crate) notes: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TaskRecord {
    pub(crate) id: TaskId,
    pub(crate) title: String,
    /// Compared as a plain string when ordering a day's tasks, so it should be
    /// kept in "HH:MM" form
    pub(crate) time: String,
    pub(crate) kind: TaskKind,
    pub(crate) notes: Option<String>,
}

impl TaskRecord {
    pub(super) fn from_draft(id: TaskId, draft: TaskDraft) -> TaskRecord {
        let notes = draft.notes.trim();
        TaskRecord {
            id,
            title: draft.title.trim().to_owned(),
            time: draft.time.trim().to_owned(),
            kind: draft.kind,
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_keys() {
        assert_eq!(TaskKind::from_key("work"), TaskKind::Work);
        assert_eq!(TaskKind::from_key(" Personal "), TaskKind::Personal);
        assert_eq!(TaskKind::from_key("WELLBEING"), TaskKind::Wellbeing);
        assert_eq!(
            TaskKind::from_key("errands"),
            TaskKind::Other(String::from("errands"))
        );
        for key in ["work", "personal", "wellbeing", "errands"] {
            assert_eq!(TaskKind::from_key(key).key(), key);
        }
    }

    #[test]
    fn test_from_draft_trims() {
        let draft = TaskDraft {
            title: String::from("  Pilates class "),
            time: String::from(" 18:00"),
            kind: TaskKind::Wellbeing,
            notes: String::from("   "),
        };
        let record = TaskRecord::from_draft(TaskId::new("x"), draft);
        assert_eq!(record.title, "Pilates class");
        assert_eq!(record.time, "18:00");
        assert_eq!(record.notes, None);
        assert_eq!(record.id.to_string(), "x");
    }

    #[test]
    fn test_random_ids_differ() {
        assert_ne!(TaskId::random(), TaskId::random());
    }
}
