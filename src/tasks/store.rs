use super::key::DayKey;
use super::record::{TaskDraft, TaskId, TaskRecord};
use log::trace;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// In-memory agenda: each day's tasks in the order they were added.
///
/// Reads always come back sorted by time; the stored order is never
/// rearranged, so tasks sharing a time keep the order in which they were
/// added.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct TaskStore {
    days: BTreeMap<DayKey, Vec<TaskRecord>>,
    ids: HashSet<TaskId>,
}

impl TaskStore {
    pub(crate) fn new() -> TaskStore {
        TaskStore::default()
    }

    /// Build a store from initial tasks, such as those listed in the config
    /// file.  Tasks without an ID are given a fresh one.
    pub(crate) fn seeded<I>(seeds: I) -> Result<TaskStore, SeedError>
    where
        I: IntoIterator<Item = SeedTask>,
    {
        let mut store = TaskStore::new();
        for SeedTask { day, id, draft } in seeds {
            if let Err(source) = validate(&draft) {
                return Err(SeedError::Invalid { day, source });
            }
            let id = match id {
                Some(id) if store.ids.contains(&id) => return Err(SeedError::DuplicateId(id)),
                Some(id) => id,
                None => store.fresh_id(),
            };
            store.insert(day, id, draft);
        }
        Ok(store)
    }

    /// Return the tasks for the given day, earliest first.  A day with no
    /// tasks yields an empty list.
    pub(crate) fn tasks_for(&self, day: &DayKey) -> Vec<&TaskRecord> {
        let mut tasks = self
            .days
            .get(day)
            .map(|tasks| tasks.iter().collect::<Vec<_>>())
            .unwrap_or_default();
        // `sort_by` is stable
        tasks.sort_by(|a, b| a.time.cmp(&b.time));
        tasks
    }

    pub(crate) fn has_tasks(&self, day: &DayKey) -> bool {
        self.days.get(day).is_some_and(|tasks| !tasks.is_empty())
    }

    /// Total number of tasks across all days
    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    /// Append a new task to the given day.
    ///
    /// Drafts whose title is empty or only whitespace are refused and leave
    /// the store untouched.
    pub(crate) fn add(
        &mut self,
        day: DayKey,
        draft: TaskDraft,
    ) -> Result<TaskId, ValidationError> {
        validate(&draft)?;
        let id = self.fresh_id();
        self.insert(day, id.clone(), draft);
        Ok(id)
    }

    fn insert(&mut self, day: DayKey, id: TaskId, draft: TaskDraft) {
        self.ids.insert(id.clone());
        let record = TaskRecord::from_draft(id, draft);
        trace!("event=task_stored day={day} id={} time={:?}", record.id, record.time);
        self.days.entry(day).or_default().push(record);
    }

    // Random IDs make collisions practically impossible, but an ID already in
    // the store (e.g., from seed data) is never handed out again.
    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::random();
            if !self.ids.contains(&id) {
                return id;
            }
        }
    }
}

fn validate(draft: &TaskDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        Err(ValidationError::EmptyTitle)
    } else {
        Ok(())
    }
}

/// A task to preload into a [`TaskStore`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SeedTask {
    pub(crate) day: DayKey,
    pub(crate) id: Option<TaskId>,
    pub(crate) draft: TaskDraft,
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ValidationError {
    #[error("task title must not be empty")]
    EmptyTitle,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum SeedError {
    #[error("task ID {0} is used more than once")]
    DuplicateId(TaskId),
    #[error("invalid task on {day}")]
    Invalid {
        day: DayKey,
        #[source]
        source: ValidationError,
    },
}
