mod catalog;
mod key;
mod record;
mod store;
pub(crate) use self::catalog::{TaskTypeCatalog, TaskTypeStyle};
pub(crate) use self::key::{parse_date, DayKey};
pub(crate) use self::record::{TaskDraft, TaskId, TaskKind, TaskRecord};
pub(crate) use self::store::{SeedTask, TaskStore, ValidationError};
