use crate::tasks::{
    parse_date, DayKey, SeedTask, TaskDraft, TaskId, TaskKind, TaskTypeCatalog, TaskTypeStyle,
};
use log::{debug, info};
use ratatui::style::Color;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use time::Weekday;

const CONFIG_PATH_ENV_VAR: &str = "DAYPLAN_CONFIG";

/// Settings read from the config file, with every part already validated
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Config {
    pub(crate) week_start: Weekday,
    pub(crate) task_types: TaskTypeCatalog,
    pub(crate) tasks: Vec<SeedTask>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            week_start: Weekday::Monday,
            task_types: TaskTypeCatalog::default(),
            tasks: Vec::new(),
        }
    }
}

impl Config {
    /// Read the config file at `explicit` if given, otherwise the first file
    /// that exists among the default locations.  When no file is found in
    /// the default locations, the default config is used; an explicit path
    /// must exist.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            let src = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_owned(),
                source,
            })?;
            return Config::from_file_contents(path, &src);
        }
        for path in config_locations(|var| env::var_os(var).filter(|v| !v.is_empty())) {
            match fs::read_to_string(&path) {
                Ok(src) => return Config::from_file_contents(&path, &src),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("event=config_missing path={}", path.display());
                }
                Err(source) => return Err(ConfigError::Read { path, source }),
            }
        }
        info!("event=config_default");
        Ok(Config::default())
    }

    fn from_file_contents(path: &Path, src: &str) -> Result<Config, ConfigError> {
        let config = src.parse::<Config>().map_err(|e| ConfigError::Invalid {
            path: path.to_owned(),
            source: Box::new(e),
        })?;
        info!(
            "event=config_loaded path={} week_start={} seed_tasks={}",
            path.display(),
            config.week_start,
            config.tasks.len()
        );
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Config, ConfigError> {
        let raw = toml::from_str::<RawConfig>(s)?;
        let week_start = match raw.week_starts_on {
            Some(name) => parse_weekday(&name)?,
            None => Weekday::Monday,
        };
        let mut task_types = TaskTypeCatalog::default();
        for (key, raw_type) in raw.task_types {
            let kind = TaskKind::from_key(&key);
            let mut style = match task_types.get(&kind) {
                Some(style) => style.clone(),
                None => TaskTypeStyle::new(key.clone(), task_types.style_for(&kind).accent),
            };
            if let Some(label) = raw_type.label {
                style.label = label;
            }
            if let Some(color) = raw_type.color {
                style.accent = Color::from_str(&color).map_err(|_| ConfigError::Color {
                    key: key.clone(),
                    color,
                })?;
            }
            task_types.set(kind, style);
        }
        let tasks = raw
            .tasks
            .into_iter()
            .map(RawTask::into_seed)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Config {
            week_start,
            task_types,
            tasks,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    week_starts_on: Option<String>,
    task_types: BTreeMap<String, RawTaskType>,
    tasks: Vec<RawTask>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTaskType {
    label: Option<String>,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTask {
    date: String,
    title: String,
    #[serde(default)]
    time: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    notes: String,
    id: Option<String>,
}

impl RawTask {
    fn into_seed(self) -> Result<SeedTask, ConfigError> {
        let date = parse_date(self.date.trim()).map_err(|source| ConfigError::Date {
            date: self.date.clone(),
            source,
        })?;
        Ok(SeedTask {
            day: DayKey::for_date(&date),
            id: self.id.map(TaskId::new),
            draft: TaskDraft {
                title: self.title,
                time: self.time,
                kind: self.kind.as_deref().map_or_else(TaskKind::default, TaskKind::from_key),
                notes: self.notes,
            },
        })
    }
}

fn parse_weekday(name: &str) -> Result<Weekday, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Monday),
        "tuesday" | "tue" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" => Ok(Weekday::Wednesday),
        "thursday" | "thu" => Ok(Weekday::Thursday),
        "friday" | "fri" => Ok(Weekday::Friday),
        "saturday" | "sat" => Ok(Weekday::Saturday),
        "sunday" | "sun" => Ok(Weekday::Sunday),
        _ => Err(ConfigError::Weekday(name.to_owned())),
    }
}

/// Candidate config file paths, most preferred first.  `getenv` looks up an
/// environment variable, returning `None` if it is unset or empty.
fn config_locations<F>(getenv: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let mut locations = Vec::new();
    if let Some(path) = getenv(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }
    let home = getenv("HOME").map(PathBuf::from);
    if let Some(dir) = getenv("XDG_CONFIG_HOME") {
        locations.push(PathBuf::from(dir).join("dayplan").join("config.toml"));
    } else if let Some(home) = &home {
        locations.push(home.join(".config").join("dayplan").join("config.toml"));
    }
    if let Some(home) = home {
        locations.push(home.join(".dayplan.toml"));
    }
    locations
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: Box<ConfigError>,
    },
    #[error("failed to parse config")]
    Syntax(#[from] toml::de::Error),
    #[error("unknown weekday {0:?}")]
    Weekday(String),
    #[error("invalid color {color:?} for task type {key:?}")]
    Color { key: String, color: String },
    #[error("invalid date {date:?}; expected YYYY-MM-DD")]
    Date {
        date: String,
        #[source]
        source: time::error::Parse,
    },
}
