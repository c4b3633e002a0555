use flexi_logger::{
    detailed_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::info;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "dayplan";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const LOG_DIR_ENV_VAR: &str = "DAYPLAN_LOG_DIR";

/// Used when `RUST_LOG` is not set
const DEFAULT_LEVEL: &str = "info";

/// Where log files go by default, or `None` if no suitable directory can be
/// determined
pub(crate) fn default_log_dir() -> Option<PathBuf> {
    resolve_log_dir(|var| env::var_os(var).filter(|v| !v.is_empty()))
}

fn resolve_log_dir<F>(getenv: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(dir) = getenv(LOG_DIR_ENV_VAR) {
        Some(PathBuf::from(dir))
    } else if let Some(dir) = getenv("XDG_STATE_HOME") {
        Some(PathBuf::from(dir).join("dayplan"))
    } else {
        getenv("HOME").map(|home| {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("dayplan")
        })
    }
}

/// Start writing logs to rotating files in `log_dir`.  The terminal belongs
/// to the UI, so nothing is written to stdout or stderr.
///
/// Logging stops when the returned handle is dropped.
pub(crate) fn init(log_dir: &Path) -> Result<LoggerHandle, LoggingError> {
    fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_owned(),
        source,
    })?;
    let handle = Logger::try_with_env_or_str(DEFAULT_LEVEL)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(detailed_format)
        .start()?;
    info!(
        "event=app_start version={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(handle)
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to create log directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to start logger")]
    Start(#[from] FlexiLoggerError),
}
