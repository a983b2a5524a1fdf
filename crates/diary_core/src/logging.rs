//! File logging for diary core.
//!
//! # Responsibility
//! - Start one `flexi_logger` file writer per process.
//! - Report bootstrap failures as typed errors instead of panicking.
//!
//! # Invariants
//! - A second `init_logging` with the same level and directory is accepted.
//! - Any other second call fails with `LoggingError::AlreadyActive`.
//! - Log lines carry counts and settings only, never entry text.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_BASENAME: &str = "diary";
const ROTATE_AT_BYTES: u64 = 4 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 3;

static DIARY_LOGGER: OnceCell<DiaryLogger> = OnceCell::new();

/// Verbosity accepted by `init_logging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Spec string understood by `flexi_logger`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let level = match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => return Err(LoggingError::UnknownLevel(value.to_string())),
        };
        Ok(level)
    }
}

/// Logging bootstrap failure.
#[derive(Debug)]
pub enum LoggingError {
    UnknownLevel(String),
    /// Log directory must be absolute so the location is independent of cwd.
    RelativeDirectory(PathBuf),
    CreateDirectory {
        dir: PathBuf,
        source: std::io::Error,
    },
    Backend(flexi_logger::FlexiLoggerError),
    /// Logging already runs with different settings.
    AlreadyActive { level: LogLevel, dir: PathBuf },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLevel(value) => write!(f, "unknown diary log level `{value}`"),
            Self::RelativeDirectory(dir) => {
                write!(f, "diary log directory is not absolute: {}", dir.display())
            }
            Self::CreateDirectory { dir, source } => {
                write!(f, "cannot create diary log directory {}: {source}", dir.display())
            }
            Self::Backend(err) => write!(f, "diary logger failed to start: {err}"),
            Self::AlreadyActive { level, dir } => write!(
                f,
                "diary logging already active at level {} in {}",
                level.as_str(),
                dir.display()
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDirectory { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

struct DiaryLogger {
    level: LogLevel,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// Files are named `diary_*.log` and rotate by size.
pub fn init_logging(level: LogLevel, log_dir: impl AsRef<Path>) -> Result<(), LoggingError> {
    let dir = log_dir.as_ref().to_path_buf();
    if !dir.is_absolute() {
        return Err(LoggingError::RelativeDirectory(dir));
    }

    let active = DIARY_LOGGER.get_or_try_init(|| start_file_logger(level, &dir))?;
    if active.level == level && active.dir == dir {
        Ok(())
    } else {
        Err(LoggingError::AlreadyActive {
            level: active.level,
            dir: active.dir.clone(),
        })
    }
}

fn start_file_logger(level: LogLevel, dir: &Path) -> Result<DiaryLogger, LoggingError> {
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDirectory {
        dir: dir.to_path_buf(),
        source,
    })?;

    let handle = Logger::try_with_str(level.as_str())
        .map_err(LoggingError::Backend)?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEPT_LOG_FILES),
        )
        .write_mode(WriteMode::Direct)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    info!(
        "event=logging_init module=logging status=ok level={} version={}",
        level.as_str(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(DiaryLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

/// Level and directory of the running logger, if started.
pub fn logging_status() -> Option<(LogLevel, PathBuf)> {
    DIARY_LOGGER
        .get()
        .map(|active| (active.level, active.dir.clone()))
}

/// Debug builds log at `Debug`, release builds at `Info`.
pub fn default_log_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}
