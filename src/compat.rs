//! Bridge to the `log` facade
//!
//! Level mapping:
//!
//! | `LogLevel` | `log::LevelFilter` | `log::Level` |
//! |------------|--------------------|--------------|
//! | `NONE`     | `Off`              | -            |
//! | `ERROR`    | `Error`            | `Error`      |
//! | `WARNING`  | `Warn`             | `Warn`       |
//! | `INFO`     | `Info`             | `Info`       |
//! | `DEBUG`    | `Debug`            | `Debug`      |
//! | `VERBOSE`  | `Trace`            | `Trace`      |

use log::{Level, LevelFilter};

use super::error::LevelError;
use super::level::LogLevel;

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> LevelFilter {
        match level {
            LogLevel::None => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Verbose => LevelFilter::Trace,
        }
    }
}

impl From<LevelFilter> for LogLevel {
    fn from(filter: LevelFilter) -> LogLevel {
        match filter {
            LevelFilter::Off => LogLevel::None,
            LevelFilter::Error => LogLevel::Error,
            LevelFilter::Warn => LogLevel::Warning,
            LevelFilter::Info => LogLevel::Info,
            LevelFilter::Debug => LogLevel::Debug,
            LevelFilter::Trace => LogLevel::Verbose,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> LogLevel {
        match level {
            Level::Error => LogLevel::Error,
            Level::Warn => LogLevel::Warning,
            Level::Info => LogLevel::Info,
            Level::Debug => LogLevel::Debug,
            Level::Trace => LogLevel::Verbose,
        }
    }
}

/// `NONE` has no `log::Level` counterpart
impl TryFrom<LogLevel> for Level {
    type Error = LevelError;

    fn try_from(level: LogLevel) -> Result<Level, LevelError> {
        LevelFilter::from(level)
            .to_level()
            .ok_or(LevelError::NoneLevel)
    }
}

impl LogLevel {
    /// Checks whether `log` would currently let a message at this level
    /// through its global max level
    ///
    /// Always `false` for `NONE`.
    pub fn log_enabled(self) -> bool {
        match Level::try_from(self) {
            Ok(level) => level <= log::max_level(),
            Err(_) => false,
        }
    }
}

/// Gets the `log` facade's current max level
pub fn max_level() -> LogLevel {
    log::max_level().into()
}

/// Sets the `log` facade's max level
///
/// Messages more verbose than `level` are discarded by the `log` macros
/// before reaching any logger.
pub fn set_max_level(level: LogLevel) {
    log::set_max_level(level.into());
}
