//! Log severity levels
//!
//! [`LogLevel`] is a closed set of six levels with a `u8` representation.
//! The derived ordering follows the rank, so comparing two levels compares
//! their verbosity:
//!
//! ```rust
//! use loglevel::LogLevel;
//!
//! assert!(LogLevel::Error < LogLevel::Debug);
//! assert_eq!(LogLevel::None.rank(), 0);
//! assert_eq!(LogLevel::from_rank(3).map(LogLevel::as_str), Some("INFO"));
//! ```

use core::fmt;

use super::config::DEFAULT_LOG_LEVEL;
use super::error::LevelError;

/// Log severity level
///
/// Higher ranks are more verbose. A threshold admits every message whose
/// level is at or below it, see [`LogLevel::admits`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum LogLevel {
    /// No output at all
    None = 0,
    /// Error conditions
    Error = 1,
    /// Warning conditions
    Warning = 2,
    /// Informational messages
    Info = 3,
    /// Debug messages
    Debug = 4,
    /// Everything, including tracing detail
    Verbose = 5,
}

impl LogLevel {
    /// All levels in ascending rank order
    pub const ALL: [LogLevel; 6] = [
        LogLevel::None,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Verbose,
    ];

    /// Number of levels
    pub const COUNT: usize = Self::ALL.len();

    /// The least verbose level
    pub const MIN: LogLevel = LogLevel::None;

    /// The most verbose level
    pub const MAX: LogLevel = LogLevel::Verbose;

    /// Returns the numeric rank, `0` for `NONE` up to `5` for `VERBOSE`
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the upper-case name of the level
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
        }
    }

    /// Looks up the level with the given rank
    ///
    /// Returns `None` for ranks above `5`.
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(LogLevel::None),
            1 => Some(LogLevel::Error),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Info),
            4 => Some(LogLevel::Debug),
            5 => Some(LogLevel::Verbose),
            _ => None,
        }
    }

    /// Checks whether a message at `message` level passes this threshold
    ///
    /// A message passes when its rank is at or below the threshold's. A
    /// message tagged `NONE` never passes, so a `NONE` threshold admits
    /// nothing.
    ///
    /// ```rust
    /// use loglevel::LogLevel;
    ///
    /// assert!(LogLevel::Info.admits(LogLevel::Warning));
    /// assert!(LogLevel::Info.admits(LogLevel::Info));
    /// assert!(!LogLevel::Info.admits(LogLevel::Debug));
    /// assert!(!LogLevel::None.admits(LogLevel::Error));
    /// ```
    #[inline]
    pub const fn admits(self, message: LogLevel) -> bool {
        !matches!(message, LogLevel::None) && message as u8 <= self as u8
    }

    /// Returns the level one rank more verbose, if any
    pub const fn more_verbose(self) -> Option<Self> {
        match self {
            LogLevel::Verbose => None,
            _ => Self::from_rank(self as u8 + 1),
        }
    }

    /// Returns the level one rank less verbose, if any
    pub const fn less_verbose(self) -> Option<Self> {
        match self {
            LogLevel::None => None,
            _ => Self::from_rank(self as u8 - 1),
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        DEFAULT_LOG_LEVEL
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> u8 {
        level.rank()
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LevelError;

    fn try_from(rank: u8) -> Result<Self, LevelError> {
        Self::from_rank(rank).ok_or(LevelError::InvalidRank(rank))
    }
}
