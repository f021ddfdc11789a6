//! Level conversion errors
//!
//! Converting untrusted input (a raw rank, a configuration string) into a
//! [`LogLevel`](crate::LogLevel) reports a [`LevelError`]. It maps onto a
//! negative errno through [`LevelError::to_errno()`].

use core::fmt;

/// `-EINVAL`
const EINVAL: isize = -22;

/// Failure to turn input into a log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    /// Rank outside `0..=5`
    InvalidRank(u8),
    /// Text matching no level name, alias or rank
    UnknownName,
    /// Blank text
    Empty,
    /// `NONE` used where a message level is required
    NoneLevel,
}

impl LevelError {
    /// Converts to a syscall error code (negative)
    pub fn to_errno(&self) -> isize {
        match self {
            LevelError::InvalidRank(_)
            | LevelError::UnknownName
            | LevelError::Empty
            | LevelError::NoneLevel => EINVAL,
        }
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::InvalidRank(rank) => {
                write!(f, "invalid log level rank {} (expected 0..=5)", rank)
            }
            LevelError::UnknownName => f.write_str("unknown log level name"),
            LevelError::Empty => f.write_str("empty log level"),
            LevelError::NoneLevel => f.write_str("NONE is a threshold, not a message level"),
        }
    }
}

impl core::error::Error for LevelError {}
