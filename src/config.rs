//! Log level configuration
//!
//! Levels usually arrive as text from a command line, a config file or an
//! environment variable. [`LogLevel`] implements [`FromStr`] accepting,
//! case-insensitively and after trimming ASCII whitespace:
//!
//! - the canonical name (`info`, `VERBOSE`, ...),
//! - the prefixed constant spellings `LOG_INFO` and `LOG_LEVEL_INFO`,
//! - the aliases `off`, `warn` and `trace`,
//! - a decimal rank `0` to `5`.

use core::str::FromStr;

use super::error::LevelError;
use super::level::LogLevel;

/// Default log level
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Conventional configuration key holding the log level
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Constant-name prefixes, longest first
const PREFIXES: [&str; 2] = ["LOG_LEVEL_", "LOG_"];

/// Alternate spellings
const ALIASES: [(&str, LogLevel); 3] = [
    ("OFF", LogLevel::None),
    ("WARN", LogLevel::Warning),
    ("TRACE", LogLevel::Verbose),
];

impl FromStr for LogLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_matches(|c: char| c.is_ascii_whitespace());
        if s.is_empty() {
            return Err(LevelError::Empty);
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            // Too many digits for a u8 cannot be any rank
            let rank = s.parse::<u8>().map_err(|_| LevelError::UnknownName)?;
            return LogLevel::try_from(rank);
        }

        lookup_name(strip_prefix(s)).ok_or(LevelError::UnknownName)
    }
}

/// Parses `s`, falling back to [`DEFAULT_LOG_LEVEL`] when it is not a level
pub fn parse_or_default(s: &str) -> LogLevel {
    s.parse().unwrap_or(DEFAULT_LOG_LEVEL)
}

fn strip_prefix(s: &str) -> &str {
    PREFIXES
        .into_iter()
        .find(|prefix| {
            s.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
        .map_or(s, |prefix| &s[prefix.len()..])
}

fn lookup_name(name: &str) -> Option<LogLevel> {
    LogLevel::ALL
        .into_iter()
        .find(|level| level.as_str().eq_ignore_ascii_case(name))
        .or_else(|| {
            ALIASES
                .into_iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .map(|(_, level)| level)
        })
}
