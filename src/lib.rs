//! Log severity levels
//!
//! This crate provides [`LogLevel`], the closed set of six severity levels a
//! logging facility compares messages against:
//!
//! | Level     | Rank |
//! |-----------|------|
//! | `NONE`    | 0    |
//! | `ERROR`   | 1    |
//! | `WARNING` | 2    |
//! | `INFO`    | 3    |
//! | `DEBUG`   | 4    |
//! | `VERBOSE` | 5    |
//!
//! A higher rank is more verbose. A message is emitted when its level is at or
//! below the configured threshold, so `VERBOSE` admits everything and `NONE`
//! admits nothing.
//!
//! ```rust
//! use loglevel::LogLevel;
//!
//! let threshold: LogLevel = "warning".parse().unwrap();
//! assert!(threshold.admits(LogLevel::Error));
//! assert!(!threshold.admits(LogLevel::Debug));
//! assert_eq!(LogLevel::from_rank(3), Some(LogLevel::Info));
//! ```
//!
//! # Features
//!
//! - `log` (default): conversions to and from the [`log`](https://docs.rs/log)
//!   facade, see `compat`.
//! - `serde`: levels serialize as their upper-case name.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod level;

#[cfg(feature = "log")]
pub mod compat;

#[cfg(test)]
mod tests;

pub use config::DEFAULT_LOG_LEVEL;
pub use error::LevelError;
pub use level::LogLevel;
