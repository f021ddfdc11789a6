// src/tests/compat.rs

use super::*;

use crate::compat;
use log::{Level, LevelFilter};

test_case!(test_to_level_filter, {
    assert_eq!(LevelFilter::from(LogLevel::None), LevelFilter::Off);
    assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
    assert_eq!(LevelFilter::from(LogLevel::Warning), LevelFilter::Warn);
    assert_eq!(LevelFilter::from(LogLevel::Info), LevelFilter::Info);
    assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
    assert_eq!(LevelFilter::from(LogLevel::Verbose), LevelFilter::Trace);
});

test_case!(test_from_level_filter, {
    for level in LogLevel::ALL {
        assert_eq!(LogLevel::from(LevelFilter::from(level)), level);
    }
});

test_case!(test_level_conversions, {
    assert_eq!(Level::try_from(LogLevel::None), Err(LevelError::NoneLevel));
    assert_eq!(Level::try_from(LogLevel::Warning), Ok(Level::Warn));
    assert_eq!(Level::try_from(LogLevel::Verbose), Ok(Level::Trace));

    assert_eq!(LogLevel::from(Level::Error), LogLevel::Error);
    assert_eq!(LogLevel::from(Level::Trace), LogLevel::Verbose);
});

test_case!(test_ordering_matches_log, {
    // log orders filters by verbosity the same way
    for a in LogLevel::ALL {
        for b in LogLevel::ALL {
            assert_eq!(a.cmp(&b), LevelFilter::from(a).cmp(&LevelFilter::from(b)));
        }
    }
});

// The only test touching the facade's global max level
test_case!(test_global_max_level, {
    compat::set_max_level(LogLevel::Warning);
    assert_eq!(compat::max_level(), LogLevel::Warning);
    assert_eq!(log::max_level(), LevelFilter::Warn);

    assert!(LogLevel::Error.log_enabled());
    assert!(LogLevel::Warning.log_enabled());
    assert!(!LogLevel::Info.log_enabled());
    assert!(!LogLevel::None.log_enabled());

    compat::set_max_level(LogLevel::Verbose);
    assert!(LogLevel::Verbose.log_enabled());

    compat::set_max_level(LogLevel::None);
    assert_eq!(compat::max_level(), LogLevel::None);
    assert!(!LogLevel::Error.log_enabled());
});
