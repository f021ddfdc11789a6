// src/tests/mod.rs

use crate::error::LevelError;
use crate::level::LogLevel;

/// Declares a test function
///
/// Same shape as the kernel's `test_case!(name, { ... })`, backed by the
/// host test harness.
macro_rules! test_case {
    ($func_name:ident, $body:block) => {
        #[doc = concat!("Test case: ", stringify!($func_name))]
        #[test]
        fn $func_name() $body
    };
}


#[cfg(feature = "log")]
mod compat;
