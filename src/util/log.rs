use std::sync::atomic::{AtomicU8, Ordering};

pub const LEVEL_ERROR: u8 = 0;
pub const LEVEL_WARN: u8 = 1;
pub const LEVEL_INFO: u8 = 2;
pub const LEVEL_DEBUG: u8 = 3;

static LOG_LEVEL: AtomicU8 = AtomicU8::new(LEVEL_INFO);

pub fn set_log_level(level: u8) {
    LOG_LEVEL.store(level.min(LEVEL_DEBUG), Ordering::Relaxed);
}

#[inline]
pub fn log_enabled(level: u8) -> bool {
    level <= LOG_LEVEL.load(Ordering::Relaxed)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, $tag:expr, $($arg:tt)*) => {
        if $crate::util::log::log_enabled($level) {
            eprintln!(
                "[{}]({}:{}) {}",
                $tag,
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__log!($crate::util::log::LEVEL_ERROR, "ERROR", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__log!($crate::util::log::LEVEL_WARN, "WARN", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__log!($crate::util::log::LEVEL_INFO, "INFO", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::__log!($crate::util::log::LEVEL_DEBUG, "DEBUG", $($arg)*)
    };
}

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        $crate::error!($($arg)*);
        std::process::exit(1);
    }};
}

#[test]
fn test_log_level() {
    set_log_level(LEVEL_WARN);
    assert!(log_enabled(LEVEL_ERROR));
    assert!(log_enabled(LEVEL_WARN));
    assert!(!log_enabled(LEVEL_DEBUG));

    // 範囲外はDEBUGに丸める
    set_log_level(9);
    assert!(log_enabled(LEVEL_DEBUG));

    set_log_level(LEVEL_INFO);
}
