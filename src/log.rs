// src/log.rs
//! Logging macros.
//!
//! Same `logf!` / `logd!` / `loge!` vocabulary as before, but every line now goes
//! through `tracing` under the `yoweb` target. The library never installs a
//! subscriber; whoever embeds it decides where the events end up.

#[doc(hidden)]
pub use tracing as __tracing;

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: "yoweb", $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!(target: "yoweb", $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!(target: "yoweb", $($arg)*)
    };
}
