#![warn(clippy::all, rust_2018_idioms)]

/// Unified logging macros with file, module, and line context.
/// Every message goes to both the `log` and `tracing` systems so the file
/// subscriber and any external consumer see the same stream.
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        log::trace!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::trace!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        log::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        log::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

/*
Level guidelines:

TRACE: per-frame details, individual channel drains
DEBUG: UI interactions, HTTP request/response bodies, worker lifecycle
INFO:  user-initiated actions, load/save completions
WARN:  fallbacks (degraded catalog, default colors), slow requests
ERROR: failed saves/restarts, unreachable backend at startup

Never log at trace/debug from inside the render path itself; the update
loop runs at display refresh rate and will flood the file.
*/
