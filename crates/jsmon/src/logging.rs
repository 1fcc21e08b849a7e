// Colorized wrappers for logging

use fern::Dispatch;

#[inline(always)]
pub(crate) fn format_log(message: &str) -> String {
    let now = chrono::Local::now().format("%Y.%m.%d %H:%M:%S%.3f").to_string();
    format!("[{now}] {message}")
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::error!("{}", message.bright_red());
    }
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::info!("{message}");
    }
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::debug!("{}", message.dimmed());
    }
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::warn!("{}", message.bright_yellow());
    }
}

/// Log level for our crates. `trace` wins over `verbose`.
pub(crate) fn level(verbose: bool, trace: bool) -> log::LevelFilter {
    if trace {
        log::LevelFilter::Trace
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Setup the logger.
pub(crate) fn setup(log_level: log::LevelFilter, no_color: bool) -> Result<(), log::SetLoggerError> {
    Dispatch::new()
        .level(log::LevelFilter::Error)
        .level_for("jsmon", log_level)
        .level_for("jsdispatch", log_level)
        .chain(std::io::stdout())
        .apply()?;

    if no_color {
        colored::control::set_override(false);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_flag_outranks_verbose() {
        assert_eq!(level(false, false), log::LevelFilter::Info);
        assert_eq!(level(true, false), log::LevelFilter::Debug);
        assert_eq!(level(true, true), log::LevelFilter::Trace);
        assert_eq!(level(false, true), log::LevelFilter::Trace);
    }

    #[test]
    fn format_log_prefixes_timestamp() {
        let line = format_log("hello");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] hello"));
    }
}
