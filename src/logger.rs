//! Console logger with global and local prefixes

use crate::color;
use crate::console::{self, GlobalPrefixes};
use std::io::{self, Write};

/// Logs messages and warnings to stdout with custom prefixes
///
/// Each line is `global prefix + local prefix + message`, with color codes
/// converted. The global prefix is only used when the logger is bound to a
/// [`GlobalPrefixes`] handle.
#[derive(Debug, Clone)]
pub struct Logger {
    globals: Option<GlobalPrefixes>,
    log_prefix: Option<String>,
    warn_prefix: Option<String>,
}

impl Logger {
    /// Create a logger, bound to [`console::global`] if `has_global_prefix`
    #[must_use]
    pub fn new(has_global_prefix: bool) -> Self {
        Self::from_globals(has_global_prefix.then(|| console::global().clone()))
    }

    /// Create a logger bound to the given global prefixes
    #[must_use]
    pub fn with_globals(globals: GlobalPrefixes) -> Self {
        Self::from_globals(Some(globals))
    }

    fn from_globals(globals: Option<GlobalPrefixes>) -> Self {
        Self {
            globals,
            log_prefix: Some(String::new()),
            warn_prefix: Some(String::new()),
        }
    }

    #[must_use]
    pub fn has_global_prefix(&self) -> bool {
        self.globals.is_some()
    }

    #[must_use]
    pub fn log_prefix(&self) -> Option<&str> {
        self.log_prefix.as_deref()
    }

    #[must_use]
    pub fn warn_prefix(&self) -> Option<&str> {
        self.warn_prefix.as_deref()
    }

    pub fn set_log_prefix<S: Into<String>>(&mut self, prefix: Option<S>) -> &mut Self {
        self.log_prefix = prefix.map(Into::into);
        self
    }

    pub fn set_warn_prefix<S: Into<String>>(&mut self, prefix: Option<S>) -> &mut Self {
        self.warn_prefix = prefix.map(Into::into);
        self
    }

    pub fn set_both_prefixes<S: Into<String>>(&mut self, prefix: Option<S>) -> &mut Self {
        self.log_prefix = prefix.map(Into::into);
        self.warn_prefix.clone_from(&self.log_prefix);
        self
    }

    /// Print a message with the log prefixes
    ///
    /// A failed write to stdout is dropped.
    pub fn log(&self, message: &str) -> &Self {
        let _ = self.write_log(&mut io::stdout().lock(), message);
        self
    }

    /// Print a message with the warn prefixes
    ///
    /// A failed write to stdout is dropped.
    pub fn warn(&self, message: &str) -> &Self {
        let _ = self.write_warn(&mut io::stdout().lock(), message);
        self
    }

    /// Write the colored log line and a newline to `out`
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_log(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(out, "{}", color::parse(&self.message_as_log(message)))
    }

    /// Write the colored warn line and a newline to `out`
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_warn(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(out, "{}", color::parse(&self.message_as_warn(message)))
    }

    /// The line `log` would print, before color codes are converted
    #[must_use]
    pub fn message_as_log(&self, message: &str) -> String {
        let global = self.globals.as_ref().and_then(GlobalPrefixes::log_prefix);
        compose(global.as_deref(), self.log_prefix(), message)
    }

    /// The line `warn` would print, before color codes are converted
    #[must_use]
    pub fn message_as_warn(&self, message: &str) -> String {
        let global = self.globals.as_ref().and_then(GlobalPrefixes::warn_prefix);
        compose(global.as_deref(), self.warn_prefix(), message)
    }

    /// New logger with `extension` appended to both local prefixes
    ///
    /// An absent prefix counts as empty, so extending it yields just `extension`.
    #[must_use]
    pub fn create_extension(&self, extension: Option<&str>) -> Self {
        let extend = |prefix: Option<&str>| {
            Some(format!("{}{}", prefix.unwrap_or_default(), extension.unwrap_or_default()))
        };

        Self {
            globals: self.globals.clone(),
            log_prefix: extend(self.log_prefix()),
            warn_prefix: extend(self.warn_prefix()),
        }
    }
}

fn compose(global: Option<&str>, local: Option<&str>, message: &str) -> String {
    let global = global.unwrap_or_default();
    let local = local.unwrap_or_default();
    let mut line = String::with_capacity(global.len() + local.len() + message.len());
    line.push_str(global);
    line.push_str(local);
    line.push_str(message);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_globals() -> GlobalPrefixes {
        let globals = GlobalPrefixes::empty();
        globals.set_both_prefixes(Some("[TEST] "));
        globals
    }

    #[test]
    fn extension_prefixes_compose() {
        let mut logger = Logger::with_globals(test_globals());
        logger.set_both_prefixes(Some("[EXTEND] "));

        let extension = logger.create_extension(Some("[EXTEND2] "));

        assert_eq!(extension.message_as_log("test"), "[TEST] [EXTEND] [EXTEND2] test");
        assert_eq!(extension.message_as_warn("test2"), "[TEST] [EXTEND] [EXTEND2] test2");
    }

    #[test]
    fn extension_is_independent() {
        let mut logger = Logger::with_globals(test_globals());
        logger.set_both_prefixes(Some("[A] "));

        let mut extension = logger.create_extension(Some("[B] "));
        extension.set_log_prefix(Some("[C] ")).set_warn_prefix(None::<String>);

        assert_eq!(logger.log_prefix(), Some("[A] "));
        assert_eq!(logger.warn_prefix(), Some("[A] "));
        assert_eq!(extension.log_prefix(), Some("[C] "));
        assert_eq!(extension.warn_prefix(), None);
        assert!(extension.has_global_prefix());
    }

    #[test]
    fn extension_of_absent_prefix_is_just_the_extension() {
        let mut logger = Logger::with_globals(GlobalPrefixes::empty());
        logger.set_both_prefixes(None::<String>);

        let extension = logger.create_extension(Some("[X] "));
        assert_eq!(extension.log_prefix(), Some("[X] "));
        assert_eq!(extension.message_as_warn("m"), "[X] m");

        let unchanged = logger.create_extension(None);
        assert_eq!(unchanged.log_prefix(), Some(""));
    }

    #[test]
    fn global_changes_apply_to_existing_loggers() {
        let globals = GlobalPrefixes::empty();
        let bound = Logger::with_globals(globals.clone());
        let mut unbound = Logger::from_globals(None);
        unbound.set_log_prefix(Some("[LOCAL] "));

        assert_eq!(bound.message_as_log("a"), "a");

        globals.set_log_prefix(Some("[G] ")).set_warn_prefix(Some("[GW] "));

        assert_eq!(bound.message_as_log("a"), "[G] a");
        assert_eq!(bound.message_as_warn("a"), "[GW] a");
        assert_eq!(unbound.message_as_log("a"), "[LOCAL] a");
        assert_eq!(unbound.message_as_warn("a"), "a");
    }

    #[test]
    fn absent_local_prefix_yields_only_global() {
        let mut logger = Logger::with_globals(test_globals());
        logger.set_log_prefix(None::<String>);

        let line = logger.message_as_log("msg");
        assert_eq!(line, "[TEST] msg");
        assert!(!line.contains("null") && !line.contains("None"));
    }

    #[test]
    fn unbound_logger_ignores_process_default() {
        let logger = Logger::new(false);
        assert!(!logger.has_global_prefix());
        assert_eq!(logger.message_as_log("x"), "x");
    }

    #[test]
    fn new_with_global_binds_process_default() {
        let logger = Logger::new(true);
        assert!(logger.has_global_prefix());
        assert!(logger.globals.as_ref().is_some_and(|g| g.same_as(console::global())));
    }

    #[test]
    fn writes_colored_lines_with_newline() {
        let globals = GlobalPrefixes::new();
        let mut logger = Logger::with_globals(globals);
        logger.set_log_prefix(Some("&b[net] ")).set_warn_prefix(None::<String>);

        let mut out = Vec::new();
        logger.write_log(&mut out, "&lup&r").unwrap();
        logger.write_warn(&mut out, "slow").unwrap();

        let expected = format!(
            "{gray}[{green}LOG{gray}] {aqua}[net] {bold}up{reset}\n\
             {gray}[{yellow}WARN{gray}] slow\n",
            gray = color::GRAY,
            green = color::GREEN,
            yellow = color::YELLOW,
            aqua = color::AQUA,
            bold = color::BOLD,
            reset = color::RESET,
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn unbound_logger_writes_local_prefix_only() {
        let mut logger = Logger::new(false);
        logger.set_both_prefixes(Some("&c! "));

        let mut out = Vec::new();
        logger.write_warn(&mut out, "x").unwrap();
        assert_eq!(out, format!("{}! x\n", color::RED).into_bytes());
    }

    #[test]
    fn log_and_warn_chain() {
        let logger = Logger::from_globals(None);
        logger.log("&aok").warn("&eok");
    }
}
