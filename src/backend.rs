//! `log` crate backend that prints records through a [`Logger`]

use crate::error::{Error, Result};
use crate::logger::Logger;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};

/// Prints `log::warn!`/`log::error!` as [`Logger::warn`] lines and everything
/// else as [`Logger::log`] lines
#[derive(Debug)]
pub struct ConsoleBackend {
    logger: Logger,
    level: LevelFilter,
}

impl ConsoleBackend {
    #[must_use]
    pub fn new(logger: Logger, level: LevelFilter) -> Self {
        Self { logger, level }
    }

    /// Install as the global `log` backend
    ///
    /// # Errors
    ///
    /// Returns [`Error::Logger`] if a `log` backend is already installed.
    pub fn init(self) -> Result<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).map_err(|e| Error::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Write a record as the logger's warn or log line
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_record(&self, out: &mut impl Write, record: &Record) -> io::Result<()> {
        let message = record.args().to_string();
        if Self::is_warning(record.level()) {
            self.logger.write_warn(out, &message)
        } else {
            self.logger.write_log(out, &message)
        }
    }

    fn is_warning(level: Level) -> bool {
        level <= Level::Warn
    }
}

impl Log for ConsoleBackend {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let _ = self.write_record(&mut io::stdout().lock(), record);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::GlobalPrefixes;

    #[test]
    fn respects_level_filter() {
        let backend = ConsoleBackend::new(Logger::new(false), LevelFilter::Warn);
        let meta = |level: Level| Metadata::builder().level(level).target("test").build();

        assert!(backend.enabled(&meta(Level::Error)));
        assert!(backend.enabled(&meta(Level::Warn)));
        assert!(!backend.enabled(&meta(Level::Info)));
        assert!(!backend.enabled(&meta(Level::Trace)));
    }

    fn render(backend: &ConsoleBackend, level: Level, message: &str) -> String {
        let mut out = Vec::new();
        backend
            .write_record(
                &mut out,
                &Record::builder()
                    .args(format_args!("{message}"))
                    .level(level)
                    .build(),
            )
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn errors_and_warnings_use_warn_prefix() {
        let globals = GlobalPrefixes::empty();
        globals.set_log_prefix(Some("[L] ")).set_warn_prefix(Some("&e[W] "));
        let backend = ConsoleBackend::new(Logger::with_globals(globals), LevelFilter::Trace);
        let warn = format!("{}[W] disk 90%\n", crate::color::YELLOW);

        assert_eq!(render(&backend, Level::Error, "disk 90%"), warn);
        assert_eq!(render(&backend, Level::Warn, "disk 90%"), warn);
        assert_eq!(render(&backend, Level::Info, "ready"), "[L] ready\n");
        assert_eq!(render(&backend, Level::Debug, "ready"), "[L] ready\n");
        assert_eq!(render(&backend, Level::Trace, "ready"), "[L] ready\n");
    }

    #[test]
    fn init_installs_once() {
        let first = ConsoleBackend::new(Logger::new(false), LevelFilter::Info);
        assert!(first.init().is_ok());
        assert_eq!(log::max_level(), LevelFilter::Info);

        let second = ConsoleBackend::new(Logger::new(false), LevelFilter::Debug);
        assert!(matches!(second.init(), Err(Error::Logger(_))));
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
