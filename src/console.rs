//! Global prefixes shared between loggers, plus the process-default console
//!
//! Loggers hold a clone of a [`GlobalPrefixes`] handle and read it on every
//! call, so changes apply to loggers that already exist.

use crate::color;
use std::io::{self, Write};
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const DEFAULT_LOG_PREFIX: &str = "&7[&aLOG&7] ";
pub const DEFAULT_WARN_PREFIX: &str = "&7[&eWARN&7] ";

#[derive(Debug, Clone, Default)]
struct Prefixes {
    log: Option<String>,
    warn: Option<String>,
}

/// Shared, mutable pair of global prefixes
#[derive(Debug, Clone)]
pub struct GlobalPrefixes {
    inner: Arc<RwLock<Prefixes>>,
}

impl Default for GlobalPrefixes {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalPrefixes {
    /// Prefixes initialized to `[LOG] ` / `[WARN] ` in gray and green/yellow
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            Some(DEFAULT_LOG_PREFIX.to_string()),
            Some(DEFAULT_WARN_PREFIX.to_string()),
        )
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::from_parts(None, None)
    }

    fn from_parts(log: Option<String>, warn: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Prefixes { log, warn })),
        }
    }

    // Prefixes are always valid, so poisoning is ignored
    fn read(&self) -> RwLockReadGuard<'_, Prefixes> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Prefixes> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn log_prefix(&self) -> Option<String> {
        self.read().log.clone()
    }

    #[must_use]
    pub fn warn_prefix(&self) -> Option<String> {
        self.read().warn.clone()
    }

    pub fn set_log_prefix<S: Into<String>>(&self, prefix: Option<S>) -> &Self {
        self.write().log = prefix.map(Into::into);
        self
    }

    pub fn set_warn_prefix<S: Into<String>>(&self, prefix: Option<S>) -> &Self {
        self.write().warn = prefix.map(Into::into);
        self
    }

    pub fn set_both_prefixes<S: Into<String>>(&self, prefix: Option<S>) -> &Self {
        let prefix: Option<String> = prefix.map(Into::into);
        let mut guard = self.write();
        guard.warn.clone_from(&prefix);
        guard.log = prefix;
        self
    }

    /// True if both handles point at the same shared state
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

static GLOBAL: LazyLock<GlobalPrefixes> = LazyLock::new(GlobalPrefixes::new);

/// Process-default prefixes used by [`log`], [`warn`] and `Logger::new(true)`
///
/// Not synchronized beyond the lock: interleaved setters from several threads
/// race on which value wins.
#[must_use]
pub fn global() -> &'static GlobalPrefixes {
    &GLOBAL
}

pub fn set_log_prefix<S: Into<String>>(prefix: Option<S>) {
    global().set_log_prefix(prefix);
}

pub fn set_warn_prefix<S: Into<String>>(prefix: Option<S>) {
    global().set_warn_prefix(prefix);
}

pub fn set_both_prefixes<S: Into<String>>(prefix: Option<S>) {
    global().set_both_prefixes(prefix);
}

/// Print a message with the global log prefix, converting color codes
pub fn log(message: &str) {
    let _ = write_log(&mut io::stdout().lock(), message);
}

/// Print a message with the global warn prefix, converting color codes
pub fn warn(message: &str) {
    let _ = write_warn(&mut io::stdout().lock(), message);
}

/// Write what [`log`] prints to `out`
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_log(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format_line(global().log_prefix(), message))
}

/// Write what [`warn`] prints to `out`
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_warn(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format_line(global().warn_prefix(), message))
}

fn format_line(prefix: Option<String>, message: &str) -> String {
    color::parse(&(prefix.unwrap_or_default() + message))
}
