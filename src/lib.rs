//! console-markup - color-code markup and prefixed console logging
//!
//! Text uses `&` + a code character for colors (`&a` green, `&l` bold, `&r`
//! reset). [`Logger`] prints lines with global and local prefixes and converts
//! the codes to ANSI sequences.

pub mod backend;
pub mod color;
pub mod console;
pub mod error;
pub mod logger;

pub use backend::ConsoleBackend;
pub use color::ColorCode;
pub use console::GlobalPrefixes;
pub use error::{Error, Result};
pub use logger::Logger;
