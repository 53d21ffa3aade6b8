//! Color-code markup for terminal output
//! `&` followed by a code character expands to a standard ANSI sequence (0-15 palette)
//!
//! There is no escape for the marker: a literal `&a` in text always becomes green.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Character that starts every color pattern
pub const MARKER: char = '&';

pub const RESET: &str = "\x1b[0m";
pub const BLACK: &str = "\x1b[30m";
pub const DARK_BLUE: &str = "\x1b[34m";
pub const DARK_GREEN: &str = "\x1b[32m";
pub const DARK_AQUA: &str = "\x1b[36m";
pub const DARK_RED: &str = "\x1b[31m";
pub const DARK_PURPLE: &str = "\x1b[35m";
pub const GOLD: &str = "\x1b[33m"; // Color 3: Yellow (dim)
pub const GRAY: &str = "\x1b[37m";
pub const DARK_GRAY: &str = "\x1b[90m"; // Bright black
pub const BLUE: &str = "\x1b[94m";
pub const GREEN: &str = "\x1b[92m";
pub const AQUA: &str = "\x1b[96m";
pub const RED: &str = "\x1b[91m";
pub const LIGHT_PURPLE: &str = "\x1b[95m";
pub const YELLOW: &str = "\x1b[93m";
pub const WHITE: &str = "\x1b[97m";
pub const BLINK: &str = "\x1b[5m";
pub const BOLD: &str = "\x1b[1m";
pub const STRIKETHROUGH: &str = "\x1b[9m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const ITALIC: &str = "\x1b[3m";

/// A supported color or style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    /// Rendered as blink, the closest ANSI has to scrambled text
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ColorCode {
    pub const ALL: [Self; 22] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
        Self::Obfuscated,
        Self::Bold,
        Self::Strikethrough,
        Self::Underline,
        Self::Italic,
        Self::Reset,
    ];

    /// Character following [`MARKER`] in the pattern
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
            Self::Reset => 'r',
        }
    }

    /// ANSI sequence this color expands to
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Black => BLACK,
            Self::DarkBlue => DARK_BLUE,
            Self::DarkGreen => DARK_GREEN,
            Self::DarkAqua => DARK_AQUA,
            Self::DarkRed => DARK_RED,
            Self::DarkPurple => DARK_PURPLE,
            Self::Gold => GOLD,
            Self::Gray => GRAY,
            Self::DarkGray => DARK_GRAY,
            Self::Blue => BLUE,
            Self::Green => GREEN,
            Self::Aqua => AQUA,
            Self::Red => RED,
            Self::LightPurple => LIGHT_PURPLE,
            Self::Yellow => YELLOW,
            Self::White => WHITE,
            Self::Obfuscated => BLINK,
            Self::Bold => BOLD,
            Self::Strikethrough => STRIKETHROUGH,
            Self::Underline => UNDERLINE,
            Self::Italic => ITALIC,
            Self::Reset => RESET,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Obfuscated => "obfuscated",
            Self::Bold => "bold",
            Self::Strikethrough => "strikethrough",
            Self::Underline => "underline",
            Self::Italic => "italic",
            Self::Reset => "reset",
        }
    }

    /// Two-character marker, e.g. `&a`
    #[must_use]
    pub fn pattern(self) -> String {
        format!("{MARKER}{}", self.key())
    }

    /// Look up the color whose pattern is `&` + `key`
    #[must_use]
    pub fn from_char(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ColorCode {
    type Err = Error;

    /// Accepts a name (`dark-green`, `DarkGreen`, `dark green`) or a pattern (`&2`)
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        if let (Some(MARKER), Some(key), None) = (chars.next(), chars.next(), chars.next()) {
            return Self::from_char(key).ok_or_else(|| Error::UnknownColor(s.to_string()));
        }

        let wanted: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|c| c.name().replace('_', "") == wanted)
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

/// Replace every color pattern with its ANSI code in a single pass
#[must_use]
pub fn parse(input: &str) -> String {
    substitute(input, ColorCode::code)
}

/// Remove every color pattern, leaving plain text
#[must_use]
pub fn strip(input: &str) -> String {
    substitute(input, |_| "")
}

fn substitute(input: &str, replace: impl Fn(ColorCode) -> &'static str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == MARKER {
            if let Some(color) = chars.peek().copied().and_then(ColorCode::from_char) {
                chars.next();
                out.push_str(replace(color));
                continue;
            }
        }
        out.push(c);
    }

    out
}
