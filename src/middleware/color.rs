//! Display colors for methods and status codes.
//!
//! Both classifiers are closed tables. Anything they do not know maps to
//! [`ColorCategory::Reset`], which renders as no color at all.

use std::fmt;

/// A terminal color used to highlight part of an access line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorCategory {
    Red,
    Green,
    White,
    Yellow,
    Cyan,
    Blue,
    Magenta,
    Reset,
}

impl ColorCategory {
    /// The ANSI escape sequence that switches to this color.
    pub fn as_ansi(self) -> &'static str {
        match self {
            Self::Red     => "\x1b[97;41m",
            Self::Green   => "\x1b[97;42m",
            Self::White   => "\x1b[90;47m",
            Self::Yellow  => "\x1b[90;43m",
            Self::Cyan    => "\x1b[97;46m",
            Self::Blue    => "\x1b[97;44m",
            Self::Magenta => "\x1b[97;45m",
            Self::Reset   => "\x1b[0m",
        }
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ansi())
    }
}

/// Color for a request method token. Exact, case-sensitive match.
pub fn method_color(method: &str) -> ColorCategory {
    match method {
        "GET"     => ColorCategory::Blue,
        "POST"    => ColorCategory::Cyan,
        "PUT"     => ColorCategory::Yellow,
        "PATCH"   => ColorCategory::Green,
        "DELETE"  => ColorCategory::Red,
        "HEAD"    => ColorCategory::Magenta,
        "OPTIONS" => ColorCategory::White,
        _         => ColorCategory::Reset,
    }
}

/// Color for a status code, by class.
pub fn status_color(code: u16) -> ColorCategory {
    match code {
        100..=199 => ColorCategory::Red,
        200..=299 => ColorCategory::Green,
        300..=399 => ColorCategory::White,
        400..=499 => ColorCategory::Yellow,
        500..=599 => ColorCategory::Red,
        _         => ColorCategory::Reset,
    }
}
