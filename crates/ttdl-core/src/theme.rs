//! ANSI palette and theme for the boxed terminal output.
//!
//! The original tool kept its colors as module-wide globals; here they are an
//! explicit [`Theme`] value passed into the composers in [`crate::boxes`], so
//! the formatter stays testable in isolation.

/// Raw escape codes for the ClipX terminal styling.
pub mod color {
    pub const PINK: &str = "\x1b[1;35m";
    pub const BLUE: &str = "\x1b[1;34m";
    pub const LIGHT_BLUE: &str = "\x1b[1;38;5;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const CYAN: &str = "\x1b[1;38;5;51m";
    pub const GRAY: &str = "\x1b[1;30m";
    pub const GREEN: &str = "\x1b[1;32m";
    // Logo gradient, top to bottom.
    pub const GREEN1: &str = "\x1b[1;38;5;46m";
    pub const GREEN2: &str = "\x1b[1;38;5;47m";
    pub const GREEN3: &str = "\x1b[1;38;5;48m";
    pub const RED: &str = "\x1b[1;31m";
    pub const RESET: &str = "\x1b[0m";
    pub const WHITE_BG: &str = "\x1b[47m";
    pub const YELLOW: &str = "\x1b[1;33m";
}

/// Colors used when composing box lines.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Box borders; also the default value color in label/value lines.
    pub border: &'static str,
    /// The 【 】 bracket decoration around bullets and menu indices.
    pub bracket: &'static str,
    /// Labels in label/value lines.
    pub label: &'static str,
    /// Emphasized values (IP address, dates, counts).
    pub value: &'static str,
    /// Menu entry text.
    pub menu: &'static str,
    /// Error text.
    pub error: &'static str,
    /// Accented values (content type, file names).
    pub accent: &'static str,
    /// Section header title background and foreground.
    pub title_bg: &'static str,
    pub title_fg: &'static str,
    pub reset: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: color::BLUE,
            bracket: color::GRAY,
            label: color::CYAN,
            value: color::LIGHT_BLUE,
            menu: color::GREEN2,
            error: color::RED,
            accent: color::PINK,
            title_bg: color::WHITE_BG,
            title_fg: color::GRAY,
            reset: color::RESET,
        }
    }
}

impl Theme {
    /// A theme with no escape codes at all. Lines come out as plain text of
    /// the same visible shape; handy for tests and non-ANSI terminals.
    pub fn plain() -> Self {
        Self {
            border: "",
            bracket: "",
            label: "",
            value: "",
            menu: "",
            error: "",
            accent: "",
            title_bg: "",
            title_fg: "",
            reset: "",
        }
    }
}
