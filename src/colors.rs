use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";

/// What a piece of terminal output means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Error,
    Warning,
    /// File name above its options when several files are resolved
    Header,
    /// Base value replaced by an override
    Removed,
    /// Value an override introduced
    Added,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Self::Error | Self::Removed => "\x1b[31m",
            Self::Warning => "\x1b[33m",
            Self::Header => "\x1b[1;36m",
            Self::Added => "\x1b[32m",
        }
    }

    /// Style of a unified diff line starting with `sign`
    pub fn for_diff_sign(sign: char) -> Option<Self> {
        match sign {
            '-' => Some(Self::Removed),
            '+' => Some(Self::Added),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// `text` wrapped in the escape codes of `style`, or unchanged when
    /// colors are off.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", style.code())
        } else {
            text.to_string()
        }
    }

    /// A diff line with its sign, colored by that sign
    pub fn diff_line(&self, sign: char, text: &str) -> String {
        let line = format!("{sign}{text}");
        match Style::for_diff_sign(sign) {
            Some(style) => self.paint(style, &line),
            None => line,
        }
    }
}

pub fn should_use_colors(force_color: bool, no_color: bool) -> bool {
    // --no-color > --color > NO_COLOR env > TTY
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}
