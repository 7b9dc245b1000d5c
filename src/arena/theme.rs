//! Console color theme for the arena menu

/// What a line of output is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Welcome banners and section headers
    Title,
    /// Transitions between menus
    Notice,
    /// Menu choices
    Menu,
    Error,
    /// Contest results
    Success,
    /// Round-by-round narration
    Narration,
}

/// ANSI escape table used to paint menu output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title: &'static str,
    pub notice: &'static str,
    pub menu: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub narration: &'static str,
    pub reset: &'static str,
}

impl Theme {
    /// Standard terminal colors
    pub fn ansi() -> Self {
        Self {
            title: "\x1b[36m",
            notice: "\x1b[35m",
            menu: "\x1b[33m",
            error: "\x1b[31m",
            success: "\x1b[32m",
            narration: "\x1b[34m",
            reset: "\x1b[0m",
        }
    }

    /// No escapes at all
    pub fn plain() -> Self {
        Self {
            title: "",
            notice: "",
            menu: "",
            error: "",
            success: "",
            narration: "",
            reset: "",
        }
    }

    pub fn from_color_flag(color: bool) -> Self {
        if color {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    fn code(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Title => self.title,
            Tone::Notice => self.notice,
            Tone::Menu => self.menu,
            Tone::Error => self.error,
            Tone::Success => self.success,
            Tone::Narration => self.narration,
        }
    }

    /// Wrap `text` in the escape for `tone`
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        format!("{}{}{}", self.code(tone), text, self.reset)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}
