//! Visual theme and its persisted tag.

use std::fmt;

/// Storage key under which the theme tag is persisted.
pub const THEME_KEY: &str = "theme";

/// Light or dark visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The persisted tag: `"light"` or `"dark"`.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Read a persisted tag. Only `"dark"` selects [`Dark`](Self::Dark);
    /// anything else, including a missing value, is [`Light`](Self::Light).
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
