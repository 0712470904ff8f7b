use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn heading(self, text: &str) -> String {
        match self {
            Theme::Light => text.to_string(),
            Theme::Dark => format!("\x1b[1m{}\x1b[0m", text),
        }
    }

    pub fn muted(self, text: &str) -> String {
        match self {
            Theme::Light => text.to_string(),
            Theme::Dark => format!("\x1b[2m{}\x1b[0m", text),
        }
    }
}

/// Remembers the last chosen theme between runs.
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: PathBuf) -> Self {
        ThemeStore { path }
    }

    pub fn open_default() -> Result<Self> {
        let path = xdg::BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"))
            .place_state_file("theme")
            .context("Failed to create state directory for the theme file")?;
        Ok(ThemeStore::new(path))
    }

    /// `None` when nothing was saved yet. An unreadable or garbled file is
    /// treated the same way.
    pub fn load(&self) -> Option<Theme> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match raw.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            other => {
                warn!("Ignoring unknown theme {:?} in {}", other, self.path.display());
                None
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        fs::write(&self.path, theme.as_str())
            .with_context(|| format!("Failed to save theme to {}", self.path.display()))?;
        debug!("Saved theme {} to {}", theme.as_str(), self.path.display());
        Ok(())
    }

    /// Stored theme if any, else the configured fallback.
    pub fn load_or(&self, fallback: Theme) -> Theme {
        self.load().unwrap_or(fallback)
    }
}
