//! Light/dark preference and its resolution against the OS setting.

use crate::core::error::ThemeParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Local storage key holding the persisted [`ThemeMode`].
pub const THEME_STORAGE_KEY: &str = "dark-blue-theme";

/// Media query reporting the OS dark-mode preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Inline bootstrap applying the persisted theme class before first paint.
///
/// Accepts both JSON-encoded and bare values under [`THEME_STORAGE_KEY`].
pub const THEME_SCRIPT: &str = r"(function() {
  var raw = localStorage.getItem('dark-blue-theme');
  var theme = 'system';
  if (raw) {
    try { theme = JSON.parse(raw); } catch (_) { theme = raw; }
  }
  if (theme !== 'light' && theme !== 'dark') {
    theme = window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
  }
  document.documentElement.classList.remove('light', 'dark');
  document.documentElement.classList.add(theme);
})();";

/// User preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

/// Theme actually applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Persisted/storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolve against the current OS preference.
    #[must_use]
    pub const fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => {
                if system_prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }

    /// Parse a stored value, falling back to [`ThemeMode::System`].
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err: ThemeParseError| {
            tracing::debug!(error = %err, "ignoring stored theme");
            Self::System
        })
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeParseError {
                value: other.to_string(),
            }),
        }
    }
}

impl ResolvedTheme {
    /// Class placed on the document element.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Explicit mode showing the opposite palette.
    #[must_use]
    pub const fn toggled(self) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Dark,
            Self::Dark => ThemeMode::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_follows_os_preference() {
        assert_eq!(ThemeMode::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemeMode::System.resolve(false), ResolvedTheme::Light);
        assert_eq!(ThemeMode::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ThemeMode::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn toggling_leaves_system_mode() {
        let resolved = ThemeMode::System.resolve(true);
        assert_eq!(resolved.toggled(), ThemeMode::Light);
        assert_eq!(ResolvedTheme::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn parse_round_trips_known_modes() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn unknown_stored_value_falls_back_to_system() {
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ThemeParseError {
                value: "sepia".to_string()
            })
        );
        assert_eq!(ThemeMode::from_stored("sepia"), ThemeMode::System);
        assert_eq!(ThemeMode::from_stored(" dark "), ThemeMode::Dark);
    }

    #[test]
    fn serde_uses_lowercase_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&ThemeMode::System)?, "\"system\"");
        let mode: ThemeMode = serde_json::from_str("\"dark\"")?;
        assert_eq!(mode, ThemeMode::Dark);
        Ok(())
    }

    #[test]
    fn bootstrap_script_reads_storage_key() {
        assert!(THEME_SCRIPT.contains(THEME_STORAGE_KEY));
        assert!(THEME_SCRIPT.contains(DARK_SCHEME_QUERY));
    }
}
