use std::{fmt, str::FromStr};

use thiserror::Error;

pub const THEME_PREFERENCE_KEY: &str = "theme-preference";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_TRANSITION_CLASSES: [&str; 2] = ["theme-transitioning", "theme-crossfade-active"];
pub const THEME_TRANSITION_DURATION_MS: u32 = 440;
pub const THEME_TRANSITION_CLEANUP_BUFFER_MS: u32 = 110;

/// Runs in the document head before first paint so the stored (or system)
/// theme is in place before any styled content shows.
pub const THEME_INIT_SCRIPT: &str = r#"(() => {
  let theme = null;
  try {
    const stored = window.localStorage.getItem("theme-preference");
    if (stored === "light" || stored === "dark") theme = stored;
  } catch {}
  if (!theme) {
    theme = window.matchMedia("(prefers-color-scheme: dark)").matches ? "dark" : "light";
  }
  document.documentElement.setAttribute("data-theme", theme);
})();"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized theme: {0:?}")]
pub struct ParseThemeError(pub String);

impl Theme {
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Accessible label for a button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Read a raw stored preference. Anything but the two literals reads as
/// "no preference".
pub fn parse_stored(raw: &str) -> Option<Theme> {
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            if !raw.is_empty() {
                log::debug!("ignoring stored theme preference: {err}");
            }
            None
        }
    }
}

/// Where a theme change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Toggle,
    System,
}

impl ThemeSource {
    /// Only a click on the toggle gets the crossfade.
    pub fn crossfades(self) -> bool {
        matches!(self, Self::Toggle)
    }
}

/// Session theme state: the applied theme plus whether the user has taken
/// it over from the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
    manual_override: bool,
}

impl ThemeState {
    pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Self {
        Self {
            theme: stored.unwrap_or_else(|| Theme::from_system(system_prefers_dark)),
            manual_override: stored.is_some(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_manual(&self) -> bool {
        self.manual_override
    }

    /// Follow an OS preference change unless the user chose a theme.
    /// Returns the theme to apply, if any.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.manual_override {
            return None;
        }
        let next = Theme::from_system(prefers_dark);
        (next != self.theme).then(|| {
            self.theme = next;
            next
        })
    }

    /// Flip the theme and pin it for the rest of the session. Returns the
    /// theme to apply and persist.
    pub fn toggle(&mut self) -> Theme {
        self.manual_override = true;
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_only_accepts_literals() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(parse_stored(""), None);
        assert_eq!(parse_stored("\"dark\""), None);
        assert_eq!(parse_stored("dark"), Some(Theme::Dark));
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_stored_preference_wins() {
        let state = ThemeState::resolve(Some(Theme::Dark), false);
        assert_eq!(state.theme(), Theme::Dark);
        assert!(state.is_manual());

        let state = ThemeState::resolve(Some(Theme::Light), true);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_falls_back_to_system() {
        let state = ThemeState::resolve(parse_stored("purple"), true);
        assert_eq!(state.theme(), Theme::Dark);
        assert!(!state.is_manual());

        let state = ThemeState::resolve(None, false);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_follows_system_until_toggled() {
        let mut state = ThemeState::resolve(None, false);
        assert_eq!(state.system_changed(true), Some(Theme::Dark));
        assert_eq!(state.system_changed(true), None);

        assert_eq!(state.toggle(), Theme::Light);
        assert!(state.is_manual());
        assert_eq!(state.system_changed(true), None);
        assert_eq!(state.system_changed(false), None);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_stored_preference_ignores_system() {
        let mut state = ThemeState::resolve(Some(Theme::Dark), true);
        assert_eq!(state.system_changed(false), None);
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_only_toggle_crossfades() {
        let mut state = ThemeState::resolve(None, false);
        let from_os = state.system_changed(true).map(|theme| (theme, ThemeSource::System));
        assert_eq!(from_os, Some((Theme::Dark, ThemeSource::System)));
        assert!(!ThemeSource::System.crossfades());

        assert_eq!(state.toggle(), Theme::Light);
        assert!(ThemeSource::Toggle.crossfades());
    }
}
