//! Theme preference and its resolution against the host appearance.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, de};

use crate::EngineError;

/// Concrete light/dark value, both as the host signal and as the resolved
/// display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl FromStr for Appearance {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(EngineError::InvalidOption(format!(
                "unknown appearance: {other}"
            ))),
        }
    }
}

/// Deserializes through [`FromStr`], so config files and environment
/// variables accept the same spellings as the command line.
impl<'de> Deserialize<'de> for Appearance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// The user's chosen display mode. Never persisted: every start is `System`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Every preference, in the order the settings screen lists them.
    pub const ALL: [ThemePreference; 3] = [Self::System, Self::Light, Self::Dark];

    /// Resolve against the host appearance. Only `System` looks at `host`.
    pub fn resolve(self, host: Appearance) -> Appearance {
        match self {
            Self::System => host,
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    fn position(self) -> usize {
        match self {
            Self::System => 0,
            Self::Light => 1,
            Self::Dark => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_follows_host() {
        assert_eq!(
            ThemePreference::System.resolve(Appearance::Dark),
            Appearance::Dark
        );
        assert_eq!(
            ThemePreference::System.resolve(Appearance::Light),
            Appearance::Light
        );
    }

    #[test]
    fn explicit_preferences_ignore_host() {
        for host in [Appearance::Light, Appearance::Dark] {
            assert_eq!(ThemePreference::Light.resolve(host), Appearance::Light);
            assert_eq!(ThemePreference::Dark.resolve(host), Appearance::Dark);
        }
    }

    #[test]
    fn default_preference_is_system() {
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }

    #[test]
    fn next_and_previous_cycle() {
        assert_eq!(ThemePreference::System.next(), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.next(), ThemePreference::System);
        assert_eq!(ThemePreference::System.previous(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Light.previous(), ThemePreference::System);
    }

    #[test]
    fn appearance_parses_case_insensitively() {
        assert_eq!("DARK".parse::<Appearance>(), Ok(Appearance::Dark));
        assert_eq!("light".parse::<Appearance>(), Ok(Appearance::Light));
        assert!("dim".parse::<Appearance>().is_err());
    }
}
