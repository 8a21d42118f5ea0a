//! Theme-related preferences nested under [`UserPrefs`](crate::UserPrefs).
//!
//! Color palettes themselves live with the UI; this module only names the
//! appearance and the color theme to use for each appearance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::PrefsError;

/// Overall appearance of the UI.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeAppearance {
    #[default]
    Light,
    Dark,
}

impl ThemeAppearance {
    /// Every member of the set, in declaration order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// The exact wire literal for this member.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeAppearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeAppearance {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PrefsError::unknown_value("ThemeAppearance", other)),
        }
    }
}

/// Named color theme per appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Color theme used when the appearance is light.
    pub light: String,
    /// Color theme used when the appearance is dark.
    pub dark: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            light: "default-light".to_owned(),
            dark: "default-dark".to_owned(),
        }
    }
}

/// Theme preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemePrefs {
    /// Which appearance is active.
    pub appearance: ThemeAppearance,
    /// Whether the appearance should follow the operating system setting
    /// instead of [`appearance`](Self::appearance).
    // camelCase would render this as `syncWithOs`; the wire name keeps OS
    // fully capitalized.
    #[serde(rename = "syncWithOS")]
    pub sync_with_os: bool,
    /// Color themes to use per appearance.
    pub colors: ThemeColors,
}
