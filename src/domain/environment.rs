use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The visual environment the user is studying in
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Library,
    Cafe,
}

impl Environment {
    pub fn title(self) -> &'static str {
        match self {
            Environment::Library => "Cozy Library",
            Environment::Cafe => "Café Glow",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Environment::Library => "Warm fireplace, gentle rain sounds",
            Environment::Cafe => "Jazz music, coffee aromas",
        }
    }

    /// Key of the background scene drawn behind the panels
    pub fn background_asset(self) -> &'static str {
        match self {
            Environment::Library => "scenes/library",
            Environment::Cafe => "scenes/cafe",
        }
    }

    /// Name of the presentation flag set while this environment is active
    pub fn theme_class(self) -> &'static str {
        match self {
            Environment::Library => "theme-library",
            Environment::Cafe => "theme-cafe",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Environment::Library => Environment::Cafe,
            Environment::Cafe => Environment::Library,
        }
    }
}
