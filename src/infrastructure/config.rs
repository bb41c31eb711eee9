use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::environment::Environment,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Number of ambient dust particles drawn over each room
#[derive(Clone, Debug, Deserialize)]
pub struct ParticleConfig {
    #[serde(default = "default_library_particle_count")]
    pub library: usize,
    #[serde(default = "default_cafe_particle_count")]
    pub cafe: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            library: default_library_particle_count(),
            cafe: default_cafe_particle_count(),
        }
    }
}

impl ParticleConfig {
    pub fn count_for(&self, environment: Environment) -> usize {
        match environment {
            Environment::Library => self.library,
            Environment::Cafe => self.cafe,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SplashConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_splash_duration_ms")]
    pub duration_ms: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: default_splash_duration_ms(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_display_name")]
    pub display_name: String,
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default)]
    pub splash: SplashConfig,
}

fn default_library_particle_count() -> usize {
    20
}

fn default_cafe_particle_count() -> usize {
    12
}

fn default_true() -> bool {
    true
}

fn default_splash_duration_ms() -> u64 {
    2500
}

fn default_display_name() -> String {
    String::from("You")
}

impl Default for Config {
    /// The embedded default configuration. Falls back to bare defaults (no
    /// keybindings, no styles) if the embedded file is unreadable.
    fn default() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            log::error!("{e}");
            Self {
                config: AppConfig::default(),
                keybindings: keybindings::KeyBindings::default(),
                styles: styles::Styles::default(),
                environment: Environment::default(),
                display_name: default_display_name(),
                particles: ParticleConfig::default(),
                splash: SplashConfig::default(),
            }
        })
    }
}

impl Config {
    fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads user configuration files from the config directory and merges the
    /// embedded defaults underneath. User files are optional.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
            return Ok(Self {
                config: AppConfig {
                    _data_dir: data_dir,
                    _config_dir: config_dir,
                },
                ..default_config
            });
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        Ok(cfg)
    }

    /// Fills keybindings and styles the user did not set from `defaults`
    pub fn merge_defaults(&mut self, defaults: &Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::config::keybindings::{parse_key_sequence, Action};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_config_parses() -> Result<(), ConfigError> {
        let cfg = Config::embedded()?;

        assert_eq!(cfg.environment, Environment::Library);
        assert_eq!(cfg.display_name, "You");
        assert_eq!(cfg.particles.count_for(Environment::Library), 20);
        assert_eq!(cfg.particles.count_for(Environment::Cafe), 12);
        assert!(cfg.splash.enabled);
        assert_eq!(cfg.splash.duration_ms, 2500);
        assert!(!cfg.keybindings.is_empty());
        assert!(cfg.styles.contains_key("library.accent"));
        assert!(cfg.styles.contains_key("cafe.accent"));
        Ok(())
    }

    #[test]
    fn test_default_keybindings() {
        let cfg = Config::default();
        let lookup = |seq: &str| {
            parse_key_sequence(seq)
                .ok()
                .and_then(|keys| cfg.keybindings.get(&keys).copied())
        };

        assert_eq!(lookup("<space>"), Some(Action::ToggleTimer));
        assert_eq!(lookup("<r>"), Some(Action::ResetTimer));
        assert_eq!(lookup("<t>"), Some(Action::ToggleEnvironment));
        assert_eq!(lookup("<q>"), Some(Action::Quit));
        assert_eq!(lookup("<o>"), Some(Action::ToggleSound));
        assert_eq!(lookup("<tab>"), Some(Action::FocusNext));
        assert_eq!(lookup("<backtab>"), Some(Action::FocusPrevious));
    }

    #[test]
    fn test_particle_counts_fill_missing_rooms() -> Result<(), json5::Error> {
        let cfg: Config = json5::from_str(r#"{ particles: { cafe: 4 } }"#)?;
        assert_eq!(cfg.particles.library, 20);
        assert_eq!(cfg.particles.cafe, 4);
        Ok(())
    }

    #[test]
    fn test_merge_defaults_keeps_user_bindings() -> Result<(), String> {
        let defaults = Config::default();
        let mut user = Config::default();
        user.keybindings.clear();
        let space = parse_key_sequence("<space>")?;
        user.keybindings.insert(space.clone(), Action::Quit);

        user.merge_defaults(&defaults);

        assert_eq!(user.keybindings.get(&space), Some(&Action::Quit));
        assert_eq!(
            user.keybindings.get(&parse_key_sequence("<r>")?),
            Some(&Action::ResetTimer)
        );
        Ok(())
    }
}
