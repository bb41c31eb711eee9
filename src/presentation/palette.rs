//! Per-environment colors, resolved from the configured styles

use ratatui::style::{Color, Modifier, Style};

use crate::{domain::environment::Environment, presentation::config::Styles};

/// The styles a frame is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Style,
    pub text: Style,
    pub muted: Style,
    pub accent: Style,
    pub border: Style,
    pub highlight: Style,
    pub particle: Style,
    pub theme_particle: Style,
}

impl Palette {
    /// Palette for `environment`. Slots missing from `styles` fall back to
    /// built-in colors.
    pub fn from_styles(styles: &Styles, environment: Environment) -> Self {
        let fallback = Self::fallback(environment);
        let theme = environment.to_string();
        let pick = |slot: &str, default: Style| {
            styles
                .get(&format!("{theme}.{slot}"))
                .copied()
                .unwrap_or(default)
        };
        Self {
            background: pick("background", fallback.background),
            text: pick("text", fallback.text),
            muted: pick("muted", fallback.muted),
            accent: pick("accent", fallback.accent),
            border: pick("border", fallback.border),
            highlight: pick("highlight", fallback.highlight),
            particle: pick("particle", fallback.particle),
            theme_particle: pick("theme_particle", fallback.theme_particle),
        }
    }

    pub fn fallback(environment: Environment) -> Self {
        let (accent, particle) = match environment {
            Environment::Library => (Color::Yellow, Color::LightRed),
            Environment::Cafe => (Color::LightMagenta, Color::White),
        };
        Self {
            background: Style::default(),
            text: Style::default().fg(Color::White),
            muted: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
            highlight: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            particle: Style::default().fg(Color::Gray),
            theme_particle: Style::default().fg(particle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::Config;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palettes_differ_per_environment() {
        let styles = Config::default().styles;
        let library = Palette::from_styles(&styles, Environment::Library);
        let cafe = Palette::from_styles(&styles, Environment::Cafe);
        assert_ne!(library.accent, cafe.accent);
    }

    #[test]
    fn test_empty_styles_use_fallback() {
        let palette = Palette::from_styles(&Styles::default(), Environment::Cafe);
        assert_eq!(palette, Palette::fallback(Environment::Cafe));
    }
}
