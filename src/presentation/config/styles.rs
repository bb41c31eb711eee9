use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, keyed `"<theme>.<slot>"` (e.g. `library.accent`)
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, spec)| {
                parse_style(&spec)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style for `slot` under `theme`, or the default style
    pub fn slot(&self, theme: &str, slot: &str) -> Style {
        self.get(&format!("{theme}.{slot}"))
            .copied()
            .unwrap_or_default()
    }
}

fn parse_modifier(token: &str) -> Option<Modifier> {
    match token {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" | "slow_blink" => Some(Modifier::SLOW_BLINK),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "hidden" => Some(Modifier::HIDDEN),
        "crossed_out" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

/// Parses `"<fg> [on <bg>] [modifiers...]"`, e.g. `"yellow on black bold"`.
/// Colors use ratatui names, `#rrggbb` or an indexed number.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut expect_bg = false;

    for token in line.split_whitespace() {
        let lower = token.to_ascii_lowercase();
        if lower == "on" {
            expect_bg = true;
            continue;
        }
        if let Some(modifier) = parse_modifier(&lower) {
            style = style.add_modifier(modifier);
            continue;
        }
        let color =
            Color::from_str(&lower).map_err(|_| format!("Unknown color or modifier `{token}`"))?;
        style = if expect_bg {
            expect_bg = false;
            style.bg(color)
        } else {
            style.fg(color)
        };
    }

    if expect_bg {
        return Err(format!("Missing background color in `{line}`"));
    }
    Ok(style)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_default() {
        assert_eq!(parse_style(""), Ok(Style::default()));
    }

    #[test]
    fn test_parse_style_foreground() {
        assert_eq!(parse_style("red"), Ok(Style::default().fg(Color::Red)));
    }

    #[test]
    fn test_parse_style_background() {
        assert_eq!(
            parse_style("on blue"),
            Ok(Style::default().bg(Color::Blue))
        );
    }

    #[test]
    fn test_parse_style_full() {
        assert_eq!(
            parse_style("yellow on black bold italic"),
            Ok(Style::default()
                .fg(Color::Yellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC))
        );
    }

    #[test]
    fn test_parse_style_hex() {
        assert_eq!(
            parse_style("#ffaa00"),
            Ok(Style::default().fg(Color::Rgb(0xff, 0xaa, 0x00)))
        );
    }

    #[test]
    fn test_parse_style_errors() {
        assert!(parse_style("sparkly").is_err());
        assert!(parse_style("red on").is_err());
    }

    #[test]
    fn test_slot_lookup() -> Result<(), serde_json::Error> {
        let styles: Styles = serde_json::from_str(r##"{ "cafe.accent": "#c08552 bold" }"##)?;
        assert_eq!(
            styles.slot("cafe", "accent"),
            Style::default()
                .fg(Color::Rgb(0xc0, 0x85, 0x52))
                .add_modifier(Modifier::BOLD)
        );
        assert_eq!(styles.slot("library", "accent"), Style::default());
        Ok(())
    }
}
