use ratatui::{prelude::*, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::presentation::assets;

/// Draws a background scene centered in the area, clipped to fit
///
/// Centering uses display width, so wide glyphs in the art stay aligned.
pub struct SceneWidget {
    lines: &'static [&'static str],
    style: Style,
}

impl SceneWidget {
    pub fn new(asset_key: &str, style: Style) -> Self {
        Self {
            lines: assets::scene(asset_key),
            style,
        }
    }
}

impl Widget for SceneWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.lines.len() as u16;
        let width = self
            .lines
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0) as u16;
        let top = area.y + area.height.saturating_sub(height) / 2;
        let left = area.x + area.width.saturating_sub(width) / 2;

        for (row, line) in self.lines.iter().enumerate() {
            let y = top + row as u16;
            if y >= area.bottom() {
                break;
            }
            let max_width = area.right().saturating_sub(left) as usize;
            buf.set_stringn(left, y, line, max_width, self.style);
        }
    }
}
