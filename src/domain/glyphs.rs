//! Static icon table keyed by name.
//!
//! Views ask for icons by name so the table can be swapped (e.g. for an ASCII
//! fallback) without touching any logic.

/// Fallback for unknown icon names
pub const MISSING: &str = "?";

const ICONS: &[(&str, &str)] = &[
    ("status.focused", "●"),
    ("status.break", "◐"),
    ("status.idle", "○"),
    ("timer.play", "▶"),
    ("timer.pause", "⏸"),
    ("timer.reset", "↺"),
    ("ambient.playing", "♫"),
    ("ambient.paused", "♪"),
    ("ambient.muted", "🔇"),
    ("ambient.volume", "🔊"),
    ("env.library", "📚"),
    ("env.cafe", "☕"),
    ("particle.small", "·"),
    ("particle.medium", "•"),
    ("particle.large", "✦"),
    ("particle.ember", "*"),
    ("particle.steam", "~"),
    ("selection", "›"),
];

pub fn icon(name: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(MISSING)
}
