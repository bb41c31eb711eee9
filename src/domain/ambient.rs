use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Step the volume slider moves by
pub const VOLUME_STEP: u8 = 5;
pub const MAX_VOLUME: u8 = 100;

/// Background sounds offered by the ambient panel. None of them produce audio.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum AmbientSound {
    #[default]
    Fireplace,
    Rain,
    CafeJazz,
    Ambient,
}

impl AmbientSound {
    pub fn label(self) -> &'static str {
        match self {
            AmbientSound::Fireplace => "Fireplace",
            AmbientSound::Rain => "Rain",
            AmbientSound::CafeJazz => "Café Jazz",
            AmbientSound::Ambient => "Ambient",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            AmbientSound::Fireplace => "🔥",
            AmbientSound::Rain => "🌧",
            AmbientSound::CafeJazz => "☕",
            AmbientSound::Ambient => "🎵",
        }
    }

    pub fn all() -> Vec<AmbientSound> {
        AmbientSound::iter().collect()
    }

    fn position(self) -> usize {
        AmbientSound::iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let all = AmbientSound::all();
        all[(self.position() + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all = AmbientSound::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

/// Clamps a volume into 0..=100 and snaps it to the nearest step
pub fn snap_volume(value: i32) -> u8 {
    let clamped = value.clamp(0, i32::from(MAX_VOLUME));
    let step = i32::from(VOLUME_STEP);
    let snapped = ((clamped + step / 2) / step) * step;
    snapped.min(i32::from(MAX_VOLUME)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(-10, 0)]
    #[case(0, 0)]
    #[case(2, 0)]
    #[case(3, 5)]
    #[case(47, 45)]
    #[case(48, 50)]
    #[case(100, 100)]
    #[case(140, 100)]
    fn test_snap_volume(#[case] input: i32, #[case] expected: u8) {
        assert_eq!(snap_volume(input), expected);
    }

    #[test]
    fn test_sound_cycle() {
        assert_eq!(AmbientSound::Fireplace.next(), AmbientSound::Rain);
        assert_eq!(AmbientSound::Ambient.next(), AmbientSound::Fireplace);
        assert_eq!(AmbientSound::Fireplace.previous(), AmbientSound::Ambient);
    }

    #[test]
    fn test_catalog_order_and_labels() {
        let labels: Vec<&str> = AmbientSound::all().into_iter().map(AmbientSound::label).collect();
        assert_eq!(labels, vec!["Fireplace", "Rain", "Café Jazz", "Ambient"]);
    }
}
