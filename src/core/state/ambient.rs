use crate::{
    core::{cmd::Cmd, msg::ambient::AmbientMsg},
    domain::ambient::{snap_volume, AmbientSound, VOLUME_STEP},
};

pub const DEFAULT_VOLUME: u8 = 70;

/// Display state of the ambient sound panel
///
/// There is no audio engine behind any of this: play, mute and volume are
/// purely what the panel shows. `highlighted` is the keyboard cursor in the
/// sound list and is independent of the active sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientState {
    pub sound: Option<AmbientSound>,
    pub highlighted: AmbientSound,
    pub volume: u8,
    pub playing: bool,
    pub muted: bool,
}

impl Default for AmbientState {
    fn default() -> Self {
        Self {
            sound: None,
            highlighted: AmbientSound::default(),
            volume: DEFAULT_VOLUME,
            playing: false,
            muted: false,
        }
    }
}

impl AmbientState {
    /// Volume as displayed; a muted panel shows zero
    pub fn effective_volume(&self) -> u8 {
        if self.muted {
            0
        } else {
            self.volume
        }
    }

    /// Name of the active sound, if any
    pub fn now_playing(&self) -> Option<&'static str> {
        self.sound.map(AmbientSound::label)
    }

    /// Selecting the active sound stops it; any other sound replaces it and plays
    fn toggle_sound(&mut self, sound: AmbientSound) {
        self.highlighted = sound;
        if self.sound == Some(sound) {
            self.sound = None;
            self.playing = false;
        } else {
            self.sound = Some(sound);
            self.playing = true;
        }
    }

    pub fn update(&mut self, msg: AmbientMsg) -> Vec<Cmd> {
        match msg {
            AmbientMsg::SelectSound(sound) => self.toggle_sound(sound),
            AmbientMsg::SelectHighlighted => self.toggle_sound(self.highlighted),
            AmbientMsg::NextSound => self.highlighted = self.highlighted.next(),
            AmbientMsg::PreviousSound => self.highlighted = self.highlighted.previous(),
            AmbientMsg::SetVolume(volume) => self.volume = snap_volume(i32::from(volume)),
            AmbientMsg::VolumeUp => {
                self.volume = snap_volume(i32::from(self.volume) + i32::from(VOLUME_STEP))
            }
            AmbientMsg::VolumeDown => {
                self.volume = snap_volume(i32::from(self.volume) - i32::from(VOLUME_STEP))
            }
            AmbientMsg::TogglePlay => {
                if self.sound.is_some() {
                    self.playing = !self.playing;
                }
            }
            AmbientMsg::ToggleMute => self.muted = !self.muted,
        }
        vec![]
    }
}
