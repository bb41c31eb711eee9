//! Declarative transitions consumed by the views.
//!
//! A [`Transition`] says "move from this visual state to that one over this
//! duration". Views sample it with the elapsed time; nothing in the timer or
//! the rest of the state machine knows about animation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in [0,1] onto the easing curve
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// The animatable properties of an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub opacity: f64,
    /// Vertical offset in percent of the container height (negative is up)
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

impl VisualState {
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Default::default()
        }
    }

    fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        VisualState {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: VisualState,
    pub to: VisualState,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
    /// Restart from `from` every time `duration` elapses
    pub repeat: bool,
}

impl Transition {
    pub fn new(from: VisualState, to: VisualState, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing: Easing::Linear,
            repeat: false,
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Linear progress in [0,1] at `elapsed`, before easing
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        let duration = self.duration.as_secs_f64();
        if duration <= f64::EPSILON {
            return 1.0;
        }
        let t = active.as_secs_f64() / duration;
        if self.repeat {
            t.fract()
        } else {
            t.min(1.0)
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        !self.repeat && elapsed >= self.delay + self.duration
    }

    /// Visual state at `elapsed`. Before the delay the element rests at `from`.
    pub fn sample(&self, elapsed: Duration) -> VisualState {
        let t = self.easing.apply(self.progress(elapsed));
        self.from.lerp(&self.to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn fade_in(secs: u64) -> Transition {
        Transition::new(
            VisualState::hidden(),
            VisualState::default(),
            Duration::from_secs(secs),
        )
    }

    #[rstest]
    #[case(Easing::Linear)]
    #[case(Easing::EaseIn)]
    #[case(Easing::EaseOut)]
    #[case(Easing::EaseInOut)]
    fn test_easing_endpoints(#[case] easing: Easing) {
        assert!((easing.apply(0.0) - 0.0).abs() < 1e-9);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-9);
        assert!((easing.apply(2.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_halfway() {
        let t = fade_in(2);
        let mid = t.sample(Duration::from_secs(1));
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert_eq!(t.sample(Duration::from_secs(5)), VisualState::default());
        assert!(t.is_finished(Duration::from_secs(2)));
    }

    #[test]
    fn test_delay_holds_initial_state() {
        let t = fade_in(2).delay(Duration::from_secs(3));
        assert_eq!(t.sample(Duration::from_secs(1)), VisualState::hidden());
        assert!(!t.is_finished(Duration::from_secs(4)));
    }

    #[test]
    fn test_repeating_wraps() {
        let t = fade_in(4).repeating();
        let a = t.progress(Duration::from_secs(1));
        let b = t.progress(Duration::from_secs(5));
        assert!((a - b).abs() < 1e-9);
        assert!(!t.is_finished(Duration::from_secs(100)));
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let t = fade_in(0);
        assert_eq!(t.sample(Duration::ZERO), VisualState::default());
    }
}
