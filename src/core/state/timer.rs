use crate::{
    core::{
        cmd::{Cmd, TimerId},
        msg::timer::TimerMsg,
    },
    domain::{
        presence::UserStatus,
        session::{format_clock, SessionPhase},
    },
};

/// Period of the interval that drives [`TimerMsg::Tick`]
pub const TICK_PERIOD_MS: u64 = 1000;

/// What a single tick did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running, or the tick came from an interval that
    /// has since been cancelled
    Ignored,
    Counted,
    /// The countdown hit zero and the timer switched to the given phase
    PhaseFlipped(SessionPhase),
}

/// Focus timer state machine
///
/// States are {Idle, Running} x {Focus, Break}. `seconds_remaining` never
/// exceeds the current phase's duration, and reaching zero always lands in the
/// idle state of the opposite phase with a full countdown.
///
/// Every start opens a new generation. The interval scheduled for it tags
/// its firings with that number, and ticks from any other generation are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    phase: SessionPhase,
    seconds_remaining: u32,
    running: bool,
    completed_focus_sessions: u32,
    generation: u64,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(SessionPhase::Focus, SessionPhase::Focus.duration_secs(), false)
    }
}

impl TimerState {
    /// Builds a timer at an arbitrary point of a phase, clamping the remaining time
    pub fn new(phase: SessionPhase, seconds_remaining: u32, running: bool) -> Self {
        Self {
            phase,
            seconds_remaining: seconds_remaining.min(phase.duration_secs()),
            running,
            completed_focus_sessions: 0,
            generation: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    /// Generation of the current (or most recent) run
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true when the timer was idle
    pub fn start(&mut self) -> bool {
        let was_idle = !self.running;
        if was_idle {
            self.generation = self.generation.wrapping_add(1);
        }
        self.running = true;
        was_idle
    }

    /// Returns true when the timer was running
    pub fn pause(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    pub fn reset(&mut self) {
        self.seconds_remaining = self.phase.duration_secs();
        self.running = false;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining > 0 {
            return TickOutcome::Counted;
        }

        if self.phase == SessionPhase::Focus {
            self.completed_focus_sessions += 1;
        }
        self.phase = self.phase.opposite();
        self.seconds_remaining = self.phase.duration_secs();
        self.running = false;
        TickOutcome::PhaseFlipped(self.phase)
    }

    /// The status reported to the root after every transition
    pub fn status(&self) -> UserStatus {
        match (self.running, self.phase) {
            (true, SessionPhase::Focus) => UserStatus::Focused,
            (true, SessionPhase::Break) => UserStatus::Break,
            (false, _) => UserStatus::Idle,
        }
    }

    /// Share of the current phase already elapsed, in [0, 100]
    pub fn progress_percent(&self) -> f64 {
        let duration = f64::from(self.phase.duration_secs());
        let elapsed = duration - f64::from(self.seconds_remaining);
        (elapsed / duration * 100.0).clamp(0.0, 100.0)
    }

    pub fn formatted(&self) -> String {
        format_clock(self.seconds_remaining)
    }

    /// Timer-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: TimerMsg) -> Vec<Cmd> {
        match msg {
            TimerMsg::Start => {
                if self.start() {
                    vec![start_interval(self.generation)]
                } else {
                    vec![]
                }
            }

            TimerMsg::Pause => {
                if self.pause() {
                    vec![cancel_interval()]
                } else {
                    vec![]
                }
            }

            TimerMsg::Toggle => {
                if self.running {
                    self.update(TimerMsg::Pause)
                } else {
                    self.update(TimerMsg::Start)
                }
            }

            TimerMsg::Reset => {
                let was_running = self.running;
                self.reset();
                if was_running {
                    vec![cancel_interval()]
                } else {
                    vec![]
                }
            }

            TimerMsg::Tick(generation) if generation != self.generation => {
                log::trace!(
                    "dropping tick from generation {generation}, current is {}",
                    self.generation
                );
                vec![]
            }

            TimerMsg::Tick(_) => match self.tick() {
                TickOutcome::PhaseFlipped(next) => vec![
                    cancel_interval(),
                    Cmd::LogInfo {
                        message: format!("phase finished, next up: {next}"),
                    },
                ],
                TickOutcome::Counted | TickOutcome::Ignored => vec![],
            },
        }
    }
}

fn start_interval(generation: u64) -> Cmd {
    Cmd::StartInterval {
        id: TimerId::FocusTick,
        period_ms: TICK_PERIOD_MS,
        generation,
    }
}

fn cancel_interval() -> Cmd {
    Cmd::CancelTimer {
        id: TimerId::FocusTick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timer_defaults_to_idle_focus() {
        let timer = TimerState::default();
        assert_eq!(timer.phase(), SessionPhase::Focus);
        assert_eq!(timer.seconds_remaining(), 1500);
        assert!(!timer.is_running());
        assert_eq!(timer.status(), UserStatus::Idle);
        assert_eq!(timer.progress_percent(), 0.0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timer = TimerState::default();

        let cmds = timer.update(TimerMsg::Start);
        assert_eq!(cmds, vec![start_interval(1)]);

        // A second start must not schedule a second interval
        let cmds = timer.update(TimerMsg::Start);
        assert!(cmds.is_empty());
        assert!(timer.is_running());
    }

    #[test]
    fn test_pause_cancels_interval_once() {
        let mut timer = TimerState::default();
        timer.update(TimerMsg::Start);

        assert_eq!(timer.update(TimerMsg::Pause), vec![cancel_interval()]);
        assert!(timer.update(TimerMsg::Pause).is_empty());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_toggle_flips_running() {
        let mut timer = TimerState::default();
        timer.update(TimerMsg::Toggle);
        assert!(timer.is_running());
        timer.update(TimerMsg::Toggle);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_while_idle_is_ignored() {
        let mut timer = TimerState::default();
        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.seconds_remaining(), 1500);
    }

    #[test]
    fn test_tick_counts_down_by_one() {
        let mut timer = TimerState::default();
        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Counted);
        assert_eq!(timer.seconds_remaining(), 1499);
        assert_eq!(timer.status(), UserStatus::Focused);
    }

    #[test]
    fn test_last_tick_flips_phase_and_stops() {
        let mut timer = TimerState::new(SessionPhase::Focus, 1, true);
        let cmds = timer.update(TimerMsg::Tick(timer.generation()));

        assert_eq!(timer.phase(), SessionPhase::Break);
        assert_eq!(timer.seconds_remaining(), 300);
        assert!(!timer.is_running());
        assert_eq!(timer.status(), UserStatus::Idle);
        assert_eq!(timer.completed_focus_sessions(), 1);
        assert_eq!(cmds[0], cancel_interval());
    }

    #[test]
    fn test_tick_from_previous_run_is_ignored() {
        let mut timer = TimerState::default();
        timer.update(TimerMsg::Start);
        let first_run = timer.generation();
        timer.update(TimerMsg::Pause);
        timer.update(TimerMsg::Start);

        // a firing from the cancelled interval lands after the restart
        assert!(timer.update(TimerMsg::Tick(first_run)).is_empty());
        assert_eq!(timer.seconds_remaining(), 1500);

        timer.update(TimerMsg::Tick(timer.generation()));
        assert_eq!(timer.seconds_remaining(), 1499);
    }

    #[test]
    fn test_each_start_opens_new_generation() {
        let mut timer = TimerState::default();
        timer.update(TimerMsg::Start);
        timer.update(TimerMsg::Start);
        assert_eq!(timer.generation(), 1);

        timer.update(TimerMsg::Pause);
        assert_eq!(timer.update(TimerMsg::Start), vec![start_interval(2)]);
    }

    #[test]
    fn test_break_flips_back_to_focus() {
        let mut timer = TimerState::new(SessionPhase::Break, 1, true);
        assert_eq!(timer.tick(), TickOutcome::PhaseFlipped(SessionPhase::Focus));
        assert_eq!(timer.seconds_remaining(), 1500);
        assert_eq!(timer.completed_focus_sessions(), 0);
    }

    #[test]
    fn test_reset_keeps_phase() {
        let mut timer = TimerState::new(SessionPhase::Break, 42, true);
        let cmds = timer.update(TimerMsg::Reset);

        assert_eq!(timer.phase(), SessionPhase::Break);
        assert_eq!(timer.seconds_remaining(), 300);
        assert!(!timer.is_running());
        assert_eq!(cmds, vec![cancel_interval()]);
    }

    #[test]
    fn test_reset_while_idle_emits_nothing() {
        let mut timer = TimerState::new(SessionPhase::Focus, 900, false);
        assert!(timer.update(TimerMsg::Reset).is_empty());
        assert_eq!(timer.seconds_remaining(), 1500);
    }

    #[test]
    fn test_new_clamps_remaining() {
        let timer = TimerState::new(SessionPhase::Break, 9999, false);
        assert_eq!(timer.seconds_remaining(), 300);
    }

    #[test]
    fn test_progress_and_formatting() {
        let timer = TimerState::new(SessionPhase::Focus, 750, true);
        assert!((timer.progress_percent() - 50.0).abs() < 1e-9);
        assert_eq!(timer.formatted(), "12:30");
    }
}
