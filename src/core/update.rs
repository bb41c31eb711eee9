use crate::{
    core::cmd::Cmd,
    core::msg::{environment::EnvironmentMsg, system::SystemMsg, timer::TimerMsg, Msg},
    core::state::{AppState, PresenceState},
    domain::session::SessionPhase,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Timer messages (delegated to TimerState, status reported back to the root)
        Msg::Timer(timer_msg) => {
            let phase_before = state.timer.phase();
            let mut commands = state.timer.update(timer_msg);
            state.report_status(state.timer.status());

            if state.timer.phase() != phase_before {
                let note = match state.timer.phase() {
                    SessionPhase::Break => "Focus session complete, time for a break",
                    SessionPhase::Focus => "Break is over, ready to focus again",
                };
                commands.extend(
                    state
                        .system
                        .update(SystemMsg::UpdateStatusMessage(note.to_string())),
                );
            } else if matches!(timer_msg, TimerMsg::Start | TimerMsg::Toggle | TimerMsg::Reset) {
                commands.extend(state.system.update(SystemMsg::ClearStatusMessage));
            }
            (state, commands)
        }

        // Environment messages (owned by the root)
        Msg::Environment(env_msg) => {
            let target = match env_msg {
                EnvironmentMsg::Select(environment) => environment,
                EnvironmentMsg::Toggle => state.environment.toggled(),
            };
            let commands = state.select_environment(target);
            (state, commands)
        }

        // Avatar picker (the selected avatar is owned by the root)
        Msg::Presence(presence_msg) => {
            state.avatar = PresenceState::pick_avatar(state.avatar, presence_msg);
            (state, vec![])
        }

        // Ambient messages (delegated to AmbientState)
        Msg::Ambient(ambient_msg) => {
            let commands = state.ambient.update(ambient_msg);
            (state, commands)
        }

        // Overlay messages (delegated to OverlayState)
        Msg::Overlay(overlay_msg) => {
            let commands = state.overlay.update(overlay_msg);
            (state, commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            cmd::TimerId,
            msg::{ambient::AmbientMsg, overlay::OverlayMsg, presence::PresenceMsg},
            state::TimerState,
        },
        domain::{environment::Environment, presence::Avatar, presence::UserStatus},
        infrastructure::config::Config,
    };
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn create_test_state() -> AppState {
        AppState::new_with_rng(Config::default(), StdRng::seed_from_u64(9))
    }

    #[test]
    fn test_update_quit() {
        let state = create_test_state();
        let (new_state, cmds) = update(Msg::System(SystemMsg::Quit), state);

        assert!(new_state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_timer_start_reports_focused() {
        let state = create_test_state();
        let (new_state, cmds) = update(Msg::Timer(TimerMsg::Start), state);

        assert_eq!(new_state.user_status, UserStatus::Focused);
        assert_eq!(
            cmds,
            vec![Cmd::StartInterval {
                id: TimerId::FocusTick,
                period_ms: 1000,
                generation: 1,
            }]
        );
        assert_eq!(new_state.roster()[0].status, UserStatus::Focused);
    }

    #[test]
    fn test_timer_pause_reports_idle() {
        let state = create_test_state();
        let (state, _) = update(Msg::Timer(TimerMsg::Start), state);
        let (state, cmds) = update(Msg::Timer(TimerMsg::Pause), state);

        assert_eq!(state.user_status, UserStatus::Idle);
        assert_eq!(
            cmds,
            vec![Cmd::CancelTimer {
                id: TimerId::FocusTick
            }]
        );
    }

    #[test]
    fn test_phase_flip_reports_idle_and_posts_message() {
        let mut state = create_test_state();
        state.timer = TimerState::new(SessionPhase::Focus, 1, true);
        state.user_status = UserStatus::Focused;

        let generation = state.timer.generation();
        let (state, cmds) = update(Msg::Timer(TimerMsg::Tick(generation)), state);

        assert_eq!(state.timer.phase(), SessionPhase::Break);
        assert_eq!(state.user_status, UserStatus::Idle);
        assert!(state.system.status_message.is_some());
        assert!(cmds.contains(&Cmd::CancelTimer {
            id: TimerId::FocusTick
        }));
    }

    #[test]
    fn test_break_running_reports_break() {
        let mut state = create_test_state();
        state.timer = TimerState::new(SessionPhase::Break, 300, false);

        let (state, _) = update(Msg::Timer(TimerMsg::Toggle), state);
        assert_eq!(state.user_status, UserStatus::Break);
    }

    #[test]
    fn test_environment_toggle_applies_theme() {
        let state = create_test_state();
        let (state, cmds) = update(Msg::Environment(EnvironmentMsg::Toggle), state);

        assert_eq!(state.environment, Environment::Cafe);
        assert_eq!(cmds, vec![Cmd::ApplyTheme(Environment::Cafe)]);

        let (state, cmds) = update(
            Msg::Environment(EnvironmentMsg::Select(Environment::Cafe)),
            state,
        );
        assert_eq!(state.environment, Environment::Cafe);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_avatar_selection_owned_by_root() {
        let state = create_test_state();
        let (state, cmds) = update(Msg::Presence(PresenceMsg::NextAvatar), state);

        assert_eq!(state.avatar, Avatar::Cat);
        assert_eq!(state.roster()[0].avatar, Avatar::Cat);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_ambient_and_overlay_delegation() {
        let state = create_test_state();
        let (state, _) = update(Msg::Ambient(AmbientMsg::VolumeUp), state);
        assert_eq!(state.ambient.volume, 75);

        let (state, _) = update(Msg::Overlay(OverlayMsg::SetCount(30)), state);
        assert_eq!(state.overlay.particles().len(), 30);
    }
}
