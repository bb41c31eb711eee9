use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::presentation::config::keybindings::Action;
use crate::{
    core::{
        cmd::TimerId,
        msg::{
            ambient::AmbientMsg, environment::EnvironmentMsg, overlay::OverlayMsg,
            presence::PresenceMsg, system::SystemMsg, timer::TimerMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{AppState, Panel},
    },
    domain::environment::Environment,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Scheduler firings
        RawMsg::TimerFired {
            id: TimerId::FocusTick,
            generation,
        } => vec![Msg::Timer(TimerMsg::Tick(generation))],
        RawMsg::TimerFired {
            id: TimerId::Splash,
            ..
        } => vec![Msg::System(SystemMsg::DismissSplash)],

        // Host notifications
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent terminal events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Any other key skips the splash screen
    if state.system.show_splash {
        return vec![Msg::System(SystemMsg::DismissSplash)];
    }

    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::ToggleTimer => vec![Msg::Timer(TimerMsg::Toggle)],
        Action::ResetTimer => vec![Msg::Timer(TimerMsg::Reset)],
        Action::ToggleEnvironment => vec![Msg::Environment(EnvironmentMsg::Toggle)],
        Action::SelectLibrary => vec![Msg::Environment(EnvironmentMsg::Select(
            Environment::Library,
        ))],
        Action::SelectCafe => vec![Msg::Environment(EnvironmentMsg::Select(Environment::Cafe))],
        Action::NextAvatar => vec![Msg::Presence(PresenceMsg::NextAvatar)],
        Action::PreviousAvatar => vec![Msg::Presence(PresenceMsg::PreviousAvatar)],
        Action::NextSound => vec![Msg::Ambient(AmbientMsg::NextSound)],
        Action::PreviousSound => vec![Msg::Ambient(AmbientMsg::PreviousSound)],
        Action::ToggleSound => vec![Msg::Ambient(AmbientMsg::SelectHighlighted)],
        Action::VolumeUp => vec![Msg::Ambient(AmbientMsg::VolumeUp)],
        Action::VolumeDown => vec![Msg::Ambient(AmbientMsg::VolumeDown)],
        Action::TogglePlay => vec![Msg::Ambient(AmbientMsg::TogglePlay)],
        Action::ToggleMute => vec![Msg::Ambient(AmbientMsg::ToggleMute)],
        Action::MoreParticles => vec![Msg::Overlay(OverlayMsg::IncreaseDensity)],
        Action::FewerParticles => vec![Msg::Overlay(OverlayMsg::DecreaseDensity)],
        Action::FocusNext => vec![Msg::System(SystemMsg::FocusNextPanel)],
        Action::FocusPrevious => vec![Msg::System(SystemMsg::FocusPreviousPanel)],
        Action::Next => translate_panel_next(state.system.focused_panel),
        Action::Previous => translate_panel_previous(state.system.focused_panel),
        Action::Increase => translate_panel_increase(state.system.focused_panel),
        Action::Decrease => translate_panel_decrease(state.system.focused_panel),
        Action::Activate => translate_panel_activate(state.system.focused_panel),
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

fn translate_panel_next(panel: Panel) -> Vec<Msg> {
    match panel {
        Panel::Timer => vec![],
        Panel::Presence => vec![Msg::Presence(PresenceMsg::NextAvatar)],
        Panel::Ambient => vec![Msg::Ambient(AmbientMsg::NextSound)],
    }
}

fn translate_panel_previous(panel: Panel) -> Vec<Msg> {
    match panel {
        Panel::Timer => vec![],
        Panel::Presence => vec![Msg::Presence(PresenceMsg::PreviousAvatar)],
        Panel::Ambient => vec![Msg::Ambient(AmbientMsg::PreviousSound)],
    }
}

fn translate_panel_increase(panel: Panel) -> Vec<Msg> {
    match panel {
        Panel::Ambient => vec![Msg::Ambient(AmbientMsg::VolumeUp)],
        Panel::Timer | Panel::Presence => vec![],
    }
}

fn translate_panel_decrease(panel: Panel) -> Vec<Msg> {
    match panel {
        Panel::Ambient => vec![Msg::Ambient(AmbientMsg::VolumeDown)],
        Panel::Timer | Panel::Presence => vec![],
    }
}

fn translate_panel_activate(panel: Panel) -> Vec<Msg> {
    match panel {
        Panel::Timer => vec![Msg::Timer(TimerMsg::Toggle)],
        Panel::Ambient => vec![Msg::Ambient(AmbientMsg::SelectHighlighted)],
        Panel::Presence => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::Config;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn create_test_state() -> AppState {
        let mut state = AppState::new_with_rng(Config::default(), StdRng::seed_from_u64(1));
        state.system.show_splash = false;
        state
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_timer_firings_translate() {
        let state = create_test_state();
        let tick = RawMsg::TimerFired {
            id: TimerId::FocusTick,
            generation: 4,
        };
        assert_eq!(
            translate_raw_to_domain(tick, &state),
            vec![Msg::Timer(TimerMsg::Tick(4))]
        );
        let splash = RawMsg::TimerFired {
            id: TimerId::Splash,
            generation: 0,
        };
        assert_eq!(
            translate_raw_to_domain(splash, &state),
            vec![Msg::System(SystemMsg::DismissSplash)]
        );
    }

    #[test]
    fn test_ctrl_c_quits_even_during_splash() {
        let mut state = create_test_state();
        state.system.show_splash = true;
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[test]
    fn test_any_key_skips_splash() {
        let mut state = create_test_state();
        state.system.show_splash = true;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('x')), &state),
            vec![Msg::System(SystemMsg::DismissSplash)]
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(key(KeyCode::F(12)), &state).is_empty());
    }

    #[test]
    fn test_panel_actions_depend_on_focus() {
        let mut state = create_test_state();
        assert_eq!(
            translate_action_to_msg(&Action::Activate, &state),
            vec![Msg::Timer(TimerMsg::Toggle)]
        );
        assert!(translate_action_to_msg(&Action::Next, &state).is_empty());

        state.system.focused_panel = Panel::Ambient;
        assert_eq!(
            translate_action_to_msg(&Action::Activate, &state),
            vec![Msg::Ambient(AmbientMsg::SelectHighlighted)]
        );
        assert_eq!(
            translate_action_to_msg(&Action::Increase, &state),
            vec![Msg::Ambient(AmbientMsg::VolumeUp)]
        );

        state.system.focused_panel = Panel::Presence;
        assert_eq!(
            translate_action_to_msg(&Action::Previous, &state),
            vec![Msg::Presence(PresenceMsg::PreviousAvatar)]
        );
    }

    #[test]
    fn test_tick_and_render_are_ignored() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }
}
