use rand::{rngs::StdRng, SeedableRng};

pub mod ambient;
pub mod overlay;
pub mod presence;
pub mod system;
pub mod timer;

use crate::{
    core::{
        cmd::{Cmd, TimerId},
        msg::overlay::OverlayMsg,
    },
    domain::{
        environment::Environment,
        presence::{Avatar, MockPresenceEntry, UserStatus},
    },
    infrastructure::config::Config,
};

pub use ambient::AmbientState;
pub use overlay::OverlayState;
pub use presence::PresenceState;
pub use system::{Panel, SystemState};
pub use timer::TimerState;

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// Unified application state, owned by the root view
///
/// The root owns the selected environment, the reported user status and the
/// selected avatar. Everything else lives in a sub-state with its own update.
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Environment,
    pub user_status: UserStatus,
    pub avatar: Avatar,
    pub timer: TimerState,
    pub presence: PresenceState,
    pub ambient: AmbientState,
    pub overlay: OverlayState,
    pub system: SystemState,
    pub config: ConfigState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    /// Initialize AppState from configuration with an entropy-seeded particle generator
    pub fn new(config: Config) -> Self {
        Self::new_with_rng(config, StdRng::from_entropy())
    }

    /// Initialize AppState with an explicit random source for the particle overlay
    pub fn new_with_rng(config: Config, rng: StdRng) -> Self {
        let environment = config.environment;
        Self {
            environment,
            user_status: UserStatus::Idle,
            avatar: Avatar::default(),
            timer: TimerState::default(),
            presence: PresenceState::new(&config.display_name),
            ambient: AmbientState::default(),
            overlay: OverlayState::new(rng, config.particles.count_for(environment), environment),
            system: SystemState {
                show_splash: config.splash.enabled,
                ..Default::default()
            },
            config: ConfigState { config },
        }
    }

    /// Commands to run once when the root view is mounted
    pub fn init_commands(&self) -> Vec<Cmd> {
        let mut cmds = vec![Cmd::ApplyTheme(self.environment)];
        if self.system.show_splash {
            cmds.push(Cmd::StartTimeout {
                id: TimerId::Splash,
                delay_ms: self.config.config.splash.duration_ms,
            });
        }
        cmds
    }

    /// Switches the environment. Reselecting the active one does nothing.
    ///
    /// Each room has its own dust count, so a switch resets any density
    /// adjustment to the new room's configured count.
    pub fn select_environment(&mut self, environment: Environment) -> Vec<Cmd> {
        if environment == self.environment {
            return vec![];
        }
        self.environment = environment;
        let count = self.config.config.particles.count_for(environment);
        self.overlay.set_environment(environment);
        self.overlay.update(OverlayMsg::SetCount(count));
        vec![Cmd::ApplyTheme(environment)]
    }

    /// Records the status reported by the timer. Returns true when it changed.
    pub fn report_status(&mut self, status: UserStatus) -> bool {
        let changed = self.user_status != status;
        if changed {
            tracing::debug!(from = %self.user_status, to = %status, "user status changed");
        }
        self.user_status = status;
        changed
    }

    /// The roster with the local entry mirroring the root's status and avatar
    pub fn roster(&self) -> Vec<MockPresenceEntry> {
        self.presence.entries(self.user_status, self.avatar)
    }
}
