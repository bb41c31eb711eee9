use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::{
        scheduler::Scheduler,
        theme::{ThemeFlags, ThemeScope},
    },
};

/// Command executor that bridges Elm commands to the scheduler, the theming
/// boundary and the terminal host
pub struct CmdExecutor {
    scheduler: Scheduler,
    theme: ThemeScope,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new(scheduler: Scheduler, theme_flags: ThemeFlags) -> Self {
        Self {
            scheduler,
            theme: ThemeScope::new(theme_flags),
            tui_sender: None,
            render_req_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn theme_flags(&self) -> &ThemeFlags {
        self.theme.flags()
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::StartInterval {
                id,
                period_ms,
                generation,
            } => {
                self.scheduler
                    .start_interval(*id, Duration::from_millis(*period_ms), *generation);
            }

            Cmd::StartTimeout { id, delay_ms } => {
                self.scheduler
                    .schedule_once(*id, Duration::from_millis(*delay_ms));
            }

            Cmd::CancelTimer { id } => {
                self.scheduler.cancel(*id);
            }

            Cmd::ApplyTheme(environment) => {
                log::info!("Applying theme {environment}");
                self.theme.activate(*environment);
                self.request_render();
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::RequestRender => self.request_render(),

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }

            Cmd::Batch(commands) => {
                self.execute_commands(commands)?;
            }
        }

        Ok(())
    }

    /// Execute commands in order. Order matters: a cancel followed by a start
    /// must not be swapped.
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Result<()> {
        for cmd in commands {
            self.execute_command(cmd)?;
        }
        Ok(())
    }

    fn request_render(&self) {
        if let Some(tx) = &self.render_req_sender {
            // A closed receiver only means nobody is rendering anymore
            let _ = tx.send(());
        }
    }

    /// Cancels outstanding timers and releases the theme flag
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
        self.theme.release();
        log::info!("CmdExecutor: shut down");
    }
}
