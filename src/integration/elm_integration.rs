use std::collections::VecDeque;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    domain::environment::Environment,
    infrastructure::{scheduler::Scheduler, theme::ThemeFlags},
};

/// Runtime for the Elm architecture: queues, translation, update and
/// command execution
///
/// Scheduler firings arrive on the same raw message channel that external
/// sources use, so a timer tick is just another `RawMsg`.
pub struct ElmRuntime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl ElmRuntime {
    /// Create a new ElmRuntime with its own theme flag set
    pub fn new(initial_state: AppState) -> Self {
        Self::new_with_theme_flags(initial_state, ThemeFlags::new())
    }

    /// Create a new ElmRuntime that applies themes to `theme_flags`
    pub fn new_with_theme_flags(initial_state: AppState, theme_flags: ThemeFlags) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(raw_msg_tx.clone());

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(scheduler, theme_flags),
        }
    }

    /// Mount the root view: apply the initial theme and arm the splash timeout
    pub fn init(&mut self) -> Result<()> {
        let commands = crate::trace_dbg!(level: tracing::Level::INFO, self.state.init_commands());
        self.cmd_queue.extend(commands);
        self.execute_pending_commands()
    }

    /// Add TUI command sender support (for TuiCommand execution)
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(&mut self, render_sender: mpsc::UnboundedSender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn theme_flags(&self) -> &ThemeFlags {
        self.cmd_executor.theme_flags()
    }

    /// The theme the renderer should draw with: the applied flag, or the
    /// state's environment before any theme has been applied
    pub fn current_theme(&self) -> Environment {
        self.theme_flags()
            .current()
            .unwrap_or(self.state.environment)
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands in the order they were produced
    pub fn execute_pending_commands(&mut self) -> Result<()> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(());
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("ElmRuntime: {msg:?}");
        }
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());

        commands
    }

    fn translate(&mut self, raw_msg: RawMsg) {
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
    }

    fn drain_msg_queue(&mut self, all_commands: &mut Vec<Cmd>) {
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }
    }

    /// Process all messages in queue
    ///
    /// Raw messages are handled one at a time, so each one is translated
    /// against the state its predecessors left behind. Firings already waiting
    /// on the channel landed before the event that started this cycle and go
    /// first.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();
        self.drain_msg_queue(&mut all_commands);

        let mut pending = VecDeque::new();
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            pending.push_back(raw_msg);
        }
        pending.append(&mut self.raw_msg_queue);

        while let Some(raw_msg) = pending.pop_front() {
            self.translate(raw_msg);
            self.drain_msg_queue(&mut all_commands);
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<()> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Wait for the next raw message from the scheduler or another sender
    pub async fn recv_raw(&mut self) -> Option<RawMsg> {
        self.raw_msg_rx.recv().await
    }

    /// Cancel every timer and release the applied theme
    pub fn shutdown(&mut self) {
        self.cmd_queue.clear();
        self.cmd_executor.shutdown();
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> ElmRuntimeStats {
        ElmRuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            active_timers: self.cmd_executor.scheduler().active_count(),
            applied_theme: self.theme_flags().current(),
            is_splash_shown: self.state.system.show_splash,
            is_timer_running: self.state.timer.is_running(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElmRuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub active_timers: usize,
    pub applied_theme: Option<Environment>,
    pub is_splash_shown: bool,
    pub is_timer_running: bool,
}
