use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        theme::ThemeFlags,
        tui::{self, event_source::EventSource, real::RealTui},
    },
    integration::{coalescer::Coalescer, elm_integration::ElmRuntime, renderer::Renderer},
};

/// Drives the Elm runtime from terminal events and renders the root view
///
/// The loop ends when the state asks to quit or the event source runs dry.
/// Either way every timer is cancelled, the theme flag is released and the
/// terminal is restored.
pub struct AppRunner {
    runtime: ElmRuntime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl AppRunner {
    /// Runner over the real terminal
    pub async fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = tui;
        let event_source = EventSource::real(Arc::clone(&tui));
        Ok(Self::new_with_state(
            AppState::new(config),
            tui,
            event_source,
            ThemeFlags::new(),
        ))
    }

    /// Runner over any terminal, reading events from `event_source`
    pub fn new_with_state(
        state: AppState,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
        theme_flags: ThemeFlags,
    ) -> Self {
        let mut runtime = ElmRuntime::new_with_theme_flags(state, theme_flags);
        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_req_tx);
        runtime.add_tui_sender(tui_cmd_tx);

        Self {
            runtime,
            tui,
            event_source,
            renderer: Renderer::new(),
            render_req_rx,
            tui_cmd_rx,
        }
    }

    pub fn runtime(&self) -> &ElmRuntime {
        &self.runtime
    }

    /// Run the main loop until quit, then tear everything down
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.runtime.init()?;
        self.render().await?;

        let result = self.run_loop().await;

        self.runtime.shutdown();
        self.tui.lock().await.exit()?;
        log::info!("AppRunner: exited");
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        loop {
            let mut saw_tui_render = false;

            tokio::select! {
                biased;
                event = self.event_source.next() => {
                    let Some(event) = event else {
                        log::info!("AppRunner: event source closed");
                        break;
                    };
                    saw_tui_render = self.handle_event(event);
                }
                Some(raw) = self.runtime.recv_raw() => {
                    self.runtime.send_raw_msg(raw);
                }
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("ElmRuntime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("ElmRuntime error: {e}")));
            }

            let resized = self.apply_tui_commands().await?;

            let mut queued_render_reqs = 0;
            while self.render_req_rx.try_recv().is_ok() {
                queued_render_reqs += 1;
            }
            if resized || Coalescer::decide_render(queued_render_reqs, saw_tui_render) {
                self.render().await?;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Forward a terminal event to the runtime. Returns true for a render tick.
    fn handle_event(&mut self, event: tui::Event) -> bool {
        match event {
            tui::Event::Render => return true,
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error(String::from("terminal event error"))),
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_)
            | tui::Event::Mouse(_) => {}
        }
        false
    }

    /// Execute queued terminal commands. Returns true when the terminal was resized.
    async fn apply_tui_commands(&mut self) -> Result<bool> {
        let mut resizes = Vec::new();
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => resizes.push((width, height)),
            }
        }
        match Coalescer::decide_resize(None, &resizes) {
            Some((width, height)) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("AppRunner: suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.run_update_cycle()?;
        self.render().await
    }

    async fn render(&mut self) -> Result<()> {
        let theme = self.runtime.current_theme();
        self.renderer
            .render(&self.tui, self.runtime.state(), theme)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::TestTui;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::{rngs::StdRng, SeedableRng};

    fn key(c: char) -> tui::Event {
        tui::Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn create_runner(
        events: Vec<tui::Event>,
    ) -> Result<(AppRunner, Arc<Mutex<TestTui>>, ThemeFlags)> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(100, 30)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = test_tui.clone();
        let flags = ThemeFlags::new();
        let state = AppState::new_with_rng(Config::default(), StdRng::seed_from_u64(7));
        let runner =
            AppRunner::new_with_state(state, tui, EventSource::test(events), flags.clone());
        Ok((runner, test_tui, flags))
    }

    #[tokio::test]
    async fn test_quit_key_stops_loop_and_tears_down() -> Result<()> {
        let (mut runner, _tui, flags) = create_runner(vec![key('x'), key(' '), key('q')])?;

        runner.run().await?;

        let state = runner.runtime().state();
        assert!(state.system.should_quit);
        assert!(!state.system.show_splash);
        assert!(state.timer.is_running());
        // torn down despite the running timer
        assert_eq!(runner.runtime().get_stats().active_timers, 0);
        assert!(flags.active().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_render_events_draw_frames() -> Result<()> {
        let (mut runner, test_tui, _flags) =
            create_runner(vec![tui::Event::Render, tui::Event::Render])?;

        runner.run().await?;

        // initial frame plus one per render event
        assert_eq!(test_tui.lock().await.draw_count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_resumes() -> Result<()> {
        let ctrl_z = tui::Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let (mut runner, test_tui, _flags) = create_runner(vec![ctrl_z])?;

        runner.run().await?;

        assert_eq!(test_tui.lock().await.suspend_count(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
        Ok(())
    }
}
