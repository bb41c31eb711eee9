use std::{sync::Arc, time::Instant};

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    domain::environment::Environment,
    infrastructure::tui,
    presentation::components::{Components, ViewContext},
};

/// Draws the root view. Owns the animation clock.
#[derive(Debug)]
pub struct Renderer {
    components: Components,
    started: Instant,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
            started: Instant::now(),
        }
    }

    /// Draw a frame with the palette of `theme`
    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
        theme: Environment,
    ) -> Result<()> {
        let ctx = ViewContext::new(state, theme, self.started.elapsed());
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            self.components.render(f, state, &ctx);
        };
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::Config, tui::test::TestTui};

    #[tokio::test]
    async fn test_renderer_renders_with_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(80, 24)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = test_tui.clone();
        let mut renderer = Renderer::new();
        let state = AppState::new(Config::default());

        renderer.render(&tui, &state, Environment::Cafe).await?;
        renderer.render(&tui, &state, Environment::Cafe).await?;

        assert_eq!(test_tui.lock().await.draw_count(), 2);
        Ok(())
    }
}
