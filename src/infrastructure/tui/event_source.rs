use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui;

pub enum EventSource {
    Real(Arc<Mutex<dyn tui::TuiLike + Send>>),
    Test(VecDeque<tui::Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = tui::Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    /// Next terminal event, or None once the source is exhausted or closed
    pub async fn next(&mut self) -> Option<tui::Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_event_source_drains_in_order() {
        let mut source = EventSource::test(vec![tui::Event::Tick, tui::Event::Resize(80, 24)]);

        assert_eq!(source.next().await, Some(tui::Event::Tick));
        assert_eq!(source.next().await, Some(tui::Event::Resize(80, 24)));
        assert_eq!(source.next().await, None);
    }
}
