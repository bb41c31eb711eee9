use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::core::{cmd::TimerId, raw_msg::RawMsg};

struct ScheduledTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    fn is_live(&self) -> bool {
        !self.token.is_cancelled() && !self.handle.is_finished()
    }
}

/// Owns every interval and timeout of the application
///
/// Each scheduled task is keyed by [`TimerId`] and guarded by its own
/// cancellation token. Firings are delivered to the runtime as
/// [`RawMsg::TimerFired`], tagged with the generation the interval was
/// started for; one-shot timeouts always fire generation 0. A live id is
/// never scheduled twice, and dropping the scheduler cancels everything it
/// still owns.
pub struct Scheduler {
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    tasks: HashMap<TimerId, ScheduledTask>,
}

impl Scheduler {
    pub fn new(raw_msg_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_msg_tx,
            tasks: HashMap::new(),
        }
    }

    /// Whether a task for `id` is scheduled and has not finished or been cancelled
    pub fn is_active(&self, id: TimerId) -> bool {
        self.tasks.get(&id).is_some_and(ScheduledTask::is_live)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.values().filter(|t| t.is_live()).count()
    }

    fn prune(&mut self) {
        self.tasks.retain(|_, task| task.is_live());
    }

    /// Fires `id` every `period`, first after one full period.
    /// Returns false (and schedules nothing) when `id` is already live.
    pub fn start_interval(&mut self, id: TimerId, period: Duration, generation: u64) -> bool {
        self.prune();
        if self.is_active(id) {
            log::debug!("Scheduler: interval {id} already running, not scheduling again");
            return false;
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.raw_msg_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(RawMsg::TimerFired { id, generation }).is_err() {
                            // Runtime is gone
                            break;
                        }
                    }
                }
            }
        });

        log::debug!("Scheduler: started interval {id} (generation {generation}) every {period:?}");
        self.tasks.insert(id, ScheduledTask { token, handle });
        true
    }

    /// Fires `id` once after `delay`.
    /// Returns false (and schedules nothing) when `id` is already live.
    pub fn schedule_once(&mut self, id: TimerId, delay: Duration) -> bool {
        self.prune();
        if self.is_active(id) {
            log::debug!("Scheduler: timeout {id} already pending, not scheduling again");
            return false;
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.raw_msg_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = time::sleep(delay) => {
                    let _ = tx.send(RawMsg::TimerFired { id, generation: 0 });
                }
            }
        });

        log::debug!("Scheduler: scheduled timeout {id} in {delay:?}");
        self.tasks.insert(id, ScheduledTask { token, handle });
        true
    }

    /// Cancels `id`. Returns true when something was live.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.tasks.remove(&id) {
            Some(task) => {
                let was_live = task.is_live();
                task.token.cancel();
                log::debug!("Scheduler: cancelled {id}");
                was_live
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (id, task) in self.tasks.drain() {
            task.token.cancel();
            log::debug!("Scheduler: cancelled {id} on shutdown");
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
