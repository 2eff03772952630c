use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::session_host::SessionHost;

enum Wake {
    Tick,
    Toggled,
    Closed,
}

/// Countdown collaborator: ticks the session once per interval while the
/// session has the timer running.
pub struct TimerTask {
    host: SessionHost,
    running: watch::Receiver<bool>,
    interval: Duration,
}

impl TimerTask {
    pub fn new(host: SessionHost, running: watch::Receiver<bool>, interval: Duration) -> Self {
        Self {
            host,
            running,
            interval,
        }
    }

    pub async fn run(mut self) {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            while !*self.running.borrow_and_update() {
                if self.running.changed().await.is_err() {
                    return;
                }
            }
            interval.reset();

            loop {
                let wake = tokio::select! {
                    _ = interval.tick() => Wake::Tick,
                    changed = self.running.changed() => {
                        if changed.is_ok() { Wake::Toggled } else { Wake::Closed }
                    }
                };

                match wake {
                    Wake::Tick => self.host.tick().await,
                    Wake::Toggled => {
                        if !*self.running.borrow_and_update() {
                            break;
                        }
                    }
                    Wake::Closed => return,
                }
            }
        }
    }
}
