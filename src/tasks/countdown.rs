//! Countdown background task

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{clock::ClockSource, feed::TargetInstant, state::CountdownState, utils::lock};

#[derive(Debug)]
struct HandleInner {
    /// Held for the duration of every tick callback
    active: Mutex<bool>,
    task: Mutex<Option<JoinHandle<()>>>,
}

/// Caller-owned handle to one running countdown.
///
/// Clones refer to the same countdown. The tick callback must not cancel its
/// own handle.
#[derive(Debug, Clone)]
pub struct CountdownHandle {
    inner: Arc<HandleInner>,
}

impl CountdownHandle {
    /// Stop sampling and release the timer task.
    ///
    /// Once this returns no further tick callback runs. Safe to call repeatedly
    /// and after expiry.
    pub fn cancel(&self) {
        let was_active = std::mem::replace(&mut *lock(&self.inner.active), false);

        if let Some(task) = lock(&self.inner.task).take() {
            task.abort();
        }

        if was_active {
            debug!("Countdown cancelled");
        }
    }

    /// True once the countdown expired or was cancelled
    pub fn is_finished(&self) -> bool {
        !*lock(&self.inner.active)
    }
}

/// Samples a clock at a fixed period and reports the remaining time
pub struct CountdownEngine {
    clock: Arc<dyn ClockSource>,
    period: Duration,
    current: Mutex<Option<CountdownHandle>>,
}

impl CountdownEngine {
    pub fn new(clock: Arc<dyn ClockSource>, period: Duration) -> Self {
        Self {
            clock,
            period,
            current: Mutex::new(None),
        }
    }

    /// Engine ticking once per second
    pub fn with_clock(clock: Arc<dyn ClockSource>) -> Self {
        Self::new(clock, Duration::from_secs(1))
    }

    /// Start counting down to `target`, calling `on_tick` every period.
    ///
    /// An unset target is a no-op returning `None`. Any countdown previously
    /// started by this engine is cancelled first. Must be called from within a
    /// tokio runtime.
    pub fn start<F>(&self, target: TargetInstant, on_tick: F) -> Option<CountdownHandle>
    where
        F: FnMut(CountdownState) + Send + 'static,
    {
        let Some(target) = target.instant() else {
            debug!("Countdown target not set, not starting");
            return None;
        };

        self.cancel();

        let handle = CountdownHandle {
            inner: Arc::new(HandleInner {
                active: Mutex::new(true),
                task: Mutex::new(None),
            }),
        };

        info!("Starting countdown to {}", target.to_rfc3339());
        let task = tokio::spawn(countdown_task(
            Arc::clone(&self.clock),
            self.period,
            target,
            Arc::clone(&handle.inner),
            on_tick,
        ));
        *lock(&handle.inner.task) = Some(task);
        *lock(&self.current) = Some(handle.clone());

        Some(handle)
    }

    /// Cancel the most recently started countdown, if any
    pub fn cancel(&self) {
        if let Some(handle) = lock(&self.current).take() {
            handle.cancel();
        }
    }
}

impl Drop for CountdownEngine {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn countdown_task<F>(
    clock: Arc<dyn ClockSource>,
    period: Duration,
    target: chrono::DateTime<chrono::Utc>,
    inner: Arc<HandleInner>,
    mut on_tick: F,
) where
    F: FnMut(CountdownState) + Send + 'static,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let state = CountdownState::between(target, clock.now());
        let keep_going = {
            let mut active = lock(&inner.active);
            if !*active {
                false
            } else {
                on_tick(state);
                if state.is_expired() {
                    *active = false;
                    info!("Countdown reached target, results are out");
                    false
                } else {
                    true
                }
            }
        };

        if !keep_going {
            break;
        }
    }
}
