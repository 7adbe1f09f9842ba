//! Cancellable one-second countdown driving the click challenge.
//!
//! The owner keeps the returned [`CountdownHandle`] and must cancel (or drop)
//! it before spawning the next countdown, so that two timers never tick the
//! same round.

use futures::future::{abortable, AbortHandle};
use tracing::debug;

use crate::core::{platform, timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTick {
    pub run_id: u64,
    /// Ticks still to come after this one.
    pub remaining: u32,
}

#[derive(Debug)]
pub struct CountdownHandle {
    run_id: u64,
    abort: AbortHandle,
}

impl CountdownHandle {
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Call `on_tick` once per second, `ticks` times at most. Returning `false`
/// from the callback stops the countdown early.
pub fn spawn_countdown<F>(run_id: u64, ticks: u32, on_tick: F) -> CountdownHandle
where
    F: FnMut(CountdownTick) -> bool + Send + 'static,
{
    spawn_countdown_every(run_id, ticks, timing::SECOND_MS, on_tick)
}

pub fn spawn_countdown_every<F>(
    run_id: u64,
    ticks: u32,
    interval_ms: u64,
    on_tick: F,
) -> CountdownHandle
where
    F: FnMut(CountdownTick) -> bool + Send + 'static,
{
    let (task, abort) = abortable(run_countdown(run_id, ticks, interval_ms, on_tick));
    platform::spawn_future(async move {
        if task.await.is_err() {
            debug!(run_id, "countdown cancelled");
        }
    });
    CountdownHandle { run_id, abort }
}

async fn run_countdown<F>(run_id: u64, ticks: u32, interval_ms: u64, mut on_tick: F)
where
    F: FnMut(CountdownTick) -> bool,
{
    for elapsed in 1..=ticks {
        timing::sleep_ms(interval_ms).await;
        let tick = CountdownTick {
            run_id,
            remaining: ticks - elapsed,
        };
        if !on_tick(tick) {
            break;
        }
    }
}
