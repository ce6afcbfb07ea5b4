//! Cancellable periodic tasks driving the simulators
//!
//! Each simulator runs inside its own task which owns it outright. Readers see
//! only the latest [`Published`] snapshot through a `watch` channel.
//!
//! Flow: spawn → first tick one period later → tick, publish → ... → stop.
//!
//! Once `stop` returns, nothing further is published, on any runtime flavor.
//! Publishing and stopping both take the handle's gate lock, so a step that
//! is mid-flight when `stop` runs is discarded instead of sent. The step itself
//! may still finish on another worker; only `join().await` waits for the task
//! to be gone.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::SimError;

/// Shortest period a ticker will run at. Zero would spin the timer.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A unit of simulated state advanced by a recurring timer.
pub trait Simulator: Send + 'static {
    /// Immutable view handed to readers after each step.
    type Snapshot: Clone + Send + Sync + 'static;

    fn name(&self) -> &'static str;

    fn period(&self) -> Duration;

    /// Advance the state by one step.
    fn tick(&mut self);

    fn snapshot(&self) -> Self::Snapshot;
}

/// A snapshot tagged with the number of ticks that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Published<T> {
    /// 0 for the initial (seed) state
    pub tick: u64,
    pub value: T,
}

/// Set once by `stop`; checked under the same lock before every publish.
#[derive(Debug, Default)]
struct Gate(Mutex<bool>);

impl Gate {
    fn lock(&self) -> MutexGuard<'_, bool> {
        // a poisoned gate still holds a meaningful flag
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owner of a running ticker task.
///
/// Dropping the handle stops and aborts the task.
#[derive(Debug)]
pub struct TickerHandle {
    name: &'static str,
    gate: Arc<Gate>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<u64>>,
}

impl TickerHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stop the ticker. Returns true only on the first call.
    ///
    /// No snapshot is published after this returns.
    pub fn stop(&mut self) -> bool {
        *self.gate.lock() = true;
        match self.shutdown.take() {
            Some(tx) => {
                // receiver gone means the task already exited
                let _ = tx.send(());
                true
            }
            None => false,
        }
    }

    /// Whether the task has been neither stopped nor finished.
    pub fn is_running(&self) -> bool {
        self.shutdown.is_some() && self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the task and wait for it, returning how many ticks it ran.
    pub async fn join(mut self) -> Result<u64, SimError> {
        self.stop();
        let name = self.name;
        match self.task.take() {
            Some(task) => task.await.map_err(|e| SimError::TickerFailed {
                name,
                reason: e.to_string(),
            }),
            None => Ok(0),
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Spawn `sim` on the current tokio runtime.
///
/// The receiver starts with the seed snapshot at tick 0.
///
/// # Panics
/// Panics when called outside a tokio runtime.
pub fn spawn<S: Simulator>(sim: S) -> (TickerHandle, watch::Receiver<Published<S::Snapshot>>) {
    let name = sim.name();
    let (tx, rx) = watch::channel(Published {
        tick: 0,
        value: sim.snapshot(),
    });
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let gate = Arc::new(Gate::default());

    let task = tokio::spawn(run(sim, tx, Arc::clone(&gate), shutdown_rx));

    let handle = TickerHandle {
        name,
        gate,
        shutdown: Some(shutdown_tx),
        task: Some(task),
    };
    (handle, rx)
}

async fn run<S: Simulator>(
    mut sim: S,
    tx: watch::Sender<Published<S::Snapshot>>,
    gate: Arc<Gate>,
    mut shutdown: oneshot::Receiver<()>,
) -> u64 {
    let name = sim.name();
    let period = sim.period().max(MIN_PERIOD);
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks: u64 = 0;

    info!(ticker = name, period_ms = period.as_millis() as u64, "ticker started");

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = interval.tick() => {
                sim.tick();
                let next = Published {
                    tick: ticks + 1,
                    value: sim.snapshot(),
                };
                let stopped = gate.lock();
                if *stopped {
                    debug!(ticker = name, tick = next.tick, "step discarded after stop");
                    break;
                }
                tx.send_replace(next);
                drop(stopped);
                ticks += 1;
                debug!(ticker = name, tick = ticks, "tick");
            }
        }
    }

    info!(ticker = name, ticks, "ticker stopped");
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        count: u32,
        period: Duration,
    }

    impl Simulator for Counter {
        type Snapshot = u32;

        fn name(&self) -> &'static str {
            "counter"
        }

        fn period(&self) -> Duration {
            self.period
        }

        fn tick(&mut self) {
            self.count += 1;
        }

        fn snapshot(&self) -> u32 {
            self.count
        }
    }

    fn counter(secs: u64) -> Counter {
        Counter {
            count: 0,
            period: Duration::from_secs(secs),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_snapshot_is_seed() {
        let (_handle, rx) = spawn(counter(5));
        assert_eq!(*rx.borrow(), Published { tick: 0, value: 0 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (_handle, rx) = spawn(counter(5));
        time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(rx.borrow().tick, 0);
        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.borrow().tick, 1);
        assert_eq!(rx.borrow().value, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let (mut handle, _rx) = spawn(counter(1));
        assert!(handle.is_running());
        assert!(handle.stop());
        assert!(!handle.stop());
        assert!(!handle.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_returns_tick_count() {
        let (handle, rx) = spawn(counter(2));
        time::sleep(Duration::from_secs(7)).await;
        assert_eq!(rx.borrow().tick, 3);
        assert_eq!(handle.join().await.unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_clamped() {
        let (handle, rx) = spawn(Counter {
            count: 0,
            period: Duration::ZERO,
        });
        time::sleep(Duration::from_millis(10)).await;
        assert!(handle.is_running());
        assert!(rx.borrow().tick >= 5);
        assert!(handle.join().await.unwrap() >= 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticking() {
        let (handle, rx) = spawn(counter(1));
        time::sleep(Duration::from_millis(2_500)).await;
        drop(handle);
        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(rx.borrow().tick, 2);
    }
}
