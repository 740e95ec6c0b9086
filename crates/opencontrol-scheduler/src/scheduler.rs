//! Interval scheduler with a dedicated timer thread.
//!
//! The control surface talks to the timer thread over a bounded command
//! channel. Each arming carries a generation number; reconfiguring or
//! stopping bumps the shared generation, so a firing that observes a stale
//! generation is a no-op. Rescheduling happens before callback dispatch,
//! which keeps period timing independent of callback duration at the cost
//! of permitting overlapping callback executions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam::channel::{Receiver, RecvTimeoutError, Sender, bounded};
use tracing::warn;

use crate::error::{SchedulerError, SchedulerResult};

/// Callback invoked on each scheduler firing.
pub type Callback = Arc<dyn Fn() + Send + Sync + 'static>;

enum Command {
    Arm {
        generation: u64,
        interval: Duration,
        callback: Callback,
    },
    Cancel,
    Shutdown,
}

struct ArmedTask {
    deadline: Instant,
    generation: u64,
    interval: Duration,
    callback: Callback,
}

/// Periodic, reconfigurable invocation of a callback on a background
/// timer thread.
///
/// The scheduler is either idle or running. [`IntervalScheduler::start`]
/// arms the first firing; on each firing the timer thread re-arms the next
/// period first and then dispatches the callback on its own short-lived
/// thread. Reconfiguration and [`IntervalScheduler::stop`] cancel the
/// pending firing but are not atomic with one already dispatched: the old
/// callback can run at most once more after the call returns.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use std::time::Duration;
/// use opencontrol_scheduler::IntervalScheduler;
///
/// let ticks = Arc::new(AtomicU64::new(0));
/// let counter = Arc::clone(&ticks);
/// let mut scheduler = IntervalScheduler::new(Duration::from_millis(50), move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// })?;
///
/// scheduler.start()?;
/// std::thread::sleep(Duration::from_millis(500));
/// scheduler.stop()?;
/// assert!(ticks.load(Ordering::SeqCst) > 0);
/// # Ok::<(), opencontrol_scheduler::SchedulerError>(())
/// ```
pub struct IntervalScheduler {
    interval: Duration,
    callback: Callback,
    running: Arc<AtomicBool>,
    fire_count: Arc<AtomicU64>,
    generation: Arc<AtomicU64>,
    command_tx: Sender<Command>,
    timer_thread: Option<JoinHandle<()>>,
}

impl IntervalScheduler {
    /// Create an idle scheduler and spawn its timer thread.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidConfiguration`] for a zero
    /// interval, or [`SchedulerError::SpawnFailed`] if the timer thread
    /// cannot be created.
    pub fn new(
        interval: Duration,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> SchedulerResult<Self> {
        Self::with_arc(interval, Arc::new(callback))
    }

    /// Create an idle scheduler from an already shared callback.
    ///
    /// # Errors
    ///
    /// Same conditions as [`IntervalScheduler::new`].
    pub fn with_arc(interval: Duration, callback: Callback) -> SchedulerResult<Self> {
        validate_interval(interval)?;

        let (command_tx, command_rx) = bounded(16);
        let fire_count = Arc::new(AtomicU64::new(0));
        let generation = Arc::new(AtomicU64::new(0));

        let timer = TimerThread {
            command_rx,
            fire_count: Arc::clone(&fire_count),
            generation: Arc::clone(&generation),
        };
        let timer_thread = thread::Builder::new()
            .name("opencontrol-timer".into())
            .spawn(move || timer.run())
            .map_err(|err| SchedulerError::SpawnFailed(err.to_string()))?;

        Ok(Self {
            interval,
            callback,
            running: Arc::new(AtomicBool::new(false)),
            fire_count,
            generation,
            command_tx,
            timer_thread: Some(timer_thread),
        })
    }

    /// Arm the first firing one interval from now.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::AlreadyRunning`] if the scheduler is
    /// running, or [`SchedulerError::TimerUnavailable`] if the timer
    /// thread has exited.
    pub fn start(&mut self) -> SchedulerResult<()> {
        if self.running.swap(true, Ordering::AcqRel) {
            return Err(SchedulerError::AlreadyRunning);
        }
        self.arm().inspect_err(|_| {
            self.running.store(false, Ordering::Release);
        })
    }

    /// Replace the interval.
    ///
    /// The pending firing is cancelled; when running, a fresh period
    /// starts from zero at the time of this call. Elapsed time from the
    /// previous period is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidConfiguration`] for a zero
    /// interval, or [`SchedulerError::TimerUnavailable`] if the timer
    /// thread has exited.
    pub fn change_interval(&mut self, interval: Duration) -> SchedulerResult<()> {
        validate_interval(interval)?;
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.interval = interval;
        if self.is_running() { self.arm() } else { Ok(()) }
    }

    /// Replace the callback, with the same period-reset semantics as
    /// [`IntervalScheduler::change_interval`].
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::TimerUnavailable`] if the timer thread
    /// has exited.
    pub fn change_callback(
        &mut self,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> SchedulerResult<()> {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.callback = Arc::new(callback);
        if self.is_running() { self.arm() } else { Ok(()) }
    }

    /// Cancel the pending firing, return to idle, and zero the fire count.
    ///
    /// Cancellation is best-effort: a firing already dispatched when this
    /// call bumps the generation may invoke the old callback once more.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::TimerUnavailable`] if the timer thread
    /// has exited.
    pub fn stop(&mut self) -> SchedulerResult<()> {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.running.store(false, Ordering::Release);
        self.fire_count.store(0, Ordering::Release);
        self.command_tx
            .send(Command::Cancel)
            .map_err(|_| SchedulerError::TimerUnavailable)
    }

    /// Whether a firing is currently scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Number of firings since the last start or stop.
    #[must_use]
    pub fn fire_count(&self) -> u64 {
        self.fire_count.load(Ordering::Acquire)
    }

    /// Configured interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn arm(&self) -> SchedulerResult<()> {
        self.command_tx
            .send(Command::Arm {
                generation: self.generation.load(Ordering::Acquire),
                interval: self.interval,
                callback: Arc::clone(&self.callback),
            })
            .map_err(|_| SchedulerError::TimerUnavailable)
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        let _ = self.command_tx.send(Command::Shutdown);
        if let Some(handle) = self.timer_thread.take() {
            let _ = handle.join();
        }
    }
}

impl std::fmt::Debug for IntervalScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalScheduler")
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .field("fire_count", &self.fire_count())
            .finish()
    }
}

struct TimerThread {
    command_rx: Receiver<Command>,
    fire_count: Arc<AtomicU64>,
    generation: Arc<AtomicU64>,
}

impl TimerThread {
    fn run(self) {
        let mut armed: Option<ArmedTask> = None;
        loop {
            let command = match armed.as_ref().map(|task| task.deadline) {
                Some(deadline) => {
                    let timeout = deadline.saturating_duration_since(Instant::now());
                    match self.command_rx.recv_timeout(timeout) {
                        Ok(command) => command,
                        Err(RecvTimeoutError::Timeout) => {
                            armed = armed.take().and_then(|task| self.fire(task));
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => return,
                    }
                }
                None => match self.command_rx.recv() {
                    Ok(command) => command,
                    Err(_) => return,
                },
            };
            match command {
                Command::Arm {
                    generation,
                    interval,
                    callback,
                } => {
                    armed = Some(ArmedTask {
                        deadline: Instant::now() + interval,
                        generation,
                        interval,
                        callback,
                    });
                }
                Command::Cancel => armed = None,
                Command::Shutdown => return,
            }
        }
    }

    /// Fire an elapsed task: re-arm the next period, then dispatch the
    /// callback. A task whose generation no longer matches is discarded
    /// without firing.
    fn fire(&self, task: ArmedTask) -> Option<ArmedTask> {
        if task.generation != self.generation.load(Ordering::Acquire) {
            return None;
        }

        let next = ArmedTask {
            deadline: Instant::now() + task.interval,
            generation: task.generation,
            interval: task.interval,
            callback: Arc::clone(&task.callback),
        };

        let callback = task.callback;
        let dispatched = thread::Builder::new()
            .name("opencontrol-fire".into())
            .spawn(move || callback());
        match dispatched {
            Ok(_) => {
                self.fire_count.fetch_add(1, Ordering::AcqRel);
            }
            Err(err) => warn!("failed to dispatch interval callback: {err}"),
        }

        Some(next)
    }
}

fn validate_interval(interval: Duration) -> SchedulerResult<()> {
    if interval.is_zero() {
        return Err(SchedulerError::invalid_configuration(
            "interval must be greater than zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_rejected() {
        let result = IntervalScheduler::new(Duration::ZERO, || {});
        assert!(matches!(
            result,
            Err(SchedulerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_change_to_zero_interval_rejected() {
        let mut scheduler =
            IntervalScheduler::new(Duration::from_millis(10), || {}).expect("valid scheduler");
        assert!(scheduler.change_interval(Duration::ZERO).is_err());
        assert_eq!(scheduler.interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_starts_idle() {
        let scheduler =
            IntervalScheduler::new(Duration::from_millis(10), || {}).expect("valid scheduler");
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.fire_count(), 0);
    }

    #[test]
    fn test_double_start_rejected() {
        let mut scheduler =
            IntervalScheduler::new(Duration::from_secs(60), || {}).expect("valid scheduler");
        scheduler.start().expect("first start");
        assert_eq!(scheduler.start(), Err(SchedulerError::AlreadyRunning));
        scheduler.stop().expect("stop");
        assert!(!scheduler.is_running());
        scheduler.start().expect("restart after stop");
    }

    #[test]
    fn test_reconfigure_while_idle_keeps_idle() {
        let mut scheduler =
            IntervalScheduler::new(Duration::from_millis(10), || {}).expect("valid scheduler");
        scheduler
            .change_interval(Duration::from_millis(25))
            .expect("change interval");
        scheduler.change_callback(|| {}).expect("change callback");
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.interval(), Duration::from_millis(25));
    }
}
