// ── Iftar countdown ──
//
// A scoped 1-second timer resource. Acquired when a target clock time is
// set (today's Maghrib), released deterministically: dropping the handle
// cancels the task, and the task stops itself once the target arrives.
// The remaining-time math is a pure function so tests never have to race
// the wall clock.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// What the countdown shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownDisplay {
    /// Time left until the target, broken into clock components.
    Counting { hours: i64, minutes: i64, seconds: i64 },
    /// The target has arrived (or had already passed when armed).
    Arrived,
}

impl fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counting {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours}h {minutes}m {seconds}s"),
            Self::Arrived => write!(f, "Iftar time!"),
        }
    }
}

/// Pure remaining-time computation against a same-day target.
pub fn remaining(target: NaiveTime, now: NaiveDateTime) -> CountdownDisplay {
    let target_at = now.date().and_time(target);
    let diff = target_at - now;
    if diff > chrono::Duration::zero() {
        CountdownDisplay::Counting {
            hours: diff.num_hours(),
            minutes: diff.num_minutes() % 60,
            seconds: diff.num_seconds() % 60,
        }
    } else {
        CountdownDisplay::Arrived
    }
}

/// Clock seam so the ticking task is testable without touching the wall
/// clock.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Handle to a running countdown. Dropping it tears the timer down.
pub struct Countdown {
    display: watch::Receiver<CountdownDisplay>,
    cancel: CancellationToken,
}

impl Countdown {
    /// Arm a countdown toward `target` using the local wall clock.
    ///
    /// Must be called within a Tokio runtime.
    pub fn start(target: NaiveTime) -> Self {
        Self::start_with_clock(target, Arc::new(|| Local::now().naive_local()))
    }

    /// Arm a countdown with an injected clock.
    pub fn start_with_clock(target: NaiveTime, clock: Clock) -> Self {
        let (tx, rx) = watch::channel(remaining(target, clock()));
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately; the initial value is
            // already published.
            ticker.tick().await;

            loop {
                tokio::select! {
                    biased;
                    () = task_cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        let next = remaining(target, clock());
                        let arrived = next == CountdownDisplay::Arrived;
                        let _ = tx.send(next);
                        if arrived {
                            debug!("countdown target reached, stopping ticker");
                            break;
                        }
                    }
                }
            }
        });

        Self {
            display: rx,
            cancel,
        }
    }

    /// Subscribe to display updates.
    pub fn subscribe(&self) -> watch::Receiver<CountdownDisplay> {
        self.display.clone()
    }

    /// The current display value.
    pub fn current(&self) -> CountdownDisplay {
        *self.display.borrow()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
