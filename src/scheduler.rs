//! The background ticker which keeps the second hand moving.
//!
//! The ticker never draws anything itself. All it can do is call
//! [`Invalidate::invalidate`] on its target, and it only holds a [`Weak`]
//! reference to that target. If the widget goes away without detaching,
//! the ticker just quietly ends on its next tick.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Weak,
    },
    time::Duration,
};

use tokio::{
    select,
    sync::Notify,
    task::{self, JoinHandle},
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

/// How often a redraw is requested.
pub const PERIOD: Duration = Duration::from_millis(1000);

/// The capability to request a redraw from whoever owns the surface.
pub trait Invalidate: Send + Sync + 'static {
    /// Asks for a redraw at the next opportunity.
    fn invalidate(&self);
}

/// A coalescing redraw flag, which the drawing side can wait on.
///
/// Any number of invalidations between two waits collapse into one.
#[derive(Debug, Default)]
pub struct Invalidator {
    /// Whether a redraw is pending.
    dirty: AtomicBool,

    /// Wakes up whoever is waiting in [`Invalidator::invalidated`].
    notify: Notify,
}

impl Invalidate for Invalidator {
    fn invalidate(&self) {
        self.dirty.store(true, Ordering::Release);
        self.notify.notify_one();
    }
}

impl Invalidator {
    /// Waits until a redraw has been requested, and consumes the request.
    pub async fn invalidated(&self) {
        loop {
            if self.take() {
                return;
            }

            self.notify.notified().await;
        }
    }

    /// Consumes a pending request, returning whether there was one.
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}

/// A running ticker.
#[derive(Debug)]
struct Ticker {
    /// The task itself.
    task: JoinHandle<()>,

    /// Stops the task at its next await point.
    token: CancellationToken,
}

/// Periodically invalidates a target while running.
///
/// It's either stopped, or running with exactly one ticker.
#[derive(Debug)]
pub struct Scheduler<T: Invalidate> {
    /// What to invalidate.
    target: Weak<T>,

    /// Time between invalidations.
    period: Duration,

    /// The ticker, which is [`None`] while stopped.
    ticker: Option<Ticker>,
}

impl<T: Invalidate> Drop for Scheduler<T> {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.token.cancel();
            ticker.task.abort();
        }
    }
}

impl<T: Invalidate> Scheduler<T> {
    /// Creates a stopped scheduler which ticks every [`PERIOD`].
    pub fn new(target: &Arc<T>) -> Self {
        Self::with_period(target, PERIOD)
    }

    /// Creates a stopped scheduler with a custom period.
    pub fn with_period(target: &Arc<T>, period: Duration) -> Self {
        Self {
            target: Arc::downgrade(target),
            period,
            ticker: None,
        }
    }

    /// Whether the scheduler has been started, and its ticker is still alive.
    pub fn running(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.task.is_finished())
    }

    /// Starts ticking. Does nothing if already started.
    ///
    /// This has to be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        let token = CancellationToken::new();
        let task = task::spawn(Self::tick(
            Weak::clone(&self.target),
            self.period,
            token.clone(),
        ));

        tracing::debug!(period = ?self.period, "scheduler started");
        self.ticker = Some(Ticker { task, token });
    }

    /// Stops ticking. Does nothing if already stopped.
    ///
    /// Once this returns, the ticker has fully finished, so there's
    /// no way for another invalidation to sneak through afterwards.
    pub async fn stop(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };

        ticker.token.cancel();
        match ticker.task.await {
            Ok(()) => (),
            Err(error) if error.is_cancelled() => (),
            Err(error) => tracing::warn!(%error, "scheduler task failed"),
        }

        tracing::debug!("scheduler stopped");
    }

    /// The body of the ticker.
    async fn tick(target: Weak<T>, period: Duration, token: CancellationToken) {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            select! {
                biased;
                () = token.cancelled() => break,
                _ = interval.tick() => (),
            }

            // The target is gone, which means there's nothing left to redraw.
            let Some(target) = target.upgrade() else {
                tracing::debug!("scheduler target dropped");
                break;
            };

            target.invalidate();
        }
    }
}
