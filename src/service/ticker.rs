//! Background task driving the periodic price perturbation.
//!
//! ```text
//! ┌──────────────────────┐
//! │  Ticker task         │
//! │  (tokio::spawn)      │
//! │                      │
//! │  every period:       │
//! │  1. wait for tick    │
//! │  2. market.tick() ───┼──> TokenStore + EventBus
//! │  3. repeat           │
//! └──────────┬───────────┘
//!            │ oneshot shutdown / abort on drop
//!       TickerHandle
//! ```
//!
//! The first tick fires one full period after spawning. Missed ticks are
//! skipped rather than replayed in a burst.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::market_service::MarketService;

/// Default perturbation period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(5_000);

/// Handle to a running ticker. Dropping it cancels the task.
#[derive(Debug)]
pub struct TickerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Signals the task to stop and waits for it to exit.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "ticker task ended abnormally");
            }
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Spawns the ticker. `rng` is owned by the task; seed it for a
/// reproducible price path.
#[must_use]
pub fn spawn_ticker(market: Arc<MarketService>, period: Duration, mut rng: StdRng) -> TickerHandle {
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracing::info!(period_ms = period.as_millis(), "ticker started");

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    market.tick(&mut rng).await;
                }
                _ = &mut shutdown_rx => {
                    break;
                }
            }
        }

        tracing::info!("ticker stopped");
    });

    TickerHandle {
        shutdown: Some(shutdown_tx),
        task: Some(task),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::domain::{EventBus, SystemClock, TokenStore};
    use crate::seed;
    use crate::service::market_service::Advisory;

    fn make_market() -> Arc<MarketService> {
        let Ok(store) = TokenStore::from_seed(seed::load().tokens) else {
            panic!("valid seed");
        };
        Arc::new(MarketService::new(
            Arc::new(store),
            Advisory::default(),
            EventBus::new(16),
            Arc::new(SystemClock),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period_until_stopped() {
        let market = make_market();
        let handle = spawn_ticker(
            Arc::clone(&market),
            DEFAULT_TICK_INTERVAL,
            StdRng::seed_from_u64(7),
        );

        tokio::time::sleep(Duration::from_millis(4_000)).await;
        assert_eq!(market.store().ticks().await, 0);

        tokio::time::sleep(Duration::from_millis(8_000)).await;
        assert_eq!(market.store().ticks().await, 2);

        handle.stop().await;
        tokio::time::sleep(Duration::from_millis(30_000)).await;
        assert_eq!(market.store().ticks().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_the_task() {
        let market = make_market();
        let handle = spawn_ticker(
            Arc::clone(&market),
            DEFAULT_TICK_INTERVAL,
            StdRng::seed_from_u64(7),
        );
        drop(handle);

        tokio::time::sleep(Duration::from_millis(20_000)).await;
        assert_eq!(market.store().ticks().await, 0);
    }
}
