//! Settlement backend for room actions.
//!
//! Every join, investment, and room creation is submitted to a
//! [`RoomBackend`] before the registry is mutated. The only implementation,
//! [`SimulatedBackend`], waits a fixed delay and always accepts; the
//! services still handle a rejection so a real backend can be dropped in.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{RoomId, TokenId};
use crate::error::MarketError;

/// A room action awaiting settlement.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomAction {
    /// Add the user to the room.
    Join {
        /// Target room.
        room_id: RoomId,
        /// Joining user.
        user_id: String,
    },
    /// Pledge `amount` USD to the room.
    Invest {
        /// Target room.
        room_id: RoomId,
        /// Investing user.
        user_id: String,
        /// Validated, positive amount.
        amount: f64,
    },
    /// Open a new room.
    Create {
        /// Identifier reserved for the new room.
        room_id: RoomId,
        /// Token the room will pump.
        token_id: TokenId,
        /// Creating user.
        user_id: String,
    },
}

impl RoomAction {
    /// Short action name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Invest { .. } => "invest",
            Self::Create { .. } => "create",
        }
    }
}

/// Accepts or rejects room actions.
#[async_trait]
pub trait RoomBackend: Send + Sync + Debug {
    /// Settles `action`.
    ///
    /// # Errors
    ///
    /// Returns a [`MarketError`] when the backend rejects the action.
    async fn submit(&self, action: &RoomAction) -> Result<(), MarketError>;
}

/// Per-action artificial delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionLatency {
    /// Delay before a join settles.
    pub join: Duration,
    /// Delay before an investment settles.
    pub invest: Duration,
    /// Delay before a room creation settles.
    pub create: Duration,
}

impl Default for ActionLatency {
    fn default() -> Self {
        Self {
            join: Duration::from_millis(1_000),
            invest: Duration::from_millis(2_000),
            create: Duration::from_millis(2_000),
        }
    }
}

/// Backend that sleeps for the configured latency and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedBackend {
    latency: ActionLatency,
}

impl SimulatedBackend {
    /// Creates a backend with the given delays.
    #[must_use]
    pub const fn new(latency: ActionLatency) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl RoomBackend for SimulatedBackend {
    async fn submit(&self, action: &RoomAction) -> Result<(), MarketError> {
        let delay = match action {
            RoomAction::Join { .. } => self.latency.join,
            RoomAction::Invest { .. } => self.latency.invest,
            RoomAction::Create { .. } => self.latency.create,
        };
        tracing::debug!(action = action.kind(), delay_ms = delay.as_millis(), "simulating settlement");
        tokio::time::sleep(delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn simulated_backend_waits_the_action_latency() {
        let backend = SimulatedBackend::default();
        let start = Instant::now();
        let action = RoomAction::Invest {
            room_id: RoomId::from("room-1"),
            user_id: "user-1".to_string(),
            amount: 100.0,
        };
        assert!(backend.submit(&action).await.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(2_000));
    }
}
