//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::MarketConfig;
use crate::domain::{Clock, EventBus, PortfolioBook, RoomRegistry, SystemClock, TokenStore};
use crate::error::MarketError;
use crate::seed::SeedData;
use crate::service::{
    Advisory, AuthSession, MarketService, PortfolioService, RoomService, SimulatedBackend,
};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Explorer queries and price ticks.
    pub market: Arc<MarketService>,
    /// Pump-room actions.
    pub rooms: Arc<RoomService>,
    /// Portfolio view.
    pub portfolio: Arc<PortfolioService>,
    /// Sign-in stub.
    pub auth: Arc<AuthSession>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}

impl AppState {
    /// Wires stores and services from seed data, using the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidRequest`] if the seed contains
    /// duplicate token or room IDs.
    pub fn from_seed(config: &MarketConfig, seed: SeedData) -> Result<Self, MarketError> {
        Self::with_clock(config, seed, Arc::new(SystemClock))
    }

    /// Like [`AppState::from_seed`] with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidRequest`] if the seed contains
    /// duplicate token or room IDs.
    pub fn with_clock(
        config: &MarketConfig,
        seed: SeedData,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, MarketError> {
        let tokens = Arc::new(TokenStore::from_seed(seed.tokens)?);
        let registry = Arc::new(RoomRegistry::from_seed(seed.rooms)?);
        let book = Arc::new(PortfolioBook::from_seed(seed.holdings));
        let event_bus = EventBus::new(config.event_bus_capacity);
        let auth = Arc::new(AuthSession::new(seed.demo_user));

        let advisory = Advisory {
            insights: seed.insights,
            signals: seed.signals,
            trending: seed.trending,
            pairs: seed.pairs,
        };
        let market = Arc::new(MarketService::new(
            Arc::clone(&tokens),
            advisory,
            event_bus.clone(),
            Arc::clone(&clock),
        ));
        let rooms = Arc::new(RoomService::new(
            registry,
            Arc::clone(&tokens),
            Arc::clone(&auth),
            Arc::new(SimulatedBackend::new(config.action_latency())),
            event_bus.clone(),
            clock,
        ));
        let portfolio = Arc::new(PortfolioService::new(
            book,
            tokens,
            Arc::clone(&auth),
            config.refresh_latency,
        ));

        Ok(Self {
            market,
            rooms,
            portfolio,
            auth,
            event_bus,
        })
    }
}
