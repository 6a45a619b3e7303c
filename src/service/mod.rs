//! Service layer: business logic orchestration.
//!
//! [`MarketService`] owns the explorer and the price tick,
//! [`RoomService`] the pump-room actions, and [`PortfolioService`] the
//! portfolio view. All three emit events through the
//! [`super::domain::EventBus`] and consult the shared [`AuthSession`].

pub mod auth;
pub mod backend;
pub mod market_service;
pub mod notification;
pub mod portfolio_service;
pub mod room_service;
pub mod ticker;

pub use auth::AuthSession;
pub use backend::{ActionLatency, RoomAction, RoomBackend, SimulatedBackend};
pub use market_service::{Advisory, MarketService};
pub use notification::{Notification, NotificationLevel};
pub use portfolio_service::PortfolioService;
pub use room_service::{NewRoom, RoomService};
pub use ticker::{TickerHandle, spawn_ticker};
