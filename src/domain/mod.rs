//! Domain layer: core records, in-memory stores, and the event system.
//!
//! This module contains the market data model (tokens, pump rooms,
//! holdings, advisory records), the stores that own them for the lifetime
//! of the process, the perturbation step and clock that drive simulated
//! updates, and the event bus that broadcasts every mutation.

pub mod clock;
pub mod event_bus;
pub mod ids;
pub mod insight;
pub mod market_event;
pub mod perturbation;
pub mod portfolio;
pub mod pump_room;
pub mod room_registry;
pub mod token;
pub mod token_store;
pub mod user;

pub use clock::{Clock, ManualClock, SystemClock};
pub use event_bus::EventBus;
pub use ids::{RoomId, TokenId};
pub use insight::{
    AiInsight, AiTradingSignal, Confidence, InsightType, Sentiment, SignalType, TradingPair,
    TrendingToken,
};
pub use market_event::{EventTopic, MarketEvent, TokenQuote};
pub use perturbation::Perturbation;
pub use portfolio::{Holding, PortfolioBook};
pub use pump_room::{PumpRoom, SocialLinks};
pub use room_registry::RoomRegistry;
pub use token::{Blockchain, Token, TokenMetadata};
pub use token_store::{TickReport, TokenStore};
pub use user::User;
