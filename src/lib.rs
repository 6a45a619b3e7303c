//! # quantumx-market
//!
//! In-memory market view pipeline behind the QuantumX token launch and
//! social trading front end.
//!
//! The crate keeps token listings, pump rooms, and the signed-in user's
//! holdings in process memory, applies a bounded random walk to prices on
//! a fixed period, and serves filtered, aggregated, and formatted views of
//! that state over REST and WebSocket. Room actions (join, invest, create)
//! go through a simulated backend with settlement latency and publish
//! events to every subscribed client.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── MarketService / RoomService / PortfolioService (service/)
//!     ├── Ticker ──► MarketService::tick
//!     ├── EventBus (domain/)
//!     │
//!     ├── Filter / Aggregate / Format (view/)
//!     │
//!     └── TokenStore / RoomRegistry / PortfolioBook (domain/) ◄── seed
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod seed;
pub mod service;
pub mod view;
pub mod ws;
