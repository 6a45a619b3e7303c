//! WebSocket layer: connection handling, message routing, subscriptions.
//!
//! The WebSocket endpoint at `/ws` streams price ticks and room events to
//! clients that subscribe to token or room IDs (or `"*"`), and answers
//! token lookups.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;
