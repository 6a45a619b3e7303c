//! Data Transfer Objects for REST request/response serialization.
//!
//! Numeric fields are sent raw alongside a `*_display` string produced by
//! [`crate::view::format`], so clients never reimplement the formatting
//! rules.

pub mod advisory_dto;
pub mod common_dto;
pub mod portfolio_dto;
pub mod room_dto;
pub mod token_dto;

pub use advisory_dto::*;
pub use common_dto::*;
pub use portfolio_dto::*;
pub use room_dto::*;
pub use token_dto::*;
