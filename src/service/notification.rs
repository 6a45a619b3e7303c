//! User-visible outcome messages for room actions.
//!
//! Every action ends in exactly one transient notification. Validation and
//! sign-in problems get a specific message; anything else falls back to the
//! action's generic "try again" text.

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::MarketError;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    /// The action went through.
    Success,
    /// The action was rejected or failed.
    Error,
}

/// A transient message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Message text.
    pub message: String,
}

impl Notification {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// Outcome of joining a room.
    #[must_use]
    pub fn for_join<T>(result: &Result<T, MarketError>) -> Self {
        match result {
            Ok(_) => Self::success("Successfully joined the pump room! 🎉"),
            Err(MarketError::AuthenticationRequired) => {
                Self::error("Please connect your wallet to join rooms")
            }
            Err(_) => Self::error("Failed to join room. Please try again."),
        }
    }

    /// Outcome of investing `amount` in a room.
    #[must_use]
    pub fn for_investment<T>(amount: f64, result: &Result<T, MarketError>) -> Self {
        match result {
            Ok(_) => Self::success(format!("Successfully invested ${amount}! 🚀")),
            Err(MarketError::AuthenticationRequired) => {
                Self::error("Please connect your wallet to invest")
            }
            Err(MarketError::InvalidAmount(_)) => {
                Self::error("Please enter a valid investment amount")
            }
            Err(_) => Self::error("Investment failed. Please try again."),
        }
    }

    /// Outcome of creating a room.
    #[must_use]
    pub fn for_room_creation<T>(result: &Result<T, MarketError>) -> Self {
        match result {
            Ok(_) => Self::success("Pump room created successfully! 🎉"),
            Err(MarketError::AuthenticationRequired) => {
                Self::error("Please connect your wallet to create a room")
            }
            Err(MarketError::MissingField(_) | MarketError::InvalidAmount(_)) => {
                Self::error("Please fill in all required fields")
            }
            Err(_) => Self::error("Failed to create room. Please try again."),
        }
    }
}
