//! Portfolio holdings and the per-user holding book.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::TokenId;

/// A user's recorded position in one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Holding identifier.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Token held. Resolved against the token store at valuation time.
    pub token_id: TokenId,
    /// Units held.
    pub balance: f64,
    /// Average cost per unit in USD.
    pub avg_buy_price: f64,
    /// Cost basis in USD.
    pub total_invested: f64,
    /// P&L on the open position.
    pub unrealized_pnl: f64,
    /// P&L already realized.
    pub realized_pnl: f64,
    /// Opening timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    /// Unrealized plus realized P&L.
    #[must_use]
    pub fn total_pnl(&self) -> f64 {
        self.unrealized_pnl + self.realized_pnl
    }

    /// P&L relative to the cost basis in percent; 0 when nothing was
    /// invested.
    #[must_use]
    pub fn pnl_percentage(&self) -> f64 {
        if self.total_invested > 0.0 {
            self.total_pnl() / self.total_invested * 100.0
        } else {
            0.0
        }
    }
}

/// Holdings of every known user, in insertion order per user.
#[derive(Debug, Default)]
pub struct PortfolioBook {
    holdings: RwLock<HashMap<String, Vec<Holding>>>,
}

impl PortfolioBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from seed holdings, grouping them by user.
    #[must_use]
    pub fn from_seed(seed: Vec<Holding>) -> Self {
        let mut map: HashMap<String, Vec<Holding>> = HashMap::new();
        for holding in seed {
            map.entry(holding.user_id.clone()).or_default().push(holding);
        }
        Self {
            holdings: RwLock::new(map),
        }
    }

    /// Returns a copy of the user's holdings; empty for unknown users.
    pub async fn holdings_of(&self, user_id: &str) -> Vec<Holding> {
        self.holdings
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Appends a holding to its user's list (test-only helper).
    #[cfg(test)]
    pub(crate) async fn insert(&self, holding: Holding) {
        self.holdings
            .write()
            .await
            .entry(holding.user_id.clone())
            .or_default()
            .push(holding);
    }
}
