//! Token records as listed in the explorer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TokenId;

/// Chain a token is issued on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blockchain {
    /// Cosmos SDK chain.
    Cosmos,
    /// Ethereum mainnet.
    Ethereum,
    /// Solana mainnet.
    Solana,
}

impl Blockchain {
    /// Lowercase chain name, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cosmos => "cosmos",
            Self::Ethereum => "ethereum",
            Self::Solana => "solana",
        }
    }
}

/// Optional social links attached to a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Project website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Twitter / X profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Telegram group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    /// Discord invite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
}

/// A listed token with its market fields.
///
/// `price`, `price_change_24h` and `volume_24h` are rewritten on every
/// perturbation tick; everything else is fixed after seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Token identifier.
    pub id: TokenId,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Short description.
    pub description: String,
    /// Logo image URL.
    pub logo_url: String,
    /// Spot price in USD.
    pub price: f64,
    /// 24h price change in percent.
    pub price_change_24h: f64,
    /// 7d price change in percent.
    pub price_change_7d: f64,
    /// Market capitalization in USD.
    pub market_cap: f64,
    /// 24h traded volume in USD.
    pub volume_24h: f64,
    /// Total supply in whole tokens.
    pub total_supply: f64,
    /// Circulating supply in whole tokens.
    pub circulating_supply: f64,
    /// Number of holder addresses.
    pub holders_count: u64,
    /// Whether the listing is verified.
    pub is_verified: bool,
    /// Creator account.
    pub creator_id: String,
    /// Contract or denom address.
    pub contract_address: String,
    /// Issuing chain.
    pub blockchain: Blockchain,
    /// Listing timestamp.
    pub created_at: DateTime<Utc>,
    /// Last market update.
    pub updated_at: DateTime<Utc>,
    /// Social links.
    #[serde(default)]
    pub metadata: TokenMetadata,
}

impl Token {
    /// Returns `true` if `circulating_supply <= total_supply`.
    ///
    /// Seed data is not rejected when this fails; callers may use it for
    /// diagnostics.
    #[must_use]
    pub fn supply_is_consistent(&self) -> bool {
        self.circulating_supply <= self.total_supply
    }

    /// Returns `true` if the name or symbol contains `needle`
    /// case-insensitively. `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}
