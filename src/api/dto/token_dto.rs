//! Token explorer DTOs.
//!
//! Cards carry both the raw numbers and the display strings the UI
//! renders verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Token;
use crate::error::MarketError;
use crate::view::aggregate::MarketOverview;
use crate::view::filter::TokenQuery;
use crate::view::format::{
    format_count, format_market_cap, format_price, format_signed_percent, format_volume,
};

/// Query parameters of `GET /tokens`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TokenListParams {
    /// Case-insensitive substring over name and symbol.
    #[serde(default)]
    pub search: Option<String>,
    /// `all`, `verified`, `new`, or `trending`. Defaults to `all`.
    #[serde(default)]
    pub category: Option<String>,
    /// `market_cap`, `volume`, `price_change`, or `holders`. Defaults to
    /// `market_cap`.
    #[serde(default)]
    pub sort: Option<String>,
}

impl TokenListParams {
    /// Parses the raw parameters into an explorer query.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidRequest`] for an unknown category or
    /// sort key.
    pub fn into_query(self) -> Result<TokenQuery, MarketError> {
        Ok(TokenQuery {
            search: self.search.unwrap_or_default().trim().to_string(),
            category: self
                .category
                .as_deref()
                .map(str::parse)
                .transpose()?
                .unwrap_or_default(),
            sort: self
                .sort
                .as_deref()
                .map(str::parse)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

/// One row of the token explorer.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenCardDto {
    /// Token identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Logo image URL.
    pub logo_url: String,
    /// Spot price in USD.
    pub price: f64,
    /// Formatted price (`"8.45"`, `"0.004500"`).
    pub price_display: String,
    /// 24h change in percent.
    pub price_change_24h: f64,
    /// Formatted 24h change (`"+5.20%"`).
    pub price_change_24h_display: String,
    /// Market capitalization in USD.
    pub market_cap: f64,
    /// Formatted market cap (`"$3.20B"`).
    pub market_cap_display: String,
    /// 24h volume in USD.
    pub volume_24h: f64,
    /// Formatted volume (`"$180.00M"`).
    pub volume_24h_display: String,
    /// Holder count.
    pub holders_count: u64,
    /// Formatted holder count (`"892,450"`).
    pub holders_display: String,
    /// Whether the listing is verified.
    pub is_verified: bool,
    /// Listing timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Token> for TokenCardDto {
    fn from(token: &Token) -> Self {
        Self {
            id: token.id.to_string(),
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            logo_url: token.logo_url.clone(),
            price: token.price,
            price_display: format_price(token.price),
            price_change_24h: token.price_change_24h,
            price_change_24h_display: format_signed_percent(token.price_change_24h),
            market_cap: token.market_cap,
            market_cap_display: format_market_cap(token.market_cap),
            volume_24h: token.volume_24h,
            volume_24h_display: format_volume(token.volume_24h),
            holders_count: token.holders_count,
            holders_display: format_count(token.holders_count),
            is_verified: token.is_verified,
            created_at: token.created_at,
        }
    }
}

/// Response body for `GET /tokens` and `GET /tokens/trending`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenListResponse {
    /// Matching tokens, in display order.
    pub data: Vec<TokenCardDto>,
    /// Number of matching tokens.
    pub total: usize,
}

impl TokenListResponse {
    /// Builds the list response from `tokens`.
    #[must_use]
    pub fn from_tokens(tokens: &[Token]) -> Self {
        Self {
            data: tokens.iter().map(TokenCardDto::from).collect(),
            total: tokens.len(),
        }
    }
}

/// Response body for `GET /tokens/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenDetailResponse {
    /// Card fields.
    #[serde(flatten)]
    pub card: TokenCardDto,
    /// Short description.
    pub description: String,
    /// 7d change in percent.
    pub price_change_7d: f64,
    /// Formatted 7d change.
    pub price_change_7d_display: String,
    /// Total supply.
    pub total_supply: f64,
    /// Circulating supply.
    pub circulating_supply: f64,
    /// Creator account.
    pub creator_id: String,
    /// Contract or denom address.
    pub contract_address: String,
    /// Issuing chain (`"cosmos"`).
    pub blockchain: String,
    /// Project website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Twitter / X profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Telegram group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    /// Discord invite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    /// Last market update.
    pub updated_at: DateTime<Utc>,
}

impl From<Token> for TokenDetailResponse {
    fn from(token: Token) -> Self {
        let card = TokenCardDto::from(&token);
        Self {
            card,
            description: token.description,
            price_change_7d: token.price_change_7d,
            price_change_7d_display: format_signed_percent(token.price_change_7d),
            total_supply: token.total_supply,
            circulating_supply: token.circulating_supply,
            creator_id: token.creator_id,
            contract_address: token.contract_address,
            blockchain: token.blockchain.as_str().to_string(),
            website: token.metadata.website,
            twitter: token.metadata.twitter,
            telegram: token.metadata.telegram,
            discord: token.metadata.discord,
            updated_at: token.updated_at,
        }
    }
}

/// Response body for `GET /market/overview`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MarketOverviewResponse {
    /// Sum of market caps.
    pub total_market_cap: f64,
    /// Formatted sum of market caps.
    pub total_market_cap_display: String,
    /// Sum of 24h volumes.
    pub total_volume_24h: f64,
    /// Formatted sum of 24h volumes.
    pub total_volume_24h_display: String,
    /// Sum of holder counts.
    pub total_holders: u64,
    /// Formatted holder total.
    pub total_holders_display: String,
    /// Number of listed tokens.
    pub token_count: usize,
}

impl From<MarketOverview> for MarketOverviewResponse {
    fn from(overview: MarketOverview) -> Self {
        Self {
            total_market_cap: overview.total_market_cap,
            total_market_cap_display: format_market_cap(overview.total_market_cap),
            total_volume_24h: overview.total_volume_24h,
            total_volume_24h_display: format_volume(overview.total_volume_24h),
            total_holders: overview.total_holders,
            total_holders_display: format_count(overview.total_holders),
            token_count: overview.token_count,
        }
    }
}
