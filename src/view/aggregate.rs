//! Aggregate metrics over tokens, holdings, and rooms.

use serde::Serialize;

use crate::domain::{Holding, PumpRoom, Token, TokenId};
use crate::error::MarketError;

/// Headline numbers of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketOverview {
    /// Sum of market caps.
    pub total_market_cap: f64,
    /// Sum of 24h volumes.
    pub total_volume_24h: f64,
    /// Sum of holder counts.
    pub total_holders: u64,
    /// Number of listed tokens.
    pub token_count: usize,
}

/// Computes the explorer headline numbers.
#[must_use]
pub fn market_overview(tokens: &[Token]) -> MarketOverview {
    MarketOverview {
        total_market_cap: tokens.iter().map(|t| t.market_cap).sum(),
        total_volume_24h: tokens.iter().map(|t| t.volume_24h).sum(),
        total_holders: tokens
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.holders_count)),
        token_count: tokens.len(),
    }
}

/// A holding joined with the current price of its token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedHolding {
    /// The recorded position.
    pub holding: Holding,
    /// Current token price.
    pub price: f64,
    /// 24h change of the token.
    pub price_change_24h: f64,
    /// Token symbol.
    pub symbol: String,
    /// Token name.
    pub name: String,
}

impl PricedHolding {
    /// Joins `holding` with `token`.
    #[must_use]
    pub fn new(holding: Holding, token: &Token) -> Self {
        Self {
            holding,
            price: token.price,
            price_change_24h: token.price_change_24h,
            symbol: token.symbol.clone(),
            name: token.name.clone(),
        }
    }

    /// Current value: `balance * price`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.holding.balance * self.price
    }
}

/// Result of resolving one holding's token reference.
pub type HoldingLookup = Result<PricedHolding, (Holding, MarketError)>;

/// Resolves every holding against `lookup`, keeping failed lookups
/// alongside the error that caused them.
pub fn price_holdings<F>(holdings: Vec<Holding>, mut lookup: F) -> Vec<HoldingLookup>
where
    F: FnMut(&TokenId) -> Result<Token, MarketError>,
{
    holdings
        .into_iter()
        .map(|h| match lookup(&h.token_id) {
            Ok(token) => Ok(PricedHolding::new(h, &token)),
            Err(err) => Err((h, err)),
        })
        .collect()
}

/// One row of the allocation breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationRow {
    /// Holding identifier.
    pub holding_id: String,
    /// Token held.
    pub token_id: TokenId,
    /// Current value.
    pub value: f64,
    /// Share of the portfolio in percent; `None` when the portfolio is
    /// worth nothing.
    pub percentage: Option<f64>,
}

/// Portfolio totals plus the per-holding breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// `Σ balance × price` over priced holdings.
    pub total_value: f64,
    /// `Σ total_invested` over all holdings.
    pub total_invested: f64,
    /// `Σ (unrealized + realized)` over all holdings.
    pub total_pnl: f64,
    /// `total_pnl / total_invested × 100`, or 0 without a cost basis.
    pub total_pnl_percentage: f64,
    /// Holdings whose token resolved.
    pub holdings: Vec<PricedHolding>,
    /// Allocation of priced holdings.
    pub allocation: Vec<AllocationRow>,
    /// Holdings whose token could not be resolved; excluded from
    /// `total_value` and the allocation.
    pub unpriced: Vec<Holding>,
}

/// Builds the portfolio summary from resolved holdings.
///
/// Cost basis and P&L come from the recorded holdings, so they include
/// unpriced holdings; value and allocation need a price and do not.
#[must_use]
pub fn portfolio_summary(resolved: Vec<HoldingLookup>) -> PortfolioSummary {
    let mut holdings = Vec::new();
    let mut unpriced = Vec::new();
    for entry in resolved {
        match entry {
            Ok(priced) => holdings.push(priced),
            Err((holding, err)) => {
                tracing::debug!(holding = %holding.id, error = %err, "holding left unpriced");
                unpriced.push(holding);
            }
        }
    }

    let total_value: f64 = holdings.iter().map(PricedHolding::value).sum();
    let recorded = holdings.iter().map(|p| &p.holding).chain(unpriced.iter());
    let (total_invested, total_pnl) = recorded.fold((0.0, 0.0), |(inv, pnl), h| {
        (inv + h.total_invested, pnl + h.total_pnl())
    });
    let total_pnl_percentage = if total_invested > 0.0 {
        total_pnl / total_invested * 100.0
    } else {
        0.0
    };

    let allocation = holdings
        .iter()
        .map(|p| AllocationRow {
            holding_id: p.holding.id.clone(),
            token_id: p.holding.token_id.clone(),
            value: p.value(),
            percentage: allocation_percentage(p.value(), total_value),
        })
        .collect();

    PortfolioSummary {
        total_value,
        total_invested,
        total_pnl,
        total_pnl_percentage,
        holdings,
        allocation,
        unpriced,
    }
}

/// `value / total × 100`, or `None` when `total` is zero.
#[must_use]
pub fn allocation_percentage(value: f64, total: f64) -> Option<f64> {
    if total == 0.0 {
        None
    } else {
        Some(value / total * 100.0)
    }
}

/// Total members across rooms.
#[must_use]
pub fn total_members(rooms: &[PumpRoom]) -> u64 {
    rooms
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.member_count))
}
