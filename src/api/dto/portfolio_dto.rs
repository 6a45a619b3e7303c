//! Portfolio DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::view::aggregate::{PortfolioSummary, PricedHolding};
use crate::view::format::{
    format_price, format_progress, format_signed_percent, format_signed_usd, format_usd,
};

/// One priced holding.
#[derive(Debug, Serialize, ToSchema)]
pub struct HoldingDto {
    /// Holding identifier.
    pub id: String,
    /// Token held.
    pub token_id: String,
    /// Token symbol.
    pub symbol: String,
    /// Token name.
    pub name: String,
    /// Units held.
    pub balance: f64,
    /// Average cost per unit.
    pub avg_buy_price: f64,
    /// Current token price.
    pub price: f64,
    /// Formatted current price.
    pub price_display: String,
    /// Formatted 24h change of the token.
    pub price_change_24h_display: String,
    /// `balance × price`.
    pub value: f64,
    /// Formatted value (`"$10,566.73"`).
    pub value_display: String,
    /// Cost basis.
    pub total_invested: f64,
    /// Unrealized plus realized P&L.
    pub pnl: f64,
    /// Formatted P&L (`"+$759.25"`).
    pub pnl_display: String,
    /// Formatted P&L relative to cost basis (`"+7.73%"`).
    pub pnl_percentage_display: String,
    /// Share of the portfolio in percent; absent for an empty portfolio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_percentage: Option<f64>,
    /// Formatted share (`"62.4%"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_display: Option<String>,
}

impl HoldingDto {
    fn new(priced: &PricedHolding, allocation: Option<f64>) -> Self {
        let h = &priced.holding;
        Self {
            id: h.id.clone(),
            token_id: h.token_id.to_string(),
            symbol: priced.symbol.clone(),
            name: priced.name.clone(),
            balance: h.balance,
            avg_buy_price: h.avg_buy_price,
            price: priced.price,
            price_display: format_price(priced.price),
            price_change_24h_display: format_signed_percent(priced.price_change_24h),
            value: priced.value(),
            value_display: format_usd(priced.value()),
            total_invested: h.total_invested,
            pnl: h.total_pnl(),
            pnl_display: format_signed_usd(h.total_pnl()),
            pnl_percentage_display: format_signed_percent(h.pnl_percentage()),
            allocation_percentage: allocation,
            allocation_display: allocation.map(format_progress),
        }
    }
}

/// Response body for `GET /portfolio` and `POST /portfolio/refresh`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PortfolioResponse {
    /// Current value of priced holdings.
    pub total_value: f64,
    /// Formatted value.
    pub total_value_display: String,
    /// Cost basis of every holding.
    pub total_invested: f64,
    /// Formatted cost basis.
    pub total_invested_display: String,
    /// P&L of every holding.
    pub total_pnl: f64,
    /// Formatted P&L.
    pub total_pnl_display: String,
    /// P&L relative to cost basis in percent; 0 without a cost basis.
    pub total_pnl_percentage: f64,
    /// Formatted P&L percentage.
    pub total_pnl_percentage_display: String,
    /// Priced holdings.
    pub holdings: Vec<HoldingDto>,
    /// Holdings whose token is no longer listed.
    pub unpriced_holding_ids: Vec<String>,
}

impl From<PortfolioSummary> for PortfolioResponse {
    fn from(summary: PortfolioSummary) -> Self {
        let holdings = summary
            .holdings
            .iter()
            .zip(summary.allocation.iter())
            .map(|(priced, row)| HoldingDto::new(priced, row.percentage))
            .collect();
        Self {
            total_value: summary.total_value,
            total_value_display: format_usd(summary.total_value),
            total_invested: summary.total_invested,
            total_invested_display: format_usd(summary.total_invested),
            total_pnl: summary.total_pnl,
            total_pnl_display: format_signed_usd(summary.total_pnl),
            total_pnl_percentage: summary.total_pnl_percentage,
            total_pnl_percentage_display: format_signed_percent(summary.total_pnl_percentage),
            holdings,
            unpriced_holding_ids: summary.unpriced.into_iter().map(|h| h.id).collect(),
        }
    }
}
