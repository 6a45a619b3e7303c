//! Derived view functions.
//!
//! Pure functions over snapshots of the stores: explorer filters and sort
//! orders, aggregate metrics, and display formatting. Nothing in here holds
//! a lock or mutates shared state.

pub mod aggregate;
pub mod filter;
pub mod format;

pub use aggregate::{
    AllocationRow, MarketOverview, PortfolioSummary, PricedHolding, market_overview,
    portfolio_summary, price_holdings, total_members,
};
pub use filter::{RoomFilter, SortKey, TokenCategory, TokenQuery, apply_query, trending_tab};
