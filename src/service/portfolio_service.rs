//! Portfolio service: values the signed-in user's holdings.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::auth::AuthSession;
use crate::domain::{PortfolioBook, TokenStore};
use crate::error::MarketError;
use crate::view::aggregate::{PortfolioSummary, portfolio_summary, price_holdings};

/// Default delay of a simulated portfolio refresh.
pub const DEFAULT_REFRESH_LATENCY: Duration = Duration::from_millis(2_000);

/// Joins the holding book with live token prices.
#[derive(Debug)]
pub struct PortfolioService {
    book: Arc<PortfolioBook>,
    tokens: Arc<TokenStore>,
    auth: Arc<AuthSession>,
    refresh_latency: Duration,
}

impl PortfolioService {
    /// Creates a new `PortfolioService`.
    #[must_use]
    pub fn new(
        book: Arc<PortfolioBook>,
        tokens: Arc<TokenStore>,
        auth: Arc<AuthSession>,
        refresh_latency: Duration,
    ) -> Self {
        Self {
            book,
            tokens,
            auth,
            refresh_latency,
        }
    }

    /// Values the signed-in user's holdings at current prices.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AuthenticationRequired`] when signed out.
    pub async fn summary(&self) -> Result<PortfolioSummary, MarketError> {
        let user = self.auth.require_user().await?;
        let holdings = self.book.holdings_of(&user.id).await;

        let prices: HashMap<_, _> = self
            .tokens
            .snapshot()
            .await
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect();
        let resolved = price_holdings(holdings, |id| {
            prices
                .get(id)
                .cloned()
                .ok_or_else(|| MarketError::TokenNotFound(id.clone()))
        });

        Ok(portfolio_summary(resolved))
    }

    /// Simulates a refresh round-trip, then returns a fresh summary.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AuthenticationRequired`] when signed out; the
    /// check happens before the delay.
    pub async fn refresh(&self) -> Result<PortfolioSummary, MarketError> {
        let user = self.auth.require_user().await?;
        tokio::time::sleep(self.refresh_latency).await;
        tracing::info!(user_id = %user.id, "portfolio refreshed");
        self.summary().await
    }
}
