//! Market service: token explorer queries, advisory data, and price ticks.

use std::sync::Arc;

use rand::Rng;

use crate::domain::{
    AiInsight, AiTradingSignal, Clock, EventBus, MarketEvent, Perturbation, TickReport, Token,
    TokenId, TokenStore, TradingPair, TrendingToken,
};
use crate::error::MarketError;
use crate::view::aggregate::{MarketOverview, market_overview};
use crate::view::filter::{TokenQuery, apply_query, trending_tab};

/// Read-only advisory data shown next to the explorer.
#[derive(Debug, Clone, Default)]
pub struct Advisory {
    /// AI commentary.
    pub insights: Vec<AiInsight>,
    /// AI trading signals.
    pub signals: Vec<AiTradingSignal>,
    /// Social trending leaderboard.
    pub trending: Vec<TrendingToken>,
    /// Quoted markets.
    pub pairs: Vec<TradingPair>,
}

/// Orchestration layer for the token explorer.
///
/// Owns the [`TokenStore`] handle and is the only writer to it: a tick
/// perturbs every token, then publishes [`MarketEvent::PricesTicked`].
#[derive(Debug)]
pub struct MarketService {
    tokens: Arc<TokenStore>,
    advisory: Advisory,
    perturbation: Perturbation,
    event_bus: EventBus,
    clock: Arc<dyn Clock>,
}

impl MarketService {
    /// Creates a new `MarketService`.
    #[must_use]
    pub fn new(
        tokens: Arc<TokenStore>,
        advisory: Advisory,
        event_bus: EventBus,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tokens,
            advisory,
            perturbation: Perturbation::default(),
            event_bus,
            clock,
        }
    }

    /// Returns a reference to the inner [`TokenStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    /// Returns the explorer list for `query`: filtered, then sorted.
    pub async fn list_tokens(&self, query: &TokenQuery) -> Vec<Token> {
        let tokens = self.tokens.snapshot().await;
        apply_query(&tokens, query, self.clock.now())
    }

    /// Returns a single token.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::TokenNotFound`] if the token is not listed.
    pub async fn token(&self, id: &TokenId) -> Result<Token, MarketError> {
        self.tokens.get(id).await
    }

    /// Returns the trending tab of the landing page.
    pub async fn trending_tab(&self) -> Vec<Token> {
        trending_tab(&self.tokens.snapshot().await)
    }

    /// Returns the explorer headline numbers.
    pub async fn overview(&self) -> MarketOverview {
        market_overview(&self.tokens.snapshot().await)
    }

    /// AI insights, newest first as seeded.
    #[must_use]
    pub fn insights(&self) -> &[AiInsight] {
        &self.advisory.insights
    }

    /// AI trading signals.
    #[must_use]
    pub fn signals(&self) -> &[AiTradingSignal] {
        &self.advisory.signals
    }

    /// Social trending leaderboard.
    #[must_use]
    pub fn trending(&self) -> &[TrendingToken] {
        &self.advisory.trending
    }

    /// Quoted trading pairs.
    #[must_use]
    pub fn pairs(&self) -> &[TradingPair] {
        &self.advisory.pairs
    }

    /// Runs one perturbation tick over every token and publishes the
    /// resulting quotes.
    pub async fn tick<R: Rng + ?Sized>(&self, rng: &mut R) -> TickReport {
        let now = self.clock.now();
        let report = self.tokens.apply_tick(&self.perturbation, rng, now).await;

        let receivers = self.event_bus.publish(MarketEvent::PricesTicked {
            tick: report.tick,
            quotes: report.quotes.clone(),
            timestamp: now,
        });

        tracing::debug!(
            tick = report.tick,
            tokens = report.quotes.len(),
            receivers,
            "prices ticked"
        );
        report
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::ManualClock;
    use crate::seed;
    use crate::view::filter::{SortKey, TokenCategory};

    fn make_service_at(clock: Arc<dyn Clock>) -> MarketService {
        let data = seed::load();
        let Ok(store) = TokenStore::from_seed(data.tokens) else {
            panic!("valid seed");
        };
        let advisory = Advisory {
            insights: data.insights,
            signals: data.signals,
            trending: data.trending,
            pairs: data.pairs,
        };
        MarketService::new(Arc::new(store), advisory, EventBus::new(100), clock)
    }

    fn make_service() -> MarketService {
        let Some(at) = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).single() else {
            panic!("valid date");
        };
        make_service_at(Arc::new(ManualClock::new(at)))
    }

    fn ids(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.id.as_str()).collect()
    }

    #[tokio::test]
    async fn verified_tokens_sorted_by_market_cap() {
        let service = make_service();
        let query = TokenQuery {
            category: TokenCategory::Verified,
            sort: SortKey::MarketCap,
            ..TokenQuery::default()
        };
        let tokens = service.list_tokens(&query).await;
        assert_eq!(ids(&tokens), ["atom", "osmo", "akash", "juno", "secret"]);
    }

    #[tokio::test]
    async fn search_matches_symbol_case_insensitively() {
        let service = make_service();
        let query = TokenQuery {
            search: "lunaq".to_string(),
            ..TokenQuery::default()
        };
        assert_eq!(ids(&service.list_tokens(&query).await), ["luna-quantum"]);
    }

    #[tokio::test]
    async fn new_category_uses_the_clock() {
        let service = make_service();
        let query = TokenQuery {
            category: TokenCategory::New,
            ..TokenQuery::default()
        };
        assert_eq!(ids(&service.list_tokens(&query).await), ["luna-quantum"]);

        let Some(later) = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).single() else {
            panic!("valid date");
        };
        let clock = Arc::new(ManualClock::new(later));
        clock.advance(Duration::days(30));
        let service = make_service_at(clock);
        assert!(service.list_tokens(&query).await.is_empty());
    }

    #[tokio::test]
    async fn trending_tab_only_keeps_high_volume() {
        let service = make_service();
        assert_eq!(ids(&service.trending_tab().await), ["atom"]);
    }

    #[tokio::test]
    async fn overview_covers_all_tokens() {
        let overview = make_service().overview().await;
        assert_eq!(overview.token_count, 6);
        assert_eq!(overview.total_market_cap, 4_974_500_000.0);
    }

    #[tokio::test]
    async fn unknown_token_is_not_found() {
        let service = make_service();
        let id = TokenId::from("doge");
        assert_eq!(
            service.token(&id).await,
            Err(MarketError::TokenNotFound(id))
        );
    }

    #[tokio::test]
    async fn seeded_ticks_are_reproducible_and_published() {
        let a = make_service();
        let b = make_service();
        let mut rx = a.event_bus.subscribe();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let ra = a.tick(&mut rng_a).await;
            let rb = b.tick(&mut rng_b).await;
            assert_eq!(ra, rb);
        }
        for token in a.store().snapshot().await {
            assert!(token.price.is_finite() && token.price > 0.0);
        }

        let Ok(MarketEvent::PricesTicked { tick, quotes, .. }) = rx.recv().await else {
            panic!("expected a tick event");
        };
        assert_eq!(tick, 1);
        assert_eq!(quotes.len(), 6);
    }

    #[test]
    fn advisory_data_is_exposed() {
        let service = make_service();
        assert_eq!(service.signals().len(), 3);
        assert_eq!(service.trending().len(), 5);
        assert_eq!(service.pairs().len(), 2);
        assert!(!service.insights().is_empty());
    }
}
