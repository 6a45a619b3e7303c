//! In-memory token storage mutated by the perturbation tick.
//!
//! [`TokenStore`] keeps every listed token behind a single
//! [`tokio::sync::RwLock`]. A tick rewrites all tokens at once, so per-token
//! locks would buy nothing; readers always see a whole tick or none of it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::RwLock;

use super::market_event::TokenQuote;
use super::{Perturbation, Token, TokenId};
use crate::error::MarketError;

/// Outcome of one perturbation tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Tick counter after this tick, starting at 1.
    pub tick: u64,
    /// New quotes in store order.
    pub quotes: Vec<TokenQuote>,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Listing order; the tie-break order for every sorted view.
    order: Vec<TokenId>,
    tokens: HashMap<TokenId, Token>,
    ticks: u64,
}

/// Central store for all listed tokens.
#[derive(Debug, Default)]
pub struct TokenStore {
    inner: RwLock<StoreInner>,
}

impl TokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed tokens, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidRequest`] if two seed tokens share an ID.
    pub fn from_seed(seed: Vec<Token>) -> Result<Self, MarketError> {
        let mut inner = StoreInner::default();
        for token in seed {
            if inner.tokens.contains_key(&token.id) {
                return Err(MarketError::InvalidRequest(format!(
                    "duplicate token {}",
                    token.id
                )));
            }
            inner.order.push(token.id.clone());
            inner.tokens.insert(token.id.clone(), token);
        }
        Ok(Self {
            inner: RwLock::new(inner),
        })
    }

    /// Returns a copy of the token with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::TokenNotFound`] if no such token is listed.
    pub async fn get(&self, id: &TokenId) -> Result<Token, MarketError> {
        self.inner
            .read()
            .await
            .tokens
            .get(id)
            .cloned()
            .ok_or_else(|| MarketError::TokenNotFound(id.clone()))
    }

    /// Returns copies of all tokens in listing order.
    pub async fn snapshot(&self) -> Vec<Token> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.tokens.get(id).cloned())
            .collect()
    }

    /// Returns the number of listed tokens.
    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    /// Returns `true` if no token is listed.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.order.is_empty()
    }

    /// Returns how many ticks have been applied.
    pub async fn ticks(&self) -> u64 {
        self.inner.read().await.ticks
    }

    /// Applies one perturbation step to every token, in listing order.
    ///
    /// Draws from `rng` in a fixed order, so a seeded source yields a
    /// reproducible sequence of snapshots.
    pub async fn apply_tick<R: Rng + ?Sized>(
        &self,
        perturbation: &Perturbation,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> TickReport {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;
        let mut quotes = Vec::with_capacity(inner.order.len());

        for id in &inner.order {
            let Some(token) = inner.tokens.get_mut(id) else {
                continue;
            };
            *token = perturbation.apply(token, rng, now);
            quotes.push(TokenQuote {
                token_id: id.clone(),
                price: token.price,
                price_change_24h: token.price_change_24h,
                volume_24h: token.volume_24h,
            });
        }

        inner.ticks = inner.ticks.saturating_add(1);
        TickReport {
            tick: inner.ticks,
            quotes,
        }
    }
}
