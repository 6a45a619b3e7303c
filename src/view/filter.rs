//! Search, category filters, and sort orders over tokens and rooms.
//!
//! Every function here is pure: it takes a slice and returns the selected
//! records in a new `Vec`. Filters run before the sort, and the sort is
//! stable, so tokens with equal keys keep their listing order.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{PumpRoom, RoomId, Token};
use crate::error::MarketError;

/// Volume above which a token counts as trending.
pub const TRENDING_VOLUME_THRESHOLD: f64 = 50_000_000.0;

/// Member count above which a room counts as trending.
pub const TRENDING_ROOM_MEMBERS: u64 = 500;

/// Number of tokens shown in the trending tab.
pub const TRENDING_TAB_LIMIT: usize = 6;

/// How far back a listing counts as new.
#[must_use]
pub fn new_listing_window() -> Duration {
    Duration::days(7)
}

/// Category filter of the token explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// Every token.
    #[default]
    All,
    /// Verified listings only.
    Verified,
    /// Listed within the last seven days.
    New,
    /// 24h volume above 50M.
    Trending,
}

/// Descending sort key of the token explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Market capitalization.
    #[default]
    MarketCap,
    /// 24h volume.
    Volume,
    /// 24h price change.
    PriceChange,
    /// Holder count.
    Holders,
}

/// Category filter of the pump-room list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoomFilter {
    /// Every room.
    #[default]
    All,
    /// More than 500 members.
    Trending,
    /// Created within the last seven days.
    New,
    /// Rooms the current user has joined.
    Joined,
}

macro_rules! impl_from_str {
    ($ty:ty, $what:literal, { $($name:literal => $variant:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = MarketError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($variant),)+
                    other => Err(MarketError::InvalidRequest(format!(
                        concat!("unknown ", $what, ": {}"),
                        other
                    ))),
                }
            }
        }
    };
}

impl_from_str!(TokenCategory, "category", {
    "all" => TokenCategory::All,
    "verified" => TokenCategory::Verified,
    "new" => TokenCategory::New,
    "trending" => TokenCategory::Trending,
});

impl_from_str!(SortKey, "sort key", {
    "market_cap" => SortKey::MarketCap,
    "volume" => SortKey::Volume,
    "price_change" => SortKey::PriceChange,
    "holders" => SortKey::Holders,
});

impl_from_str!(RoomFilter, "room filter", {
    "all" => RoomFilter::All,
    "trending" => RoomFilter::Trending,
    "new" => RoomFilter::New,
    "joined" => RoomFilter::Joined,
});

/// A complete explorer query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenQuery {
    /// Case-insensitive substring over name and symbol; empty matches all.
    pub search: String,
    /// Category filter.
    pub category: TokenCategory,
    /// Sort key, always descending.
    pub sort: SortKey,
}

/// Returns `true` if `created_at` lies strictly within the new-listing
/// window before `now`.
fn is_new(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    created_at > now - new_listing_window()
}

/// Keeps tokens whose name or symbol contains `query`, ignoring case.
#[must_use]
pub fn search_tokens(tokens: &[Token], query: &str) -> Vec<Token> {
    if query.is_empty() {
        return tokens.to_vec();
    }
    let needle = query.to_lowercase();
    tokens
        .iter()
        .filter(|t| t.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Keeps tokens in the given category.
#[must_use]
pub fn filter_tokens(tokens: &[Token], category: TokenCategory, now: DateTime<Utc>) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| match category {
            TokenCategory::All => true,
            TokenCategory::Verified => t.is_verified,
            TokenCategory::New => is_new(t.created_at, now),
            TokenCategory::Trending => t.volume_24h > TRENDING_VOLUME_THRESHOLD,
        })
        .cloned()
        .collect()
}

/// Sorts tokens descending by `key`. Stable: ties keep their input order.
pub fn sort_tokens(tokens: &mut [Token], key: SortKey) {
    tokens.sort_by(|a, b| descending(key, a, b));
}

fn descending(key: SortKey, a: &Token, b: &Token) -> Ordering {
    match key {
        SortKey::MarketCap => b.market_cap.total_cmp(&a.market_cap),
        SortKey::Volume => b.volume_24h.total_cmp(&a.volume_24h),
        SortKey::PriceChange => b.price_change_24h.total_cmp(&a.price_change_24h),
        SortKey::Holders => b.holders_count.cmp(&a.holders_count),
    }
}

/// Runs the full explorer pipeline: search, category, then sort.
#[must_use]
pub fn apply_query(tokens: &[Token], query: &TokenQuery, now: DateTime<Utc>) -> Vec<Token> {
    let searched = search_tokens(tokens, &query.search);
    let mut selected = filter_tokens(&searched, query.category, now);
    sort_tokens(&mut selected, query.sort);
    selected
}

/// The trending tab: the first six high-volume tokens in listing order.
#[must_use]
pub fn trending_tab(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| t.volume_24h > TRENDING_VOLUME_THRESHOLD)
        .take(TRENDING_TAB_LIMIT)
        .cloned()
        .collect()
}

/// Keeps rooms matching `filter`. `joined` is the current user's joined set
/// and only matters for [`RoomFilter::Joined`].
#[must_use]
pub fn filter_rooms(
    rooms: &[PumpRoom],
    filter: RoomFilter,
    joined: &HashSet<RoomId>,
    now: DateTime<Utc>,
) -> Vec<PumpRoom> {
    rooms
        .iter()
        .filter(|r| match filter {
            RoomFilter::All => true,
            RoomFilter::Trending => r.member_count > TRENDING_ROOM_MEMBERS,
            RoomFilter::New => is_new(r.created_at, now),
            RoomFilter::Joined => joined.contains(&r.id),
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::pump_room::fixtures::room;
    use crate::domain::token::fixtures::token;

    fn ids(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.id.as_str()).collect()
    }

    fn sample() -> Vec<Token> {
        vec![
            token("atom", 3.2e9, 1.8e8, true),
            token("osmo", 8.5e8, 4.5e7, true),
            token("lunaq", 4.5e6, 2.8e6, false),
            token("juno", 3.2e8, 1.5e7, true),
        ]
    }

    #[test]
    fn verified_filter_returns_exactly_verified() {
        let tokens = sample();
        let verified = filter_tokens(&tokens, TokenCategory::Verified, Utc::now());
        assert!(verified.iter().all(|t| t.is_verified));
        assert_eq!(
            verified.len(),
            tokens.iter().filter(|t| t.is_verified).count()
        );
    }

    #[test]
    fn trending_filter_uses_volume_threshold() {
        let tokens = sample();
        let trending = filter_tokens(&tokens, TokenCategory::Trending, Utc::now());
        assert_eq!(ids(&trending), ["atom"]);
    }

    #[test]
    fn new_filter_uses_seven_day_window() {
        let now = Utc::now();
        let mut fresh = token("fresh", 1.0, 1.0, false);
        fresh.created_at = now - Duration::days(2);
        let mut stale = token("stale", 1.0, 1.0, false);
        stale.created_at = now - Duration::days(8);

        let selected = filter_tokens(&[fresh, stale], TokenCategory::New, now);
        assert_eq!(ids(&selected), ["fresh"]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_symbol() {
        let tokens = sample();
        assert_eq!(ids(&search_tokens(&tokens, "ATO")), ["atom"]);
        assert_eq!(ids(&search_tokens(&tokens, "Juno Tok")), ["juno"]);
        assert_eq!(search_tokens(&tokens, "").len(), 4);
        assert!(search_tokens(&tokens, "zzz").is_empty());
    }

    #[test]
    fn market_cap_sort_is_non_increasing() {
        let mut tokens = sample();
        sort_tokens(&mut tokens, SortKey::MarketCap);
        assert!(
            tokens
                .windows(2)
                .all(|w| matches!(w, [a, b] if a.market_cap >= b.market_cap))
        );
        assert_eq!(ids(&tokens), ["atom", "osmo", "juno", "lunaq"]);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut tokens = vec![
            token("b", 10.0, 1.0, true),
            token("a", 10.0, 1.0, true),
            token("c", 20.0, 1.0, true),
            token("d", 10.0, 1.0, true),
        ];
        sort_tokens(&mut tokens, SortKey::MarketCap);
        assert_eq!(ids(&tokens), ["c", "b", "a", "d"]);
    }

    #[test]
    fn holders_and_price_change_sorts() {
        let mut tokens = sample();
        for (t, (holders, change)) in tokens
            .iter_mut()
            .zip([(10, 5.2), (30, -3.8), (20, 156.7), (5, 12.7)])
        {
            t.holders_count = holders;
            t.price_change_24h = change;
        }
        let mut by_holders = tokens.clone();
        sort_tokens(&mut by_holders, SortKey::Holders);
        assert_eq!(ids(&by_holders), ["osmo", "lunaq", "atom", "juno"]);

        sort_tokens(&mut tokens, SortKey::PriceChange);
        assert_eq!(ids(&tokens), ["lunaq", "juno", "atom", "osmo"]);
    }

    #[test]
    fn query_filters_then_sorts() {
        let query = TokenQuery {
            search: "o".to_string(),
            category: TokenCategory::Verified,
            sort: SortKey::Volume,
        };
        let selected = apply_query(&sample(), &query, Utc::now());
        assert_eq!(ids(&selected), ["atom", "osmo", "juno"]);
    }

    #[test]
    fn trending_tab_is_capped() {
        let tokens: Vec<Token> = (0..10)
            .map(|i| token(&format!("t{i}"), 1.0, 6e7, true))
            .collect();
        let tab = trending_tab(&tokens);
        assert_eq!(tab.len(), TRENDING_TAB_LIMIT);
        assert_eq!(tab.first().map(|t| t.id.as_str()), Some("t0"));
    }

    #[test]
    fn parses_query_values() {
        assert_eq!("verified".parse::<TokenCategory>(), Ok(TokenCategory::Verified));
        assert_eq!("price_change".parse::<SortKey>(), Ok(SortKey::PriceChange));
        assert_eq!("joined".parse::<RoomFilter>(), Ok(RoomFilter::Joined));
        assert!("hot".parse::<TokenCategory>().is_err());
    }

    #[test]
    fn room_filters() {
        let now = Utc::now();
        let mut old = room("room-1", 1247, 0.0, 1.0);
        old.created_at = now - Duration::days(30);
        let small = room("room-2", 120, 0.0, 1.0);
        let rooms = vec![old, small];

        let trending = filter_rooms(&rooms, RoomFilter::Trending, &HashSet::new(), now);
        assert_eq!(trending.len(), 1);

        let fresh = filter_rooms(&rooms, RoomFilter::New, &HashSet::new(), now);
        assert_eq!(fresh.first().map(|r| r.id.as_str()), Some("room-2"));

        let joined: HashSet<RoomId> = [RoomId::from("room-1")].into_iter().collect();
        let mine = filter_rooms(&rooms, RoomFilter::Joined, &joined, now);
        assert_eq!(mine.first().map(|r| r.id.as_str()), Some("room-1"));
        assert!(filter_rooms(&rooms, RoomFilter::Joined, &HashSet::new(), now).is_empty());
    }
}
