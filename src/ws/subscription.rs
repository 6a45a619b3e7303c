//! Per-connection subscription manager.
//!
//! Tracks which tokens and rooms a WebSocket client follows and filters
//! events server-side. A price tick is trimmed to the subscribed tokens'
//! quotes; room events pass through whole.

use std::collections::HashSet;

use crate::domain::{MarketEvent, RoomId, TokenId};

/// Wildcard accepted in subscription lists.
pub const WILDCARD: &str = "*";

/// Manages the subscriptions of a single WebSocket connection.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    token_ids: HashSet<TokenId>,
    room_ids: HashSet<RoomId>,
    all_tokens: bool,
    all_rooms: bool,
}

impl SubscriptionManager {
    /// Creates a new empty subscription manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds subscriptions. `"*"` enables the wildcard for its kind.
    pub fn subscribe(&mut self, token_ids: &[String], room_ids: &[String]) {
        for id in token_ids {
            if id == WILDCARD {
                self.all_tokens = true;
            } else {
                self.token_ids.insert(TokenId::from(id.as_str()));
            }
        }
        for id in room_ids {
            if id == WILDCARD {
                self.all_rooms = true;
            } else {
                self.room_ids.insert(RoomId::from(id.as_str()));
            }
        }
    }

    /// Removes subscriptions. `"*"` disables the wildcard for its kind.
    pub fn unsubscribe(&mut self, token_ids: &[String], room_ids: &[String]) {
        for id in token_ids {
            if id == WILDCARD {
                self.all_tokens = false;
            } else {
                self.token_ids.remove(&TokenId::from(id.as_str()));
            }
        }
        for id in room_ids {
            if id == WILDCARD {
                self.all_rooms = false;
            } else {
                self.room_ids.remove(&RoomId::from(id.as_str()));
            }
        }
    }

    fn wants_token(&self, id: &TokenId) -> bool {
        self.all_tokens || self.token_ids.contains(id)
    }

    fn wants_room(&self, id: &RoomId) -> bool {
        self.all_rooms || self.room_ids.contains(id)
    }

    /// Returns the part of `event` this client should see, if any.
    #[must_use]
    pub fn filter(&self, event: &MarketEvent) -> Option<MarketEvent> {
        match event {
            MarketEvent::PricesTicked {
                tick,
                quotes,
                timestamp,
            } => {
                let quotes: Vec<_> = quotes
                    .iter()
                    .filter(|q| self.wants_token(&q.token_id))
                    .cloned()
                    .collect();
                (!quotes.is_empty()).then(|| MarketEvent::PricesTicked {
                    tick: *tick,
                    quotes,
                    timestamp: *timestamp,
                })
            }
            MarketEvent::RoomJoined { room_id, .. }
            | MarketEvent::RoomInvested { room_id, .. }
            | MarketEvent::RoomCreated { room_id, .. } => {
                self.wants_room(room_id).then(|| event.clone())
            }
        }
    }

    /// Returns the number of explicitly subscribed tokens and rooms.
    #[must_use]
    pub fn count(&self) -> usize {
        self.token_ids.len() + self.room_ids.len()
    }

    /// Returns `(all_tokens, all_rooms)`.
    #[must_use]
    pub const fn wildcards(&self) -> (bool, bool) {
        (self.all_tokens, self.all_rooms)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::TokenQuote;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn tick() -> MarketEvent {
        let quote = |id: &str| TokenQuote {
            token_id: TokenId::from(id),
            price: 1.0,
            price_change_24h: 0.0,
            volume_24h: 1.0,
        };
        MarketEvent::PricesTicked {
            tick: 1,
            quotes: vec![quote("atom"), quote("osmo"), quote("juno")],
            timestamp: Utc::now(),
        }
    }

    fn joined(room: &str) -> MarketEvent {
        MarketEvent::RoomJoined {
            room_id: RoomId::from(room),
            user_id: "user-1".to_string(),
            member_count: 2,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_matches_nothing() {
        let mgr = SubscriptionManager::new();
        assert!(mgr.filter(&tick()).is_none());
        assert!(mgr.filter(&joined("room-1")).is_none());
    }

    #[test]
    fn tick_is_trimmed_to_subscribed_tokens() {
        let mut mgr = SubscriptionManager::new();
        mgr.subscribe(&ids(&["osmo"]), &[]);
        let Some(MarketEvent::PricesTicked { quotes, .. }) = mgr.filter(&tick()) else {
            panic!("expected a trimmed tick");
        };
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes.first().map(|q| q.token_id.as_str()), Some("osmo"));
    }

    #[test]
    fn room_wildcard_matches_every_room() {
        let mut mgr = SubscriptionManager::new();
        mgr.subscribe(&[], &ids(&[WILDCARD]));
        assert!(mgr.filter(&joined("room-1")).is_some());
        assert!(mgr.filter(&joined("room-99")).is_some());
        assert!(mgr.filter(&tick()).is_none());
        assert_eq!(mgr.wildcards(), (false, true));
    }

    #[test]
    fn unsubscribe_removes_room() {
        let mut mgr = SubscriptionManager::new();
        mgr.subscribe(&[], &ids(&["room-1", "room-2"]));
        assert_eq!(mgr.count(), 2);
        mgr.unsubscribe(&[], &ids(&["room-1"]));
        assert!(mgr.filter(&joined("room-1")).is_none());
        assert!(mgr.filter(&joined("room-2")).is_some());
        assert_eq!(mgr.count(), 1);
    }
}
