//! Concurrent pump-room storage with per-room locking.
//!
//! [`RoomRegistry`] stores all rooms in a `HashMap` where each entry is
//! individually protected by a [`tokio::sync::RwLock`]. Joins and
//! investments on different rooms do not contend with each other.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{PumpRoom, RoomId};
use crate::error::MarketError;

#[derive(Debug, Default)]
struct RegistryInner {
    /// Insertion order, used for listing.
    order: Vec<RoomId>,
    rooms: HashMap<RoomId, Arc<RwLock<PumpRoom>>>,
}

/// Central store for all pump rooms.
///
/// # Concurrency
///
/// - Multiple tasks may read the same room concurrently.
/// - Writes to different rooms are concurrent.
/// - Writes to the same room are serialized.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    inner: RwLock<RegistryInner>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from seed rooms, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidRequest`] if two seed rooms share an ID.
    pub fn from_seed(seed: Vec<PumpRoom>) -> Result<Self, MarketError> {
        let mut inner = RegistryInner::default();
        for room in seed {
            if inner.rooms.contains_key(&room.id) {
                return Err(MarketError::InvalidRequest(format!(
                    "duplicate room {}",
                    room.id
                )));
            }
            inner.order.push(room.id.clone());
            inner.rooms.insert(room.id.clone(), Arc::new(RwLock::new(room)));
        }
        Ok(Self {
            inner: RwLock::new(inner),
        })
    }

    /// Inserts a new room at the end of the listing.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidRequest`] if a room with the same ID
    /// already exists (should never happen with generated IDs).
    pub async fn insert(&self, room: PumpRoom) -> Result<RoomId, MarketError> {
        let mut inner = self.inner.write().await;
        if inner.rooms.contains_key(&room.id) {
            return Err(MarketError::InvalidRequest(format!(
                "room {} already exists",
                room.id
            )));
        }
        let id = room.id.clone();
        inner.order.push(id.clone());
        inner.rooms.insert(id.clone(), Arc::new(RwLock::new(room)));
        Ok(id)
    }

    /// Returns the room behind its per-room lock.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::RoomNotFound`] if no room with the given ID
    /// exists.
    pub async fn entry(&self, id: &RoomId) -> Result<Arc<RwLock<PumpRoom>>, MarketError> {
        self.inner
            .read()
            .await
            .rooms
            .get(id)
            .cloned()
            .ok_or_else(|| MarketError::RoomNotFound(id.clone()))
    }

    /// Returns a copy of the room with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::RoomNotFound`] if no room with the given ID
    /// exists.
    pub async fn get(&self, id: &RoomId) -> Result<PumpRoom, MarketError> {
        let entry = self.entry(id).await?;
        let room = entry.read().await.clone();
        Ok(room)
    }

    /// Adds one member to the room and returns the new member count.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::RoomNotFound`] if no room with the given ID
    /// exists.
    pub async fn record_join(&self, id: &RoomId, now: DateTime<Utc>) -> Result<u64, MarketError> {
        let entry = self.entry(id).await?;
        let mut room = entry.write().await;
        room.member_count = room.member_count.saturating_add(1);
        room.updated_at = now;
        Ok(room.member_count)
    }

    /// Adds `amount` to the room's pledged total and returns the new total.
    ///
    /// The amount is assumed to be validated by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::RoomNotFound`] if no room with the given ID
    /// exists.
    pub async fn record_investment(
        &self,
        id: &RoomId,
        amount: f64,
        now: DateTime<Utc>,
    ) -> Result<f64, MarketError> {
        let entry = self.entry(id).await?;
        let mut room = entry.write().await;
        room.total_invested += amount;
        room.updated_at = now;
        Ok(room.total_invested)
    }

    /// Returns copies of all rooms in insertion order.
    pub async fn list(&self) -> Vec<PumpRoom> {
        let inner = self.inner.read().await;
        let mut rooms = Vec::with_capacity(inner.order.len());
        for id in &inner.order {
            if let Some(entry) = inner.rooms.get(id) {
                rooms.push(entry.read().await.clone());
            }
        }
        rooms
    }

    /// Returns the number of rooms in the registry.
    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    /// Returns `true` if the registry contains no rooms.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.order.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::pump_room::fixtures::room;

    fn registry() -> RoomRegistry {
        let Ok(registry) = RoomRegistry::from_seed(vec![
            room("room-1", 1247, 67_500.0, 100_000.0),
            room("room-2", 892, 89_200.0, 250_000.0),
        ]) else {
            panic!("valid seed");
        };
        registry
    }

    #[tokio::test]
    async fn join_increments_only_the_target_room() {
        let registry = registry();
        let Ok(count) = registry
            .record_join(&RoomId::from("room-1"), Utc::now())
            .await
        else {
            panic!("join failed");
        };
        assert_eq!(count, 1248);

        let Ok(other) = registry.get(&RoomId::from("room-2")).await else {
            panic!("room-2 missing");
        };
        assert_eq!(other.member_count, 892);
    }

    #[tokio::test]
    async fn investment_adds_to_total() {
        let registry = registry();
        let Ok(total) = registry
            .record_investment(&RoomId::from("room-2"), 800.0, Utc::now())
            .await
        else {
            panic!("invest failed");
        };
        assert_eq!(total, 90_000.0);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let registry = registry();
        let missing = RoomId::from("room-9");
        let result = registry.record_join(&missing, Utc::now()).await;
        assert_eq!(result, Err(MarketError::RoomNotFound(missing)));
    }

    #[tokio::test]
    async fn insert_appends_to_listing() {
        let registry = registry();
        assert!(registry.insert(room("room-3", 0, 0.0, 10.0)).await.is_ok());
        assert!(registry.insert(room("room-3", 0, 0.0, 10.0)).await.is_err());

        let ids: Vec<String> = registry
            .list()
            .await
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, ["room-1", "room-2", "room-3"]);
        assert_eq!(registry.len().await, 3);
        assert!(!registry.is_empty().await);
    }
}
