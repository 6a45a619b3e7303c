//! Room service: join, invest, and create pump rooms.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Duration;
use serde::Deserialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use super::auth::AuthSession;
use super::backend::{RoomAction, RoomBackend};
use crate::domain::{
    Clock, EventBus, MarketEvent, PumpRoom, RoomId, RoomRegistry, SocialLinks, TokenId, TokenStore,
};
use crate::error::MarketError;
use crate::view::aggregate::total_members;
use crate::view::filter::{RoomFilter, filter_rooms};

/// Length of a newly created campaign.
pub const CAMPAIGN_LENGTH_DAYS: i64 = 30;

/// Input of the room creation form.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewRoom {
    /// Room name (required).
    #[serde(default)]
    pub name: String,
    /// Pitch text.
    #[serde(default)]
    pub description: String,
    /// Token to pump (required).
    #[serde(default)]
    pub token_id: String,
    /// Funding goal in USD (required, positive).
    #[serde(default)]
    pub target_amount: Option<f64>,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Orchestration layer for pump-room actions.
///
/// Every action follows the same pattern: check the session → validate
/// input → submit to the [`RoomBackend`] → mutate the registry → emit an
/// event. Checks that fail return before the backend is called, so a
/// rejected action never mutates anything.
#[derive(Debug)]
pub struct RoomService {
    rooms: Arc<RoomRegistry>,
    tokens: Arc<TokenStore>,
    auth: Arc<AuthSession>,
    backend: Arc<dyn RoomBackend>,
    event_bus: EventBus,
    clock: Arc<dyn Clock>,
    /// Joined rooms per user ID.
    memberships: RwLock<HashMap<String, HashSet<RoomId>>>,
}

impl RoomService {
    /// Creates a new `RoomService`.
    #[must_use]
    pub fn new(
        rooms: Arc<RoomRegistry>,
        tokens: Arc<TokenStore>,
        auth: Arc<AuthSession>,
        backend: Arc<dyn RoomBackend>,
        event_bus: EventBus,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            rooms,
            tokens,
            auth,
            backend,
            event_bus,
            clock,
            memberships: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a reference to the inner [`RoomRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<RoomRegistry> {
        &self.rooms
    }

    /// Returns the room with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::RoomNotFound`] if the room does not exist.
    pub async fn room(&self, room_id: &RoomId) -> Result<PumpRoom, MarketError> {
        self.rooms.get(room_id).await
    }

    /// Lists rooms matching `filter`. The joined filter is empty when
    /// nobody is signed in.
    pub async fn list_rooms(&self, filter: RoomFilter) -> Vec<PumpRoom> {
        let rooms = self.rooms.list().await;
        let joined = self.joined_rooms().await;
        filter_rooms(&rooms, filter, &joined, self.clock.now())
    }

    /// Rooms the signed-in user has joined.
    pub async fn joined_rooms(&self) -> HashSet<RoomId> {
        let Some(user) = self.auth.user().await else {
            return HashSet::new();
        };
        self.memberships
            .read()
            .await
            .get(&user.id)
            .cloned()
            .unwrap_or_default()
    }

    /// Total members across all rooms.
    pub async fn total_members(&self) -> u64 {
        total_members(&self.rooms.list().await)
    }

    /// Joins a room as the signed-in user.
    ///
    /// Joining again adds another member; there is no per-user guard.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AuthenticationRequired`] when signed out,
    /// [`MarketError::RoomNotFound`] for unknown rooms, and
    /// [`MarketError::OperationFailed`] if the backend rejects the join.
    pub async fn join(&self, room_id: &RoomId) -> Result<PumpRoom, MarketError> {
        let user = self.auth.require_user().await?;
        self.rooms.get(room_id).await?;

        self.settle(RoomAction::Join {
            room_id: room_id.clone(),
            user_id: user.id.clone(),
        })
        .await?;

        let member_count = self.rooms.record_join(room_id, self.clock.now()).await?;
        self.memberships
            .write()
            .await
            .entry(user.id.clone())
            .or_default()
            .insert(room_id.clone());

        let _ = self.event_bus.publish(MarketEvent::RoomJoined {
            room_id: room_id.clone(),
            user_id: user.id.clone(),
            member_count,
            timestamp: self.clock.now(),
        });

        tracing::info!(%room_id, user_id = %user.id, member_count, "room joined");
        self.rooms.get(room_id).await
    }

    /// Pledges `amount` USD to a room as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidAmount`] unless `amount` is a finite
    /// positive number (checked before the session),
    /// [`MarketError::AuthenticationRequired`] when signed out,
    /// [`MarketError::RoomNotFound`] for unknown rooms, and
    /// [`MarketError::OperationFailed`] if the backend rejects it.
    pub async fn invest(&self, room_id: &RoomId, amount: f64) -> Result<PumpRoom, MarketError> {
        validate_amount(amount)?;
        let user = self.auth.require_user().await?;
        self.rooms.get(room_id).await?;

        self.settle(RoomAction::Invest {
            room_id: room_id.clone(),
            user_id: user.id.clone(),
            amount,
        })
        .await?;

        let total_invested = self
            .rooms
            .record_investment(room_id, amount, self.clock.now())
            .await?;

        let _ = self.event_bus.publish(MarketEvent::RoomInvested {
            room_id: room_id.clone(),
            user_id: user.id.clone(),
            amount,
            total_invested,
            timestamp: self.clock.now(),
        });

        tracing::info!(%room_id, user_id = %user.id, amount, total_invested, "room investment");
        self.rooms.get(room_id).await
    }

    /// Opens a new room owned by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AuthenticationRequired`] when signed out,
    /// [`MarketError::MissingField`] or [`MarketError::InvalidAmount`] for
    /// an incomplete form, [`MarketError::TokenNotFound`] for an unlisted
    /// token, and [`MarketError::OperationFailed`] if the backend rejects it.
    pub async fn create_room(&self, form: NewRoom) -> Result<PumpRoom, MarketError> {
        let user = self.auth.require_user().await?;

        if form.name.trim().is_empty() {
            return Err(MarketError::MissingField("name"));
        }
        let token_id = TokenId::from(form.token_id.trim());
        if token_id.is_blank() {
            return Err(MarketError::MissingField("token_id"));
        }
        let target_amount = form
            .target_amount
            .ok_or(MarketError::MissingField("target_amount"))?;
        validate_amount(target_amount)?;
        self.tokens.get(&token_id).await?;

        let room_id = RoomId::generate();
        self.settle(RoomAction::Create {
            room_id: room_id.clone(),
            token_id: token_id.clone(),
            user_id: user.id.clone(),
        })
        .await?;

        let now = self.clock.now();
        let room = PumpRoom {
            id: room_id.clone(),
            name: form.name.trim().to_string(),
            description: form.description,
            image_url: form.image_url,
            token_id: token_id.clone(),
            creator_id: user.id.clone(),
            target_amount,
            total_invested: 0.0,
            member_count: 0,
            is_active: true,
            end_date: now + Duration::days(CAMPAIGN_LENGTH_DAYS),
            created_at: now,
            updated_at: now,
            tags: form.tags,
            social_links: SocialLinks::default(),
        };
        self.rooms.insert(room.clone()).await?;

        let _ = self.event_bus.publish(MarketEvent::RoomCreated {
            room_id: room_id.clone(),
            token_id,
            name: room.name.clone(),
            target_amount,
            timestamp: now,
        });

        tracing::info!(%room_id, user_id = %user.id, "room created");
        Ok(room)
    }

    /// Submits `action` to the backend, turning a rejection into
    /// [`MarketError::OperationFailed`].
    async fn settle(&self, action: RoomAction) -> Result<(), MarketError> {
        match self.backend.submit(&action).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(action = action.kind(), error = %err, "room action failed");
                match err {
                    MarketError::OperationFailed(_) => Err(err),
                    other => Err(MarketError::OperationFailed(other.to_string())),
                }
            }
        }
    }
}

/// Accepts finite amounts strictly greater than zero.
fn validate_amount(amount: f64) -> Result<(), MarketError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(MarketError::InvalidAmount(format!(
            "{amount} is not a positive number"
        )))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use async_trait::async_trait;
    use tokio::time::Instant;
    use tokio_test::assert_err;

    use super::*;
    use crate::domain::SystemClock;
    use crate::seed;
    use crate::service::auth::fixtures::session;
    use crate::service::backend::SimulatedBackend;

    #[derive(Debug)]
    struct RejectingBackend;

    #[async_trait]
    impl RoomBackend for RejectingBackend {
        async fn submit(&self, _action: &RoomAction) -> Result<(), MarketError> {
            Err(MarketError::Internal("ledger unavailable".to_string()))
        }
    }

    fn make_service_with(backend: Arc<dyn RoomBackend>) -> (RoomService, Arc<AuthSession>) {
        let data = seed::load();
        let Ok(rooms) = RoomRegistry::from_seed(data.rooms) else {
            panic!("valid rooms");
        };
        let Ok(tokens) = TokenStore::from_seed(data.tokens) else {
            panic!("valid tokens");
        };
        let auth = Arc::new(session());
        let service = RoomService::new(
            Arc::new(rooms),
            Arc::new(tokens),
            Arc::clone(&auth),
            backend,
            EventBus::new(100),
            Arc::new(SystemClock),
        );
        (service, auth)
    }

    fn make_service() -> (RoomService, Arc<AuthSession>) {
        make_service_with(Arc::new(SimulatedBackend::default()))
    }

    async fn snapshot(service: &RoomService) -> Vec<PumpRoom> {
        service.registry().list().await
    }

    #[tokio::test(start_paused = true)]
    async fn join_increments_exactly_one_room() {
        let (service, auth) = make_service();
        auth.login().await;
        let before = snapshot(&service).await;
        let id = RoomId::from("room-1");

        let Ok(room) = service.join(&id).await else {
            panic!("join failed");
        };

        let after = snapshot(&service).await;
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == id {
                assert_eq!(new.member_count, old.member_count + 1);
                assert_eq!(room.member_count, new.member_count);
            } else {
                assert_eq!(new.member_count, old.member_count);
                assert_eq!(new.total_invested, old.total_invested);
            }
        }
        assert!(service.joined_rooms().await.contains(&id));
    }

    #[tokio::test(start_paused = true)]
    async fn join_waits_for_settlement() {
        let (service, auth) = make_service();
        auth.login().await;
        let start = Instant::now();
        assert!(service.join(&RoomId::from("room-2")).await.is_ok());
        assert!(start.elapsed() >= std::time::Duration::from_millis(1_000));
    }

    #[tokio::test]
    async fn join_requires_authentication() {
        let (service, _auth) = make_service();
        let before = snapshot(&service).await;
        let err = assert_err!(service.join(&RoomId::from("room-1")).await);
        assert_eq!(err, MarketError::AuthenticationRequired);
        assert_eq!(snapshot(&service).await, before);
    }

    #[tokio::test]
    async fn negative_investment_is_rejected_without_mutation() {
        let (service, auth) = make_service();
        auth.login().await;
        let id = RoomId::from("room-1");
        let Ok(before) = service.room(&id).await else {
            panic!("room missing");
        };

        let err = assert_err!(service.invest(&id, -5.0).await);
        assert!(matches!(err, MarketError::InvalidAmount(_)));
        assert!(err.is_validation());

        let Ok(after) = service.room(&id).await else {
            panic!("room missing");
        };
        assert_eq!(after.total_invested, before.total_invested);
    }

    #[tokio::test]
    async fn signed_out_negative_investment_is_a_validation_error() {
        let (service, _auth) = make_service();
        let before = snapshot(&service).await;

        let err = assert_err!(service.invest(&RoomId::from("room-1"), -5.0).await);
        assert!(err.is_validation());
        assert!(matches!(err, MarketError::InvalidAmount(_)));
        assert_eq!(snapshot(&service).await, before);

        let err = assert_err!(service.invest(&RoomId::from("room-1"), 5.0).await);
        assert_eq!(err, MarketError::AuthenticationRequired);
    }

    #[tokio::test]
    async fn zero_and_nan_investments_are_rejected() {
        let (service, auth) = make_service();
        auth.login().await;
        let id = RoomId::from("room-1");
        assert_err!(service.invest(&id, 0.0).await);
        assert_err!(service.invest(&id, f64::NAN).await);
        assert_err!(service.invest(&id, f64::INFINITY).await);
    }

    #[tokio::test(start_paused = true)]
    async fn investment_increases_total_and_emits_event() {
        let (service, auth) = make_service();
        auth.login().await;
        let mut rx = service.event_bus.subscribe();
        let id = RoomId::from("room-3");

        let Ok(room) = service.invest(&id, 250.0).await else {
            panic!("investment failed");
        };
        assert_eq!(room.total_invested, 35_000.0);

        let Ok(event) = rx.recv().await else {
            panic!("expected event");
        };
        assert_eq!(event.event_type_str(), "room_invested");
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_room_is_reported() {
        let (service, auth) = make_service();
        auth.login().await;
        let err = assert_err!(service.join(&RoomId::from("room-404")).await);
        assert_eq!(err, MarketError::RoomNotFound(RoomId::from("room-404")));
    }

    #[tokio::test]
    async fn backend_rejection_becomes_operation_failure() {
        let (service, auth) = make_service_with(Arc::new(RejectingBackend));
        auth.login().await;
        let id = RoomId::from("room-1");
        let Ok(before) = service.room(&id).await else {
            panic!("room missing");
        };

        let err = assert_err!(service.join(&id).await);
        assert!(matches!(err, MarketError::OperationFailed(_)));

        let Ok(after) = service.room(&id).await else {
            panic!("room missing");
        };
        assert_eq!(after.member_count, before.member_count);
    }

    #[tokio::test(start_paused = true)]
    async fn create_room_validates_and_inserts() {
        let (service, auth) = make_service();
        auth.login().await;

        let incomplete = NewRoom {
            name: "Juno Builders".to_string(),
            ..NewRoom::default()
        };
        let err = assert_err!(service.create_room(incomplete).await);
        assert_eq!(err, MarketError::MissingField("token_id"));

        let unlisted = NewRoom {
            name: "Ghost".to_string(),
            token_id: "ghost".to_string(),
            target_amount: Some(1_000.0),
            ..NewRoom::default()
        };
        let err = assert_err!(service.create_room(unlisted).await);
        assert_eq!(err, MarketError::TokenNotFound(TokenId::from("ghost")));

        let form = NewRoom {
            name: "Juno Builders".to_string(),
            token_id: "juno".to_string(),
            target_amount: Some(40_000.0),
            ..NewRoom::default()
        };
        let Ok(room) = service.create_room(form).await else {
            panic!("creation failed");
        };
        assert_eq!(room.member_count, 0);
        assert_eq!(room.total_invested, 0.0);
        assert!(room.is_active);
        assert_eq!(service.registry().len().await, 5);
        assert!(service.room(&room.id).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn joined_filter_follows_memberships() {
        let (service, auth) = make_service();
        assert!(service.list_rooms(RoomFilter::Joined).await.is_empty());

        auth.login().await;
        assert!(service.join(&RoomId::from("room-4")).await.is_ok());
        let joined = service.list_rooms(RoomFilter::Joined).await;
        assert_eq!(joined.len(), 1);
        assert_eq!(joined.first().map(|r| r.id.as_str()), Some("room-4"));

        auth.logout().await;
        assert!(service.list_rooms(RoomFilter::Joined).await.is_empty());
    }

    #[tokio::test]
    async fn total_members_sums_seed_rooms() {
        let (service, _auth) = make_service();
        assert_eq!(service.total_members().await, 1247 + 892 + 2156 + 567);
    }
}
