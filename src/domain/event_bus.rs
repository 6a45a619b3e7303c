//! Broadcast channel for price ticks and room activity.
//!
//! [`MarketService::tick`](crate::service::MarketService::tick) publishes a
//! `PricesTicked` event per tick; [`RoomService`](crate::service::RoomService)
//! publishes one event per settled join, investment or room creation. Each
//! WebSocket connection holds its own receiver and trims what it forwards
//! through its subscription set.

use tokio::sync::broadcast;

use super::MarketEvent;

/// Fan-out of [`MarketEvent`]s to every connected client.
///
/// Capacity comes from `EVENT_BUS_CAPACITY`. A client that falls more than
/// that many events behind loses the oldest ones; the connection logs the
/// gap and carries on with the next tick.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<MarketEvent>,
}

impl EventBus {
    /// Creates a new `EventBus` with the given channel capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event to all connected clients.
    ///
    /// Returns how many receivers got it. With no client connected the
    /// event is dropped and 0 is returned; ticks keep running either way.
    pub fn publish(&self, event: MarketEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Opens a receiver for one WebSocket connection.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<MarketEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of open receivers, reported by `/health` as
    /// `ws_subscribers`.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::RoomId;
    use chrono::Utc;

    fn make_event(room: &str) -> MarketEvent {
        MarketEvent::RoomJoined {
            room_id: RoomId::from(room),
            user_id: "user-1".to_string(),
            member_count: 1,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn publish_without_receivers_returns_zero() {
        let bus = EventBus::new(100);
        assert_eq!(bus.publish(make_event("room-1")), 0);
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::new(100);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        assert_eq!(bus.publish(make_event("room-2")), 2);

        let Ok(e1) = rx1.recv().await else {
            panic!("rx1 failed");
        };
        let Ok(e2) = rx2.recv().await else {
            panic!("rx2 failed");
        };
        assert_eq!(e1.event_type_str(), e2.event_type_str());
        assert_eq!(e1.topic(), e2.topic());
    }

    #[tokio::test]
    async fn lagging_client_loses_oldest_events() {
        let bus = EventBus::new(1);
        let mut rx = bus.subscribe();
        bus.publish(make_event("room-1"));
        bus.publish(make_event("room-2"));

        let Err(broadcast::error::RecvError::Lagged(1)) = rx.recv().await else {
            panic!("expected a one-event gap");
        };
        let Ok(event) = rx.recv().await else {
            panic!("latest event kept");
        };
        let MarketEvent::RoomJoined { room_id, .. } = event else {
            panic!("unexpected event");
        };
        assert_eq!(room_id.as_str(), "room-2");
    }

    #[test]
    fn receiver_count_tracks_subscribers() {
        let bus = EventBus::new(0);
        assert_eq!(bus.receiver_count(), 0);

        let rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        assert_eq!(bus.receiver_count(), 2);

        drop(rx1);
        assert_eq!(bus.receiver_count(), 1);
    }
}
