//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! dispatching incoming commands and forwarding filtered events.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use super::messages::{WsCommand, WsMessage, WsMessageType};
use super::subscription::SubscriptionManager;
use crate::api::dto::TokenDetailResponse;
use crate::domain::{MarketEvent, TokenId};
use crate::service::MarketService;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads commands from the client and dispatches them.
/// - Forwards matching events from the [`broadcast::Receiver`] to the client.
pub async fn run_connection(
    socket: WebSocket,
    mut event_rx: broadcast::Receiver<MarketEvent>,
    market: Arc<MarketService>,
) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut subs = SubscriptionManager::new();

    loop {
        tokio::select! {
            // Incoming message from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let response = handle_text_message(&text, &mut subs, &market).await;
                        if let Some(resp_json) = response
                            && ws_tx.send(Message::text(resp_json)).await.is_err()
                        {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
            // Event from EventBus
            event = event_rx.recv() => {
                match event {
                    Ok(market_event) => {
                        let Some(visible) = subs.filter(&market_event) else {
                            continue;
                        };
                        let payload = serde_json::to_value(&visible).unwrap_or_default();
                        let msg = WsMessage::new(
                            uuid::Uuid::new_v4().to_string(),
                            WsMessageType::Event,
                            payload,
                        );
                        if let Some(json) = msg.to_json()
                            && ws_tx.send(Message::text(json)).await.is_err()
                        {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(lagged = n, "ws client lagged behind event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!("ws connection closed");
}

/// Handles a text message from the client, returning an optional JSON response.
async fn handle_text_message(
    text: &str,
    subs: &mut SubscriptionManager,
    market: &MarketService,
) -> Option<String> {
    let Ok(msg) = serde_json::from_str::<WsMessage>(text) else {
        return WsMessage::error("", 400, "malformed JSON").to_json();
    };
    let Ok(command) = serde_json::from_value::<WsCommand>(msg.payload) else {
        return WsMessage::error(msg.id, 404, "unknown command").to_json();
    };

    let payload = match command {
        WsCommand::Subscribe {
            token_ids,
            room_ids,
        } => {
            subs.subscribe(&token_ids, &room_ids);
            let (all_tokens, all_rooms) = subs.wildcards();
            serde_json::json!({
                "subscribed_tokens": token_ids,
                "subscribed_rooms": room_ids,
                "count": subs.count(),
                "all_tokens": all_tokens,
                "all_rooms": all_rooms,
            })
        }
        WsCommand::Unsubscribe {
            token_ids,
            room_ids,
        } => {
            subs.unsubscribe(&token_ids, &room_ids);
            serde_json::json!({
                "unsubscribed_tokens": token_ids,
                "unsubscribed_rooms": room_ids,
                "remaining_count": subs.count(),
            })
        }
        WsCommand::GetToken { token_id } => {
            match market.token(&TokenId::from(token_id)).await {
                Ok(token) => serde_json::to_value(TokenDetailResponse::from(token))
                    .unwrap_or_default(),
                Err(err) => {
                    return WsMessage::error(msg.id, err.error_code(), &err.to_string()).to_json();
                }
            }
        }
    };

    WsMessage::new(msg.id, WsMessageType::Response, payload).to_json()
}
