//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    domain::{ConnectionId, Membership},
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// The task ends when the channel is closed or when a write to the socket fails.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();

    // Create a channel for this connection to receive relayed messages
    let (tx, rx) = mpsc::unbounded_channel();
    state
        .connect_participant_usecase
        .execute(connection_id, tx)
        .await;
    tracing::info!("Connection '{}' accepted", connection_id);

    let (sender, mut receiver) = socket.split();
    let state_clone = state.clone();

    // Spawn a task to receive directives from this connection
    let recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_directive(&state_clone, connection_id, text.as_str()).await;
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                // axum answers pings itself; binary frames carry no directives
                _ => {}
            }
        }
    });

    // Spawn a task to push relayed messages to this connection
    let send_task = pusher_loop(rx, sender);

    close_session(&state, connection_id, recv_task, send_task).await;
}

/// Wait for either half of the session to finish, stop the other, then unregister.
///
/// The aborted task is awaited before unregistering so that a directive still
/// in flight cannot bind the connection again after it has been removed.
async fn close_session(
    state: &AppState,
    connection_id: ConnectionId,
    mut recv_task: JoinHandle<()>,
    mut send_task: JoinHandle<()>,
) {
    tokio::select! {
        _ = &mut recv_task => {
            send_task.abort();
            let _ = send_task.await;
        }
        _ = &mut send_task => {
            recv_task.abort();
            let _ = recv_task.await;
        }
    };

    let removed = state
        .disconnect_participant_usecase
        .execute(connection_id)
        .await;
    match removed.and_then(|connection| connection.membership) {
        Some(membership) => tracing::info!(
            "Connection '{}' ('{}' in room '{}') disconnected",
            connection_id,
            membership.display_name,
            membership.room
        ),
        None => tracing::info!("Connection '{}' disconnected before joining", connection_id),
    }
    tracing::debug!(
        "{} connections remaining",
        state
            .disconnect_participant_usecase
            .count_remaining_connections()
            .await
    );
}

/// Interpret one inbound text frame.
///
/// Malformed frames, invalid joins and chats from unjoined connections are
/// logged and dropped; the connection stays open and nothing is sent back.
pub(crate) async fn handle_directive(state: &AppState, connection_id: ConnectionId, raw: &str) {
    let directive = match serde_json::from_str::<ClientMessage>(raw) {
        Ok(directive) => directive,
        Err(e) => {
            tracing::warn!(
                "Discarding malformed directive from '{}': {}",
                connection_id,
                e
            );
            return;
        }
    };

    match directive {
        ClientMessage::Join(payload) => match Membership::try_from(payload) {
            Ok(membership) => {
                state
                    .join_room_usecase
                    .execute(connection_id, membership)
                    .await;
            }
            Err(e) => {
                tracing::warn!("Discarding invalid join from '{}': {}", connection_id, e);
            }
        },
        ClientMessage::Chat(payload) => {
            if let Err(e) = state
                .send_message_usecase
                .execute(connection_id, payload.message)
                .await
            {
                tracing::warn!("Discarding chat from '{}': {}", connection_id, e);
            }
        }
    }
}
