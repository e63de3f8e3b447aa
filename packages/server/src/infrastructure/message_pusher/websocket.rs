//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理
//! - 中継メッセージを JSON にシリアライズして送信（broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。
//! 受信側（ソケットへの書き込みタスク）が終了しているチャネルは書き込み不可とみなします。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, RelayedMessage},
    infrastructure::dto::websocket::ServerMessage,
};

/// WebSocket を使った MessagePusher 実装
///
/// ```ignore
/// let pusher = WebSocketMessagePusher::new(Arc::new(Mutex::new(HashMap::new())));
/// pusher.register_client(id, tx).await;
/// let delivered = pusher.broadcast(vec![id], &message).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// 接続 ID → 送信チャネル
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }

    fn serialize(message: &RelayedMessage) -> Result<String, MessagePushError> {
        serde_json::to_string(&ServerMessage::from(message))
            .map_err(|e| MessagePushError::Serialization(e.to_string()))
    }
}

/// チャネルが書き込み可能な場合のみ送信する
fn send_if_writable(sender: &PusherChannel, payload: String) -> Result<(), MessagePushError> {
    if sender.is_closed() {
        return Err(MessagePushError::PushFailed("channel closed".to_string()));
    }
    sender
        .send(payload)
        .map_err(|e| MessagePushError::PushFailed(e.to_string()))
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(id, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", id);
    }

    async fn unregister_client(&self, id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(id);
        tracing::debug!("Connection '{}' unregistered from MessagePusher", id);
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        message: &RelayedMessage,
    ) -> Result<usize, MessagePushError> {
        let payload = Self::serialize(message)?;

        // 送信先のチャネルだけ複製してロックを解放してから送信する
        let resolved: Vec<(ConnectionId, Option<PusherChannel>)> = {
            let clients = self.clients.lock().await;
            targets
                .into_iter()
                .map(|target| (target, clients.get(&target).cloned()))
                .collect()
        };

        let mut delivered = 0;
        for (target, sender) in resolved {
            let Some(sender) = sender else {
                tracing::warn!("Connection '{}' not found during broadcast, skipping", target);
                continue;
            };
            // ブロードキャストでは一部の送信失敗を許容
            match send_if_writable(&sender, payload.clone()) {
                Ok(()) => {
                    delivered += 1;
                    tracing::debug!("Broadcasted message to connection '{}'", target);
                }
                Err(e) => {
                    tracing::warn!("Failed to push message to connection '{}': {}", target, e);
                }
            }
        }

        Ok(delivered)
    }
}
