//! InMemory Connection Registry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! 単一の Mutex で保護した HashMap をインメモリ DB として使用します。
//!
//! ## ロックの保持範囲
//!
//! ロックは各操作の読み書きの間だけ保持し、呼び出し元にはレコードのコピーを返します。
//! ブロードキャストの送信中にロックが保持されることはありません。
//!
//! ## ルームの導出
//!
//! ルーム → メンバーのインデックスは持たず、`members_of` のたびに
//! 各接続の現在のルームから導出します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Connection, ConnectionId, ConnectionRegistry, Membership, RoomId};

/// インメモリ Connection Registry 実装
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    /// 接続 ID → 接続レコード
    connections: Mutex<HashMap<ConnectionId, Connection>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, id: ConnectionId) {
        let mut connections = self.connections.lock().await;
        connections
            .entry(id)
            .or_insert_with(|| Connection::unjoined(id));
        tracing::debug!("Connection '{}' registered", id);
    }

    async fn bind(&self, id: ConnectionId, membership: Membership) {
        let mut connections = self.connections.lock().await;
        connections
            .entry(id)
            .or_insert_with(|| Connection::unjoined(id))
            .bind(membership);
    }

    async fn unregister(&self, id: &ConnectionId) -> Option<Connection> {
        let mut connections = self.connections.lock().await;
        let removed = connections.remove(id);
        if removed.is_some() {
            tracing::debug!("Connection '{}' unregistered", id);
        }
        removed
    }

    async fn members_of(&self, room: &RoomId) -> Vec<Connection> {
        let connections = self.connections.lock().await;
        connections
            .values()
            .filter(|connection| connection.is_member_of(room))
            .cloned()
            .collect()
    }

    async fn lookup(&self, id: &ConnectionId) -> Option<Connection> {
        let connections = self.connections.lock().await;
        connections.get(id).cloned()
    }

    async fn count(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }
}
