//! UseCase: ルーム参加処理
//!
//! join は送りっぱなしで、参加者本人にも他のメンバーにも通知しない。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, Membership};

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl JoinRoomUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム参加を実行
    ///
    /// 既に参加中の場合はルームと表示名を上書きする（最後の join が優先）。
    pub async fn execute(&self, id: ConnectionId, membership: Membership) {
        tracing::info!(
            "Connection '{}' joined room '{}' as '{}'",
            id,
            membership.room,
            membership.display_name
        );
        self.registry.bind(id, membership).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DisplayName, RoomId},
        infrastructure::repository::InMemoryConnectionRegistry,
    };

    fn membership(room: &str, name: &str) -> Membership {
        Membership::new(
            RoomId::new(room.to_string()).unwrap(),
            DisplayName::new(name.to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_join_binds_connection() {
        // テスト項目: join すると接続にルームと表示名が設定される
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = JoinRoomUseCase::new(registry.clone());
        let id = ConnectionId::generate();
        registry.register(id).await;

        // when (操作):
        usecase.execute(id, membership("ROOM1", "Alice")).await;

        // then (期待する結果):
        let connection = registry.lookup(&id).await.unwrap();
        assert_eq!(connection.membership, Some(membership("ROOM1", "Alice")));
    }

    #[tokio::test]
    async fn test_second_join_wins() {
        // テスト項目: 2 回目の join でルームと表示名が上書きされる
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = JoinRoomUseCase::new(registry.clone());
        let id = ConnectionId::generate();
        registry.register(id).await;
        usecase.execute(id, membership("ROOM1", "Alice")).await;

        // when (操作):
        usecase.execute(id, membership("ROOM2", "Al")).await;

        // then (期待する結果):
        let connection = registry.lookup(&id).await.unwrap();
        assert_eq!(connection.membership, Some(membership("ROOM2", "Al")));
        assert_eq!(registry.count().await, 1);
    }
}
