//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//! - レジストリと MessagePusher の両方から接続が取り除かれること
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加中の接続の切断
//! - エッジケース：既に削除済みの接続の切断（何もしない）
//!
//! 残りのメンバーへの退出通知は行わない。

use std::sync::Arc;

use crate::domain::{Connection, ConnectionId, ConnectionRegistry, MessagePusher};

/// 切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Registry（接続状態の唯一の情報源）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// 削除した接続レコード（既に存在しなかった場合は `None`）
    pub async fn execute(&self, id: ConnectionId) -> Option<Connection> {
        // 1. Registry から削除
        let removed = self.registry.unregister(&id).await;

        // 2. MessagePusher から送信チャネルを登録解除
        self.message_pusher.unregister_client(&id).await;

        removed
    }

    /// 残りの接続数を取得
    pub async fn count_remaining_connections(&self) -> usize {
        self.registry.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DisplayName, Membership, RoomId, message_pusher::MockMessagePusher},
        infrastructure::repository::InMemoryConnectionRegistry,
    };

    #[tokio::test]
    async fn test_disconnect_removes_connection() {
        // テスト項目: 切断するとレジストリから削除され、他のメンバーは残る
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let room = RoomId::new("ROOM1".to_string()).unwrap();
        let alice = ConnectionId::generate();
        let bob = ConnectionId::generate();
        for (id, name) in [(alice, "Alice"), (bob, "Bob")] {
            registry
                .bind(
                    id,
                    Membership::new(room.clone(), DisplayName::new(name.to_string()).unwrap()),
                )
                .await;
        }
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_unregister_client()
            .withf(move |id| *id == bob)
            .times(1)
            .return_const(());
        // 退出通知はブロードキャストしない
        pusher.expect_broadcast().times(0);
        let usecase = DisconnectParticipantUseCase::new(registry.clone(), Arc::new(pusher));

        // when (操作):
        let removed = usecase.execute(bob).await;

        // then (期待する結果):
        assert_eq!(removed.map(|c| c.id), Some(bob));
        assert!(registry.lookup(&bob).await.is_none());
        let members = registry.members_of(&room).await;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, alice);
        assert_eq!(usecase.count_remaining_connections().await, 1);
    }

    #[tokio::test]
    async fn test_disconnect_absent_connection_is_noop() {
        // テスト項目: 存在しない接続の切断はエラーにならない
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let mut pusher = MockMessagePusher::new();
        pusher.expect_unregister_client().times(1).return_const(());
        let usecase = DisconnectParticipantUseCase::new(registry, Arc::new(pusher));

        // when (操作):
        let removed = usecase.execute(ConnectionId::generate()).await;

        // then (期待する結果):
        assert!(removed.is_none());
        assert_eq!(usecase.count_remaining_connections().await, 0);
    }
}
