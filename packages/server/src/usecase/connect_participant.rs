//! UseCase: 接続受け付け処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - 新しい接続がレジストリ（未参加状態）と MessagePusher の両方に登録されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規接続
//! - エッジケース：同じ接続 ID での重複登録

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, MessagePusher, PusherChannel};

/// 接続受け付けのユースケース
pub struct ConnectParticipantUseCase {
    /// Registry（接続状態の唯一の情報源）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// 接続受け付けを実行
    ///
    /// # Arguments
    ///
    /// * `id` - トランスポート層が採番した接続 ID
    /// * `sender` - 接続へのメッセージ送信用チャンネル
    pub async fn execute(&self, id: ConnectionId, sender: PusherChannel) {
        // 1. Registry に未参加状態で登録
        self.registry.register(id).await;

        // 2. MessagePusher に送信チャネルを登録
        self.message_pusher.register_client(id, sender).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::message_pusher::MockMessagePusher,
        infrastructure::repository::InMemoryConnectionRegistry,
    };
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_connect_registers_unjoined_connection() {
        // テスト項目: 接続するとレジストリに未参加状態で登録され、送信チャネルも登録される
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let mut pusher = MockMessagePusher::new();
        let id = ConnectionId::generate();
        pusher
            .expect_register_client()
            .withf(move |registered, _| *registered == id)
            .times(1)
            .return_const(());
        let usecase = ConnectParticipantUseCase::new(registry.clone(), Arc::new(pusher));
        let (tx, _rx) = mpsc::unbounded_channel();

        // when (操作):
        usecase.execute(id, tx).await;

        // then (期待する結果):
        let connection = registry.lookup(&id).await.unwrap();
        assert!(!connection.is_joined());
        assert_eq!(registry.count().await, 1);
    }

    #[tokio::test]
    async fn test_connect_same_id_twice_keeps_single_entry() {
        // テスト項目: 同じ接続 ID で 2 回接続処理してもエントリは 1 つ
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let mut pusher = MockMessagePusher::new();
        pusher.expect_register_client().times(2).return_const(());
        let usecase = ConnectParticipantUseCase::new(registry.clone(), Arc::new(pusher));
        let id = ConnectionId::generate();
        let (tx, _rx) = mpsc::unbounded_channel();

        // when (操作):
        usecase.execute(id, tx.clone()).await;
        usecase.execute(id, tx).await;

        // then (期待する結果):
        assert_eq!(registry.count().await, 1);
    }
}
