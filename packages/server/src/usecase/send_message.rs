//! UseCase: メッセージ送信処理（ルームへのブロードキャスト）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者のルームの解決と、ルーム内全メンバー（送信者を含む）への配送
//!
//! ### なぜこのテストが必要か
//! - 送信者の表示名はクライアントの申告ではなくレジストリから解決されること
//! - 送信者自身にもエコーされること（クライアントは自分のメッセージを受け取って描画する）
//! - 未参加の送信者からのメッセージは配送もレジストリの変更も起こさないこと
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム内の複数メンバーへの配送
//! - エッジケース：送信者のみのルーム、別ルームのメンバー
//! - 異常系：未参加 / 未登録の送信者

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, MessagePusher, RelayedMessage};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Registry（接続状態の唯一の情報源）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `sender_id` - メッセージを送った接続の ID
    /// * `text` - メッセージ本文
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConnectionId>)` - 配送を試みた接続 ID リスト（送信者を含む）
    /// * `Err(SendMessageError)` - 送信者が未参加などで破棄した
    pub async fn execute(
        &self,
        sender_id: ConnectionId,
        text: String,
    ) -> Result<Vec<ConnectionId>, SendMessageError> {
        // 1. 送信者のルームと表示名を解決
        let sender = self
            .registry
            .lookup(&sender_id)
            .await
            .ok_or_else(|| SendMessageError::SenderNotRegistered(sender_id.to_string()))?;
        let membership = sender
            .membership
            .ok_or_else(|| SendMessageError::SenderNotJoined(sender_id.to_string()))?;

        // 2. ブロードキャスト対象を取得（ロックはここで解放済み）
        let recipients: Vec<ConnectionId> = self
            .registry
            .members_of(&membership.room)
            .await
            .into_iter()
            .map(|connection| connection.id)
            .collect();

        // 3. MessagePusher を使ってブロードキャスト
        let message = RelayedMessage::new(text, membership.display_name);
        let delivered = self
            .message_pusher
            .broadcast(recipients.clone(), &message)
            .await
            .map_err(|e| SendMessageError::BroadcastFailed(e.to_string()))?;

        tracing::info!(
            "Relayed message from '{}' in room '{}' to {}/{} connections",
            message.display_name,
            membership.room,
            delivered,
            recipients.len()
        );

        Ok(recipients)
    }
}
