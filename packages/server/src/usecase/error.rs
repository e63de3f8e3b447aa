//! UseCase error types.

use thiserror::Error;

/// メッセージ送信のエラー
///
/// いずれも送信者には通知されない（ログに残して破棄する）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    /// 送信者がレジストリに存在しない（切断と競合した場合など）
    #[error("sender '{0}' is not registered")]
    SenderNotRegistered(String),

    /// 送信者がまだどのルームにも join していない
    #[error("sender '{0}' has not joined a room")]
    SenderNotJoined(String),

    /// ブロードキャストそのものに失敗（シリアライズ失敗など）
    #[error("broadcast failed: {0}")]
    BroadcastFailed(String),
}
