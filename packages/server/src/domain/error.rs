//! Domain error types.

use thiserror::Error;

/// Value Object の生成エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// ルーム ID が空（前後の空白を除いた結果）
    #[error("room id must not be empty")]
    EmptyRoomId,

    /// 表示名が空（前後の空白を除いた結果）
    #[error("display name must not be empty")]
    EmptyDisplayName,
}

/// MessagePusher のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// 送信先のチャネルが既に閉じている
    #[error("failed to push message: {0}")]
    PushFailed(String),

    /// 送信メッセージのシリアライズに失敗
    #[error("failed to serialize message: {0}")]
    Serialization(String),
}
