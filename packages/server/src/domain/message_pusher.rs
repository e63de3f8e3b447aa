//! MessagePusher trait 定義
//!
//! 接続へのメッセージ送信（通知）のインターフェースを定義します。
//! レジストリとは独立しており、送信チャネルの管理と送信のみを担います。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, RelayedMessage};

/// 接続ごとの送信チャネル（シリアライズ済みペイロードを運ぶ）
///
/// 上限のないキュー。読まないクライアントの分はソケットが閉じるまで溜まり続ける。
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
///
/// 送信はベストエフォート。書き込めない接続はエラーとして報告するだけで、
/// 呼び出し側をパニックさせたり他の接続への送信を妨げたりしない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続の送信チャネルを登録
    async fn register_client(&self, id: ConnectionId, sender: PusherChannel);

    /// 接続の送信チャネルを登録解除
    async fn unregister_client(&self, id: &ConnectionId);

    /// 複数の接続にメッセージを送信
    ///
    /// 各送信先は独立して扱い、一部の失敗はスキップする。
    /// 戻り値は実際に書き込めた送信先の数。
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        message: &RelayedMessage,
    ) -> Result<usize, MessagePushError>;
}
