//! Repository trait 定義
//!
//! 接続レジストリのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{Connection, ConnectionId, Membership, RoomId};

/// Connection Registry trait
///
/// 生きている接続と（ルーム, 表示名）の対応を保持する唯一の情報源。
/// 全ての操作は全域関数で、「見つからない」はエラーではなく
/// `None` や空の `Vec` で表現する。
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 未参加状態の接続を登録
    ///
    /// 既に登録済みの場合は何もしない（エントリは重複しない）。
    async fn register(&self, id: ConnectionId);

    /// ルームと表示名を設定（上書き）
    ///
    /// 未登録の接続に対しては register してから bind したのと同じ結果になる。
    async fn bind(&self, id: ConnectionId, membership: Membership);

    /// 接続を削除し、削除したレコードを返す
    ///
    /// 存在しない場合は何もせず `None`。
    async fn unregister(&self, id: &ConnectionId) -> Option<Connection>;

    /// 指定したルームに参加中の全ての接続を取得（順序は不定）
    async fn members_of(&self, room: &RoomId) -> Vec<Connection>;

    /// 接続レコードを取得
    async fn lookup(&self, id: &ConnectionId) -> Option<Connection>;

    /// 登録中の接続数（未参加を含む）
    async fn count(&self) -> usize;
}
