//! Entities.
//!
//! ルームは独立したエンティティとして保持しません。同じルーム ID に
//! 参加している接続の集合として、ブロードキャスト時に都度導出します。

use super::value_object::{ConnectionId, DisplayName, RoomId};

/// 参加中のルームと表示名の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub room: RoomId,
    pub display_name: DisplayName,
}

impl Membership {
    pub fn new(room: RoomId, display_name: DisplayName) -> Self {
        Self { room, display_name }
    }
}

/// 接続レコード
///
/// 受け付け直後は未参加（`membership == None`）。join のたびに上書きされる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: ConnectionId,
    pub membership: Option<Membership>,
}

impl Connection {
    /// 未参加状態の接続レコードを作成
    pub fn unjoined(id: ConnectionId) -> Self {
        Self {
            id,
            membership: None,
        }
    }

    pub fn is_joined(&self) -> bool {
        self.membership.is_some()
    }

    /// ルームと表示名を設定（既存の値は上書き）
    pub fn bind(&mut self, membership: Membership) {
        self.membership = Some(membership);
    }

    pub fn room(&self) -> Option<&RoomId> {
        self.membership.as_ref().map(|m| &m.room)
    }

    /// 指定したルームに参加しているか
    pub fn is_member_of(&self, room: &RoomId) -> bool {
        self.room() == Some(room)
    }
}

/// ルーム内に中継されるチャットメッセージ
///
/// 送信者の表示名は常にサーバー側のレジストリから解決したものを使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayedMessage {
    pub text: String,
    pub display_name: DisplayName,
}

impl RelayedMessage {
    pub fn new(text: String, display_name: DisplayName) -> Self {
        Self { text, display_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(room: &str, name: &str) -> Membership {
        Membership::new(
            RoomId::new(room.to_string()).unwrap(),
            DisplayName::new(name.to_string()).unwrap(),
        )
    }

    #[test]
    fn test_unjoined_connection_has_no_room() {
        // テスト項目: 受け付け直後の接続はどのルームにも属さない
        // given (前提条件):
        let id = ConnectionId::generate();

        // when (操作):
        let connection = Connection::unjoined(id);

        // then (期待する結果):
        assert!(!connection.is_joined());
        assert_eq!(connection.room(), None);
        assert_eq!(connection.membership, None);
    }

    #[test]
    fn test_bind_overwrites_previous_membership() {
        // テスト項目: 2 回目の join でルームと表示名が上書きされる（最後の join が優先）
        // given (前提条件):
        let mut connection = Connection::unjoined(ConnectionId::generate());
        connection.bind(membership("ROOM1", "Alice"));

        // when (操作):
        connection.bind(membership("ROOM2", "Alicia"));

        // then (期待する結果):
        assert_eq!(connection.room().unwrap().as_str(), "ROOM2");
        assert!(!connection.is_member_of(&RoomId::new("ROOM1".to_string()).unwrap()));
        assert_eq!(connection.membership, Some(membership("ROOM2", "Alicia")));
    }
}
