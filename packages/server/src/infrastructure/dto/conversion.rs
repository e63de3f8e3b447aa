//! Conversion logic between DTOs and domain entities.

use crate::domain::{DisplayName, Membership, RelayedMessage, RoomId, ValueObjectError};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl TryFrom<dto::JoinPayload> for Membership {
    type Error = ValueObjectError;

    fn try_from(dto: dto::JoinPayload) -> Result<Self, Self::Error> {
        Ok(Self::new(
            RoomId::new(dto.room_id)?,
            DisplayName::new(dto.username)?,
        ))
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&RelayedMessage> for dto::ServerMessage {
    fn from(model: &RelayedMessage) -> Self {
        Self::Chat(dto::ChatBroadcastPayload {
            message: model.text.clone(),
            username: model.display_name.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_payload_to_membership() {
        // テスト項目: join ペイロードがドメインの Membership に変換される
        // given (前提条件):
        let payload = dto::JoinPayload {
            username: " Bob ".to_string(),
            room_id: "ROOM1".to_string(),
        };

        // when (操作):
        let membership = Membership::try_from(payload).unwrap();

        // then (期待する結果):
        assert_eq!(membership.room.as_str(), "ROOM1");
        assert_eq!(membership.display_name.as_str(), " Bob ");
    }

    #[test]
    fn test_join_payload_with_blank_room_is_rejected() {
        // テスト項目: 空白のみの roomId を持つ join ペイロードは変換できない
        // given (前提条件):
        let payload = dto::JoinPayload {
            username: "Bob".to_string(),
            room_id: "  ".to_string(),
        };

        // when (操作):
        let result = Membership::try_from(payload);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyRoomId));
    }

    #[test]
    fn test_relayed_message_to_dto() {
        // テスト項目: 中継メッセージが送信用 DTO に変換される
        // given (前提条件):
        let message = RelayedMessage::new(
            "hello".to_string(),
            DisplayName::new("Alice".to_string()).unwrap(),
        );

        // when (操作):
        let dto_msg: dto::ServerMessage = (&message).into();

        // then (期待する結果):
        assert_eq!(
            dto_msg,
            dto::ServerMessage::Chat(dto::ChatBroadcastPayload {
                message: "hello".to_string(),
                username: "Alice".to_string(),
            })
        );
    }
}
