//! Domain layer.
//!
//! 接続レジストリとルームブロードキャストのドメインモデル、および
//! Infrastructure 層が実装するインターフェース（trait）を定義します。

pub mod entity;
pub mod error;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{Connection, Membership, RelayedMessage};
pub use error::{MessagePushError, ValueObjectError};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::ConnectionRegistry;
pub use value_object::{ConnectionId, DisplayName, RoomId};
