//! UseCase layer.
//!
//! トランスポートから届くイベント（接続・join・chat・切断）ごとに 1 つのユースケースを持ちます。

mod connect_participant;
mod disconnect_participant;
mod error;
mod get_health;
mod join_room;
mod send_message;

pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::SendMessageError;
pub use get_health::GetHealthUseCase;
pub use join_room::JoinRoomUseCase;
pub use send_message::SendMessageUseCase;
