//! UseCase: ヘルスチェック

use std::sync::Arc;

use crate::domain::ConnectionRegistry;

/// ヘルスチェックのユースケース（接続数の取得）
pub struct GetHealthUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl GetHealthUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// レジストリに登録中の接続数を返す（未参加の接続を含む）
    pub async fn execute(&self) -> usize {
        self.registry.count().await
    }
}
