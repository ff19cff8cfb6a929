use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRequestGuard<R> = Arc<dyn RequestGuardTrait<R> + Send + Sync>;

/// Runs before every insert or update of an entity. A guard either rejects
/// the request or hands back the request that will actually be written.
#[async_trait]
pub trait RequestGuardTrait<R> {
    async fn prepare(&self, req: R) -> Result<R, ServiceError>;
}
