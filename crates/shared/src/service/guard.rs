use crate::{
    abstract_trait::{DynCategoryRepository, DynHashing, DynStatusRepository, RequestGuardTrait},
    domain::requests::{OrderRequest, ProductRequest, UserRequest},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::warn;

pub const INVALID_CATEGORY: &str = "Invalid category";
pub const INVALID_STATUS: &str = "Invalid status";

/// Writes the request as received; the datastore's own constraints apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughGuard;

#[async_trait]
impl<R: Send + 'static> RequestGuardTrait<R> for PassThroughGuard {
    async fn prepare(&self, req: R) -> Result<R, ServiceError> {
        Ok(req)
    }
}

pub struct CategoryReferenceGuard {
    categories: DynCategoryRepository,
}

impl CategoryReferenceGuard {
    pub fn new(categories: DynCategoryRepository) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl RequestGuardTrait<ProductRequest> for CategoryReferenceGuard {
    async fn prepare(&self, req: ProductRequest) -> Result<ProductRequest, ServiceError> {
        if self.categories.find_by_id(req.category_id).await?.is_none() {
            warn!("Category ID {} does not exist", req.category_id);
            return Err(ServiceError::Validation(INVALID_CATEGORY.to_string()));
        }
        Ok(req)
    }
}

pub struct StatusReferenceGuard {
    statuses: DynStatusRepository,
}

impl StatusReferenceGuard {
    pub fn new(statuses: DynStatusRepository) -> Self {
        Self { statuses }
    }
}

#[async_trait]
impl RequestGuardTrait<OrderRequest> for StatusReferenceGuard {
    async fn prepare(&self, req: OrderRequest) -> Result<OrderRequest, ServiceError> {
        if self.statuses.find_by_id(req.status_id).await?.is_none() {
            warn!("Status ID {} does not exist", req.status_id);
            return Err(ServiceError::Validation(INVALID_STATUS.to_string()));
        }
        Ok(req)
    }
}

/// Replaces the plain password with its bcrypt hash.
pub struct PasswordHashingGuard {
    hashing: DynHashing,
}

impl PasswordHashingGuard {
    pub fn new(hashing: DynHashing) -> Self {
        Self { hashing }
    }
}

#[async_trait]
impl RequestGuardTrait<UserRequest> for PasswordHashingGuard {
    async fn prepare(&self, mut req: UserRequest) -> Result<UserRequest, ServiceError> {
        req.password = self.hashing.hash_password(&req.password).await?;
        Ok(req)
    }
}
