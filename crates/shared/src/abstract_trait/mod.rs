mod guard;
mod hashing;
mod repository;
mod service;

pub use self::guard::{DynRequestGuard, RequestGuardTrait};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::repository::{
    DynCategoryRepository, DynEntityRepository, DynOrderLineRepository, DynOrderRepository,
    DynProductRepository, DynScopedRepository, DynStatusRepository, DynUserOrderRepository,
    DynUserRepository, EntityRepositoryTrait, ScopedRepositoryTrait, StatusRepositoryTrait,
};
pub use self::service::{
    DynCategoryService, DynEntityService, DynOrderLineService, DynOrderService,
    DynProductService, DynScopedListService, DynUserOrderService, DynUserService,
    EntityServiceTrait, ScopedListServiceTrait,
};
