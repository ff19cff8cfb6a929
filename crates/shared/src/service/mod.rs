mod entity;
mod guard;
mod recorder;
mod scoped;
mod seed;

#[cfg(test)]
mod tests;

pub use self::entity::{EntityLabels, EntityService, EntityServiceDeps};
pub use self::guard::{
    CategoryReferenceGuard, INVALID_CATEGORY, INVALID_STATUS, PassThroughGuard,
    PasswordHashingGuard, StatusReferenceGuard,
};
pub use self::recorder::{OperationContext, OperationRecorder, UNEXPECTED_ERROR_MESSAGE};
pub use self::scoped::{ScopedLabels, ScopedListService};
pub use self::seed::seed_order_statuses;
