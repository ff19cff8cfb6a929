use crate::{
    abstract_trait::DynStatusRepository,
    errors::ServiceError,
    model::{OrderStatus, Status},
};
use tracing::info;

/// Makes sure every [`OrderStatus`] row exists. Returns how many were missing.
pub async fn seed_order_statuses(statuses: &DynStatusRepository) -> Result<u64, ServiceError> {
    let rows: Vec<Status> = OrderStatus::ALL.into_iter().map(Status::from).collect();

    let inserted = statuses.seed(&rows).await?;

    if inserted > 0 {
        info!("🌱 Inserted {inserted} missing order statuses");
    }
    Ok(inserted)
}
