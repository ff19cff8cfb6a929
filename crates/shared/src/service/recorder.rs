use crate::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info, warn};

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Started operation, handed back to [`OperationRecorder::finish`].
pub struct OperationContext {
    operation: &'static str,
    method: Method,
    start_time: Instant,
}

/// Turns the outcome of a service operation into an envelope while logging
/// it and recording the request metrics of the owning service.
pub struct OperationRecorder {
    component: &'static str,
    metrics: Arc<Mutex<Metrics>>,
    expose_internal_errors: bool,
}

impl OperationRecorder {
    pub async fn new(
        metric_prefix: &str,
        component: &'static str,
        registry: Arc<Mutex<Registry>>,
        expose_internal_errors: bool,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, metric_prefix, component);

        Self {
            component,
            metrics: Arc::new(Mutex::new(metrics)),
            expose_internal_errors,
        }
    }

    pub fn start(&self, method: Method, operation: &'static str) -> OperationContext {
        info!("Starting operation: {}::{operation}", self.component);

        OperationContext {
            operation,
            method,
            start_time: Instant::now(),
        }
    }

    pub async fn finish<T>(
        &self,
        ctx: OperationContext,
        outcome: Result<ApiResponse<T>, ServiceError>,
    ) -> ApiResponse<T> {
        let elapsed = ctx.start_time.elapsed().as_secs_f64();

        let (status, response) = match outcome {
            Ok(response) => {
                info!(
                    "✅ {}::{} completed: {}",
                    self.component, ctx.operation, response.message
                );
                (StatusUtils::Success, response)
            }
            Err(err) => (StatusUtils::Error, self.failure(&ctx, err)),
        };

        self.metrics.lock().await.record(ctx.method, status, elapsed);

        response
    }

    fn failure<T>(&self, ctx: &OperationContext, err: ServiceError) -> ApiResponse<T> {
        let code = err.status_code();

        if !err.is_unexpected() {
            warn!("⚠️ {}::{} rejected: {err}", self.component, ctx.operation);
            return ApiResponse::failure(code, err.to_string());
        }

        error!("❌ {}::{} failed: {err:?}", self.component, ctx.operation);

        let message = if self.expose_internal_errors {
            err.to_string()
        } else {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        };

        ApiResponse::failure(code, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;

    async fn recorder(expose: bool) -> OperationRecorder {
        let registry = Arc::new(Mutex::new(Registry::default()));
        OperationRecorder::new("test_service", "TestService", registry, expose).await
    }

    #[tokio::test]
    async fn unexpected_failures_are_redacted_by_default() {
        let recorder = recorder(false).await;
        let ctx = recorder.start(Method::Delete, "delete");

        let response: ApiResponse<()> = recorder
            .finish(
                ctx,
                Err(RepositoryError::ForeignKey("products_category_id_fkey".into()).into()),
            )
            .await;

        assert!(!response.success);
        assert_eq!(response.status_code, 500);
        assert_eq!(response.message, UNEXPECTED_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn unexpected_failures_can_be_echoed() {
        let recorder = recorder(true).await;
        let ctx = recorder.start(Method::Post, "create");

        let response: ApiResponse<()> = recorder
            .finish(ctx, Err(ServiceError::Internal("pool closed".into())))
            .await;

        assert_eq!(response.status_code, 500);
        assert!(response.message.contains("pool closed"));
    }

    #[tokio::test]
    async fn domain_failures_keep_their_message() {
        let recorder = recorder(false).await;
        let ctx = recorder.start(Method::Put, "update");

        let response: ApiResponse<()> = recorder
            .finish(ctx, Err(ServiceError::Validation("Invalid category".into())))
            .await;

        assert_eq!(response.status_code, 400);
        assert_eq!(response.message, "Invalid category");
    }
}
