use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash};
use tokio::task;

#[derive(Clone)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Lower costs are only meant for tests, bcrypt accepts 4..=31.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let password = password.to_owned();
        let cost = self.cost;

        let hashed = task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|err| ServiceError::Internal(format!("Hashing task failed: {err}")))?
            .map_err(ServiceError::Bcrypt)?;

        Ok(hashed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    #[tokio::test]
    async fn hashed_password_verifies_against_plain_text() {
        let hashing = Hashing::with_cost(4);

        let hashed = hashing.hash_password("secret1").await.unwrap();

        assert_ne!(hashed, "secret1");
        assert!(bcrypt::verify("secret1", &hashed).unwrap());
        assert!(!bcrypt::verify("secret2", &hashed).unwrap());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn hashing_leaves_the_runtime_free() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let ticker = tokio::spawn({
            let ticks = Arc::clone(&ticks);
            async move {
                loop {
                    tokio::time::sleep(Duration::from_millis(1)).await;
                    ticks.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        Hashing::with_cost(10).hash_password("secret1").await.unwrap();

        ticker.abort();
        assert!(ticks.load(Ordering::SeqCst) > 0);
    }
}
