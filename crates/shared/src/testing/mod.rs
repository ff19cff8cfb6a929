//! In-memory stand-in for the PostgreSQL gateway.
//!
//! [`MemoryStore`] implements every repository trait and enforces the same
//! unique, check, restrict and cascade rules as the migrations, reporting
//! violations with the [`RepositoryError`] variants sqlx errors classify into.

mod memory;

pub use self::memory::MemoryStore;

use crate::repository::Repositories;
use std::sync::Arc;

/// Repositories backed by one shared, empty [`MemoryStore`].
pub fn memory_repositories() -> (Arc<MemoryStore>, Repositories) {
    let store = Arc::new(MemoryStore::new());
    let repositories = store.repositories();
    (store, repositories)
}
