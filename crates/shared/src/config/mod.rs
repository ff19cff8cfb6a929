mod database;
mod hashing;

pub use self::database::{ConnectionManager, ConnectionPool, run_migrations};
pub use self::hashing::Hashing;
