mod catalog;
mod postgres;

pub use catalog::PostgresCatalog;
pub use postgres::{PostgresClient, PostgresEnv};
