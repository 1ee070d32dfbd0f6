//! Data-access layer for the legacy student records database: one module per
//! table, a shared record/CRUD layer, and the profile/cache plumbing that
//! hands each operation its connection.

pub mod cache;
pub mod cfg;
pub mod db;
pub mod record;
pub mod tables;
pub mod term;

pub use cache::Cache;
pub use cfg::{DatabaseConfig, Profile};
pub use record::Record;
pub use term::{TermKey, TermName};
