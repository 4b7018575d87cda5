//! Database module: schema definitions and the server session.
//!
//! Layout:
//! - `schema.rs`: MySQL DDL for the five application tables, in creation order
//! - `executor.rs`: the `SchemaExecutor` seam used by the initializer
//! - `mysql.rs`: `MySqlSession`, the real executor over one connection

pub mod executor;
pub mod mysql;
pub mod schema;

pub use executor::SchemaExecutor;
pub use mysql::MySqlSession;
pub use schema::{TABLES, TableDef};
