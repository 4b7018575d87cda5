pub mod config;
pub mod db;
pub mod error;
pub mod service;

pub use config::{Config, DatabaseConfig};
pub use error::SetupError;
pub use service::{SchemaInitializer, StatusEvent, StatusReport, initialize};
