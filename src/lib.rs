pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use error::{Error, Result};
pub use models::{BatchOutcome, ClientRecord};
pub use service::RegistryService;
pub use storage::{ClientStore, DuckDbStore};
