// rfetch-common/src/lib.rs
pub mod config;
pub mod error;

// Re-export key types
pub use config::Config;
pub use error::{Result, RfetchError};
