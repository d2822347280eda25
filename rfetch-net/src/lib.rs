// rfetch-net/src/lib.rs
pub mod http;
pub mod options;
pub mod validation;

// Re-export the public fetching surface
pub use http::{fetch_resource, fetch_resource_with_config};
pub use options::{Credentials, FetchOptions};
pub use rfetch_common::{Config, Result, RfetchError};
pub use validation::validate_url;
