pub mod discover;
pub mod errors;
pub mod extract;
pub mod http_client;
pub mod output;
pub mod progress;
pub mod utils;

// re-export modules used in tests
pub use crate::errors::ScanError;
pub use crate::extract::*;
