pub mod config;
pub mod error;
pub mod types;

pub use config::CyberwingConfig;
pub use error::{CyberwingError, Result};
pub use types::Timestamp;
