#[macro_use]
extern crate smart_default;

pub mod claims;
pub mod error;
pub mod settings;
pub mod utils;

pub use error::{DevshareError, DevshareErrorType, DevshareResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of items in a single page of any listing.
pub const FETCH_LIMIT_MAX: i64 = 50;
pub const FETCH_LIMIT_DEFAULT: i64 = 10;

/// Maximum number of results per group returned by search suggestions.
pub const SUGGESTION_LIMIT: i64 = 5;
