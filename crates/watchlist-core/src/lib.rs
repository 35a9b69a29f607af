//! Watchlist Core
//!
//! Shared data types, errors, and collaborator traits for the dividend
//! watchlist engine.

pub mod error;
pub mod traits;
pub mod types;

pub use error::*;
pub use traits::*;
pub use types::*;
