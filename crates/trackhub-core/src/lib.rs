//! # trackhub-core
//!
//! Core crate for the TrackHub client. Contains configuration schemas,
//! domain entity types mirroring the remote tracker service's JSON, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other TrackHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
