//! Shared errors and configuration for Coinage.
//!
//! This crate provides common pieces used by the money core and by any
//! outer layer that embeds it:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, ProviderConfig};
pub use error::AppError;
