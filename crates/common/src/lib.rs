//! Shared configuration and error handling for the Impress backend
//!
//! This crate provides common functionality used across the backend crates:
//! - Configuration management following 12-factor principles
//! - Error types and handling

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
