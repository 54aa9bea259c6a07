//! Shipnote Core - configuration and error handling for deployment notes
//!
//! This crate provides the configuration model, its loader and validation,
//! and the error types shared by the shipnote engine and CLI.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ConfigError, Result, ShipnoteError};
