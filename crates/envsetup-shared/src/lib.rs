//! # Environment Setup Shared
//! 
//! Shared constants, types, configuration, and telemetry for the environment
//! setup workspace.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
