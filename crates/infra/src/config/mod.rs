//! Configuration loading and management
//!
//! This module provides utilities for loading telemetry configuration
//! from environment variables and files.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file};
