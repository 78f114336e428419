//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Tracing subscriber setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use logging::init_tracing;
pub use paths::FintrackPaths;
pub use settings::Settings;
