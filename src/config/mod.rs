//! Configuration module for the budget tracker
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
