//! Configuration loading and management for the leave accrual engine.
//!
//! This module loads the accrual policy (tier constants and policy metadata)
//! from a YAML file. [`LeavePolicy::default`] carries the built-in constants
//! when no file is supplied.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{LeavePolicy, PolicyMetadata};
