//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave
//! accrual policy from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{LeavePolicy, PolicyMetadata};

/// File name of the policy inside a configuration directory.
pub const POLICY_FILE_NAME: &str = "leave_policy.yaml";

/// Loads and provides access to the leave policy.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── leave_policy.yaml   # Policy metadata and accrual constants
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Loaded policy: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: LeavePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `leave_policy.yaml` is missing
    /// - the file contains invalid YAML or is missing a required field
    /// - a value fails [`LeavePolicy::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let policy = Self::load_yaml::<LeavePolicy>(&policy_path)?;
        policy.validate()?;

        debug!(
            path = %policy_path.display(),
            code = %policy.metadata.code,
            "Loaded leave policy"
        );

        Ok(Self { policy })
    }

    /// Wraps an already-built policy, validating it first.
    pub fn from_policy(policy: LeavePolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.policy.metadata
    }
}
