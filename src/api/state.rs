//! Application state for the leave accrual API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::config::{ConfigLoader, LeavePolicy};

/// Shared application state.
///
/// Holds the loaded leave policy and the clock used to default a missing
/// reference date.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy configuration.
    config: Arc<ConfigLoader>,
    /// Source of today's date.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
        }
    }

    /// Returns the active leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        self.config.policy()
    }

    /// Returns today's date according to the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
