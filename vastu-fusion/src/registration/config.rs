//! Registration driver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for the registration driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Worker threads evaluating remaining clouds within a pass.
    /// 1 runs everything on the calling thread.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Wall-clock budget for a whole run, in milliseconds. None = unlimited.
    #[serde(default)]
    pub time_budget_ms: Option<u64>,
}

fn default_workers() -> usize {
    1
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            time_budget_ms: None,
        }
    }
}

impl RegistrationConfig {
    /// Config using `workers` threads and no time budget.
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            ..Default::default()
        }
    }

    /// Set the time budget from a duration
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = Some(budget.as_millis() as u64);
        self
    }

    /// Time budget as a duration
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// Whether passes run on a worker pool
    pub fn is_parallel(&self) -> bool {
        self.workers > 1
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::InvalidConfig(
                "registration.workers must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential_unbounded() {
        let config = RegistrationConfig::default();
        assert_eq!(config.workers, 1);
        assert!(!config.is_parallel());
        assert_eq!(config.time_budget(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_time_budget_conversion() {
        let config = RegistrationConfig {
            time_budget_ms: Some(1500),
            ..Default::default()
        };
        assert_eq!(config.time_budget(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(RegistrationConfig::with_workers(0).validate().is_err());
        assert!(RegistrationConfig::with_workers(4).is_parallel());
    }
}
