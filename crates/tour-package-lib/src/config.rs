//! Conversion settings consumed by the pipeline

use crate::{PackageError, Result};
use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a multi-route conversion reacts to a route that fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorPolicy {
    /// Abort the whole run on the first failing route
    #[default]
    Strict,
    /// Drop failing routes (logged at warn) and package the rest
    SkipInvalid,
}

/// Configuration for a conversion run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Upper bound on sampled waypoints between two consecutive places.
    /// Short segments may still use every sample; place anchors come on top.
    /// Default: 10
    pub max_waypoints_per_segment: usize,
    /// Replaces the display name written into every tour document
    pub name_override: Option<String>,
    /// Timestamp written into document headers and archive entries.
    /// `None` uses the current time; set it for byte-reproducible output.
    pub creation_time: Option<DateTime<Utc>>,
    /// Failure handling when converting several routes
    pub error_policy: ErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_waypoints_per_segment: 10,
            name_override: None,
            creation_time: None,
            error_policy: ErrorPolicy::Strict,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.max_waypoints_per_segment == 0 {
            return Err(PackageError::InvalidConfiguration(
                "max waypoints per segment must be positive, got 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured timestamp, or now
    pub fn resolve_creation_time(&self) -> DateTime<Utc> {
        self.creation_time.unwrap_or_else(Utc::now)
    }
}
