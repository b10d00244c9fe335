//! Project types
//!
//! A project binds one upstream provider account (identified by its
//! credential) to the local user who registered it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkPulseError};
use crate::impl_domain_label_conversions;

/// Upstream project-tracking providers supported by the metric pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    YouGile,
}

impl_domain_label_conversions!(ProviderType {
    YouGile => "yougile",
});

/// Project stored locally
///
/// `provider_type` keeps the stored label verbatim; it is resolved with
/// [`Project::provider`] at call time so that a row written by an older or
/// newer release surfaces as a configuration error instead of failing to load.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub provider_type: String,
    #[serde(skip_serializing)]
    pub token: String,
    pub owner_id: String,
}

impl Project {
    /// Credential every provider call for this project is made with.
    pub fn credential(&self) -> &str {
        &self.token
    }

    /// Resolve the stored provider label.
    ///
    /// # Errors
    /// Returns `WorkPulseError::Config` when the label names no known provider.
    pub fn provider(&self) -> Result<ProviderType> {
        self.provider_type.parse::<ProviderType>().map_err(|_| {
            WorkPulseError::Config(format!(
                "project {} has unknown provider type '{}'",
                self.id, self.provider_type
            ))
        })
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.id)
            .field("provider_type", &self.provider_type)
            .field("token", &"<redacted>")
            .field("owner_id", &self.owner_id)
            .finish()
    }
}

/// Project staged for insertion
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct NewProject {
    pub provider_type: ProviderType,
    pub token: String,
    pub owner_id: String,
}

impl fmt::Debug for NewProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewProject")
            .field("provider_type", &self.provider_type)
            .field("token", &"<redacted>")
            .field("owner_id", &self.owner_id)
            .finish()
    }
}
