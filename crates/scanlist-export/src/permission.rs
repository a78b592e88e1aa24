//! Runtime storage permission, modelled on Android's
//! `WRITE_EXTERNAL_STORAGE` flow: check first, request with a rationale if
//! not yet granted.

use crate::ExportError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionStatus {
    Granted,
    Denied,
    NeverAskAgain,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PermissionStatus::Granted => "granted",
            PermissionStatus::Denied => "denied",
            PermissionStatus::NeverAskAgain => "never-ask-again",
        };
        f.write_str(s)
    }
}

impl FromStr for PermissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "granted" => Ok(PermissionStatus::Granted),
            "denied" => Ok(PermissionStatus::Denied),
            "never-ask-again" | "never_ask_again" => Ok(PermissionStatus::NeverAskAgain),
            other => Err(format!("unknown permission status: {}", other)),
        }
    }
}

/// Text shown to the user when the permission is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRationale {
    pub title: String,
    pub message: String,
    pub button_positive: String,
}

impl PermissionRationale {
    pub fn external_storage() -> Self {
        Self {
            title: "Storage permission required".to_string(),
            message:
                "This app needs access to your storage to save the Excel file to Downloads."
                    .to_string(),
            button_positive: "OK".to_string(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Whether write access is already granted.
    async fn check(&self) -> Result<bool, ExportError>;

    /// Ask the user for write access.
    async fn request(
        &self,
        rationale: &PermissionRationale,
    ) -> Result<PermissionStatus, ExportError>;
}

/// Gate with a predetermined answer, e.g. one the user already gave in a
/// prompt owned by the caller.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission {
    status: PermissionStatus,
}

impl StaticPermission {
    pub fn new(status: PermissionStatus) -> Self {
        Self { status }
    }

    pub fn granted() -> Self {
        Self::new(PermissionStatus::Granted)
    }

    pub fn denied() -> Self {
        Self::new(PermissionStatus::Denied)
    }
}

#[async_trait]
impl PermissionGate for StaticPermission {
    async fn check(&self) -> Result<bool, ExportError> {
        Ok(self.status.is_granted())
    }

    async fn request(
        &self,
        rationale: &PermissionRationale,
    ) -> Result<PermissionStatus, ExportError> {
        tracing::debug!("Permission '{}' answered: {}", rationale.title, self.status);
        Ok(self.status)
    }
}
