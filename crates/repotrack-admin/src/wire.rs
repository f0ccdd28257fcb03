//! Wire format shared by the editor client and the update endpoint.

use repotrack_core::SourcePackage;
use serde::{Deserialize, Serialize};

/// Operation identifier the host routes to [`crate::handle_update`].
pub const UPDATE_ACTION: &str = "repotrack_update";

/// One submitted table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    pub name: String,
    pub projects: Vec<String>,
    pub url: String,
    pub description: String,
}

impl From<PackageEntry> for SourcePackage {
    fn from(entry: PackageEntry) -> Self {
        Self {
            name: entry.name,
            projects: entry.projects,
            repository_url: entry.url,
            description: entry.description,
        }
    }
}

/// Full replacement request for the package list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub action: String,
    /// The replacement rows. Absent means a malformed request, not an
    /// empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<PackageEntry>>,
}

impl UpdateRequest {
    pub fn new(data: Vec<PackageEntry>) -> Self {
        Self {
            action: UPDATE_ACTION.to_string(),
            data: Some(data),
        }
    }
}

/// Endpoint result, flattened to a status string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum UpdateStatus {
    Ok,
    InvalidMessage,
    InsufficientPermissions,
    /// Any other server-side failure, carrying its message.
    Failed(String),
}

impl UpdateStatus {
    pub fn as_str(&self) -> &str {
        match self {
            UpdateStatus::Ok => "OK",
            UpdateStatus::InvalidMessage => "invalid message",
            UpdateStatus::InsufficientPermissions => "insufficient permissions",
            UpdateStatus::Failed(message) => message,
        }
    }
}

impl From<UpdateStatus> for String {
    fn from(status: UpdateStatus) -> Self {
        status.as_str().to_string()
    }
}

impl From<String> for UpdateStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OK" => UpdateStatus::Ok,
            "invalid message" => UpdateStatus::InvalidMessage,
            "insufficient permissions" => UpdateStatus::InsufficientPermissions,
            _ => UpdateStatus::Failed(raw),
        }
    }
}

/// Response envelope for the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub status: UpdateStatus,
}

impl UpdateResponse {
    pub fn new(status: UpdateStatus) -> Self {
        Self { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_flat_string() {
        let ok = serde_json::to_string(&UpdateResponse::new(UpdateStatus::Ok)).unwrap();
        assert_eq!(ok, r#"{"status":"OK"}"#);

        let denied =
            serde_json::to_string(&UpdateResponse::new(UpdateStatus::InsufficientPermissions))
                .unwrap();
        assert_eq!(denied, r#"{"status":"insufficient permissions"}"#);
    }

    #[test]
    fn status_round_trips_unknown_text_as_failure() {
        let parsed: UpdateResponse =
            serde_json::from_str(r#"{"status":"database on fire"}"#).unwrap();
        assert_eq!(
            parsed.status,
            UpdateStatus::Failed("database on fire".to_string())
        );
    }

    #[test]
    fn request_without_data_key_deserializes_to_none() {
        let parsed: UpdateRequest =
            serde_json::from_str(r#"{"action":"repotrack_update"}"#).unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn request_with_empty_data_is_an_empty_list() {
        let parsed: UpdateRequest =
            serde_json::from_str(r#"{"action":"repotrack_update","data":[]}"#).unwrap();
        assert_eq!(parsed.data, Some(vec![]));
    }
}
