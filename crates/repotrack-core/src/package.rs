//! The tracked package record.

use repotrack_db::models::SourcePackageRow;
use serde::{Deserialize, Serialize};

/// One tracked source code package.
///
/// `repository_url` is stored exactly as entered, valid or not; URL
/// validity only gates the editing UI. `projects` may be empty and carries
/// no ordering or uniqueness guarantees beyond insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePackage {
    pub name: String,
    pub projects: Vec<String>,
    pub repository_url: String,
    pub description: String,
}

impl SourcePackage {
    /// True if the package is associated with the given project tag.
    pub fn has_project(&self, project: &str) -> bool {
        self.projects.iter().any(|p| p == project)
    }
}

impl From<SourcePackageRow> for SourcePackage {
    fn from(row: SourcePackageRow) -> Self {
        Self {
            // Rows written by older tools may hold malformed JSON; treat
            // that as an empty project list rather than failing the load.
            projects: serde_json::from_str(&row.projects).unwrap_or_default(),
            name: row.package_name,
            repository_url: row.repository_url,
            description: row.description,
        }
    }
}
