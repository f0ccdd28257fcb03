//! Interactive settings table model.
//!
//! Drives the editable package table: per-field change handling, error
//! markers, the perpetually-available blank entry row at the bottom, and
//! assembly of the submission payload. Rows are an explicit ordered list of
//! view-models addressed by index; the rendered field identifiers carry the
//! same index but are never parsed back.

use repotrack_core::{validator, SourcePackage};

use crate::{
    transport::SubmitTransport,
    wire::{PackageEntry, UpdateRequest, UpdateStatus},
};

/// One editable field of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Projects,
    Url,
    Description,
}

/// Per-field error markers for one row. Each marker is independent;
/// `projects` never gets one because it may be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMarkers {
    pub name: bool,
    pub url: bool,
    pub description: bool,
}

impl RowMarkers {
    pub fn any(&self) -> bool {
        self.name || self.url || self.description
    }
}

/// One row of the editable table. Projects are edited as a single
/// comma-separated text field.
#[derive(Debug, Clone, Default)]
pub struct EditorRow {
    pub name: String,
    pub projects: String,
    pub url: String,
    pub description: String,
    markers: RowMarkers,
}

impl EditorRow {
    fn from_package(pkg: &SourcePackage) -> Self {
        Self {
            name: pkg.name.clone(),
            projects: pkg.projects.join(", "),
            url: pkg.repository_url.clone(),
            description: pkg.description.clone(),
            markers: RowMarkers::default(),
        }
    }

    pub fn markers(&self) -> RowMarkers {
        self.markers
    }

    /// True if all four fields (projects included) trim to empty.
    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.projects.trim().is_empty()
            && self.url.trim().is_empty()
            && self.description.trim().is_empty()
    }

    fn revalidate(&mut self) {
        if validator::is_row_empty(&self.name, &self.url, &self.description) {
            self.markers = RowMarkers::default();
        } else {
            self.markers.name = self.name.trim().is_empty();
            self.markers.url = !validator::is_valid_url(self.url.trim());
            self.markers.description = self.description.trim().is_empty();
        }
    }
}

/// Outcome surfaced to the operator after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Updated,
    Failed(String),
}

/// The editable settings table.
pub struct EditorTable {
    rows: Vec<EditorRow>,
    submit_allowed: bool,
}

impl EditorTable {
    /// Builds the table from the stored package list, with the trailing
    /// blank entry row appended.
    pub fn new(packages: &[SourcePackage]) -> Self {
        let mut rows: Vec<EditorRow> = packages.iter().map(EditorRow::from_package).collect();
        rows.push(EditorRow::default());
        Self {
            rows,
            submit_allowed: true,
        }
    }

    pub fn rows(&self) -> &[EditorRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the update control is currently enabled.
    pub fn submit_allowed(&self) -> bool {
        self.submit_allowed
    }

    /// Applies a single field edit.
    ///
    /// Editing the last row so it is no longer blank grows the table by one
    /// fresh blank row; the table never auto-shrinks. The edited row is
    /// revalidated and the global submit gate recomputed.
    pub fn set_field(&mut self, index: usize, field: Field, value: &str) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };

        match field {
            Field::Name => row.name = value.to_string(),
            Field::Projects => row.projects = value.to_string(),
            Field::Url => row.url = value.to_string(),
            Field::Description => row.description = value.to_string(),
        }
        row.revalidate();

        if index + 1 == self.rows.len() && !self.rows[index].is_blank() {
            self.rows.push(EditorRow::default());
        }

        self.submit_allowed = self.rows.iter().all(|row| {
            validator::is_row_empty(&row.name, &row.url, &row.description)
                || validator::is_row_complete(&row.name, &row.url, &row.description)
        });
    }

    /// Assembles the outgoing payload.
    ///
    /// All fields are trimmed; the projects text is split on commas with
    /// each token trimmed but empty tokens kept. Rows that are not complete
    /// (including the blank trailer) are silently dropped.
    pub fn payload(&self) -> Vec<PackageEntry> {
        self.rows
            .iter()
            .filter_map(|row| {
                let name = row.name.trim();
                let url = row.url.trim();
                let description = row.description.trim();

                if name.is_empty() || !validator::is_valid_url(url) || description.is_empty() {
                    return None;
                }

                let projects = row
                    .projects
                    .trim()
                    .split(',')
                    .map(|token| token.trim().to_string())
                    .collect();

                Some(PackageEntry {
                    name: name.to_string(),
                    projects,
                    url: url.to_string(),
                    description: description.to_string(),
                })
            })
            .collect()
    }

    /// Sends the payload as a single request and reports the outcome.
    pub fn submit<T: SubmitTransport + ?Sized>(&self, transport: &T) -> Notice {
        let request = UpdateRequest::new(self.payload());
        match transport.send(&request) {
            Ok(response) => match response.status {
                UpdateStatus::Ok => Notice::Updated,
                other => Notice::Failed(format!(
                    "Failed to update repository data: {}",
                    other.as_str()
                )),
            },
            Err(err) => Notice::Failed(format!("Failed to update repository data: {err}")),
        }
    }
}
