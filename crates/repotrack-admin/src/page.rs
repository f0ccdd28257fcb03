//! Settings page markup for the editable table.
//!
//! Produces the HTML fragment the host embeds in its admin page. Field ids
//! carry the row index (`repotrack-package-name-3` and so on) so the
//! client-side glue can address inputs; the view-model in
//! [`crate::editor`] is the source of truth, not the id strings.

use std::fmt::Write;

use crate::{editor::EditorTable, escape::escape_html};

fn input_cell(kind: &str, index: usize, value: &str, marked: bool) -> String {
    let marker_class = if marked { " repotrack-bad-entry" } else { "" };
    format!(
        concat!(
            r#"<td class="repotrack-settings-{kind}-data">"#,
            r#"<input type="text" id="repotrack-{kind}-{index}" "#,
            r#"class="repotrack-{kind}-input{marker}" value="{value}"/>"#,
            "</td>",
        ),
        kind = kind,
        index = index,
        marker = marker_class,
        value = escape_html(value),
    )
}

/// Renders the editable settings table plus the update control.
///
/// The table's trailing blank row is included, so the fragment is ready
/// for the grow-on-edit behavior. The update control carries a disabled
/// marker class whenever submission is currently not allowed.
pub fn render_settings_page(table: &EditorTable) -> String {
    let mut out = String::from(concat!(
        r#"<div class="repotrack-settings-table-area">"#,
        r#"<table class="repotrack-settings-table">"#,
        r#"<thead class="repotrack-settings-table-header">"#,
        r#"<tr class="repotrack-settings-table-header-row">"#,
        r#"<td class="repotrack-settings-table-header-package-name">Package Name</td>"#,
        r#"<td class="repotrack-settings-table-header-projects">Projects (comma separated)</td>"#,
        r#"<td class="repotrack-settings-table-header-repository-url">Repository URL</td>"#,
        r#"<td class="repotrack-settings-table-header-description">Description</td>"#,
        "</tr></thead>",
        r#"<tbody id="repotrack-settings-table-body" class="repotrack-settings-table-body">"#,
    ));

    for (index, row) in table.rows().iter().enumerate() {
        let markers = row.markers();
        let _ = write!(
            out,
            r#"<tr class="repotrack-settings-table-row">{}{}{}{}</tr>"#,
            input_cell("package-name", index, &row.name, markers.name),
            input_cell("projects", index, &row.projects, false),
            input_cell("repository-url", index, &row.url, markers.url),
            input_cell("description", index, &row.description, markers.description),
        );
    }

    let button_class = if table.submit_allowed() {
        "button"
    } else {
        "button repotrack-disable-click"
    };
    let _ = write!(
        out,
        concat!(
            "</tbody></table></div>",
            r#"<div class="repotrack-button-area">"#,
            r#"<a id="repotrack-update-settings-button" class="{}">"#,
            "Update Source Code Repository Data</a></div>",
        ),
        button_class,
    );

    out
}
