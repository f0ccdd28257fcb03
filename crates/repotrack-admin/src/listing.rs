//! Read-only package table for embedding in public content.

use std::fmt::Write;

use repotrack_core::SourcePackage;

use crate::escape::escape_html;

/// Directive parameters for the embeddable table. All optional: the filter
/// defaults to "show everything" and each header label falls back to its
/// built-in text.
#[derive(Debug, Clone, Default)]
pub struct ListingOptions {
    /// Only show packages tagged with this project.
    pub project: Option<String>,
    pub package_name_header: Option<String>,
    pub repository_url_header: Option<String>,
    pub description_header: Option<String>,
}

const DEFAULT_PACKAGE_NAME_HEADER: &str = "Package";
const DEFAULT_REPOSITORY_URL_HEADER: &str = "Repository URL";
const DEFAULT_DESCRIPTION_HEADER: &str = "Description";

/// Renders the packages as a three-column HTML table fragment.
///
/// Rows appear in store order; each shows the package name, the repository
/// URL as a link labelled with the raw URL text, and the description. The
/// href is emitted as stored.
pub fn render_listing(packages: &[SourcePackage], options: &ListingOptions) -> String {
    let package_name_header = options
        .package_name_header
        .as_deref()
        .unwrap_or(DEFAULT_PACKAGE_NAME_HEADER);
    let repository_url_header = options
        .repository_url_header
        .as_deref()
        .unwrap_or(DEFAULT_REPOSITORY_URL_HEADER);
    let description_header = options
        .description_header
        .as_deref()
        .unwrap_or(DEFAULT_DESCRIPTION_HEADER);

    let mut out = String::new();
    let _ = write!(
        out,
        concat!(
            r#"<table class="repotrack-table">"#,
            r#"<thead class="repotrack-table-header">"#,
            r#"<tr class="repotrack-table-header-row">"#,
            r#"<td class="repotrack-table-header-package-name">{}</td>"#,
            r#"<td class="repotrack-table-header-repository-url">{}</td>"#,
            r#"<td class="repotrack-table-header-description">{}</td>"#,
            "</tr></thead>",
            r#"<tbody class="repotrack-table-body">"#,
        ),
        escape_html(package_name_header),
        escape_html(repository_url_header),
        escape_html(description_header),
    );

    for package in packages {
        if let Some(project) = options.project.as_deref() {
            if !package.has_project(project) {
                continue;
            }
        }

        let _ = write!(
            out,
            concat!(
                r#"<tr class="repotrack-table-row">"#,
                r#"<td class="repotrack-package-name">{}</td>"#,
                r#"<td class="repotrack-repository-url">"#,
                r#"<a href="{}" class="repotrack-link">{}</a>"#,
                "</td>",
                r#"<td class="repotrack-description">{}</td>"#,
                "</tr>",
            ),
            escape_html(&package.name),
            package.repository_url,
            escape_html(&package.repository_url),
            escape_html(&package.description),
        );
    }

    out.push_str("</tbody></table>");
    out
}
