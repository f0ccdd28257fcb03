use diesel::prelude::*;

use crate::schema::source_packages;

/// One persisted package row.
///
/// `projects` is stored as a JSON-encoded array of strings; decoding is the
/// caller's concern so the storage layer stays byte-faithful.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = source_packages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SourcePackageRow {
    pub idx: i32,
    pub projects: String,
    pub package_name: String,
    pub description: String,
    pub repository_url: String,
}

/// Insertable form of a package row.
#[derive(Debug, Insertable)]
#[diesel(table_name = source_packages)]
pub struct NewSourcePackageRow<'a> {
    pub idx: i32,
    pub projects: &'a str,
    pub package_name: &'a str,
    pub description: &'a str,
    pub repository_url: &'a str,
}
