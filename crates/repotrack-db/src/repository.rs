//! Repository for the source package settings table.

use diesel::prelude::*;

use crate::{
    models::{NewSourcePackageRow, SourcePackageRow},
    schema::source_packages,
};

/// Repository for source package row operations.
pub struct PackageRepository;

impl PackageRepository {
    /// Lists all rows ordered by position.
    pub fn list_all(conn: &mut SqliteConnection) -> QueryResult<Vec<SourcePackageRow>> {
        source_packages::table
            .order(source_packages::idx.asc())
            .select(SourcePackageRow::as_select())
            .load(conn)
    }

    /// Replaces the whole table content with the given rows.
    ///
    /// Runs as a single transaction: either the previous content survives
    /// intact or the new rows replace it completely. Rows not present in
    /// `rows` are gone afterwards; there is no diffing against the previous
    /// set.
    pub fn replace_all(
        conn: &mut SqliteConnection,
        rows: &[NewSourcePackageRow<'_>],
    ) -> QueryResult<()> {
        tracing::debug!(count = rows.len(), "replacing source package table");
        conn.transaction(|conn| {
            diesel::delete(source_packages::table).execute(conn)?;
            for row in rows {
                diesel::insert_into(source_packages::table)
                    .values(row)
                    .execute(conn)?;
            }
            Ok(())
        })
    }
}
