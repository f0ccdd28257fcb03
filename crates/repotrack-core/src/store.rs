//! Persistent package store with a per-process read cache.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use repotrack_db::{
    models::NewSourcePackageRow, repository::PackageRepository, DbConnection, DbError,
};

use crate::{
    error::{Result, TrackerError},
    package::SourcePackage,
};

/// Owns the full ordered list of tracked packages.
///
/// Reads are lazy and memoized: the first [`packages`](Self::packages)
/// call loads from storage, later calls return the cached list. The cache
/// is valid for the lifetime of this store instance; a host that keeps
/// several stores over the same database must call
/// [`invalidate`](Self::invalidate) after another instance writes, or
/// accept stale reads.
pub struct PackageStore {
    db: Arc<Mutex<DbConnection>>,
    cached: Mutex<Option<Vec<SourcePackage>>>,
}

impl PackageStore {
    /// Opens (or creates) the store at the given database path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = DbConnection::open(path).map_err(DbError::from)?;
        Ok(Self::new(conn))
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DbConnection::open_in_memory().map_err(DbError::from)?;
        Ok(Self::new(conn))
    }

    /// Wraps an already-open connection.
    pub fn new(conn: DbConnection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            cached: Mutex::new(None),
        }
    }

    /// Returns the current package list in stored order.
    pub fn packages(&self) -> Result<Vec<SourcePackage>> {
        let mut cache = self.cached.lock()?;
        if let Some(list) = cache.as_ref() {
            return Ok(list.clone());
        }

        let mut db = self.db.lock()?;
        let rows = PackageRepository::list_all(db.conn()).map_err(DbError::from)?;
        drop(db);

        let list: Vec<SourcePackage> = rows.into_iter().map(Into::into).collect();
        *cache = Some(list.clone());
        Ok(list)
    }

    /// Replaces the stored package list as a whole.
    ///
    /// Destructive: packages missing from `new_packages` are gone after
    /// this call. The delete-and-reinsert runs in one transaction, so a
    /// failure leaves the previous content intact.
    pub fn set_packages(&self, new_packages: Vec<SourcePackage>) -> Result<()> {
        let projects_json = new_packages
            .iter()
            .map(|pkg| serde_json::to_string(&pkg.projects))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::Custom(format!("encoding project list: {e}")))?;

        let rows: Vec<NewSourcePackageRow<'_>> = new_packages
            .iter()
            .zip(&projects_json)
            .enumerate()
            .map(|(idx, (pkg, projects))| NewSourcePackageRow {
                idx: idx as i32,
                projects,
                package_name: &pkg.name,
                description: &pkg.description,
                repository_url: &pkg.repository_url,
            })
            .collect();

        tracing::info!(count = new_packages.len(), "persisting package list");
        let mut db = self.db.lock()?;
        PackageRepository::replace_all(db.conn(), &rows).map_err(DbError::from)?;
        drop(db);

        let mut cache = self.cached.lock()?;
        *cache = Some(new_packages);
        Ok(())
    }

    /// Drops the memoized list so the next read hits storage again.
    pub fn invalidate(&self) -> Result<()> {
        let mut cache = self.cached.lock()?;
        *cache = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(name: &str, projects: &[&str]) -> SourcePackage {
        SourcePackage {
            name: name.to_string(),
            projects: projects.iter().map(|p| p.to_string()).collect(),
            repository_url: format!("https://example.com/{name}"),
            description: format!("the {name} library"),
        }
    }

    #[test]
    fn round_trips_packages_in_order() {
        let store = PackageStore::open_in_memory().unwrap();

        let packages = vec![
            pkg("libfoo", &["app1", "app2"]),
            pkg("libbar", &[]),
            pkg("libbaz", &["app3"]),
        ];
        store.set_packages(packages.clone()).unwrap();

        assert_eq!(store.packages().unwrap(), packages);
    }

    #[test]
    fn round_trips_the_empty_list() {
        let store = PackageStore::open_in_memory().unwrap();

        store.set_packages(vec![pkg("libfoo", &[])]).unwrap();
        store.set_packages(vec![]).unwrap();

        assert!(store.packages().unwrap().is_empty());
    }

    #[test]
    fn repeated_reads_return_identical_content() {
        let store = PackageStore::open_in_memory().unwrap();
        store.set_packages(vec![pkg("libfoo", &["app1"])]).unwrap();

        let first = store.packages().unwrap();
        let second = store.packages().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reads_are_memoized_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages.db");

        let store = PackageStore::open(&path).unwrap();
        store.set_packages(vec![pkg("libfoo", &[])]).unwrap();
        assert_eq!(store.packages().unwrap().len(), 1);

        // A second instance writes behind the first one's back. Two live
        // stores racing like this is last-writer-wins by design; the
        // interesting contract here is the cache, not the race.
        let other = PackageStore::open(&path).unwrap();
        other
            .set_packages(vec![pkg("libfoo", &[]), pkg("libbar", &[])])
            .unwrap();

        // still the memoized single-element list
        assert_eq!(store.packages().unwrap().len(), 1);

        store.invalidate().unwrap();
        assert_eq!(store.packages().unwrap().len(), 2);
    }

    #[test]
    fn set_packages_refreshes_the_cache() {
        let store = PackageStore::open_in_memory().unwrap();

        store.set_packages(vec![pkg("libfoo", &[])]).unwrap();
        store.set_packages(vec![pkg("libbar", &[])]).unwrap();

        let listed = store.packages().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "libbar");
    }

    #[test]
    fn persists_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages.db");

        {
            let store = PackageStore::open(&path).unwrap();
            store
                .set_packages(vec![pkg("libfoo", &["app1"]), pkg("libfoo", &[])])
                .unwrap();
        }

        let reopened = PackageStore::open(&path).unwrap();
        let listed = reopened.packages().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].projects, vec!["app1"]);
        // duplicate names survive the round trip
        assert_eq!(listed[0].name, listed[1].name);
    }
}
