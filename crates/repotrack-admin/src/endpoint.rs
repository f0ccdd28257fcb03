//! Server-side update handler.

use repotrack_core::{SourcePackage, Subject, TrackerContext};

use crate::wire::{UpdateRequest, UpdateResponse, UpdateStatus};

/// Applies a full-list replacement request against the store.
///
/// The host routes requests carrying [`crate::UPDATE_ACTION`] here together
/// with the authenticated subject. Submitted rows are taken verbatim: field
/// validation happens in the editing client, and whatever reaches this
/// handler with the right capability is trusted. Every outcome, including
/// storage failure, is flattened into the response status.
pub fn handle_update(
    ctx: &TrackerContext,
    subject: &Subject,
    request: &UpdateRequest,
) -> UpdateResponse {
    if !ctx
        .authorizer()
        .has_capability(subject, ctx.manage_capability())
    {
        tracing::warn!(subject = %subject.id, "package update rejected: missing capability");
        return UpdateResponse::new(UpdateStatus::InsufficientPermissions);
    }

    let Some(entries) = request.data.as_ref() else {
        tracing::warn!(subject = %subject.id, "package update rejected: no data key");
        return UpdateResponse::new(UpdateStatus::InvalidMessage);
    };

    let packages: Vec<SourcePackage> = entries.iter().cloned().map(Into::into).collect();
    match ctx.store().set_packages(packages) {
        Ok(()) => {
            tracing::info!(count = entries.len(), "package list replaced");
            UpdateResponse::new(UpdateStatus::Ok)
        }
        Err(err) => UpdateResponse::new(UpdateStatus::Failed(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use repotrack_core::{Authorizer, PackageStore};

    use super::*;
    use crate::wire::{PackageEntry, UPDATE_ACTION};

    struct AllowAll;

    impl Authorizer for AllowAll {
        fn has_capability(&self, _subject: &Subject, _capability: &str) -> bool {
            true
        }
    }

    struct DenyAll;

    impl Authorizer for DenyAll {
        fn has_capability(&self, _subject: &Subject, _capability: &str) -> bool {
            false
        }
    }

    fn context(authorizer: Arc<dyn Authorizer>) -> TrackerContext {
        let store = PackageStore::open_in_memory().unwrap();
        TrackerContext::with_store(store, authorizer, "manage_options")
    }

    fn libfoo_entry() -> PackageEntry {
        PackageEntry {
            name: "libfoo".to_string(),
            projects: vec!["app1".to_string(), "app2".to_string()],
            url: "https://example.com/libfoo".to_string(),
            description: "A foo library".to_string(),
        }
    }

    #[test]
    fn privileged_update_replaces_the_list() {
        let ctx = context(Arc::new(AllowAll));
        let request = UpdateRequest::new(vec![libfoo_entry()]);

        let response = handle_update(&ctx, &Subject::new("operator"), &request);
        assert_eq!(response.status, UpdateStatus::Ok);

        let stored = ctx.store().packages().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "libfoo");
        assert_eq!(stored[0].repository_url, "https://example.com/libfoo");

        // the public listing reflects the update
        let html = crate::listing::render_listing(&stored, &Default::default());
        assert!(html.contains("libfoo"));
        assert!(html.contains(r#"<a href="https://example.com/libfoo""#));
    }

    #[test]
    fn missing_data_key_is_an_invalid_message() {
        let ctx = context(Arc::new(AllowAll));
        ctx.store()
            .set_packages(vec![libfoo_entry().into()])
            .unwrap();

        let request = UpdateRequest {
            action: UPDATE_ACTION.to_string(),
            data: None,
        };
        let response = handle_update(&ctx, &Subject::new("operator"), &request);
        assert_eq!(response.status, UpdateStatus::InvalidMessage);

        // nothing was mutated
        assert_eq!(ctx.store().packages().unwrap().len(), 1);
    }

    #[test]
    fn unprivileged_caller_is_rejected_without_mutation() {
        let ctx = context(Arc::new(DenyAll));
        ctx.store()
            .set_packages(vec![libfoo_entry().into()])
            .unwrap();

        let request = UpdateRequest::new(vec![]);
        let response = handle_update(&ctx, &Subject::new("visitor"), &request);
        assert_eq!(response.status, UpdateStatus::InsufficientPermissions);

        assert_eq!(ctx.store().packages().unwrap().len(), 1);
    }

    #[test]
    fn submitted_rows_are_trusted_verbatim() {
        // server-side re-validation is out of scope: an invalid URL that
        // somehow reaches the endpoint is stored as-is
        let ctx = context(Arc::new(AllowAll));
        let mut entry = libfoo_entry();
        entry.url = "http://127.0.0.1/internal".to_string();

        let response = handle_update(
            &ctx,
            &Subject::new("operator"),
            &UpdateRequest::new(vec![entry]),
        );
        assert_eq!(response.status, UpdateStatus::Ok);
        assert_eq!(
            ctx.store().packages().unwrap()[0].repository_url,
            "http://127.0.0.1/internal"
        );
    }

    #[test]
    fn empty_data_list_clears_the_store() {
        let ctx = context(Arc::new(AllowAll));
        ctx.store()
            .set_packages(vec![libfoo_entry().into()])
            .unwrap();

        let response = handle_update(
            &ctx,
            &Subject::new("operator"),
            &UpdateRequest::new(vec![]),
        );
        assert_eq!(response.status, UpdateStatus::Ok);
        assert!(ctx.store().packages().unwrap().is_empty());
    }
}
