//! Authorization seam between the host application and the update path.

/// The authenticated caller, as identified by the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
}

impl Subject {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Capability check provided by the host.
///
/// The update endpoint asks this once per request; everything else in the
/// module is capability-agnostic.
pub trait Authorizer: Send + Sync {
    fn has_capability(&self, subject: &Subject, capability: &str) -> bool;
}
