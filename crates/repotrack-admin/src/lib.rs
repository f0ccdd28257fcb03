//! Editing and rendering surfaces for the repotrack settings module.
//!
//! Three entry points, all stateless from the host's point of view:
//!
//! - [`editor::EditorTable`] drives the interactive settings table and
//!   assembles the submission payload.
//! - [`endpoint::handle_update`] is the server-side handler the host mounts
//!   under the update action.
//! - [`listing::render_listing`] produces the embeddable read-only table.

pub mod editor;
pub mod endpoint;
pub mod escape;
pub mod listing;
pub mod page;
pub mod transport;
pub mod wire;

pub use editor::{EditorTable, Field, Notice};
pub use endpoint::handle_update;
pub use listing::{render_listing, ListingOptions};
pub use transport::{HttpTransport, SubmitTransport, TransportError};
pub use wire::{PackageEntry, UpdateRequest, UpdateResponse, UpdateStatus, UPDATE_ACTION};
