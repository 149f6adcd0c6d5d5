//! `billabong-service` — request orchestration.
//!
//! Two flows over the record store: materializing an invoice document
//! (fetch, compute, assemble, serialize) and the fail-closed write path
//! (verify caller-supplied snapshots against stored records before any
//! mutation). An HTTP layer would sit directly on top of these services.

pub mod documents;
pub mod error;
pub mod writes;

pub use documents::DocumentService;
pub use error::ServiceError;
pub use writes::{InvoiceDraft, WriteService};
