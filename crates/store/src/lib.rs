//! `billabong-store` — record store contract.
//!
//! Records are kept in a lookup/insert/update/delete store keyed by numeric
//! id. The trait is the seam a persistent backend would implement; the
//! in-memory implementation backs tests and development.

pub mod in_memory;
pub mod record_store;

pub use in_memory::InMemoryStore;
pub use record_store::{RecordStore, StoreError};
