//! `billabong-parties` — sellers and customers.
//!
//! Party records, the tax-identifier checksum, and the snapshot consistency
//! protocol that decides whether caller-supplied party data may be trusted
//! to bind to an invoice.

pub mod party;
pub mod snapshot;
pub mod tax_id;

pub use party::{Party, PartyKind};
pub use snapshot::{verify_customer, verify_seller, PartySnapshot, Verdict};
pub use tax_id::TaxId;
