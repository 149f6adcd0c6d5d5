//! `billabong-ubl` — UBL invoice document assembly.
//!
//! Builds an explicit in-memory XML tree from validated, pre-fetched
//! records, then serializes it with a separate stateless writer. The tree is
//! structurally comparable in tests before any text is produced; element
//! order is fixed and reproduced exactly for interoperability.

pub mod assembler;
pub mod config;
pub mod date;
pub mod node;
pub mod writer;

pub use assembler::assemble_invoice;
pub use config::DocumentConfig;
pub use date::normalize_issue_date;
pub use node::{XmlContent, XmlNode};
pub use writer::write_document;
