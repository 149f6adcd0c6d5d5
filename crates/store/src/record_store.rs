//! Record store trait.

use rust_decimal::Decimal;
use thiserror::Error;

use billabong_core::{DomainError, InvoiceId, LineItemId, PartyId};
use billabong_invoicing::{Invoice, LineItem};
use billabong_parties::{Party, PartyKind};

/// Storage-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record exists for the given id.
    #[error("record not found")]
    NotFound,

    /// A record with the given id already exists.
    #[error("record already exists: {0}")]
    AlreadyExists(String),

    /// The record itself is invalid (wraps the domain error).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backend failed (lock poisoned, connection lost, ...).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Key-value record store for parties, invoices, and line items.
///
/// Sellers and customers live in separate keyspaces: a seller id never
/// resolves a customer record and vice versa.
///
/// Required property: [`insert_line_item`](RecordStore::insert_line_item)
/// assigns the 1-based, monotonically increasing per-invoice id
/// **atomically**, and an id is never reused after its item is deleted.
/// Counting existing rows and inserting in a second step both races under
/// concurrent writers and recycles live ids after a deletion; the
/// assignment must happen inside whatever unit of isolation the backend
/// provides (a transaction, a sequence, or a lock).
pub trait RecordStore: Send + Sync {
    fn fetch_party(&self, kind: PartyKind, id: PartyId) -> Result<Party, StoreError>;
    fn insert_party(&self, party: Party) -> Result<(), StoreError>;
    fn update_party(&self, party: Party) -> Result<(), StoreError>;
    fn delete_party(&self, kind: PartyKind, id: PartyId) -> Result<(), StoreError>;

    fn fetch_invoice(&self, id: InvoiceId) -> Result<Invoice, StoreError>;
    fn insert_invoice(&self, invoice: Invoice) -> Result<(), StoreError>;
    fn update_invoice(&self, invoice: Invoice) -> Result<(), StoreError>;
    /// Deletes the invoice and the line items it owns.
    fn delete_invoice(&self, id: InvoiceId) -> Result<(), StoreError>;

    /// Line items of one invoice, in creation order.
    fn fetch_line_items(&self, invoice_id: InvoiceId) -> Result<Vec<LineItem>, StoreError>;

    /// Create a line item under `invoice_id`, assigning its sequential id.
    /// Returns the stored item, id included.
    fn insert_line_item(
        &self,
        invoice_id: InvoiceId,
        description: String,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<LineItem, StoreError>;

    fn delete_line_item(&self, invoice_id: InvoiceId, id: LineItemId) -> Result<(), StoreError>;
}

impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    fn fetch_party(&self, kind: PartyKind, id: PartyId) -> Result<Party, StoreError> {
        (**self).fetch_party(kind, id)
    }

    fn insert_party(&self, party: Party) -> Result<(), StoreError> {
        (**self).insert_party(party)
    }

    fn update_party(&self, party: Party) -> Result<(), StoreError> {
        (**self).update_party(party)
    }

    fn delete_party(&self, kind: PartyKind, id: PartyId) -> Result<(), StoreError> {
        (**self).delete_party(kind, id)
    }

    fn fetch_invoice(&self, id: InvoiceId) -> Result<Invoice, StoreError> {
        (**self).fetch_invoice(id)
    }

    fn insert_invoice(&self, invoice: Invoice) -> Result<(), StoreError> {
        (**self).insert_invoice(invoice)
    }

    fn update_invoice(&self, invoice: Invoice) -> Result<(), StoreError> {
        (**self).update_invoice(invoice)
    }

    fn delete_invoice(&self, id: InvoiceId) -> Result<(), StoreError> {
        (**self).delete_invoice(id)
    }

    fn fetch_line_items(&self, invoice_id: InvoiceId) -> Result<Vec<LineItem>, StoreError> {
        (**self).fetch_line_items(invoice_id)
    }

    fn insert_line_item(
        &self,
        invoice_id: InvoiceId,
        description: String,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<LineItem, StoreError> {
        (**self).insert_line_item(invoice_id, description, quantity, rate)
    }

    fn delete_line_item(&self, invoice_id: InvoiceId, id: LineItemId) -> Result<(), StoreError> {
        (**self).delete_line_item(invoice_id, id)
    }
}
