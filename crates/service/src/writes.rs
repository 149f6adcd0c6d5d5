//! Fail-closed write path.
//!
//! Every mutation validates before it writes: party creation enforces the
//! tax-identifier checksum, and invoice creation/edit verifies the
//! caller-supplied seller and customer snapshots against stored records.
//! Any rejected verdict or missing record aborts the whole operation with
//! nothing written.

use rust_decimal::Decimal;
use tracing::warn;

use billabong_core::{InvoiceId, LineItemId, OwnerId, PartyId};
use billabong_invoicing::{Invoice, LineItem};
use billabong_parties::{
    verify_customer, verify_seller, Party, PartyKind, PartySnapshot, TaxId, Verdict,
};
use billabong_store::{RecordStore, StoreError};

use crate::error::ServiceError;

/// Invoice create/edit payload: metadata plus the untrusted party
/// snapshots the caller is asking to bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub id: InvoiceId,
    pub issue_date: Option<String>,
    pub seller: PartySnapshot,
    pub customer: PartySnapshot,
}

/// Mutating operations over parties, invoices, and line items.
pub struct WriteService<S> {
    store: S,
}

impl<S: RecordStore> WriteService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a party record. A supplied tax identifier must pass the
    /// checksum; sellers must supply one.
    pub fn create_party(
        &self,
        kind: PartyKind,
        id: PartyId,
        name: &str,
        address: &str,
        tax_id: Option<&str>,
        owner_id: OwnerId,
    ) -> Result<Party, ServiceError> {
        let tax_id = tax_id.map(TaxId::parse).transpose()?;
        let party = Party::new(kind, id, name, address, tax_id, owner_id)?;
        self.store.insert_party(party.clone())?;
        Ok(party)
    }

    /// Replace a party record's details. Same invariants as creation.
    pub fn update_party(
        &self,
        kind: PartyKind,
        id: PartyId,
        name: &str,
        address: &str,
        tax_id: Option<&str>,
        owner_id: OwnerId,
    ) -> Result<Party, ServiceError> {
        let tax_id = tax_id.map(TaxId::parse).transpose()?;
        let party = Party::new(kind, id, name, address, tax_id, owner_id)?;
        self.store.update_party(party.clone())?;
        Ok(party)
    }

    /// Create an invoice, binding the snapshot ids only after both
    /// snapshots verify against the stored records.
    pub fn create_invoice(&self, draft: InvoiceDraft) -> Result<Invoice, ServiceError> {
        let (seller_id, customer_id) = self.verify_snapshots(&draft)?;
        let invoice = Invoice::new(draft.id, draft.issue_date, seller_id, customer_id);
        self.store.insert_invoice(invoice.clone())?;
        Ok(invoice)
    }

    /// Re-bind an existing invoice's metadata and party references, with
    /// the same snapshot verification as creation.
    pub fn update_invoice(&self, draft: InvoiceDraft) -> Result<Invoice, ServiceError> {
        let (seller_id, customer_id) = self.verify_snapshots(&draft)?;
        let invoice = Invoice::new(draft.id, draft.issue_date, seller_id, customer_id);
        self.store.update_invoice(invoice.clone())?;
        Ok(invoice)
    }

    pub fn delete_invoice(&self, id: InvoiceId) -> Result<(), ServiceError> {
        Ok(self.store.delete_invoice(id)?)
    }

    /// Append a line item; the store assigns its sequential id.
    pub fn add_line_item(
        &self,
        invoice_id: InvoiceId,
        description: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<LineItem, ServiceError> {
        Ok(self
            .store
            .insert_line_item(invoice_id, description.to_string(), quantity, rate)?)
    }

    pub fn delete_line_item(
        &self,
        invoice_id: InvoiceId,
        id: LineItemId,
    ) -> Result<(), ServiceError> {
        Ok(self.store.delete_line_item(invoice_id, id)?)
    }

    /// Verify both snapshots; on success return the ids that may be bound.
    fn verify_snapshots(&self, draft: &InvoiceDraft) -> Result<(PartyId, PartyId), ServiceError> {
        let seller_id = self.verify_snapshot(PartyKind::Seller, &draft.seller, "seller")?;
        let customer_id = self.verify_snapshot(PartyKind::Customer, &draft.customer, "customer")?;
        Ok((seller_id, customer_id))
    }

    fn verify_snapshot(
        &self,
        kind: PartyKind,
        snapshot: &PartySnapshot,
        role: &'static str,
    ) -> Result<PartyId, ServiceError> {
        let stored = match snapshot.id {
            Some(id) => match self.store.fetch_party(kind, id) {
                Ok(party) => Some(party),
                Err(StoreError::NotFound) => None,
                Err(other) => return Err(other.into()),
            },
            None => None,
        };

        let verdict = match kind {
            PartyKind::Seller => verify_seller(snapshot, stored.as_ref()),
            PartyKind::Customer => verify_customer(snapshot, stored.as_ref()),
        };

        match verdict {
            Verdict::Consistent => {
                // The verdict guarantees the id was present.
                snapshot.id.ok_or(ServiceError::NotFound)
            }
            verdict => {
                warn!(%verdict, role, "rejected party snapshot; write aborted");
                Err(ServiceError::Rejected { role, verdict })
            }
        }
    }
}
