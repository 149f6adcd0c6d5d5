//! In-memory record store.

use std::collections::HashMap;
use std::sync::RwLock;

use rust_decimal::Decimal;

use billabong_core::{InvoiceId, LineItemId, PartyId};
use billabong_invoicing::{Invoice, LineItem};
use billabong_parties::{Party, PartyKind};

use crate::record_store::{RecordStore, StoreError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct PartyKey {
    kind: PartyKind,
    id: PartyId,
}

#[derive(Debug, Default)]
struct Records {
    parties: HashMap<PartyKey, Party>,
    invoices: HashMap<InvoiceId, Invoice>,
    /// Creation-ordered line items per invoice.
    line_items: HashMap<InvoiceId, Vec<LineItem>>,
}

/// In-memory store behind a single `RwLock`.
///
/// Intended for tests/dev. Line-item id assignment happens under the write
/// lock, which makes it atomic with respect to other writers.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Records>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Records>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Records>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))
    }
}

impl RecordStore for InMemoryStore {
    fn fetch_party(&self, kind: PartyKind, id: PartyId) -> Result<Party, StoreError> {
        let records = self.read()?;
        records
            .parties
            .get(&PartyKey { kind, id })
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn insert_party(&self, party: Party) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let key = PartyKey {
            kind: party.kind(),
            id: party.id(),
        };
        if records.parties.contains_key(&key) {
            return Err(StoreError::AlreadyExists(format!(
                "party {}",
                party.id()
            )));
        }
        records.parties.insert(key, party);
        Ok(())
    }

    fn update_party(&self, party: Party) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let key = PartyKey {
            kind: party.kind(),
            id: party.id(),
        };
        if !records.parties.contains_key(&key) {
            return Err(StoreError::NotFound);
        }
        records.parties.insert(key, party);
        Ok(())
    }

    fn delete_party(&self, kind: PartyKind, id: PartyId) -> Result<(), StoreError> {
        let mut records = self.write()?;
        records
            .parties
            .remove(&PartyKey { kind, id })
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    fn fetch_invoice(&self, id: InvoiceId) -> Result<Invoice, StoreError> {
        let records = self.read()?;
        records.invoices.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn insert_invoice(&self, invoice: Invoice) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let id = invoice.id();
        if records.invoices.contains_key(&id) {
            return Err(StoreError::AlreadyExists(format!("invoice {id}")));
        }
        records.invoices.insert(id, invoice);
        Ok(())
    }

    fn update_invoice(&self, invoice: Invoice) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let id = invoice.id();
        if !records.invoices.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        records.invoices.insert(id, invoice);
        Ok(())
    }

    fn delete_invoice(&self, id: InvoiceId) -> Result<(), StoreError> {
        let mut records = self.write()?;
        records.invoices.remove(&id).ok_or(StoreError::NotFound)?;
        // Line items are owned by the invoice; they go with it.
        records.line_items.remove(&id);
        Ok(())
    }

    fn fetch_line_items(&self, invoice_id: InvoiceId) -> Result<Vec<LineItem>, StoreError> {
        let records = self.read()?;
        if !records.invoices.contains_key(&invoice_id) {
            return Err(StoreError::NotFound);
        }
        Ok(records
            .line_items
            .get(&invoice_id)
            .cloned()
            .unwrap_or_default())
    }

    fn insert_line_item(
        &self,
        invoice_id: InvoiceId,
        description: String,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<LineItem, StoreError> {
        let mut records = self.write()?;
        if !records.invoices.contains_key(&invoice_id) {
            return Err(StoreError::NotFound);
        }

        let items = records.line_items.entry(invoice_id).or_default();
        // Id assignment and insertion happen under the same write lock.
        // Allocating past the highest live id keeps ids unique after
        // deletions; counting rows would hand out an id that is still in
        // use.
        let next = items
            .iter()
            .map(|item| item.id().value())
            .max()
            .unwrap_or(0)
            + 1;
        let id = LineItemId::new(next);
        let item = LineItem::new(id, invoice_id, description, quantity, rate)?;
        items.push(item.clone());
        Ok(item)
    }

    fn delete_line_item(&self, invoice_id: InvoiceId, id: LineItemId) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let items = records
            .line_items
            .get_mut(&invoice_id)
            .ok_or(StoreError::NotFound)?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
