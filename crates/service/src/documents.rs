//! Invoice document materialization.

use chrono::Utc;
use tracing::info;

use billabong_invoicing::InvoiceTotals;
use billabong_parties::PartyKind;
use billabong_store::RecordStore;
use billabong_ubl::{assemble_invoice, write_document, DocumentConfig};
use billabong_core::InvoiceId;

use crate::error::ServiceError;

/// Turns stored records into the serialized invoice document.
pub struct DocumentService<S> {
    store: S,
    config: DocumentConfig,
}

impl<S: RecordStore> DocumentService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, DocumentConfig::default())
    }

    pub fn with_config(store: S, config: DocumentConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Materialize the document for one invoice.
    ///
    /// Resolves the invoice, its seller and customer, and its line items;
    /// a missing record short-circuits with `NotFound` before any assembly
    /// is attempted. The computation itself is pure; this method only
    /// sequences the lookups around it.
    pub fn materialize(&self, invoice_id: InvoiceId) -> Result<String, ServiceError> {
        let invoice = self.store.fetch_invoice(invoice_id)?;
        let seller = self
            .store
            .fetch_party(PartyKind::Seller, invoice.seller_id())?;
        let customer = self
            .store
            .fetch_party(PartyKind::Customer, invoice.customer_id())?;
        let lines = self.store.fetch_line_items(invoice_id)?;

        let totals = InvoiceTotals::compute(&lines, self.config.tax_rate);
        let document = assemble_invoice(
            &invoice,
            &seller,
            &customer,
            &lines,
            &totals,
            Utc::now().date_naive(),
            &self.config,
        );

        info!(
            invoice_id = %invoice_id,
            lines = lines.len(),
            subtotal = %totals.subtotal,
            "materialized invoice document"
        );

        Ok(write_document(&document))
    }
}
