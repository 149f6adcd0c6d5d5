use serde::{Deserialize, Serialize};

use billabong_core::{InvoiceId, PartyId};

/// Invoice record.
///
/// Holds seller and customer by id (a party outlives any invoice that
/// references it); line items live in the record store keyed by this
/// invoice's id, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    /// Issue date as submitted by the caller. Kept raw; parsing and the
    /// current-date fallback happen at document assembly time.
    issue_date: Option<String>,
    seller_id: PartyId,
    customer_id: PartyId,
}

impl Invoice {
    pub fn new(
        id: InvoiceId,
        issue_date: Option<String>,
        seller_id: PartyId,
        customer_id: PartyId,
    ) -> Self {
        Self {
            id,
            issue_date,
            seller_id,
            customer_id,
        }
    }

    pub fn id(&self) -> InvoiceId {
        self.id
    }

    pub fn issue_date(&self) -> Option<&str> {
        self.issue_date.as_deref()
    }

    pub fn seller_id(&self) -> PartyId {
        self.seller_id
    }

    pub fn customer_id(&self) -> PartyId {
        self.customer_id
    }
}
