use serde::{Deserialize, Serialize};

use billabong_core::{DomainError, DomainResult, OwnerId, PartyId};

use crate::tax_id::TaxId;

/// Party kind: seller or customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
    Seller,
    Customer,
}

/// Trading party record (seller or customer).
///
/// Invoices hold the party's id, never the party itself; a party may be
/// referenced by many invoices and outlives any one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    id: PartyId,
    kind: PartyKind,
    name: String,
    address: String,
    /// Mandatory for sellers, optional for customers.
    tax_id: Option<TaxId>,
    owner_id: OwnerId,
}

impl Party {
    /// Create a party record, enforcing creation-time invariants:
    /// non-blank name and address, a tax identifier for every seller, and
    /// the checksum on any supplied identifier (via [`TaxId::parse`]).
    pub fn new(
        kind: PartyKind,
        id: PartyId,
        name: impl Into<String>,
        address: impl Into<String>,
        tax_id: Option<TaxId>,
        owner_id: OwnerId,
    ) -> DomainResult<Self> {
        let name = name.into();
        let address = address.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if address.trim().is_empty() {
            return Err(DomainError::validation("address cannot be empty"));
        }
        if kind == PartyKind::Seller && tax_id.is_none() {
            return Err(DomainError::missing_field("tax_id"));
        }

        Ok(Self {
            id,
            kind,
            name,
            address,
            tax_id,
            owner_id,
        })
    }

    pub fn id(&self) -> PartyId {
        self.id
    }

    pub fn kind(&self) -> PartyKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn tax_id(&self) -> Option<&TaxId> {
        self.tax_id.as_ref()
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }
}
