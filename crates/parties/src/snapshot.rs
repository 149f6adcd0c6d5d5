//! Snapshot consistency protocol.
//!
//! Invoice create/edit requests carry a full party snapshot from the caller
//! so the write path does not need a second lookup round-trip. The snapshot
//! is untrusted: before its `id` is bound into an invoice it is re-checked
//! field by field against the authoritative stored record. This closes the
//! hole where a caller submits a valid id paired with a forged name,
//! address, or tax identifier.
//!
//! Verification is pure over already-fetched data; the caller performs the
//! store lookup and passes the result in.

use serde::{Deserialize, Serialize};

use billabong_core::{OwnerId, PartyId};

use crate::party::Party;

/// Caller-supplied party snapshot. Every field is optional because the
/// payload is untrusted; the required-field set depends on the party kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySnapshot {
    pub id: Option<PartyId>,
    pub name: Option<String>,
    pub address: Option<String>,
    /// Raw text as submitted; compared to the stored identifier by numeric
    /// value, not by string.
    pub tax_id: Option<String>,
    pub owner_id: Option<OwnerId>,
}

/// Outcome of a consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The snapshot matches the stored record and may be trusted.
    Consistent,
    /// A required snapshot field is absent.
    MissingField(&'static str),
    /// No stored record exists for the snapshot's id.
    NotFound,
    /// The snapshot disagrees with the stored record on the named field.
    Mismatch(&'static str),
}

impl Verdict {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Verdict::Consistent)
    }
}

impl core::fmt::Display for Verdict {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Verdict::Consistent => f.write_str("consistent"),
            Verdict::MissingField(field) => write!(f, "missing field: {field}"),
            Verdict::NotFound => f.write_str("no stored record"),
            Verdict::Mismatch(field) => write!(f, "mismatch on: {field}"),
        }
    }
}

/// Verify a seller snapshot against the stored seller record.
///
/// Required fields: `id`, `tax_id`, `name`, `address`, `owner_id`. The tax
/// identifier is compared numerically; everything else exactly.
pub fn verify_seller(snapshot: &PartySnapshot, stored: Option<&Party>) -> Verdict {
    let Some(_) = snapshot.id else {
        return Verdict::MissingField("id");
    };
    let Some(submitted_tax_id) = snapshot.tax_id.as_deref() else {
        return Verdict::MissingField("tax_id");
    };
    let Some(name) = snapshot.name.as_deref() else {
        return Verdict::MissingField("name");
    };
    let Some(address) = snapshot.address.as_deref() else {
        return Verdict::MissingField("address");
    };
    let Some(owner_id) = snapshot.owner_id else {
        return Verdict::MissingField("owner_id");
    };

    let Some(stored) = stored else {
        return Verdict::NotFound;
    };

    // Sellers always carry a tax identifier.
    let Some(stored_tax_id) = stored.tax_id() else {
        return Verdict::Mismatch("tax_id");
    };
    if !numeric_equal(submitted_tax_id, stored_tax_id.numeric()) {
        return Verdict::Mismatch("tax_id");
    }
    if owner_id != stored.owner_id() {
        return Verdict::Mismatch("owner_id");
    }
    if name != stored.name() {
        return Verdict::Mismatch("name");
    }
    if address != stored.address() {
        return Verdict::Mismatch("address");
    }

    Verdict::Consistent
}

/// Verify a customer snapshot against the stored customer record.
///
/// Required fields: `id`, `name`, `address`, `owner_id`. Tax-identifier
/// presence must agree between snapshot and stored record; when both are
/// present they are compared numerically.
pub fn verify_customer(snapshot: &PartySnapshot, stored: Option<&Party>) -> Verdict {
    let Some(_) = snapshot.id else {
        return Verdict::MissingField("id");
    };
    let Some(name) = snapshot.name.as_deref() else {
        return Verdict::MissingField("name");
    };
    let Some(address) = snapshot.address.as_deref() else {
        return Verdict::MissingField("address");
    };
    let Some(owner_id) = snapshot.owner_id else {
        return Verdict::MissingField("owner_id");
    };

    let Some(stored) = stored else {
        return Verdict::NotFound;
    };

    match (snapshot.tax_id.as_deref(), stored.tax_id()) {
        (None, None) => {}
        (Some(submitted), Some(stored_tax_id)) => {
            if !numeric_equal(submitted, stored_tax_id.numeric()) {
                return Verdict::Mismatch("tax_id");
            }
        }
        // One present, one absent: presence must agree.
        _ => return Verdict::Mismatch("tax_id"),
    }

    if owner_id != stored.owner_id() {
        return Verdict::Mismatch("owner_id");
    }
    if name != stored.name() {
        return Verdict::Mismatch("name");
    }
    if address != stored.address() {
        return Verdict::Mismatch("address");
    }

    Verdict::Consistent
}

/// Numeric comparison of a submitted tax identifier against a stored value.
///
/// A submission that does not parse as a number cannot equal an 11-digit
/// stored value, so it counts as unequal rather than as an error.
fn numeric_equal(submitted: &str, stored: u64) -> bool {
    submitted.trim().parse::<u64>() == Ok(stored)
}
