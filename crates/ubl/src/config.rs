//! Document configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two externally overridable constants of the document: the currency
/// code stamped on every monetary element and the tax rate applied to the
/// subtotal. Changing either never changes the document's structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// ISO 4217 code applied uniformly as `currencyID`.
    pub currency_code: String,
    /// Fraction of the subtotal charged as tax.
    pub tax_rate: Decimal,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            currency_code: "AUD".to_string(),
            tax_rate: Decimal::new(10, 2),
        }
    }
}
