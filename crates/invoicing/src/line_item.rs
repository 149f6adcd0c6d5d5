use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use billabong_core::{DomainError, DomainResult, InvoiceId, LineItemId};

/// One billable entry on an invoice.
///
/// Line items are owned exclusively by their invoice and are never shared.
/// Ids are 1-based and sequential within the invoice; assignment belongs to
/// the record store so it can be made atomic under concurrent writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: LineItemId,
    invoice_id: InvoiceId,
    description: String,
    quantity: Decimal,
    /// Unit price. Non-negative; zero-rated lines are allowed.
    rate: Decimal,
}

impl LineItem {
    pub fn new(
        id: LineItemId,
        invoice_id: InvoiceId,
        description: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
    ) -> DomainResult<Self> {
        if quantity <= Decimal::ZERO {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if rate < Decimal::ZERO {
            return Err(DomainError::validation("rate cannot be negative"));
        }

        Ok(Self {
            id,
            invoice_id,
            description: description.into(),
            quantity,
            rate,
        })
    }

    pub fn id(&self) -> LineItemId {
        self.id
    }

    pub fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Raw extension amount, `quantity * rate`, unrounded.
    pub fn amount(&self) -> Decimal {
        self.quantity * self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn computes_raw_amount() {
        let item = LineItem::new(
            LineItemId::new(1),
            InvoiceId::new(7),
            "Widget",
            dec!(2),
            dec!(10.00),
        )
        .unwrap();

        assert_eq!(item.amount(), dec!(20.00));
    }

    #[test]
    fn zero_rate_is_allowed() {
        let item = LineItem::new(
            LineItemId::new(1),
            InvoiceId::new(7),
            "Sample",
            dec!(1),
            dec!(0),
        )
        .unwrap();

        assert_eq!(item.amount(), dec!(0));
    }

    #[test]
    fn rejects_non_positive_quantity() {
        for quantity in [dec!(0), dec!(-1)] {
            let err = LineItem::new(
                LineItemId::new(1),
                InvoiceId::new(7),
                "Widget",
                quantity,
                dec!(10),
            )
            .unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected Validation error for quantity {quantity}"),
            }
        }
    }

    #[test]
    fn rejects_negative_rate() {
        let err = LineItem::new(
            LineItemId::new(1),
            InvoiceId::new(7),
            "Widget",
            dec!(1),
            dec!(-0.01),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative rate"),
        }
    }
}
