//! Derived monetary figures for an invoice.
//!
//! Raw values carry full precision; rounding is a display concern applied by
//! [`render_amount`] when the document is serialized. The subtotal sums the
//! unrounded per-line products, so per-line display rounding never leaks
//! into the total.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::line_item::LineItem;

/// Per-line amounts, subtotal, and tax for one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Unrounded `quantity * rate`, one per line item in invoice order.
    pub line_amounts: Vec<Decimal>,
    /// Sum of the unrounded line amounts.
    pub subtotal: Decimal,
    /// `subtotal * tax_rate`, unrounded.
    pub tax: Decimal,
}

impl InvoiceTotals {
    /// Compute totals over the ordered line items of one invoice.
    ///
    /// An empty sequence is a valid zero-total invoice, not an error.
    pub fn compute(lines: &[LineItem], tax_rate: Decimal) -> Self {
        let line_amounts: Vec<Decimal> = lines.iter().map(LineItem::amount).collect();
        let subtotal: Decimal = line_amounts.iter().sum();
        let tax = subtotal * tax_rate;

        Self {
            line_amounts,
            subtotal,
            tax,
        }
    }
}

/// Render a monetary value with exactly 2 fractional digits, rounding
/// half-up (midpoint away from zero).
pub fn render_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use billabong_core::{InvoiceId, LineItemId};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    const TAX_RATE: Decimal = dec!(0.10);

    fn line(id: i64, quantity: Decimal, rate: Decimal) -> LineItem {
        LineItem::new(
            LineItemId::new(id),
            InvoiceId::new(7),
            format!("line {id}"),
            quantity,
            rate,
        )
        .unwrap()
    }

    #[test]
    fn computes_line_amounts_subtotal_and_tax() {
        let lines = vec![line(1, dec!(2), dec!(10.00)), line(2, dec!(3), dec!(1.50))];
        let totals = InvoiceTotals::compute(&lines, TAX_RATE);

        assert_eq!(totals.line_amounts, vec![dec!(20.00), dec!(4.50)]);
        assert_eq!(totals.subtotal, dec!(24.50));
        assert_eq!(totals.tax, dec!(2.450));
        assert_eq!(render_amount(totals.tax), "2.45");
    }

    #[test]
    fn empty_invoice_yields_zero_totals() {
        let totals = InvoiceTotals::compute(&[], TAX_RATE);

        assert!(totals.line_amounts.is_empty());
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(render_amount(totals.subtotal), "0.00");
    }

    #[test]
    fn subtotal_sums_unrounded_products() {
        // Each product carries 3 fractional digits; rounding each line first
        // would give 1.01 + 1.01 = 2.02, the unrounded sum gives 2.01.
        let lines = vec![
            line(1, dec!(1), dec!(1.005)),
            line(2, dec!(1), dec!(1.005)),
        ];
        let totals = InvoiceTotals::compute(&lines, TAX_RATE);

        assert_eq!(totals.subtotal, dec!(2.010));
        assert_eq!(render_amount(totals.subtotal), "2.01");
    }

    #[test]
    fn render_amount_rounds_half_up() {
        assert_eq!(render_amount(dec!(2.005)), "2.01");
        assert_eq!(render_amount(dec!(2.004)), "2.00");
        assert_eq!(render_amount(dec!(0)), "0.00");
        assert_eq!(render_amount(dec!(19.999)), "20.00");
    }

    proptest! {
        #[test]
        fn subtotal_equals_sum_of_products(
            quantities in proptest::collection::vec(1u32..10_000, 0..8),
            rates in proptest::collection::vec(0u32..1_000_000, 8),
        ) {
            let lines: Vec<LineItem> = quantities
                .iter()
                .zip(&rates)
                .enumerate()
                .map(|(i, (&q, &r))| {
                    // Rate in cents, quantity in thousandths.
                    line(
                        i as i64 + 1,
                        Decimal::new(i64::from(q), 3),
                        Decimal::new(i64::from(r), 2),
                    )
                })
                .collect();

            let totals = InvoiceTotals::compute(&lines, TAX_RATE);

            let expected: Decimal = lines.iter().map(|l| l.quantity() * l.rate()).sum();
            prop_assert_eq!(totals.subtotal, expected);
            prop_assert_eq!(totals.tax, expected * TAX_RATE);
            prop_assert_eq!(totals.line_amounts.len(), lines.len());
        }
    }
}
