//! `billabong-invoicing` — invoices, line items, and derived totals.

pub mod invoice;
pub mod line_item;
pub mod totals;

pub use invoice::Invoice;
pub use line_item::LineItem;
pub use totals::{render_amount, InvoiceTotals};
