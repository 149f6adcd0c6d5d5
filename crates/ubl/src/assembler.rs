//! UBL invoice assembly.
//!
//! Composes seller, customer, invoice metadata, and computed totals into
//! the fixed-shape document tree. The assembler trusts its inputs: records
//! are pre-fetched and validated by the caller, totals come from
//! [`InvoiceTotals::compute`], and a missing party must short-circuit
//! before this point.

use chrono::NaiveDate;

use billabong_invoicing::{render_amount, Invoice, InvoiceTotals, LineItem};
use billabong_parties::Party;

use crate::config::DocumentConfig;
use crate::date::normalize_issue_date;
use crate::node::XmlNode;

const INVOICE_NAMESPACE: &str = "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2";
/// UN/ECE 1001 code for a standard commercial invoice.
const INVOICE_TYPE_CODE: &str = "380";

/// Build the document tree for one invoice.
///
/// Element order is significant and reproduced exactly: ID, IssueDate,
/// InvoiceTypeCode, supplier party, customer party, TaxTotal,
/// LegalMonetaryTotal, then one InvoiceLine per line item in invoice order.
/// `today` feeds the issue-date fallback.
pub fn assemble_invoice(
    invoice: &Invoice,
    seller: &Party,
    customer: &Party,
    lines: &[LineItem],
    totals: &InvoiceTotals,
    today: NaiveDate,
    config: &DocumentConfig,
) -> XmlNode {
    let issue_date = normalize_issue_date(invoice.issue_date(), today);

    let mut root = XmlNode::element("Invoice")
        .with_attr("xmlns", INVOICE_NAMESPACE)
        .with_child(XmlNode::text_element(
            "cbc:ID",
            invoice.id().to_string(),
        ))
        .with_child(XmlNode::text_element("cbc:IssueDate", issue_date))
        .with_child(XmlNode::text_element(
            "cbc:InvoiceTypeCode",
            INVOICE_TYPE_CODE,
        ))
        .with_child(party_element("cac:AccountingSupplierParty", seller))
        .with_child(party_element("cac:AccountingCustomerParty", customer))
        .with_child(
            XmlNode::element("cac:TaxTotal").with_child(currency_amount(
                "cbc:TaxAmount",
                render_amount(totals.tax),
                config,
            )),
        )
        .with_child(
            XmlNode::element("cac:LegalMonetaryTotal").with_child(currency_amount(
                "cbc:PayableAmount",
                render_amount(totals.subtotal),
                config,
            )),
        );

    for (line, amount) in lines.iter().zip(&totals.line_amounts) {
        root.push_child(line_element(line, *amount, config));
    }

    root
}

fn party_element(role: &str, party: &Party) -> XmlNode {
    // A party without a tax identifier still emits CompanyID (empty), so
    // the document shape never varies.
    let company_id = party.tax_id().map(|t| t.as_str()).unwrap_or_default();

    XmlNode::element(role).with_child(
        XmlNode::element("cac:Party")
            .with_child(XmlNode::text_element("cbc:Name", party.name()))
            .with_child(XmlNode::text_element("cbc:CompanyID", company_id))
            .with_child(
                XmlNode::element("cac:PostalAddress").with_child(XmlNode::text_element(
                    "cbc:StreetName",
                    party.address(),
                )),
            ),
    )
}

fn line_element(line: &LineItem, amount: rust_decimal::Decimal, config: &DocumentConfig) -> XmlNode {
    XmlNode::element("cac:InvoiceLine")
        .with_child(XmlNode::text_element(
            "cbc:ID",
            line.id().to_string(),
        ))
        .with_child(XmlNode::text_element(
            "cbc:InvoicedQuantity",
            line.quantity().to_string(),
        ))
        .with_child(currency_amount(
            "cbc:LineExtensionAmount",
            render_amount(amount),
            config,
        ))
        .with_child(
            XmlNode::element("cac:Item").with_child(XmlNode::text_element(
                "cbc:Description",
                line.description(),
            )),
        )
        .with_child(
            XmlNode::element("cac:Price").with_child(currency_amount(
                "cbc:PriceAmount",
                line.rate().to_string(),
                config,
            )),
        )
}

fn currency_amount(name: &str, value: String, config: &DocumentConfig) -> XmlNode {
    XmlNode::text_element(name, value).with_attr("currencyID", config.currency_code.clone())
}
