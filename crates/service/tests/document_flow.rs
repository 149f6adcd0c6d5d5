//! Black-box test of the full invoice flow: register parties, create an
//! invoice with snapshot verification, add line items, and materialize the
//! document.

use billabong_core::{InvoiceId, OwnerId, PartyId};
use billabong_parties::{PartyKind, PartySnapshot};
use billabong_service::{DocumentService, InvoiceDraft, ServiceError, WriteService};
use billabong_store::InMemoryStore;
use billabong_ubl::DocumentConfig;
use rust_decimal_macros::dec;
use std::sync::Arc;

const OWNER: OwnerId = OwnerId::new(10);

fn seed(writes: &WriteService<Arc<InMemoryStore>>) {
    // Idempotent; gives the service-layer tracing events a subscriber.
    billabong_observability::init();

    writes
        .create_party(
            PartyKind::Seller,
            PartyId::new(1),
            "Acme",
            "1 Rd",
            Some("51824753556"),
            OWNER,
        )
        .unwrap();
    writes
        .create_party(
            PartyKind::Customer,
            PartyId::new(2),
            "Bob",
            "2 Rd",
            Some("91841570529"),
            OWNER,
        )
        .unwrap();
}

fn draft() -> InvoiceDraft {
    InvoiceDraft {
        id: InvoiceId::new(7),
        issue_date: Some("2024-03-05".to_string()),
        seller: PartySnapshot {
            id: Some(PartyId::new(1)),
            name: Some("Acme".to_string()),
            address: Some("1 Rd".to_string()),
            tax_id: Some("51824753556".to_string()),
            owner_id: Some(OWNER),
        },
        customer: PartySnapshot {
            id: Some(PartyId::new(2)),
            name: Some("Bob".to_string()),
            address: Some("2 Rd".to_string()),
            tax_id: Some("91841570529".to_string()),
            owner_id: Some(OWNER),
        },
    }
}

/// Text of the first `<tag>` element inside `scope`.
fn element_text<'a>(scope: &'a str, tag: &str) -> &'a str {
    let open = format!("<{tag}");
    let start = scope.find(&open).expect("element present");
    let rest = &scope[start..];
    let text_start = rest.find('>').unwrap() + 1;
    let text_end = rest.find("</").unwrap();
    &rest[text_start..text_end]
}

#[test]
fn end_to_end_document_matches_expected_bytes() {
    let store = Arc::new(InMemoryStore::new());
    let writes = WriteService::new(Arc::clone(&store));
    seed(&writes);
    writes.create_invoice(draft()).unwrap();
    writes
        .add_line_item(InvoiceId::new(7), "Widget", dec!(2), dec!(10.00))
        .unwrap();

    let documents = DocumentService::new(store);
    let text = documents.materialize(InvoiceId::new(7)).unwrap();

    let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<Invoice xmlns=\"urn:oasis:names:specification:ubl:schema:xsd:Invoice-2\">\n\
\x20 <cbc:ID>7</cbc:ID>\n\
\x20 <cbc:IssueDate>2024-03-05</cbc:IssueDate>\n\
\x20 <cbc:InvoiceTypeCode>380</cbc:InvoiceTypeCode>\n\
\x20 <cac:AccountingSupplierParty>\n\
\x20   <cac:Party>\n\
\x20     <cbc:Name>Acme</cbc:Name>\n\
\x20     <cbc:CompanyID>51824753556</cbc:CompanyID>\n\
\x20     <cac:PostalAddress>\n\
\x20       <cbc:StreetName>1 Rd</cbc:StreetName>\n\
\x20     </cac:PostalAddress>\n\
\x20   </cac:Party>\n\
\x20 </cac:AccountingSupplierParty>\n\
\x20 <cac:AccountingCustomerParty>\n\
\x20   <cac:Party>\n\
\x20     <cbc:Name>Bob</cbc:Name>\n\
\x20     <cbc:CompanyID>91841570529</cbc:CompanyID>\n\
\x20     <cac:PostalAddress>\n\
\x20       <cbc:StreetName>2 Rd</cbc:StreetName>\n\
\x20     </cac:PostalAddress>\n\
\x20   </cac:Party>\n\
\x20 </cac:AccountingCustomerParty>\n\
\x20 <cac:TaxTotal>\n\
\x20   <cbc:TaxAmount currencyID=\"AUD\">2.00</cbc:TaxAmount>\n\
\x20 </cac:TaxTotal>\n\
\x20 <cac:LegalMonetaryTotal>\n\
\x20   <cbc:PayableAmount currencyID=\"AUD\">20.00</cbc:PayableAmount>\n\
\x20 </cac:LegalMonetaryTotal>\n\
\x20 <cac:InvoiceLine>\n\
\x20   <cbc:ID>1</cbc:ID>\n\
\x20   <cbc:InvoicedQuantity>2</cbc:InvoicedQuantity>\n\
\x20   <cbc:LineExtensionAmount currencyID=\"AUD\">20.00</cbc:LineExtensionAmount>\n\
\x20   <cac:Item>\n\
\x20     <cbc:Description>Widget</cbc:Description>\n\
\x20   </cac:Item>\n\
\x20   <cac:Price>\n\
\x20     <cbc:PriceAmount currencyID=\"AUD\">10.00</cbc:PriceAmount>\n\
\x20   </cac:Price>\n\
\x20 </cac:InvoiceLine>\n\
</Invoice>\n";
    assert_eq!(text, expected);
}

#[test]
fn produced_document_round_trips_line_data() {
    let store = Arc::new(InMemoryStore::new());
    let writes = WriteService::new(Arc::clone(&store));
    seed(&writes);
    writes.create_invoice(draft()).unwrap();
    writes
        .add_line_item(InvoiceId::new(7), "Widget", dec!(2), dec!(10.00))
        .unwrap();
    writes
        .add_line_item(InvoiceId::new(7), "Gadget", dec!(3), dec!(1.50))
        .unwrap();

    let documents = DocumentService::new(store);
    let text = documents.materialize(InvoiceId::new(7)).unwrap();

    let line_count = text.matches("<cac:InvoiceLine>").count();
    assert_eq!(line_count, 2);

    let first_line_start = text.find("<cac:InvoiceLine>").unwrap();
    let second_line_start = text.rfind("<cac:InvoiceLine>").unwrap();
    let first = &text[first_line_start..second_line_start];
    let second = &text[second_line_start..];

    assert_eq!(element_text(first, "cbc:InvoicedQuantity"), "2");
    assert_eq!(element_text(first, "cbc:Description"), "Widget");
    assert_eq!(element_text(first, "cbc:PriceAmount"), "10.00");
    assert_eq!(element_text(first, "cbc:LineExtensionAmount"), "20.00");

    assert_eq!(element_text(second, "cbc:InvoicedQuantity"), "3");
    assert_eq!(element_text(second, "cbc:Description"), "Gadget");
    assert_eq!(element_text(second, "cbc:PriceAmount"), "1.50");
    assert_eq!(element_text(second, "cbc:LineExtensionAmount"), "4.50");
}

#[test]
fn invoice_with_no_lines_materializes_with_zero_totals() {
    let store = Arc::new(InMemoryStore::new());
    let writes = WriteService::new(Arc::clone(&store));
    seed(&writes);
    writes.create_invoice(draft()).unwrap();

    let documents = DocumentService::new(store);
    let text = documents.materialize(InvoiceId::new(7)).unwrap();

    assert_eq!(text.matches("<cac:InvoiceLine>").count(), 0);
    assert!(text.contains("<cbc:TaxAmount currencyID=\"AUD\">0.00</cbc:TaxAmount>"));
    assert!(text.contains("<cbc:PayableAmount currencyID=\"AUD\">0.00</cbc:PayableAmount>"));
}

#[test]
fn rejected_snapshot_blocks_invoice_creation_and_materialization() {
    let store = Arc::new(InMemoryStore::new());
    let writes = WriteService::new(Arc::clone(&store));
    seed(&writes);

    let mut forged = draft();
    forged.customer.address = Some("3 Fake St".to_string());
    let err = writes.create_invoice(forged).unwrap_err();
    assert!(matches!(err, ServiceError::Rejected { role: "customer", .. }));

    let documents = DocumentService::new(store);
    assert_eq!(
        documents.materialize(InvoiceId::new(7)).unwrap_err(),
        ServiceError::NotFound
    );
}

#[test]
fn configured_currency_flows_through_to_the_document() {
    let store = Arc::new(InMemoryStore::new());
    let writes = WriteService::new(Arc::clone(&store));
    seed(&writes);
    writes.create_invoice(draft()).unwrap();
    writes
        .add_line_item(InvoiceId::new(7), "Widget", dec!(2), dec!(10.00))
        .unwrap();

    let config = DocumentConfig {
        currency_code: "USD".to_string(),
        ..DocumentConfig::default()
    };
    let documents = DocumentService::with_config(store, config);
    let text = documents.materialize(InvoiceId::new(7)).unwrap();

    assert_eq!(text.matches("currencyID=\"USD\"").count(), 4);
}
