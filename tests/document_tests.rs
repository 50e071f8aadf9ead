mod common;

use cfdi_layout::content::*;
use cfdi_layout::core::*;
use cfdi_layout::layout::*;
use cfdi_layout::words::SpanishAmountInWords;
use common::*;
use serde_json::Value;

fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap()
}

// --- Document wrapper ---

#[tokio::test]
async fn wrapper_fields() {
    let doc = generate_pdf_content(&income(), &GenerateOptions::default(), &FixedWords("X"))
        .await
        .unwrap();
    assert_eq!(doc.content.len(), 13);
    assert_eq!(doc.styles, StyleSheet::default());
    assert_eq!(doc.footer.as_table().unwrap().rows(), 1);

    let json = doc.to_json().unwrap();
    assert!(json.starts_with(r#"{"content":["#));
    assert!(json.contains(r#""defaultStyle":{}"#));
}

#[tokio::test]
async fn pretty_json_has_pdfmake_shape() {
    let doc = generate_pdf_content(&income(), &GenerateOptions::default(), &SpanishAmountInWords)
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();

    let content = value["content"].as_array().unwrap();
    assert_eq!(content.len(), 13);
    assert_eq!(content[1], "\n");
    assert_eq!(content[8]["layout"]["fillColor"]["odd"], "#CCCCCC");
    assert_eq!(content[8]["style"], "tableList");
    assert_eq!(content[0]["table"]["fontSize"], 9);
    assert_eq!(
        content[10]["table"]["body"][3][3]["text"],
        "MIL CIENTO SESENTA PESOS 00/100 M.N."
    );
    assert_eq!(value["styles"]["tableSat"]["fontSize"], 5);
    assert_eq!(value["footer"]["table"]["widths"][1], "*");
}

// --- Serialized fragments ---

#[test]
fn styles_snapshot() {
    insta::assert_snapshot!(
        json(&StyleSheet::default()),
        @r#"{"tableHeader":{"bold":true,"fontSize":10,"color":"black"},"tableContent":{"fontSize":8,"color":"black","alignment":"left"},"tableList":{"fontSize":7,"color":"black","alignment":"center"},"tableSat":{"fontSize":5,"color":"black","alignment":"left"}}"#
    );
}

#[tokio::test]
async fn footer_snapshot() {
    let doc = generate_pdf_content(&income(), &GenerateOptions::default(), &FixedWords("X"))
        .await
        .unwrap();
    insta::assert_snapshot!(
        json(&doc.footer),
        @r#"{"table":{"widths":["auto","*","auto","auto"],"body":[[{"text":"Este documento es una representación impresa de un CFDI","style":"tableList","alignment":"center","colSpan":4},{},{},{}]]},"layout":"lightHorizontalLines","style":"tableContent"}"#
    );
}

#[test]
fn observations_snapshot() {
    insta::assert_snapshot!(
        json(&sections::observations("Gracias por su compra")),
        @r#"{"table":{"widths":["*"],"body":[[{"text":"OBSERVACIONES","style":"tableHeader"}],["Gracias por su compra"]]},"layout":"lightHorizontalLines","style":"tableContent"}"#
    );
}

#[test]
fn exempt_tax_stack_snapshot() {
    let concept = ConceptBuilder::new(
        "01010101",
        rust_decimal_macros::dec!(1),
        "H87",
        "Libro",
        rust_decimal_macros::dec!(250),
    )
    .transfer(TaxEntry::exempt("002"))
    .build();
    insta::assert_snapshot!(
        json(&sections::concept_taxes(&concept)),
        @r#"["Traslados",{"table":{"body":[["002 - IVA","EXENTO"]]},"layout":"noBorders"}]"#
    );
}

#[test]
fn regime_row_snapshot() {
    let issuer = sections::issuer(&income());
    let table = issuer.as_table().unwrap();
    insta::assert_snapshot!(
        json(&table.body[2]),
        @r#"["REGIMEN FISCAL:",{"text":"601 - General de Ley Personas Morales","colSpan":3},{},{}]"#
    );
}

#[test]
fn unstamped_block_snapshot() {
    let cfdi = income();
    insta::assert_snapshot!(
        json(&sections::stamp(&cfdi, &cfdi.original_chain)),
        @r#"{"table":{"widths":["auto","auto","*"],"body":[["","CADENA ORIGINAL CC:",{"text":"||1.1|5FB2822E|2024-06-15T12:30:00||"}]]},"layout":"lightHorizontalLines","style":"tableSat"}"#
    );
}

// --- Input records ---

#[test]
fn record_deserializes_from_camel_case_json() {
    let cfdi: Cfdi = serde_json::from_str(
        r#"{
            "date": "2024-06-15T12:30:00",
            "placeOfIssue": "06600",
            "receiptType": "I",
            "currency": "MXN",
            "issuer": {"rfc": "AAA010101AAA", "name": "ACME SA DE CV", "taxRegime": "601"},
            "recipient": {"rfc": "XAXX010101000", "cfdiUse": "G03"},
            "concepts": [{
                "productCode": "84111506",
                "quantity": "1",
                "unitCode": "E48",
                "description": "Servicio",
                "unitValue": "1000",
                "amount": "1000"
            }],
            "subtotal": "1000",
            "total": "1160",
            "originalChain": "||1.1||"
        }"#,
    )
    .unwrap();
    assert_eq!(cfdi.receipt_kind(), ReceiptKind::Income);
    assert_eq!(cfdi.concepts[0].transfers.len(), 0);
    assert!(cfdi.stamp.is_none());
    assert!(cfdi.payments.is_empty());
    assert_eq!(format_currency(cfdi.total), "1,160.00");
}
