use cfdi_layout::content::{GenerateOptionsBuilder, generate_pdf_content};
use cfdi_layout::core::*;
use cfdi_layout::words::SpanishAmountInWords;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap();

    // An income receipt with one taxed concept, already stamped
    let cfdi = CfdiBuilder::new("I", date)
        .series("A")
        .folio("1001")
        .place_of_issue("06600")
        .payment_form("03")
        .payment_method("PUE")
        .certificate_number("30001000000400002434")
        .issuer(Issuer::new("AAA010101AAA", "601").name("ACME SA DE CV"))
        .recipient(Recipient::new("XAXX010101000", "G03").name("PUBLICO EN GENERAL"))
        .add_concept(
            ConceptBuilder::new("84111506", dec!(10), "E48", "Consultoría", dec!(150))
                .transfer(TaxEntry::new("002", FactorType::Rate, dec!(240)))
                .build(),
        )
        .stamp(TaxStamp {
            uuid: "5FB2822E-396D-4725-8521-CDC4BDD20CCF".into(),
            stamped_at: date,
            cfd_signature: "QmFzZTY0U2lnbmF0dXJlT2ZUaGVJc3N1ZXI=".repeat(4),
            sat_signature: "U2lnbmF0dXJlT2ZUaGVTQVQ=".repeat(6),
            sat_certificate_number: Some("00001000000504465028".into()),
        })
        .original_chain("||1.1|5FB2822E-396D-4725-8521-CDC4BDD20CCF|2024-06-15T12:30:00||")
        .build()
        .expect("record should be complete");

    println!("Total: {}", format_currency(cfdi.total));

    let options = GenerateOptionsBuilder::new()
        .address("Av. Paseo de la Reforma 505, CDMX")
        .observations("Pago en una sola exhibición")
        .build();

    let doc = generate_pdf_content(&cfdi, &options, &SpanishAmountInWords)
        .await
        .expect("content generation should succeed");

    println!("{}", doc.to_json_pretty().expect("document should serialize"));
}
