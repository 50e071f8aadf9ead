//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use cfdi_layout::content::AmountInWords;
use cfdi_layout::core::*;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

pub fn issuer() -> Issuer {
    Issuer::new("AAA010101AAA", "601").name("ACME SA DE CV")
}

pub fn recipient() -> Recipient {
    Recipient::new("XAXX010101000", "G03").name("PUBLICO EN GENERAL")
}

pub fn service() -> Concept {
    ConceptBuilder::new("84111506", dec!(1), "E48", "Servicio", dec!(1000))
        .transfer(TaxEntry::new("002", FactorType::Rate, dec!(160)))
        .build()
}

pub fn stamp() -> TaxStamp {
    TaxStamp {
        uuid: "5FB2822E-396D-4725-8521-CDC4BDD20CCF".into(),
        stamped_at: date(2024, 6, 15),
        cfd_signature: "a".repeat(120) + "XYZ12345",
        sat_signature: "s".repeat(172),
        sat_certificate_number: Some("00001000000504465028".into()),
    }
}

/// Builder preloaded with a minimal record of the given receipt type.
pub fn builder(receipt_type: &str) -> CfdiBuilder {
    CfdiBuilder::new(receipt_type, date(2024, 6, 15))
        .series("A")
        .folio("1001")
        .place_of_issue("06600")
        .payment_form("03")
        .payment_method("PUE")
        .issuer(issuer())
        .recipient(recipient())
        .add_concept(service())
        .original_chain("||1.1|5FB2822E|2024-06-15T12:30:00||")
}

/// Minimal, unstamped Ingreso.
pub fn income() -> Cfdi {
    builder("I").build().unwrap()
}

/// Pago with two payments, one of them in USD.
pub fn payment_receipt() -> Cfdi {
    let first = PaymentBuilder::new(date(2024, 6, 20), "03", "MXN", dec!(1160))
        .add_document(
            RelatedDocument::new("UUID-1", "PPD", "MXN", dec!(2320), dec!(1160)).installment(1),
        )
        .build();
    let second = PaymentBuilder::new(date(2024, 7, 20), "03", "USD", dec!(50))
        .exchange_rate(dec!(17.25))
        .add_document(
            RelatedDocument::new("UUID-2", "PPD", "USD", dec!(50), dec!(50))
                .installment(2)
                .exchange_rate(dec!(1)),
        )
        .build();
    builder("P").add_payment(first).add_payment(second).build().unwrap()
}

/// Words service returning a fixed text.
pub struct FixedWords(pub &'static str);

impl AmountInWords for FixedWords {
    async fn to_words(&self, _amount: Decimal, _currency: &str) -> Result<String, CfdiError> {
        Ok(self.0.to_string())
    }
}

/// Words service that records every call.
#[derive(Default)]
pub struct CountingWords {
    pub calls: AtomicUsize,
    pub last: Mutex<Option<(Decimal, String)>>,
}

impl CountingWords {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AmountInWords for CountingWords {
    async fn to_words(&self, amount: Decimal, currency: &str) -> Result<String, CfdiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((amount, currency.to_string()));
        Ok("IMPORTE".to_string())
    }
}

/// Words service that always fails.
pub struct FailingWords;

impl AmountInWords for FailingWords {
    async fn to_words(&self, _amount: Decimal, _currency: &str) -> Result<String, CfdiError> {
        Err(CfdiError::AmountInWords("service unavailable".into()))
    }
}
