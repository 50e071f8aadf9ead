use chrono::{NaiveDate, NaiveDateTime};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;
use tokio::runtime::Runtime;

use cfdi_layout::content::{GenerateOptionsBuilder, generate_content, generate_pdf_content};
use cfdi_layout::core::*;
use cfdi_layout::words::{SpanishAmountInWords, spell_amount};

fn test_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn stamp() -> TaxStamp {
    TaxStamp {
        uuid: "5FB2822E-396D-4725-8521-CDC4BDD20CCF".into(),
        stamped_at: test_date(),
        cfd_signature: "Q".repeat(344),
        sat_signature: "S".repeat(344),
        sat_certificate_number: Some("00001000000504465028".into()),
    }
}

fn build_income(lines: usize) -> Cfdi {
    let mut builder = CfdiBuilder::new("I", test_date())
        .series("BENCH")
        .folio("1")
        .place_of_issue("06600")
        .payment_form("03")
        .payment_method("PUE")
        .issuer(Issuer::new("AAA010101AAA", "601").name("Benchmark SA de CV"))
        .recipient(Recipient::new("XAXX010101000", "G03"))
        .stamp(stamp())
        .original_chain("|".repeat(600));

    for i in 1..=lines {
        builder = builder.add_concept(
            ConceptBuilder::new("84111506", dec!(5), "E48", format!("Servicio {i}"), dec!(120))
                .transfer(TaxEntry::new("002", FactorType::Rate, dec!(96)))
                .withholding(TaxEntry::new("001", FactorType::Rate, dec!(60)))
                .build(),
        );
    }

    builder.build().unwrap()
}

fn build_payment(documents: usize) -> Cfdi {
    let mut payment = PaymentBuilder::new(test_date(), "03", "MXN", dec!(1000));
    for i in 0..documents {
        payment = payment.add_document(
            RelatedDocument::new(format!("UUID-{i}"), "PPD", "MXN", dec!(2000), dec!(1000))
                .installment(1),
        );
    }
    CfdiBuilder::new("P", test_date())
        .issuer(Issuer::new("AAA010101AAA", "601"))
        .recipient(Recipient::new("XAXX010101000", "CP01"))
        .add_concept(ConceptBuilder::new("84111506", dec!(1), "ACT", "Pago", dec!(0)).build())
        .add_payment(payment.build())
        .build()
        .unwrap()
}

fn bench_income_content(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let cfdi = build_income(10);
    let options = GenerateOptionsBuilder::new()
        .observations("Benchmark")
        .build();
    c.bench_function("income_content_10_lines", |b| {
        b.iter(|| {
            black_box(rt.block_on(generate_content(
                black_box(&cfdi),
                &options,
                &SpanishAmountInWords,
            )))
        });
    });
}

fn bench_large_income_json(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let cfdi = build_income(1000);
    let options = GenerateOptionsBuilder::new().build();
    c.bench_function("income_document_json_1000_lines", |b| {
        b.iter(|| {
            let doc = rt
                .block_on(generate_pdf_content(
                    black_box(&cfdi),
                    &options,
                    &SpanishAmountInWords,
                ))
                .unwrap();
            black_box(doc.to_json())
        });
    });
}

fn bench_payment_content(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let cfdi = build_payment(100);
    let options = GenerateOptionsBuilder::new().build();
    c.bench_function("payment_content_100_documents", |b| {
        b.iter(|| {
            black_box(rt.block_on(generate_content(
                black_box(&cfdi),
                &options,
                &SpanishAmountInWords,
            )))
        });
    });
}

fn bench_formatters(c: &mut Criterion) {
    let seal = "Q".repeat(344);
    c.bench_function("format_currency", |b| {
        b.iter(|| black_box(format_currency(black_box(dec!(1234567.891)))));
    });
    c.bench_function("break_every_n_seal", |b| {
        b.iter(|| black_box(break_every_n(black_box(&seal), SIGNATURE_LINE_WIDTH)));
    });
    c.bench_function("spell_amount", |b| {
        b.iter(|| black_box(spell_amount(black_box(dec!(987654321.99)), "MXN")));
    });
}

criterion_group!(
    benches,
    bench_income_content,
    bench_large_income_json,
    bench_payment_content,
    bench_formatters,
);
criterion_main!(benches);
