#![cfg(feature = "words")]

mod common;

use cfdi_layout::content::*;
use cfdi_layout::core::*;
use cfdi_layout::words::*;
use common::*;
use rust_decimal_macros::dec;

async fn amount_in_words(cfdi: &Cfdi) -> String {
    let content = generate_content(cfdi, &GenerateOptions::default(), &SpanishAmountInWords)
        .await
        .unwrap();
    let totals = content[10].as_table().unwrap();
    totals.body[3][3]
        .as_block()
        .and_then(|b| b.text.clone())
        .unwrap()
}

#[tokio::test]
async fn income_total_in_pesos() {
    assert_eq!(
        amount_in_words(&income()).await,
        "MIL CIENTO SESENTA PESOS 00/100 M.N."
    );
}

#[tokio::test]
async fn dollar_receipt_uses_dollar_names() {
    let cfdi = builder("I")
        .currency("USD")
        .exchange_rate(dec!(17.25))
        .total(dec!(1))
        .build()
        .unwrap();
    assert_eq!(amount_in_words(&cfdi).await, "UN DÓLAR 00/100 USD");
}

#[tokio::test]
async fn expense_with_cents() {
    let cfdi = builder("E").total(dec!(2021.07)).build().unwrap();
    assert_eq!(
        amount_in_words(&cfdi).await,
        "DOS MIL VEINTIÚN PESOS 07/100 M.N."
    );
}

#[tokio::test]
async fn oversized_total_fails_generation() {
    let cfdi = builder("I").total(dec!(5000000000000)).build().unwrap();
    let err = generate_content(&cfdi, &GenerateOptions::default(), &SpanishAmountInWords)
        .await
        .unwrap_err();
    assert!(matches!(err, CfdiError::AmountInWords(_)));
}

#[test]
fn spelled_amounts() {
    let cases = [
        (dec!(0.5), "MXN", "CERO PESOS 50/100 M.N."),
        (dec!(1234.50), "MXN", "MIL DOSCIENTOS TREINTA Y CUATRO PESOS 50/100 M.N."),
        (dec!(1000001), "MXN", "UN MILLÓN UN PESOS 00/100 M.N."),
        (dec!(7), "EUR", "SIETE EUROS 00/100 EUR"),
        (dec!(-12), "USD", "MENOS DOCE DÓLARES 00/100 USD"),
    ];
    for (amount, currency, expected) in cases {
        assert_eq!(spell_amount(amount, currency).unwrap(), expected, "{amount} {currency}");
    }
}
