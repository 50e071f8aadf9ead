use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::trace;

use crate::content::AmountInWords;
use crate::core::CfdiError;

/// Largest integer part that can be spelled (just under one "billón").
pub const MAX_SPELLED_AMOUNT: u64 = 999_999_999_999;

/// Forms below thirty, already shortened for use before a noun
/// ("UN PESO", "VEINTIÚN MIL").
const SMALL: [&str; 30] = [
    "",
    "UN",
    "DOS",
    "TRES",
    "CUATRO",
    "CINCO",
    "SEIS",
    "SIETE",
    "OCHO",
    "NUEVE",
    "DIEZ",
    "ONCE",
    "DOCE",
    "TRECE",
    "CATORCE",
    "QUINCE",
    "DIECISÉIS",
    "DIECISIETE",
    "DIECIOCHO",
    "DIECINUEVE",
    "VEINTE",
    "VEINTIÚN",
    "VEINTIDÓS",
    "VEINTITRÉS",
    "VEINTICUATRO",
    "VEINTICINCO",
    "VEINTISÉIS",
    "VEINTISIETE",
    "VEINTIOCHO",
    "VEINTINUEVE",
];

const TENS: [&str; 10] = [
    "", "", "", "TREINTA", "CUARENTA", "CINCUENTA", "SESENTA", "SETENTA", "OCHENTA", "NOVENTA",
];

const HUNDREDS: [&str; 10] = [
    "",
    "CIENTO",
    "DOSCIENTOS",
    "TRESCIENTOS",
    "CUATROCIENTOS",
    "QUINIENTOS",
    "SEISCIENTOS",
    "SETECIENTOS",
    "OCHOCIENTOS",
    "NOVECIENTOS",
];

/// Spanish amount-in-words service for MXN, USD and EUR.
///
/// Other currency codes are spelled with the code as the currency name and
/// no suffix. Negative amounts are prefixed with `MENOS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishAmountInWords;

impl AmountInWords for SpanishAmountInWords {
    async fn to_words(&self, amount: Decimal, currency: &str) -> Result<String, CfdiError> {
        spell_amount(amount, currency)
    }
}

struct CurrencyName<'a> {
    singular: &'a str,
    plural: &'a str,
    suffix: Option<&'a str>,
}

fn currency_name(code: &str) -> CurrencyName<'_> {
    match code.trim() {
        c if c.eq_ignore_ascii_case("MXN") => CurrencyName {
            singular: "PESO",
            plural: "PESOS",
            suffix: Some("M.N."),
        },
        c if c.eq_ignore_ascii_case("USD") => CurrencyName {
            singular: "DÓLAR",
            plural: "DÓLARES",
            suffix: Some("USD"),
        },
        c if c.eq_ignore_ascii_case("EUR") => CurrencyName {
            singular: "EURO",
            plural: "EUROS",
            suffix: Some("EUR"),
        },
        other => CurrencyName {
            singular: other,
            plural: other,
            suffix: None,
        },
    }
}

/// Spell `amount` in `currency`, rounded to cents.
///
/// # Errors
///
/// [`CfdiError::AmountInWords`] when the integer part exceeds
/// [`MAX_SPELLED_AMOUNT`].
pub fn spell_amount(amount: Decimal, currency: &str) -> Result<String, CfdiError> {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();
    let whole = abs.trunc();

    let integer = whole
        .to_u64()
        .filter(|n| *n <= MAX_SPELLED_AMOUNT)
        .ok_or_else(|| CfdiError::AmountInWords(format!("amount {amount} is too large to spell")))?;
    let cents = ((abs - whole) * dec!(100))
        .trunc()
        .to_u32()
        .ok_or_else(|| CfdiError::AmountInWords(format!("invalid cents in {amount}")))?;

    let name = currency_name(currency);
    let mut out = String::new();
    if negative {
        out.push_str("MENOS ");
    }
    out.push_str(&number_words(integer));
    if integer >= 1_000_000 && integer % 1_000_000 == 0 {
        out.push_str(" DE");
    }
    out.push(' ');
    out.push_str(if integer == 1 { name.singular } else { name.plural });
    out.push_str(&format!(" {cents:02}/100"));
    if let Some(suffix) = name.suffix {
        out.push(' ');
        out.push_str(suffix);
    }

    trace!(%amount, currency, words = %out, "amount spelled");
    Ok(out)
}

/// Words for `n`, in the shortened form used before a noun.
fn number_words(n: u64) -> String {
    if n == 0 {
        return "CERO".to_string();
    }

    let millions = n / 1_000_000;
    let rest = n % 1_000_000;
    let mut parts = Vec::with_capacity(2);

    match millions {
        0 => {}
        1 => parts.push("UN MILLÓN".to_string()),
        m => parts.push(format!("{} MILLONES", below_million(m))),
    }
    if rest > 0 {
        parts.push(below_million(rest));
    }
    parts.join(" ")
}

fn below_million(n: u64) -> String {
    let thousands = n / 1000;
    let rest = n % 1000;
    let mut parts = Vec::with_capacity(3);

    match thousands {
        0 => {}
        1 => parts.push("MIL".to_string()),
        t => {
            parts.push(below_thousand(t));
            parts.push("MIL".to_string());
        }
    }
    if rest > 0 {
        parts.push(below_thousand(rest));
    }
    parts.join(" ")
}

fn below_thousand(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;

    let head = match (hundreds, rest) {
        (0, _) => "",
        (1, 0) => "CIEN",
        (h, _) => HUNDREDS[h],
    };
    let tail = below_hundred(rest);

    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail,
        (false, true) => head.to_string(),
        (false, false) => format!("{head} {tail}"),
    }
}

fn below_hundred(n: usize) -> String {
    if n < SMALL.len() {
        return SMALL[n].to_string();
    }
    match n % 10 {
        0 => TENS[n / 10].to_string(),
        units => format!("{} Y {}", TENS[n / 10], SMALL[units]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mxn(amount: Decimal) -> String {
        spell_amount(amount, "MXN").unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(mxn(dec!(0)), "CERO PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(1)), "UN PESO 00/100 M.N.");
        assert_eq!(mxn(dec!(15)), "QUINCE PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(21.5)), "VEINTIÚN PESOS 50/100 M.N.");
        assert_eq!(mxn(dec!(31)), "TREINTA Y UN PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(99.99)), "NOVENTA Y NUEVE PESOS 99/100 M.N.");
    }

    #[test]
    fn hundreds() {
        assert_eq!(mxn(dec!(100)), "CIEN PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(101)), "CIENTO UN PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(500)), "QUINIENTOS PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(999)), "NOVECIENTOS NOVENTA Y NUEVE PESOS 00/100 M.N.");
    }

    #[test]
    fn thousands() {
        assert_eq!(
            mxn(dec!(1234.50)),
            "MIL DOSCIENTOS TREINTA Y CUATRO PESOS 50/100 M.N."
        );
        assert_eq!(mxn(dec!(21000)), "VEINTIÚN MIL PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(100000)), "CIEN MIL PESOS 00/100 M.N.");
        assert_eq!(
            mxn(dec!(116116)),
            "CIENTO DIECISÉIS MIL CIENTO DIECISÉIS PESOS 00/100 M.N."
        );
    }

    #[test]
    fn millions_take_de_when_exact() {
        assert_eq!(mxn(dec!(1000000)), "UN MILLÓN DE PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(3000000)), "TRES MILLONES DE PESOS 00/100 M.N.");
        assert_eq!(
            mxn(dec!(2500000)),
            "DOS MILLONES QUINIENTOS MIL PESOS 00/100 M.N."
        );
        assert_eq!(mxn(dec!(1000000000)), "MIL MILLONES DE PESOS 00/100 M.N.");
    }

    #[test]
    fn other_currencies() {
        assert_eq!(spell_amount(dec!(1), "USD").unwrap(), "UN DÓLAR 00/100 USD");
        assert_eq!(
            spell_amount(dec!(3.1), "usd").unwrap(),
            "TRES DÓLARES 10/100 USD"
        );
        assert_eq!(spell_amount(dec!(2), "EUR").unwrap(), "DOS EUROS 00/100 EUR");
        assert_eq!(spell_amount(dec!(10), "GBP").unwrap(), "DIEZ GBP 00/100");
    }

    #[test]
    fn negative_and_rounding() {
        assert_eq!(mxn(dec!(-5)), "MENOS CINCO PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(0.999)), "UN PESO 00/100 M.N.");
        assert_eq!(mxn(dec!(-0.001)), "CERO PESOS 00/100 M.N.");
        assert_eq!(mxn(dec!(2.345)), "DOS PESOS 35/100 M.N.");
    }

    #[test]
    fn too_large_is_an_error() {
        let err = spell_amount(dec!(1000000000000), "MXN").unwrap_err();
        assert!(matches!(err, CfdiError::AmountInWords(_)));
        assert!(spell_amount(Decimal::from(MAX_SPELLED_AMOUNT), "MXN").is_ok());
    }

    #[tokio::test]
    async fn service_delegates_to_spell_amount() {
        let words = SpanishAmountInWords.to_words(dec!(1234.50), "MXN").await.unwrap();
        assert_eq!(words, mxn(dec!(1234.50)));
    }
}
