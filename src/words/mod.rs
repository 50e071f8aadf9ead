//! Built-in amount-in-words service.
//!
//! Writes amounts the way Mexican invoices print them under
//! "IMPORTE CON LETRA": upper-case Spanish words, the currency name, the
//! cents as `NN/100` and a currency suffix.
//!
//! # Example
//!
//! ```
//! use cfdi_layout::words::spell_amount;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(
//!     spell_amount(dec!(1234.50), "MXN").unwrap(),
//!     "MIL DOSCIENTOS TREINTA Y CUATRO PESOS 50/100 M.N."
//! );
//! ```

mod spanish;

pub use spanish::{MAX_SPELLED_AMOUNT, SpanishAmountInWords, spell_amount};
