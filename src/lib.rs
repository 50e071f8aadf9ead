//! # cfdi-layout
//!
//! Turns a parsed CFDI (Mexican electronic tax receipt) into a pdfmake-style
//! document definition: nested tables, text blocks, images and QR codes that
//! any pdfmake-compatible renderer can print.
//!
//! All monetary values use [`rust_decimal::Decimal`]. SAT catalog codes are
//! resolved to `"<code> - <description>"` from static tables compiled into
//! the crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use cfdi_layout::content::{GenerateOptions, generate_pdf_content};
//! use cfdi_layout::core::*;
//! use cfdi_layout::words::SpanishAmountInWords;
//! use rust_decimal_macros::dec;
//!
//! # tokio_test_runtime(async {
//! let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let cfdi = CfdiBuilder::new("I", date)
//!     .issuer(Issuer::new("AAA010101AAA", "601").name("ACME SA DE CV"))
//!     .recipient(Recipient::new("XAXX010101000", "G03"))
//!     .add_concept(ConceptBuilder::new("84111506", dec!(1), "E48", "Consultoría", dec!(1500)).build())
//!     .build()
//!     .unwrap();
//!
//! let doc = generate_pdf_content(&cfdi, &GenerateOptions::default(), &SpanishAmountInWords)
//!     .await
//!     .unwrap();
//! assert!(doc.to_json().unwrap().contains("MIL QUINIENTOS PESOS 00/100 M.N."));
//! # });
//! # fn tokio_test_runtime<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record types, SAT catalogs, formatters, content generation |
//! | `words` (default) | Spanish amount-in-words service |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod content;

pub mod layout;

#[cfg(feature = "words")]
pub mod words;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
