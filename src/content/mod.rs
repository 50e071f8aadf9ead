//! CFDI printout content generation.
//!
//! Turns a parsed [`Cfdi`](crate::core::Cfdi) into a pdfmake-style
//! [`DocumentDefinition`]. Sections are built by the pure functions in
//! [`sections`]; [`generate_content`] orders them by receipt type and
//! [`generate_pdf_content`] adds styles and the footer.
//!
//! # Example
//!
//! ```ignore
//! use cfdi_layout::content::*;
//! use cfdi_layout::words::SpanishAmountInWords;
//!
//! let options = GenerateOptionsBuilder::new()
//!     .observations("Pago en una sola exhibición")
//!     .build();
//! let doc = generate_pdf_content(&cfdi, &options, &SpanishAmountInWords).await?;
//! let json = doc.to_json()?;
//! ```

mod generator;
pub mod sections;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::CfdiError;

pub use generator::{DefaultStyle, DocumentDefinition, generate_content, generate_pdf_content};

/// Converts an amount into its written form ("importe con letra").
///
/// Called once per generation, only for income and expense receipts.
/// Errors are propagated to the caller of the generator untouched.
pub trait AmountInWords {
    fn to_words(
        &self,
        amount: Decimal,
        currency: &str,
    ) -> impl Future<Output = Result<String, CfdiError>> + Send;
}

/// Caller-supplied extras for a printout.
///
/// Empty strings are treated like absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
    /// Logo image (data URL or base64) placed in the header.
    pub logo: Option<String>,
    /// Free text printed in an "OBSERVACIONES" block.
    pub observations: Option<String>,
    /// Recipient address line.
    pub address: Option<String>,
    /// Replaces the record's original chain in the stamp block.
    pub original_chain: Option<String>,
}

impl GenerateOptions {
    pub fn logo(&self) -> Option<&str> {
        non_empty(&self.logo)
    }

    pub fn observations(&self) -> Option<&str> {
        non_empty(&self.observations)
    }

    pub fn address(&self) -> Option<&str> {
        non_empty(&self.address)
    }

    pub fn original_chain(&self) -> Option<&str> {
        non_empty(&self.original_chain)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Builder for [`GenerateOptions`].
#[derive(Debug, Default)]
pub struct GenerateOptionsBuilder {
    options: GenerateOptions,
}

impl GenerateOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logo(mut self, image: impl Into<String>) -> Self {
        self.options.logo = Some(image.into());
        self
    }

    pub fn observations(mut self, text: impl Into<String>) -> Self {
        self.options.observations = Some(text.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.options.address = Some(address.into());
        self
    }

    pub fn original_chain(mut self, chain: impl Into<String>) -> Self {
        self.options.original_chain = Some(chain.into());
        self
    }

    pub fn build(self) -> GenerateOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_count_as_absent() {
        let options = GenerateOptionsBuilder::new()
            .logo("")
            .observations("Entregar en almacén")
            .build();
        assert_eq!(options.logo(), None);
        assert_eq!(options.observations(), Some("Entregar en almacén"));
        assert_eq!(options.address(), None);
        assert_eq!(options.original_chain(), None);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: GenerateOptions =
            serde_json::from_str(r#"{"address":"Av. Reforma 1, CDMX"}"#).unwrap();
        assert_eq!(options.address(), Some("Av. Reforma 1, CDMX"));
        assert_eq!(options.logo, None);
    }
}
