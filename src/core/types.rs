use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `cfdi:Comprobante`: the parsed tax receipt handed to the generator.
///
/// Produced by an external parser and never mutated by content generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cfdi {
    /// `Serie` attribute.
    #[serde(default)]
    pub series: Option<String>,
    /// `Folio` attribute.
    #[serde(default)]
    pub folio: Option<String>,
    /// `Fecha` attribute: issue timestamp.
    pub date: NaiveDateTime,
    /// `LugarExpedicion`: postal code of the place of issue.
    pub place_of_issue: String,
    /// `TipoDeComprobante` code as it appears in the document (e.g. "I", "P").
    pub receipt_type: String,
    /// `Moneda` code (`c_Moneda`).
    pub currency: String,
    /// `FormaPago` code (`c_FormaPago`).
    #[serde(default)]
    pub payment_form: Option<String>,
    /// `MetodoPago` code (`c_MetodoPago`).
    #[serde(default)]
    pub payment_method: Option<String>,
    /// `TipoCambio` attribute.
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
    /// `CondicionesDePago` free text.
    #[serde(default)]
    pub payment_terms: Option<String>,
    /// `Confirmacion` code.
    #[serde(default)]
    pub confirmation: Option<String>,
    /// `NoCertificado`: serial of the issuer's signing certificate.
    #[serde(default)]
    pub certificate_number: Option<String>,
    /// `cfdi:Emisor`.
    pub issuer: Issuer,
    /// `cfdi:Receptor`.
    pub recipient: Recipient,
    /// `cfdi:Conceptos`.
    #[serde(default)]
    pub concepts: Vec<Concept>,
    /// `cfdi:CfdiRelacionados`.
    #[serde(default)]
    pub related_cfdi: Option<RelatedCfdi>,
    /// `SubTotal` attribute.
    pub subtotal: Decimal,
    /// `Descuento` attribute.
    #[serde(default)]
    pub discount: Option<Decimal>,
    /// `Total` attribute.
    pub total: Decimal,
    /// `TotalImpuestosTrasladados`.
    #[serde(default)]
    pub total_transferred_taxes: Option<Decimal>,
    /// `TotalImpuestosRetenidos`.
    #[serde(default)]
    pub total_withheld_taxes: Option<Decimal>,
    /// `tfd:TimbreFiscalDigital`, absent on unstamped documents.
    #[serde(default)]
    pub stamp: Option<TaxStamp>,
    /// Original chain of the stamp complement (`cadena original`).
    #[serde(default)]
    pub original_chain: String,
    /// `pago10:Pago` entries, only meaningful for payment receipts.
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Cfdi {
    /// Classify the receipt type code, ignoring case.
    pub fn receipt_kind(&self) -> ReceiptKind {
        ReceiptKind::from_code(&self.receipt_type)
    }
}

/// `cfdi:Emisor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    /// `Rfc` attribute.
    pub rfc: String,
    /// `Nombre` attribute.
    #[serde(default)]
    pub name: Option<String>,
    /// `RegimenFiscal` code (`c_RegimenFiscal`).
    pub tax_regime: String,
}

impl Issuer {
    pub fn new(rfc: impl Into<String>, tax_regime: impl Into<String>) -> Self {
        Self {
            rfc: rfc.into(),
            name: None,
            tax_regime: tax_regime.into(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// `cfdi:Receptor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// `Rfc` attribute.
    pub rfc: String,
    /// `Nombre` attribute.
    #[serde(default)]
    pub name: Option<String>,
    /// `UsoCFDI` code (`c_UsoCFDI`).
    pub cfdi_use: String,
    /// `ResidenciaFiscal`: country code for foreign recipients.
    #[serde(default)]
    pub fiscal_residence: Option<String>,
    /// `NumRegIdTrib`: foreign tax registration number.
    #[serde(default)]
    pub foreign_tax_id: Option<String>,
}

impl Recipient {
    pub fn new(rfc: impl Into<String>, cfdi_use: impl Into<String>) -> Self {
        Self {
            rfc: rfc.into(),
            name: None,
            cfdi_use: cfdi_use.into(),
            fiscal_residence: None,
            foreign_tax_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Foreign recipient data; printed only when both values are non-empty.
    pub fn foreign(mut self, residence: impl Into<String>, tax_id: impl Into<String>) -> Self {
        self.fiscal_residence = Some(residence.into());
        self.foreign_tax_id = Some(tax_id.into());
        self
    }
}

/// `cfdi:Concepto`: one billed line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// `ClaveProdServ` code.
    pub product_code: String,
    /// `Cantidad`.
    pub quantity: Decimal,
    /// `ClaveUnidad` code (`c_ClaveUnidad`).
    pub unit_code: String,
    /// `Descripcion`.
    pub description: String,
    /// `ValorUnitario`.
    pub unit_value: Decimal,
    /// `Descuento`.
    #[serde(default)]
    pub discount: Option<Decimal>,
    /// `Importe`.
    pub amount: Decimal,
    /// `cfdi:Traslado` entries.
    #[serde(default)]
    pub transfers: Vec<TaxEntry>,
    /// `cfdi:Retencion` entries.
    #[serde(default)]
    pub withholdings: Vec<TaxEntry>,
}

/// A transferred or withheld tax on a concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxEntry {
    /// `Impuesto` code (`c_Impuesto`, e.g. "002" for IVA).
    pub tax: String,
    /// `TipoFactor`.
    pub factor: FactorType,
    /// `Importe`; absent for exempt entries.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl TaxEntry {
    pub fn new(tax: impl Into<String>, factor: FactorType, amount: Decimal) -> Self {
        Self {
            tax: tax.into(),
            factor,
            amount: Some(amount),
        }
    }

    /// An exempt entry, which carries no amount.
    pub fn exempt(tax: impl Into<String>) -> Self {
        Self {
            tax: tax.into(),
            factor: FactorType::Exempt,
            amount: None,
        }
    }
}

/// `c_TipoFactor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorType {
    /// Tasa: percentage rate.
    #[serde(rename = "Tasa")]
    Rate,
    /// Cuota: fixed amount per unit.
    #[serde(rename = "Cuota")]
    Quota,
    /// Exento: exempt, no amount.
    #[serde(rename = "Exento")]
    Exempt,
}

/// `cfdi:CfdiRelacionados` with its first related UUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCfdi {
    /// `TipoRelacion` code (`c_TipoRelacion`).
    pub relation_type: String,
    /// UUID of the related CFDI.
    pub uuid: String,
}

/// `tfd:TimbreFiscalDigital`: the SAT stamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxStamp {
    /// Folio fiscal.
    pub uuid: String,
    /// `FechaTimbrado`.
    pub stamped_at: NaiveDateTime,
    /// `SelloCFD`: the issuer's signature.
    pub cfd_signature: String,
    /// `SelloSAT`: the authority's signature.
    pub sat_signature: String,
    /// `NoCertificadoSAT`.
    #[serde(default)]
    pub sat_certificate_number: Option<String>,
}

/// `pago10:Pago`: one payment inside a payment complement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// `FechaPago`.
    pub date: NaiveDateTime,
    /// `FormaDePagoP` code (`c_FormaPago`).
    pub payment_form: String,
    /// `MonedaP` code (`c_Moneda`).
    pub currency: String,
    /// `Monto`.
    pub amount: Decimal,
    /// `TipoCambioP`.
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
    /// `pago10:DoctoRelacionado` entries.
    #[serde(default)]
    pub related_documents: Vec<RelatedDocument>,
}

/// `pago10:DoctoRelacionado`: an invoice settled (partly) by a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedDocument {
    /// `IdDocumento`.
    pub uuid: String,
    /// `MetodoDePagoDR`.
    pub payment_method: String,
    /// `MonedaDR`.
    pub currency: String,
    /// `TipoCambioDR`.
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
    /// `NumParcialidad`.
    #[serde(default)]
    pub installment: Option<u32>,
    /// `ImpSaldoAnt`.
    pub prior_balance: Decimal,
    /// `ImpPagado`.
    pub amount_paid: Decimal,
    /// `ImpSaldoInsoluto`.
    pub remaining_balance: Decimal,
}

impl RelatedDocument {
    /// A related document with the remaining balance derived from the
    /// prior balance and the amount paid.
    pub fn new(
        uuid: impl Into<String>,
        payment_method: impl Into<String>,
        currency: impl Into<String>,
        prior_balance: Decimal,
        amount_paid: Decimal,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            payment_method: payment_method.into(),
            currency: currency.into(),
            exchange_rate: None,
            installment: None,
            prior_balance,
            amount_paid,
            remaining_balance: prior_balance - amount_paid,
        }
    }

    pub fn installment(mut self, number: u32) -> Self {
        self.installment = Some(number);
        self
    }

    pub fn exchange_rate(mut self, rate: Decimal) -> Self {
        self.exchange_rate = Some(rate);
        self
    }
}

/// `c_TipoDeComprobante`, read case-insensitively.
///
/// Only income/expense and payment receipts get type-specific sections;
/// everything else prints the common sections only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptKind {
    /// I: Ingreso.
    Income,
    /// E: Egreso.
    Expense,
    /// P: Pago (payment complement).
    Payment,
    /// T: Traslado.
    Transfer,
    /// N: Nómina.
    Payroll,
    /// Any other code, kept verbatim.
    Unrecognized(String),
}

impl ReceiptKind {
    /// Parse a receipt type code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "I" => Self::Income,
            "E" => Self::Expense,
            "P" => Self::Payment,
            "T" => Self::Transfer,
            "N" => Self::Payroll,
            _ => Self::Unrecognized(code.to_string()),
        }
    }

    /// Canonical (upper-case) SAT code.
    pub fn code(&self) -> &str {
        match self {
            Self::Income => "I",
            Self::Expense => "E",
            Self::Payment => "P",
            Self::Transfer => "T",
            Self::Payroll => "N",
            Self::Unrecognized(code) => code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_kind_ignores_case() {
        assert_eq!(ReceiptKind::from_code("i"), ReceiptKind::Income);
        assert_eq!(ReceiptKind::from_code("E"), ReceiptKind::Expense);
        assert_eq!(ReceiptKind::from_code("p"), ReceiptKind::Payment);
        assert_eq!(ReceiptKind::from_code(" T "), ReceiptKind::Transfer);
        assert_eq!(ReceiptKind::from_code("n"), ReceiptKind::Payroll);
    }

    #[test]
    fn receipt_kind_unrecognized_keeps_code() {
        let kind = ReceiptKind::from_code("x");
        assert_eq!(kind, ReceiptKind::Unrecognized("x".into()));
        assert_eq!(kind.code(), "x");
    }

    #[test]
    fn factor_uses_sat_names() {
        let factors: Vec<FactorType> =
            serde_json::from_str(r#"["Tasa", "Cuota", "Exento"]"#).unwrap();
        assert_eq!(factors, [FactorType::Rate, FactorType::Quota, FactorType::Exempt]);
        assert!(serde_json::from_str::<FactorType>(r#""tasa""#).is_err());
    }

    #[test]
    fn related_document_derives_remaining_balance() {
        use rust_decimal_macros::dec;
        let doc = RelatedDocument::new("uuid", "PPD", "MXN", dec!(1000), dec!(400)).installment(2);
        assert_eq!(doc.remaining_balance, dec!(600));
        assert_eq!(doc.installment, Some(2));
    }
}
