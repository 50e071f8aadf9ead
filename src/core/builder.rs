use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::error::CfdiError;
use super::types::*;

/// Builder for assembling a [`Cfdi`] record by hand.
///
/// Parsers usually produce `Cfdi` directly; this exists for callers that
/// hold the data in another shape, and for tests.
///
/// ```
/// use cfdi_layout::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let cfdi = CfdiBuilder::new("I", date)
///     .series("A")
///     .folio("1001")
///     .issuer(Issuer::new("AAA010101AAA", "601").name("ACME SA DE CV"))
///     .recipient(Recipient::new("XAXX010101000", "G03").name("PUBLICO EN GENERAL"))
///     .add_concept(ConceptBuilder::new("84111506", dec!(1), "E48", "Servicio", dec!(100)).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(cfdi.total, dec!(100));
/// ```
pub struct CfdiBuilder {
    receipt_type: String,
    date: NaiveDateTime,
    series: Option<String>,
    folio: Option<String>,
    place_of_issue: String,
    currency: String,
    payment_form: Option<String>,
    payment_method: Option<String>,
    exchange_rate: Option<Decimal>,
    payment_terms: Option<String>,
    confirmation: Option<String>,
    certificate_number: Option<String>,
    issuer: Option<Issuer>,
    recipient: Option<Recipient>,
    concepts: Vec<Concept>,
    related_cfdi: Option<RelatedCfdi>,
    subtotal: Option<Decimal>,
    discount: Option<Decimal>,
    total: Option<Decimal>,
    total_transferred_taxes: Option<Decimal>,
    total_withheld_taxes: Option<Decimal>,
    stamp: Option<TaxStamp>,
    original_chain: String,
    payments: Vec<Payment>,
}

impl CfdiBuilder {
    pub fn new(receipt_type: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            receipt_type: receipt_type.into(),
            date,
            series: None,
            folio: None,
            place_of_issue: String::new(),
            currency: "MXN".to_string(),
            payment_form: None,
            payment_method: None,
            exchange_rate: None,
            payment_terms: None,
            confirmation: None,
            certificate_number: None,
            issuer: None,
            recipient: None,
            concepts: Vec::new(),
            related_cfdi: None,
            subtotal: None,
            discount: None,
            total: None,
            total_transferred_taxes: None,
            total_withheld_taxes: None,
            stamp: None,
            original_chain: String::new(),
            payments: Vec::new(),
        }
    }

    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    pub fn folio(mut self, folio: impl Into<String>) -> Self {
        self.folio = Some(folio.into());
        self
    }

    pub fn place_of_issue(mut self, postal_code: impl Into<String>) -> Self {
        self.place_of_issue = postal_code.into();
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn payment_form(mut self, code: impl Into<String>) -> Self {
        self.payment_form = Some(code.into());
        self
    }

    pub fn payment_method(mut self, code: impl Into<String>) -> Self {
        self.payment_method = Some(code.into());
        self
    }

    pub fn exchange_rate(mut self, rate: Decimal) -> Self {
        self.exchange_rate = Some(rate);
        self
    }

    pub fn payment_terms(mut self, terms: impl Into<String>) -> Self {
        self.payment_terms = Some(terms.into());
        self
    }

    pub fn confirmation(mut self, code: impl Into<String>) -> Self {
        self.confirmation = Some(code.into());
        self
    }

    pub fn certificate_number(mut self, serial: impl Into<String>) -> Self {
        self.certificate_number = Some(serial.into());
        self
    }

    pub fn issuer(mut self, issuer: Issuer) -> Self {
        self.issuer = Some(issuer);
        self
    }

    pub fn recipient(mut self, recipient: Recipient) -> Self {
        self.recipient = Some(recipient);
        self
    }

    pub fn add_concept(mut self, concept: Concept) -> Self {
        self.concepts.push(concept);
        self
    }

    pub fn related_cfdi(mut self, relation_type: impl Into<String>, uuid: impl Into<String>) -> Self {
        self.related_cfdi = Some(RelatedCfdi {
            relation_type: relation_type.into(),
            uuid: uuid.into(),
        });
        self
    }

    /// Override the computed subtotal.
    pub fn subtotal(mut self, amount: Decimal) -> Self {
        self.subtotal = Some(amount);
        self
    }

    pub fn discount(mut self, amount: Decimal) -> Self {
        self.discount = Some(amount);
        self
    }

    /// Override the computed total.
    pub fn total(mut self, amount: Decimal) -> Self {
        self.total = Some(amount);
        self
    }

    /// Override the computed transferred-tax total.
    pub fn total_transferred_taxes(mut self, amount: Decimal) -> Self {
        self.total_transferred_taxes = Some(amount);
        self
    }

    /// Override the computed withheld-tax total.
    pub fn total_withheld_taxes(mut self, amount: Decimal) -> Self {
        self.total_withheld_taxes = Some(amount);
        self
    }

    pub fn stamp(mut self, stamp: TaxStamp) -> Self {
        self.stamp = Some(stamp);
        self
    }

    pub fn original_chain(mut self, chain: impl Into<String>) -> Self {
        self.original_chain = chain.into();
        self
    }

    pub fn add_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }

    /// Build the record.
    ///
    /// Subtotal, tax totals and total are derived from the concepts unless
    /// set explicitly. Tax totals stay absent when no concept carries the
    /// corresponding taxes, mirroring how the XML omits the attributes.
    pub fn build(self) -> Result<Cfdi, CfdiError> {
        let issuer = self
            .issuer
            .ok_or_else(|| CfdiError::Builder("issuer is required".into()))?;
        let recipient = self
            .recipient
            .ok_or_else(|| CfdiError::Builder("recipient is required".into()))?;

        if self.concepts.is_empty() {
            return Err(CfdiError::Builder(
                "at least one concept is required".into(),
            ));
        }

        let subtotal = self
            .subtotal
            .unwrap_or_else(|| self.concepts.iter().map(|c| c.amount).sum());
        let total_transferred_taxes = self
            .total_transferred_taxes
            .or_else(|| sum_taxes(&self.concepts, |c| &c.transfers));
        let total_withheld_taxes = self
            .total_withheld_taxes
            .or_else(|| sum_taxes(&self.concepts, |c| &c.withholdings));
        let total = self.total.unwrap_or_else(|| {
            subtotal - self.discount.unwrap_or_default()
                + total_transferred_taxes.unwrap_or_default()
                - total_withheld_taxes.unwrap_or_default()
        });

        Ok(Cfdi {
            series: self.series,
            folio: self.folio,
            date: self.date,
            place_of_issue: self.place_of_issue,
            receipt_type: self.receipt_type,
            currency: self.currency,
            payment_form: self.payment_form,
            payment_method: self.payment_method,
            exchange_rate: self.exchange_rate,
            payment_terms: self.payment_terms,
            confirmation: self.confirmation,
            certificate_number: self.certificate_number,
            issuer,
            recipient,
            concepts: self.concepts,
            related_cfdi: self.related_cfdi,
            subtotal,
            discount: self.discount,
            total,
            total_transferred_taxes,
            total_withheld_taxes,
            stamp: self.stamp,
            original_chain: self.original_chain,
            payments: self.payments,
        })
    }
}

fn sum_taxes(concepts: &[Concept], entries: impl Fn(&Concept) -> &Vec<TaxEntry>) -> Option<Decimal> {
    let mut amounts = concepts
        .iter()
        .flat_map(|c| entries(c).iter())
        .filter_map(|t| t.amount)
        .peekable();
    amounts.peek()?;
    Some(amounts.sum())
}

/// Builder for [`Concept`].
pub struct ConceptBuilder {
    concept: Concept,
    amount_overridden: bool,
}

impl ConceptBuilder {
    /// Create a concept; its amount defaults to `quantity * unit_value`.
    pub fn new(
        product_code: impl Into<String>,
        quantity: Decimal,
        unit_code: impl Into<String>,
        description: impl Into<String>,
        unit_value: Decimal,
    ) -> Self {
        Self {
            concept: Concept {
                product_code: product_code.into(),
                quantity,
                unit_code: unit_code.into(),
                description: description.into(),
                unit_value,
                discount: None,
                amount: Decimal::ZERO,
                transfers: Vec::new(),
                withholdings: Vec::new(),
            },
            amount_overridden: false,
        }
    }

    pub fn discount(mut self, amount: Decimal) -> Self {
        self.concept.discount = Some(amount);
        self
    }

    /// Override the computed line amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.concept.amount = amount;
        self.amount_overridden = true;
        self
    }

    pub fn transfer(mut self, entry: TaxEntry) -> Self {
        self.concept.transfers.push(entry);
        self
    }

    pub fn withholding(mut self, entry: TaxEntry) -> Self {
        self.concept.withholdings.push(entry);
        self
    }

    pub fn build(mut self) -> Concept {
        if !self.amount_overridden {
            self.concept.amount = self.concept.quantity * self.concept.unit_value;
        }
        self.concept
    }
}

/// Builder for [`Payment`].
pub struct PaymentBuilder {
    payment: Payment,
}

impl PaymentBuilder {
    pub fn new(
        date: NaiveDateTime,
        payment_form: impl Into<String>,
        currency: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            payment: Payment {
                date,
                payment_form: payment_form.into(),
                currency: currency.into(),
                amount,
                exchange_rate: None,
                related_documents: Vec::new(),
            },
        }
    }

    pub fn exchange_rate(mut self, rate: Decimal) -> Self {
        self.payment.exchange_rate = Some(rate);
        self
    }

    pub fn add_document(mut self, document: RelatedDocument) -> Self {
        self.payment.related_documents.push(document);
        self
    }

    pub fn build(self) -> Payment {
        self.payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn concept() -> Concept {
        ConceptBuilder::new("84111506", dec!(2), "E48", "Consultoría", dec!(500))
            .transfer(TaxEntry::new("002", FactorType::Rate, dec!(160)))
            .withholding(TaxEntry::new("001", FactorType::Rate, dec!(100)))
            .build()
    }

    #[test]
    fn derives_totals_from_concepts() {
        let cfdi = CfdiBuilder::new("I", date())
            .issuer(Issuer::new("AAA010101AAA", "601"))
            .recipient(Recipient::new("XAXX010101000", "G03"))
            .add_concept(concept())
            .build()
            .unwrap();

        assert_eq!(cfdi.subtotal, dec!(1000));
        assert_eq!(cfdi.total_transferred_taxes, Some(dec!(160)));
        assert_eq!(cfdi.total_withheld_taxes, Some(dec!(100)));
        assert_eq!(cfdi.total, dec!(1060));
    }

    #[test]
    fn tax_totals_absent_without_taxes() {
        let cfdi = CfdiBuilder::new("I", date())
            .issuer(Issuer::new("AAA010101AAA", "601"))
            .recipient(Recipient::new("XAXX010101000", "G03"))
            .add_concept(ConceptBuilder::new("01010101", dec!(1), "H87", "Pieza", dec!(10)).build())
            .build()
            .unwrap();

        assert_eq!(cfdi.total_transferred_taxes, None);
        assert_eq!(cfdi.total_withheld_taxes, None);
        assert_eq!(cfdi.total, dec!(10));
    }

    #[test]
    fn explicit_tax_totals_win() {
        let cfdi = CfdiBuilder::new("I", date())
            .issuer(Issuer::new("AAA010101AAA", "601"))
            .recipient(Recipient::new("XAXX010101000", "G03"))
            .add_concept(concept())
            .total_transferred_taxes(dec!(159.99))
            .total_withheld_taxes(dec!(0))
            .build()
            .unwrap();

        assert_eq!(cfdi.total_transferred_taxes, Some(dec!(159.99)));
        assert_eq!(cfdi.total_withheld_taxes, Some(dec!(0)));
        assert_eq!(cfdi.total, dec!(1159.99));
    }

    #[test]
    fn exempt_entries_do_not_count() {
        let line = ConceptBuilder::new("01010101", dec!(1), "H87", "Libro", dec!(250))
            .transfer(TaxEntry::exempt("002"))
            .build();
        assert_eq!(sum_taxes(&[line], |c| &c.transfers), None);
    }

    #[test]
    fn missing_parties_rejected() {
        let err = CfdiBuilder::new("I", date())
            .recipient(Recipient::new("XAXX010101000", "G03"))
            .add_concept(concept())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("issuer"));

        let err = CfdiBuilder::new("I", date())
            .issuer(Issuer::new("AAA010101AAA", "601"))
            .add_concept(concept())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("recipient"));
    }

    #[test]
    fn concepts_required() {
        let result = CfdiBuilder::new("I", date())
            .issuer(Issuer::new("AAA010101AAA", "601"))
            .recipient(Recipient::new("XAXX010101000", "G03"))
            .build();
        assert!(matches!(result, Err(CfdiError::Builder(_))));
    }

    #[test]
    fn explicit_amount_wins() {
        let line = ConceptBuilder::new("01010101", dec!(3), "H87", "Pieza", dec!(10))
            .amount(dec!(29.99))
            .build();
        assert_eq!(line.amount, dec!(29.99));
    }
}
