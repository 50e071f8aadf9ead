//! Section builders, one per block of the printout.
//!
//! Each builder is a pure function of the record (plus already-resolved
//! options) and returns a self-contained layout fragment.

use crate::core::{
    Catalog, Cfdi, Concept, FactorType, Payment, RelatedDocument, SIGNATURE_LINE_WIDTH, TaxEntry,
    TaxStamp, break_every_n, format_currency, format_datetime, optional_display, or_empty,
};
use crate::layout::{Alignment, Block, Fit, Node, RowBuilder, Style, Table, TableLayout, Width};

/// SAT verification URL encoded in the stamp QR code.
pub const QR_URL_TEMPLATE: &str = "https://verificacfdi.facturaelectronica.sat.gob.mx/default.aspx?id={id}&re={re}&rr={rr}&tt={tt}&fe={fe}";

/// Rows the header logo spans.
const HEADER_ROWS: usize = 5;
/// Rows the QR code spans: six stamp rows, the QR row itself and the chain.
const STAMP_QR_ROWS: usize = 8;
const CONCEPT_COLUMNS: usize = 10;
const RELATED_DOC_COLUMNS: usize = 8;

fn label_table(title: &str, widths: Vec<Width>, rows: Vec<Vec<Node>>) -> Node {
    let columns = widths.len();
    let mut body = Vec::with_capacity(rows.len() + 1);
    body.push(RowBuilder::title(columns, title));
    body.extend(rows);
    Block::table(Table::new(widths, body), TableLayout::LightHorizontalLines)
        .style(Style::TableContent)
        .into()
}

/// Series, folio, date, place of issue and receipt type, with the logo
/// merged over the first column when one is supplied.
pub fn header(cfdi: &Cfdi, logo: Option<&str>) -> Node {
    let fields = [
        ("SERIE:", or_empty(cfdi.series.as_deref()).to_string()),
        ("FOLIO:", or_empty(cfdi.folio.as_deref()).to_string()),
        ("FECHA:", format_datetime(&cfdi.date)),
        ("EXPEDICION:", cfdi.place_of_issue.clone()),
        (
            "COMPROBANTE:",
            Catalog::ReceiptTypes.describe(&cfdi.receipt_type),
        ),
    ];

    let body = fields
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let first = match logo {
                Some(image) if i == 0 => Block::image(image)
                    .row_span(HEADER_ROWS)
                    .fit(Fit::Bounds(260, 260))
                    .into(),
                _ => Node::blank(),
            };
            RowBuilder::new(3).cell(first).cell(label).cell(value).build()
        })
        .collect();

    let first_width = if logo.is_some() { Width::Star } else { Width::Auto };
    let table = Table::new(vec![first_width, Width::Auto, Width::Auto], body).font_size(9);

    Block::table(table, TableLayout::LightHorizontalLines)
        .alignment(Alignment::Center)
        .style(Style::TableContent)
        .into()
}

/// Issuer name, RFC and tax regime.
pub fn issuer(cfdi: &Cfdi) -> Node {
    let issuer = &cfdi.issuer;
    let rows = vec![
        RowBuilder::pairs(
            4,
            [
                ("NOMBRE:", or_empty(issuer.name.as_deref())),
                ("RFC:", issuer.rfc.as_str()),
            ],
        ),
        RowBuilder::new(4)
            .cell("REGIMEN FISCAL:")
            .span(
                Block::text(Catalog::TaxRegimes.describe(&issuer.tax_regime)),
                3,
            )
            .build(),
    ];
    label_table("EMISOR", party_widths(), rows)
}

/// Recipient name, RFC, optional address, CFDI use and foreign tax data.
pub fn recipient(cfdi: &Cfdi, address: Option<&str>) -> Node {
    let recipient = &cfdi.recipient;
    let mut rows = vec![RowBuilder::pairs(
        4,
        [
            ("NOMBRE:", or_empty(recipient.name.as_deref())),
            ("RFC:", recipient.rfc.as_str()),
        ],
    )];

    let cfdi_use = Block::text(Catalog::CfdiUses.describe(&recipient.cfdi_use));
    rows.push(match address {
        Some(address) => RowBuilder::new(4)
            .cell("DOMICILIO:")
            .cell(address)
            .cell("USO CFDI:")
            .span(cfdi_use, 1)
            .build(),
        None => RowBuilder::new(4)
            .cell("USO CFDI:")
            .span(cfdi_use, 3)
            .build(),
    });

    if let (Some(residence), Some(tax_id)) = (
        recipient.fiscal_residence.as_deref().filter(|v| !v.is_empty()),
        recipient.foreign_tax_id.as_deref().filter(|v| !v.is_empty()),
    ) {
        rows.push(RowBuilder::pairs(
            4,
            [
                ("RESIDENCIA FISCAL:", residence),
                ("NUMERO ID TRIB.:", tax_id),
            ],
        ));
    }

    label_table("RECEPTOR", party_widths(), rows)
}

fn party_widths() -> Vec<Width> {
    vec![Width::Auto, Width::Star, Width::Auto, Width::Auto]
}

fn describe_opt(catalog: Catalog, code: Option<&str>) -> String {
    catalog.describe(or_empty(code))
}

/// Currency, payment form/method, exchange rate, terms and confirmation.
pub fn general_data(cfdi: &Cfdi) -> Node {
    let rows = vec![
        RowBuilder::pairs(
            4,
            [
                ("MONEDA:", Catalog::Currencies.describe(&cfdi.currency)),
                (
                    "FORMA PAGO:",
                    describe_opt(Catalog::PaymentForms, cfdi.payment_form.as_deref()),
                ),
            ],
        ),
        RowBuilder::pairs(
            4,
            [
                ("TIPO DE CAMBIO:", optional_display(cfdi.exchange_rate)),
                (
                    "CONDICIONES DE PAGO:",
                    or_empty(cfdi.payment_terms.as_deref()).to_string(),
                ),
            ],
        ),
        RowBuilder::pairs(
            4,
            [
                (
                    "CLAVE CONFIRMACION:",
                    or_empty(cfdi.confirmation.as_deref()).to_string(),
                ),
                (
                    "METODO DE PAGO:",
                    describe_opt(Catalog::PaymentMethods, cfdi.payment_method.as_deref()),
                ),
            ],
        ),
    ];
    label_table(
        "DATOS GENERALES DEL COMPROBANTE",
        vec![Width::Fixed(95), Width::Star, Width::Fixed(95), Width::Star],
        rows,
    )
}

fn tax_rows(entries: &[TaxEntry]) -> Node {
    let body = entries
        .iter()
        .map(|entry| {
            let amount = match entry.factor {
                FactorType::Exempt => "EXENTO".to_string(),
                FactorType::Rate | FactorType::Quota => format_currency(entry.amount),
            };
            vec![
                Node::text(Catalog::Taxes.describe(&entry.tax)),
                Node::text(amount),
            ]
        })
        .collect();
    Block::table(Table::auto_sized(body), TableLayout::NoBorders).into()
}

/// The "Traslados" / "Retenciones" stack of one concept.
///
/// A sub-block is left out entirely when its list is empty.
pub fn concept_taxes(concept: &Concept) -> Vec<Node> {
    let mut stack = Vec::with_capacity(4);
    if !concept.transfers.is_empty() {
        stack.push(Node::text("Traslados"));
        stack.push(tax_rows(&concept.transfers));
    }
    if !concept.withholdings.is_empty() {
        stack.push(Node::text("Retenciones"));
        stack.push(tax_rows(&concept.withholdings));
    }
    stack
}

/// The concepts table: title, column header and one row per concept.
pub fn concepts(cfdi: &Cfdi) -> Node {
    let mut body = Vec::with_capacity(cfdi.concepts.len() + 2);
    body.push(RowBuilder::title(CONCEPT_COLUMNS, "PARTIDAS DEL COMPROBANTE"));
    body.push(
        RowBuilder::new(CONCEPT_COLUMNS)
            .cell("ClaveProdServ")
            .cell("Cant")
            .cell("Clave Unidad")
            .cell("Unidad")
            .cell("Descripción")
            .cell("Valor Unitario")
            .cell("Descuento")
            .span(Block::text("Impuesto"), 2)
            .cell("Importe")
            .build(),
    );
    body.extend(cfdi.concepts.iter().map(|concept| {
        RowBuilder::new(CONCEPT_COLUMNS)
            .cell(concept.product_code.as_str())
            .cell(concept.quantity.to_string())
            .cell(concept.unit_code.as_str())
            .cell(or_empty(Catalog::Units.lookup(&concept.unit_code)))
            .cell(concept.description.as_str())
            .cell(format_currency(concept.unit_value))
            .cell(format_currency(concept.discount))
            .span(Block::stack(concept_taxes(concept)), 2)
            .cell(format_currency(concept.amount))
            .build()
    }));

    let mut widths = vec![Width::Auto; CONCEPT_COLUMNS];
    widths[4] = Width::Star;

    Block::table(Table::new(widths, body), TableLayout::striped())
        .style(Style::TableList)
        .into()
}

/// Related CFDI reference and document totals, including the amount in words.
pub fn related_and_totals(cfdi: &Cfdi, amount_in_words: &str) -> Node {
    let (relation, related_uuid) = match &cfdi.related_cfdi {
        Some(related) => (
            Catalog::RelationTypes.describe(&related.relation_type),
            related.uuid.clone(),
        ),
        None => (String::new(), String::new()),
    };

    let rows = vec![
        RowBuilder::pairs(
            4,
            [
                ("TIPO RELACION:", relation),
                ("CFDI RELACIONADO:", related_uuid),
            ],
        ),
        RowBuilder::pairs(
            4,
            [
                ("SUBTOTAL:", format_currency(cfdi.subtotal)),
                ("TOTAL:", format_currency(cfdi.total)),
            ],
        ),
        RowBuilder::new(4)
            .cell("DESCUENTO:")
            .cell(format_currency(cfdi.discount))
            .cell(Block::text("IMPORTE CON LETRA:"))
            .cell(Block::text(amount_in_words))
            .build(),
        RowBuilder::pairs(
            4,
            [
                (
                    "TOTAL IMP. TRASLADADOS:",
                    format_currency(cfdi.total_transferred_taxes),
                ),
                (
                    "TOTAL IMP. RETENIDOS:",
                    format_currency(cfdi.total_withheld_taxes),
                ),
            ],
        ),
    ];
    label_table(
        "CFDI RELACIONADO",
        vec![Width::Auto, Width::Star, Width::Auto, Width::Star],
        rows,
    )
}

/// Table of documents settled by one payment, shaded on odd rows.
pub fn related_documents(docs: &[RelatedDocument]) -> Node {
    let mut body = Vec::with_capacity(docs.len() + 2);
    body.push(RowBuilder::title(RELATED_DOC_COLUMNS, "DOCUMENTOS RELACIONADOS"));
    body.push(
        [
            "UUID",
            "Método de Pago",
            "Moneda",
            "Tipo de Cambio",
            "Num. Parcialidad",
            "Importe Saldo Anterior",
            "Importe Pagado",
            "Importe Saldo Insoluto",
        ]
        .into_iter()
        .map(Node::from)
        .collect(),
    );
    body.extend(docs.iter().map(|doc| {
        RowBuilder::new(RELATED_DOC_COLUMNS)
            .cell(doc.uuid.as_str())
            .cell(doc.payment_method.as_str())
            .cell(doc.currency.as_str())
            .cell(optional_display(doc.exchange_rate))
            .cell(optional_display(doc.installment))
            .cell(format_currency(doc.prior_balance))
            .cell(format_currency(doc.amount_paid))
            .cell(format_currency(doc.remaining_balance))
            .build()
    }));

    let widths = vec![
        Width::Star,
        Width::Auto,
        Width::Auto,
        Width::Fixed(30),
        Width::Fixed(20),
        Width::Auto,
        Width::Auto,
        Width::Auto,
    ];
    Block::table(Table::new(widths, body), TableLayout::striped())
        .style(Style::TableList)
        .into()
}

fn payment_info(payment: &Payment) -> Node {
    let mut rows = vec![
        RowBuilder::pairs(
            4,
            [
                ("FECHA:", format_datetime(&payment.date)),
                (
                    "FORMA PAGO:",
                    Catalog::PaymentForms.describe(&payment.payment_form),
                ),
            ],
        ),
        RowBuilder::pairs(
            4,
            [
                ("MONEDA:", Catalog::Currencies.describe(&payment.currency)),
                ("MONTO:", format_currency(payment.amount)),
            ],
        ),
    ];
    rows.push(match payment.exchange_rate {
        Some(rate) => RowBuilder::new(4)
            .cell("TIPO DE CAMBIO:")
            .cell(rate.to_string())
            .build(),
        None => RowBuilder::new(4).build(),
    });
    label_table(
        "INFORMACIÓN DE PAGO",
        vec![Width::Fixed(95), Width::Star, Width::Fixed(95), Width::Star],
        rows,
    )
}

/// One block per payment: info table, spacer, related documents, spacer.
pub fn payments(cfdi: &Cfdi) -> Vec<Node> {
    cfdi.payments
        .iter()
        .flat_map(|payment| {
            [
                payment_info(payment),
                Node::spacer(),
                related_documents(&payment.related_documents),
                Node::spacer(),
            ]
        })
        .collect()
}

/// Free-text observations block.
pub fn observations(text: &str) -> Node {
    let body = vec![
        vec![Block::text("OBSERVACIONES").style(Style::TableHeader).into()],
        vec![Node::text(text)],
    ];
    Block::table(Table::new(vec![Width::Star], body), TableLayout::LightHorizontalLines)
        .style(Style::TableContent)
        .into()
}

/// SAT verification URL for the stamp QR code.
pub fn qr_url(cfdi: &Cfdi, stamp: &TaxStamp) -> String {
    let signature = &stamp.cfd_signature;
    let tail_start = signature
        .char_indices()
        .rev()
        .nth(7)
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    QR_URL_TEMPLATE
        .replace("{id}", &stamp.uuid)
        .replace("{re}", &cfdi.issuer.rfc)
        .replace("{rr}", &cfdi.recipient.rfc)
        .replace("{tt}", &cfdi.total.to_string())
        .replace("{fe}", &signature[tail_start..])
}

/// The stamp block: QR code and stamp data when stamped, followed by the
/// original chain, which is always the last row.
pub fn stamp(cfdi: &Cfdi, original_chain: &str) -> Node {
    let mut body = Vec::with_capacity(STAMP_QR_ROWS);

    if let Some(tfd) = &cfdi.stamp {
        body.push(
            RowBuilder::new(3)
                .span(
                    Block::qr(qr_url(cfdi, tfd))
                        .row_span(STAMP_QR_ROWS)
                        .fit(Fit::Square(140)),
                    1,
                )
                .build(),
        );
        let signed = |label: &str, value: String| {
            RowBuilder::new(3).cell("").cell(label).cell(value).build()
        };
        body.push(signed(
            "NUMERO SERIE CERTIFICADO SAT",
            or_empty(tfd.sat_certificate_number.as_deref()).to_string(),
        ));
        body.push(signed(
            "NUMERO SERIE CERTIFICADO EMISOR",
            or_empty(cfdi.certificate_number.as_deref()).to_string(),
        ));
        body.push(signed("FECHA HORA CERTIFICACION", format_datetime(&tfd.stamped_at)));
        body.push(signed("FOLIO FISCAL UUID", tfd.uuid.clone()));
        body.push(signed(
            "SELLO DIGITAL",
            break_every_n(&tfd.cfd_signature, SIGNATURE_LINE_WIDTH),
        ));
        body.push(signed(
            "SELLO DEL SAT",
            break_every_n(&tfd.sat_signature, SIGNATURE_LINE_WIDTH),
        ));
    }

    body.push(
        RowBuilder::new(3)
            .cell("")
            .cell("CADENA ORIGINAL CC:")
            .cell(Block::text(break_every_n(original_chain, SIGNATURE_LINE_WIDTH)))
            .build(),
    );

    Block::table(
        Table::new(vec![Width::Auto, Width::Auto, Width::Star], body),
        TableLayout::LightHorizontalLines,
    )
    .style(Style::TableSat)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CfdiBuilder, ConceptBuilder, Issuer, Recipient, RelatedCfdi};
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn cfdi() -> Cfdi {
        CfdiBuilder::new("I", date())
            .series("A")
            .folio("42")
            .place_of_issue("06600")
            .issuer(Issuer::new("AAA010101AAA", "601").name("ACME SA DE CV"))
            .recipient(Recipient::new("XAXX010101000", "G03").name("PUBLICO EN GENERAL"))
            .add_concept(
                ConceptBuilder::new("84111506", dec!(1), "E48", "Servicio", dec!(1000)).build(),
            )
            .original_chain("||1.1|uuid||")
            .build()
            .unwrap()
    }

    fn stamp_data() -> TaxStamp {
        TaxStamp {
            uuid: "5FB2822E-396D-4725-8521-CDC4BDD20CCF".into(),
            stamped_at: date(),
            cfd_signature: "abcdefgh12345678".into(),
            sat_signature: "z".repeat(100),
            sat_certificate_number: Some("00001000000504465028".into()),
        }
    }

    fn table(node: &Node) -> &Table {
        node.as_table().expect("node should carry a table")
    }

    #[test]
    fn header_without_logo() {
        let node = header(&cfdi(), None);
        let t = table(&node);
        assert_eq!(t.widths, vec![Width::Auto, Width::Auto, Width::Auto]);
        assert_eq!(t.font_size, Some(9));
        assert_eq!(t.rows(), 5);
        assert_eq!(t.body[0][0], Node::blank());
        assert_eq!(t.body[0][2], Node::text("A"));
        assert_eq!(t.body[2][2], Node::text("2024-06-15T12:30:00"));
        assert_eq!(t.body[4][2], Node::text("I - Ingreso"));
    }

    #[test]
    fn header_with_logo_merges_first_column() {
        let node = header(&cfdi(), Some("data:image/png;base64,AAAA"));
        let t = table(&node);
        assert_eq!(t.widths[0], Width::Star);
        let logo = t.body[0][0].as_block().unwrap();
        assert_eq!(logo.row_span, Some(5));
        assert_eq!(logo.fit, Some(Fit::Bounds(260, 260)));
        assert_eq!(t.body[1][0], Node::blank());
    }

    #[test]
    fn issuer_resolves_regime() {
        let node = issuer(&cfdi());
        let t = table(&node);
        assert_eq!(t.rows(), 3);
        assert_eq!(t.body[1][1], Node::text("ACME SA DE CV"));
        let regime = t.body[2][1].as_block().unwrap();
        assert_eq!(
            regime.text.as_deref(),
            Some("601 - General de Ley Personas Morales")
        );
        assert_eq!(regime.col_span, Some(3));
    }

    #[test]
    fn recipient_use_spans_without_address() {
        let node = recipient(&cfdi(), None);
        let t = table(&node);
        assert_eq!(t.rows(), 3);
        assert_eq!(t.body[2][0], Node::text("USO CFDI:"));
        assert_eq!(t.body[2][1].as_block().unwrap().col_span, Some(3));
    }

    #[test]
    fn recipient_with_address() {
        let node = recipient(&cfdi(), Some("Av. Reforma 1"));
        let t = table(&node);
        assert_eq!(t.body[2][0], Node::text("DOMICILIO:"));
        assert_eq!(t.body[2][1], Node::text("Av. Reforma 1"));
        let usage = t.body[2][3].as_block().unwrap();
        assert_eq!(usage.col_span, Some(1));
        assert_eq!(usage.text.as_deref(), Some("G03 - Gastos en general"));
    }

    #[test]
    fn foreign_row_needs_both_values() {
        let mut record = cfdi();
        record.recipient.fiscal_residence = Some("USA".into());
        assert_eq!(table(&recipient(&record, None)).rows(), 3);

        record.recipient.foreign_tax_id = Some("123456789".into());
        let node = recipient(&record, None);
        let t = table(&node);
        assert_eq!(t.rows(), 4);
        assert_eq!(t.body[3][1], Node::text("USA"));
        assert_eq!(t.body[3][3], Node::text("123456789"));
    }

    #[test]
    fn foreign_row_skips_empty_values() {
        let mut record = cfdi();
        record.recipient.fiscal_residence = Some(String::new());
        record.recipient.foreign_tax_id = Some(String::new());
        assert_eq!(table(&recipient(&record, None)).rows(), 3);

        record.recipient.fiscal_residence = Some("USA".into());
        assert_eq!(table(&recipient(&record, None)).rows(), 3);
    }

    #[test]
    fn taxes_only_withholdings() {
        let concept = ConceptBuilder::new("84111506", dec!(1), "E48", "Servicio", dec!(100))
            .withholding(TaxEntry::new("001", FactorType::Rate, dec!(10)))
            .build();
        let stack = concept_taxes(&concept);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack[0], Node::text("Retenciones"));
        assert!(!stack.contains(&Node::text("Traslados")));
        let rows = &table(&stack[1]).body;
        assert_eq!(rows[0], vec![Node::text("001 - ISR"), Node::text("10.00")]);
    }

    #[test]
    fn exempt_transfer_prints_exento() {
        let concept = ConceptBuilder::new("01010101", dec!(1), "H87", "Libro", dec!(100))
            .transfer(TaxEntry::exempt("002"))
            .transfer(TaxEntry::new("003", FactorType::Quota, dec!(2.5)))
            .build();
        let stack = concept_taxes(&concept);
        assert_eq!(stack[0], Node::text("Traslados"));
        let rows = &table(&stack[1]).body;
        assert_eq!(rows[0][1], Node::text("EXENTO"));
        assert_eq!(rows[1], vec![Node::text("003 - IEPS"), Node::text("2.50")]);
        assert_eq!(stack[1].as_block().unwrap().layout, Some(TableLayout::NoBorders));
    }

    #[test]
    fn no_taxes_no_stack_entries() {
        let concept = ConceptBuilder::new("01010101", dec!(1), "H87", "Pieza", dec!(1)).build();
        assert!(concept_taxes(&concept).is_empty());
    }

    #[test]
    fn concept_row_layout() {
        let node = concepts(&cfdi());
        let t = table(&node);
        assert_eq!(t.rows(), 3);
        assert_eq!(t.widths.len(), 10);
        assert_eq!(t.widths[4], Width::Star);
        let row = &t.body[2];
        assert_eq!(row.len(), 10);
        assert_eq!(row[3], Node::text("Unidad de servicio"));
        assert_eq!(row[5], Node::text("1,000.00"));
        assert_eq!(row[6], Node::text("0.00"));
        assert_eq!(row[7].as_block().unwrap().col_span, Some(2));
        assert_eq!(row[8], Node::covered());
        assert_eq!(row[9], Node::text("1,000.00"));
        assert_eq!(node.as_block().unwrap().layout, Some(TableLayout::striped()));
    }

    #[test]
    fn unknown_unit_has_empty_description() {
        let mut record = cfdi();
        record.concepts[0].unit_code = "ZZZ".into();
        let node = concepts(&record);
        assert_eq!(table(&node).body[2][3], Node::blank());
    }

    #[test]
    fn totals_without_related_cfdi() {
        let node = related_and_totals(&cfdi(), "MIL PESOS 00/100 M.N.");
        let t = table(&node);
        assert_eq!(t.rows(), 5);
        assert_eq!(t.body[1][1], Node::blank());
        assert_eq!(t.body[1][3], Node::blank());
        assert_eq!(t.body[2][1], Node::text("1,000.00"));
        assert_eq!(
            t.body[3][3].as_block().unwrap().text.as_deref(),
            Some("MIL PESOS 00/100 M.N.")
        );
        assert_eq!(t.body[4][1], Node::text("0.00"));
    }

    #[test]
    fn totals_with_related_cfdi() {
        let mut record = cfdi();
        record.related_cfdi = Some(RelatedCfdi {
            relation_type: "01".into(),
            uuid: "A1B2".into(),
        });
        let node = related_and_totals(&record, "");
        let t = table(&node);
        assert_eq!(
            t.body[1][1],
            Node::text("01 - Nota de crédito de los documentos relacionados")
        );
        assert_eq!(t.body[1][3], Node::text("A1B2"));
    }

    #[test]
    fn observations_block() {
        let node = observations("Gracias por su compra");
        let t = table(&node);
        assert_eq!(t.widths, vec![Width::Star]);
        assert_eq!(t.body[1], vec![Node::text("Gracias por su compra")]);
    }

    #[test]
    fn qr_url_uses_signature_tail() {
        let record = cfdi();
        let url = qr_url(&record, &stamp_data());
        assert_eq!(
            url,
            "https://verificacfdi.facturaelectronica.sat.gob.mx/default.aspx?id=5FB2822E-396D-4725-8521-CDC4BDD20CCF&re=AAA010101AAA&rr=XAXX010101000&tt=1000&fe=12345678"
        );
    }

    #[test]
    fn qr_url_short_signature() {
        let mut tfd = stamp_data();
        tfd.cfd_signature = "abc".into();
        assert!(qr_url(&cfdi(), &tfd).ends_with("&fe=abc"));
    }

    #[test]
    fn stamp_block_without_stamp() {
        let node = stamp(&cfdi(), "||1.1|uuid||");
        let t = table(&node);
        assert_eq!(t.rows(), 1);
        assert_eq!(t.body[0][1], Node::text("CADENA ORIGINAL CC:"));
        assert_eq!(
            t.body[0][2].as_block().unwrap().text.as_deref(),
            Some("||1.1|uuid||")
        );
    }

    #[test]
    fn stamp_block_with_stamp() {
        let mut record = cfdi();
        record.stamp = Some(stamp_data());
        record.certificate_number = Some("30001000000400002434".into());
        let node = stamp(&record, &"c".repeat(90));
        let t = table(&node);
        assert_eq!(t.rows(), 8);

        let qr = t.body[0][0].as_block().unwrap();
        assert_eq!(qr.row_span, Some(8));
        assert_eq!(qr.col_span, Some(1));
        assert_eq!(qr.fit, Some(Fit::Square(140)));

        assert_eq!(t.body[1][2], Node::text("00001000000504465028"));
        assert_eq!(t.body[2][2], Node::text("30001000000400002434"));
        assert_eq!(t.body[3][2], Node::text("2024-06-15T12:30:00"));
        let sat_seal = t.body[6][2].as_text().unwrap();
        assert_eq!(sat_seal.find('\n'), Some(86));
        let chain = t.body[7][2].as_block().unwrap().text.as_deref().unwrap();
        assert_eq!(chain.matches('\n').count(), 1);
    }
}
