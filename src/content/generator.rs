use serde::Serialize;
use tracing::{debug, trace, warn};

use super::{AmountInWords, GenerateOptions, sections};
use crate::core::{Cfdi, CfdiError, ReceiptKind};
use crate::layout::{
    Alignment, Block, Node, RowBuilder, Style, StyleSheet, Table, TableLayout, Width,
};

const FOOTER_TEXT: &str = "Este documento es una representación impresa de un CFDI";

/// Which type-specific blocks a receipt gets.
enum Branch {
    /// General data and totals (I/E).
    Invoice,
    /// Payment complement blocks (P).
    Payment,
    /// Common sections only.
    Common,
}

fn branch(kind: &ReceiptKind) -> Branch {
    match kind {
        ReceiptKind::Income | ReceiptKind::Expense => Branch::Invoice,
        ReceiptKind::Payment => Branch::Payment,
        ReceiptKind::Transfer | ReceiptKind::Payroll => Branch::Common,
        ReceiptKind::Unrecognized(code) => {
            warn!(receipt_type = %code, "unrecognized receipt type, printing common sections only");
            Branch::Common
        }
    }
}

/// Append a section followed by a spacer.
fn push(content: &mut Vec<Node>, section: &str, node: Node) {
    trace!(section, "section built");
    content.push(node);
    content.push(Node::spacer());
}

/// Build the ordered content of a CFDI printout.
///
/// Sections are separated by `"\n"` spacers. Income and expense receipts
/// get general data and totals, payment receipts get one block per payment;
/// other types only get the common sections. `words` is awaited once, and
/// only for income and expense receipts. Its error is returned as is.
pub async fn generate_content<W: AmountInWords>(
    cfdi: &Cfdi,
    options: &GenerateOptions,
    words: &W,
) -> Result<Vec<Node>, CfdiError> {
    let kind = cfdi.receipt_kind();
    debug!(receipt_type = kind.code(), concepts = cfdi.concepts.len(), "generating CFDI content");

    let mut content = Vec::with_capacity(16);
    push(&mut content, "header", sections::header(cfdi, options.logo()));
    push(&mut content, "issuer", sections::issuer(cfdi));
    push(
        &mut content,
        "recipient",
        sections::recipient(cfdi, options.address()),
    );

    let blocks = branch(&kind);
    if let Branch::Invoice = blocks {
        push(&mut content, "general_data", sections::general_data(cfdi));
    }

    push(&mut content, "concepts", sections::concepts(cfdi));

    match blocks {
        Branch::Invoice => {
            let amount_in_words = words.to_words(cfdi.total, &cfdi.currency).await?;
            push(
                &mut content,
                "related_and_totals",
                sections::related_and_totals(cfdi, &amount_in_words),
            );
        }
        Branch::Payment => {
            trace!(payments = cfdi.payments.len(), "payment blocks");
            content.extend(sections::payments(cfdi));
        }
        Branch::Common => {}
    }

    if let Some(text) = options.observations() {
        push(&mut content, "observations", sections::observations(text));
    }

    let chain = options.original_chain().unwrap_or(&cfdi.original_chain);
    content.push(sections::stamp(cfdi, chain));

    debug!(nodes = content.len(), stamped = cfdi.stamp.is_some(), "CFDI content ready");
    Ok(content)
}

/// Style block applied to the whole document; empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DefaultStyle {}

/// A complete pdfmake document definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDefinition {
    pub content: Vec<Node>,
    pub styles: StyleSheet,
    pub default_style: DefaultStyle,
    pub footer: Node,
}

impl DocumentDefinition {
    pub fn to_json(&self) -> Result<String, CfdiError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CfdiError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn footer() -> Node {
    let row = RowBuilder::new(4)
        .span(
            Block::text(FOOTER_TEXT)
                .style(Style::TableList)
                .alignment(Alignment::Center),
            4,
        )
        .build();
    let widths = vec![Width::Auto, Width::Star, Width::Auto, Width::Auto];
    Block::table(Table::new(widths, vec![row]), TableLayout::LightHorizontalLines)
        .style(Style::TableContent)
        .into()
}

/// [`generate_content`] wrapped with the style presets and the footer.
pub async fn generate_pdf_content<W: AmountInWords>(
    cfdi: &Cfdi,
    options: &GenerateOptions,
    words: &W,
) -> Result<DocumentDefinition, CfdiError> {
    let content = generate_content(cfdi, options, words).await?;
    Ok(DocumentDefinition {
        content,
        styles: StyleSheet::default(),
        default_style: DefaultStyle::default(),
        footer: footer(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_per_kind() {
        assert!(matches!(branch(&ReceiptKind::Income), Branch::Invoice));
        assert!(matches!(branch(&ReceiptKind::Expense), Branch::Invoice));
        assert!(matches!(branch(&ReceiptKind::Payment), Branch::Payment));
        assert!(matches!(branch(&ReceiptKind::Payroll), Branch::Common));
        assert!(matches!(
            branch(&ReceiptKind::Unrecognized("X".into())),
            Branch::Common
        ));
    }

    #[test]
    fn footer_spans_four_columns() {
        let node = footer();
        let table = node.as_table().unwrap();
        assert_eq!(table.body.len(), 1);
        let cell = table.body[0][0].as_block().unwrap();
        assert_eq!(cell.text.as_deref(), Some(FOOTER_TEXT));
        assert_eq!(cell.col_span, Some(4));
        assert_eq!(cell.style, Some(Style::TableList));
        assert_eq!(table.body[0][3], Node::covered());
    }

    #[test]
    fn default_style_is_empty_object() {
        assert_eq!(serde_json::to_string(&DefaultStyle::default()).unwrap(), "{}");
    }
}
