use super::node::{Block, Node};

/// Builds a table row of a fixed column count.
///
/// Spanning cells are followed by `{}` markers for the columns they cover,
/// and the row is padded with empty `""` cells up to its width, so call
/// sites never maintain blank-cell arrays by hand.
#[derive(Debug, Clone)]
pub struct RowBuilder {
    width: usize,
    cells: Vec<Node>,
}

impl RowBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            cells: Vec::with_capacity(width),
        }
    }

    pub fn cell(mut self, cell: impl Into<Node>) -> Self {
        self.cells.push(cell.into());
        self
    }

    /// Push `block` spanning `columns` columns.
    pub fn span(mut self, block: Block, columns: usize) -> Self {
        let columns = columns.max(1);
        self.cells.push(block.col_span(columns).into());
        for _ in 1..columns {
            self.cells.push(Node::covered());
        }
        self
    }

    /// Finish the row, padding with empty cells to the declared width.
    pub fn build(mut self) -> Vec<Node> {
        debug_assert!(
            self.cells.len() <= self.width,
            "row has {} cells but width {}",
            self.cells.len(),
            self.width
        );
        while self.cells.len() < self.width {
            self.cells.push(Node::blank());
        }
        self.cells
    }

    /// A title row: `text` spanning the full width.
    pub fn title(width: usize, text: impl Into<String>) -> Vec<Node> {
        Self::new(width).span(Block::title(text), width).build()
    }

    /// A label/value row of `label, value` pairs.
    pub fn pairs<I, L, V>(width: usize, pairs: I) -> Vec<Node>
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<Node>,
        V: Into<Node>,
    {
        pairs
            .into_iter()
            .fold(Self::new(width), |row, (label, value)| {
                row.cell(label).cell(value)
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_with_blank_cells() {
        let row = RowBuilder::new(4).cell("TIPO DE CAMBIO:").cell("17.25").build();
        assert_eq!(row.len(), 4);
        assert_eq!(row[2], Node::blank());
        assert_eq!(row[3], Node::blank());
    }

    #[test]
    fn empty_row_is_all_blank() {
        let row = RowBuilder::new(4).build();
        assert!(row.iter().all(|c| *c == Node::blank()));
    }

    #[test]
    fn span_inserts_covered_markers() {
        let row = RowBuilder::new(4)
            .cell("REGIMEN FISCAL:")
            .span(Block::text("601 - General de Ley Personas Morales"), 3)
            .build();
        assert_eq!(row.len(), 4);
        assert_eq!(row[1].as_block().unwrap().col_span, Some(3));
        assert_eq!(row[2], Node::covered());
        assert_eq!(row[3], Node::covered());
    }

    #[test]
    fn single_column_span_has_no_markers() {
        let row = RowBuilder::new(3).span(Block::qr("x").row_span(8), 1).build();
        assert_eq!(row[0].as_block().unwrap().col_span, Some(1));
        assert_eq!(row[1], Node::blank());
    }

    #[test]
    fn title_spans_width() {
        let row = RowBuilder::title(10, "PARTIDAS DEL COMPROBANTE");
        assert_eq!(row.len(), 10);
        assert_eq!(row[0].as_block().unwrap().col_span, Some(10));
        assert!(row[1..].iter().all(|c| *c == Node::covered()));
    }

    #[test]
    fn label_value_pairs() {
        let row = RowBuilder::pairs(4, [("NOMBRE:", "ACME"), ("RFC:", "AAA010101AAA")]);
        assert_eq!(
            row,
            vec![
                Node::text("NOMBRE:"),
                Node::text("ACME"),
                Node::text("RFC:"),
                Node::text("AAA010101AAA"),
            ]
        );
    }
}
