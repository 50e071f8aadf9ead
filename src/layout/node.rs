use serde::{Serialize, Serializer};

use super::style::{Alignment, Style};

/// Fill colour used for odd rows of striped tables.
pub const STRIPE_COLOR: &str = "#CCCCCC";

/// A layout fragment: plain text or a structured block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Plain string. `"\n"` is the vertical spacer, `""` an empty cell.
    Text(String),
    /// Any structured node: styled text, table, image, QR, stack or `{}`.
    Block(Box<Block>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Empty cell (`""`).
    pub fn blank() -> Self {
        Self::Text(String::new())
    }

    /// Single blank line between sections (`"\n"`).
    pub fn spacer() -> Self {
        Self::Text("\n".into())
    }

    /// Placeholder for a cell covered by a span (`{}`).
    pub fn covered() -> Self {
        Self::Block(Box::default())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Block(_) => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Self::Text(_) => None,
            Self::Block(block) => Some(&**block),
        }
    }

    pub fn is_spacer(&self) -> bool {
        self.as_text() == Some("\n")
    }

    /// The table carried by this node, if any.
    pub fn as_table(&self) -> Option<&Table> {
        self.as_block().and_then(|b| b.table.as_ref())
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Self::Block(Box::new(block))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A structured pdfmake node. Unset fields are omitted, so
/// `Block::default()` serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Image data (data URL or base64).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Content to encode as a QR code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<TableLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<Fit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col_span: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_span: Option<usize>,
}

impl Block {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn image(data: impl Into<String>) -> Self {
        Self {
            image: Some(data.into()),
            ..Default::default()
        }
    }

    pub fn qr(content: impl Into<String>) -> Self {
        Self {
            qr: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn stack(nodes: Vec<Node>) -> Self {
        Self {
            stack: Some(nodes),
            ..Default::default()
        }
    }

    pub fn table(table: Table, layout: TableLayout) -> Self {
        Self {
            table: Some(table),
            layout: Some(layout),
            ..Default::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = Some(fit);
        self
    }

    pub fn col_span(mut self, columns: usize) -> Self {
        self.col_span = Some(columns);
        self
    }

    pub fn row_span(mut self, rows: usize) -> Self {
        self.row_span = Some(rows);
        self
    }

    /// Centered section title in header style.
    pub fn title(text: impl Into<String>) -> Self {
        Self::text(text)
            .style(Style::TableHeader)
            .alignment(Alignment::Center)
    }
}

/// Table payload: column widths, rows and an optional font size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub widths: Vec<Width>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u8>,
    pub body: Vec<Vec<Node>>,
}

impl Table {
    pub fn new(widths: Vec<Width>, body: Vec<Vec<Node>>) -> Self {
        Self {
            widths,
            font_size: None,
            body,
        }
    }

    /// A table without width hints; the renderer sizes columns itself.
    pub fn auto_sized(body: Vec<Vec<Node>>) -> Self {
        Self::new(Vec::new(), body)
    }

    pub fn font_size(mut self, size: u8) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn rows(&self) -> usize {
        self.body.len()
    }
}

/// Column width token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// `"*"`: take the remaining space.
    Star,
    /// `"auto"`: fit the content.
    Auto,
    /// Fixed width in points.
    Fixed(u16),
}

impl Serialize for Width {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Star => serializer.serialize_str("*"),
            Self::Auto => serializer.serialize_str("auto"),
            Self::Fixed(points) => serializer.serialize_u16(*points),
        }
    }
}

/// Image/QR fitting box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Fit {
    /// Square box, serialized as a single number.
    Square(u32),
    /// Width and height, serialized as `[w, h]`.
    Bounds(u32, u32),
}

/// Table border and fill layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLayout {
    /// `"lightHorizontalLines"`
    LightHorizontalLines,
    /// `"noBorders"`
    NoBorders,
    /// Row-indexed fill: odd rows get `odd`, even rows no fill.
    Striped { odd: String },
}

impl TableLayout {
    /// Striped layout with the default grey.
    pub fn striped() -> Self {
        Self::Striped {
            odd: STRIPE_COLOR.to_string(),
        }
    }

    /// Fill colour the renderer applies to row `row`.
    pub fn fill_color(&self, row: usize) -> Option<&str> {
        match self {
            Self::Striped { odd } if row % 2 != 0 => Some(odd.as_str()),
            _ => None,
        }
    }
}

impl Serialize for TableLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Striped<'a> {
            fill_color: Parity<'a>,
        }

        #[derive(Serialize)]
        struct Parity<'a> {
            odd: &'a str,
        }

        match self {
            Self::LightHorizontalLines => serializer.serialize_str("lightHorizontalLines"),
            Self::NoBorders => serializer.serialize_str("noBorders"),
            Self::Striped { odd } => Striped {
                fill_color: Parity { odd },
            }
            .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json<T: Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap()
    }

    #[test]
    fn covered_cell_is_empty_object() {
        assert_eq!(json(&Node::covered()), "{}");
        assert_eq!(json(&Node::blank()), "\"\"");
        assert_eq!(json(&Node::spacer()), "\"\\n\"");
    }

    #[test]
    fn width_tokens() {
        let widths = vec![Width::Auto, Width::Star, Width::Fixed(95)];
        assert_eq!(json(&widths), r#"["auto","*",95]"#);
    }

    #[test]
    fn fit_shapes() {
        assert_eq!(json(&Fit::Square(140)), "140");
        assert_eq!(json(&Fit::Bounds(260, 260)), "[260,260]");
    }

    #[test]
    fn layouts() {
        assert_eq!(
            json(&TableLayout::LightHorizontalLines),
            "\"lightHorizontalLines\""
        );
        assert_eq!(json(&TableLayout::NoBorders), "\"noBorders\"");
        assert_eq!(
            json(&TableLayout::striped()),
            r##"{"fillColor":{"odd":"#CCCCCC"}}"##
        );
    }

    #[test]
    fn striped_fill_follows_parity() {
        let layout = TableLayout::striped();
        assert_eq!(layout.fill_color(0), None);
        assert_eq!(layout.fill_color(1), Some(STRIPE_COLOR));
        assert_eq!(layout.fill_color(2), None);
        assert_eq!(layout.fill_color(7), Some(STRIPE_COLOR));
        assert_eq!(TableLayout::NoBorders.fill_color(1), None);
    }

    #[test]
    fn title_block() {
        let node: Node = Block::title("EMISOR").col_span(4).into();
        assert_eq!(
            json(&node),
            r#"{"text":"EMISOR","style":"tableHeader","alignment":"center","colSpan":4}"#
        );
    }

    #[test]
    fn auto_sized_table_omits_widths() {
        let table = Table::auto_sized(vec![vec![Node::text("a")]]);
        assert_eq!(json(&table), r#"{"body":[["a"]]}"#);
        assert_eq!(table.rows(), 1);
    }
}
