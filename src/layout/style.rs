use serde::{Deserialize, Serialize};

/// Named style presets referenced by layout nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    /// Section titles.
    TableHeader,
    /// Body text of label/value tables.
    TableContent,
    /// Dense lists (concepts, related documents).
    TableList,
    /// Fine print of the stamp block.
    TableSat,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Text attributes of a style preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    pub font_size: u8,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl TextStyle {
    pub fn new(font_size: u8) -> Self {
        Self {
            bold: None,
            font_size,
            color: "black".into(),
            alignment: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// The four presets a CFDI printout uses, keyed by [`Style`] name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSheet {
    pub table_header: TextStyle,
    pub table_content: TextStyle,
    pub table_list: TextStyle,
    pub table_sat: TextStyle,
}

impl StyleSheet {
    pub fn get(&self, style: Style) -> &TextStyle {
        match style {
            Style::TableHeader => &self.table_header,
            Style::TableContent => &self.table_content,
            Style::TableList => &self.table_list,
            Style::TableSat => &self.table_sat,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            table_header: TextStyle::new(10).bold(),
            table_content: TextStyle::new(8).alignment(Alignment::Left),
            table_list: TextStyle::new(7).alignment(Alignment::Center),
            table_sat: TextStyle::new(5).alignment(Alignment::Left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names() {
        assert_eq!(
            serde_json::to_string(&Style::TableHeader).unwrap(),
            "\"tableHeader\""
        );
        assert_eq!(
            serde_json::to_string(&Style::TableSat).unwrap(),
            "\"tableSat\""
        );
    }

    #[test]
    fn default_presets() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.get(Style::TableHeader).bold, Some(true));
        assert_eq!(sheet.get(Style::TableHeader).font_size, 10);
        assert_eq!(sheet.get(Style::TableContent).font_size, 8);
        assert_eq!(sheet.get(Style::TableList).alignment, Some(Alignment::Center));
        assert_eq!(sheet.get(Style::TableSat).font_size, 5);
        assert!(
            [Style::TableHeader, Style::TableContent, Style::TableList, Style::TableSat]
                .iter()
                .all(|s| sheet.get(*s).color == "black")
        );
    }

    #[test]
    fn header_preset_serialization() {
        let json = serde_json::to_string(&StyleSheet::default().table_header).unwrap();
        assert_eq!(json, r#"{"bold":true,"fontSize":10,"color":"black"}"#);
    }
}
