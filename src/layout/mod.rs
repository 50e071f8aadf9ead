//! Renderer-agnostic layout tree.
//!
//! The types here serialize to the pdfmake document-definition schema:
//! strings for plain cells, objects for styled cells, tables, images and QR
//! codes. Column widths serialize as `"*"`, `"auto"` or a number, and
//! striped tables carry their row-parity fill rule.

mod node;
mod row;
mod style;

pub use node::*;
pub use row::RowBuilder;
pub use style::*;
