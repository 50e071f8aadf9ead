//! CFDI record types, SAT catalogs and field formatters.
//!
//! This module holds everything the content generator reads: the parsed
//! receipt, the code catalogs used to describe it, and the formatting
//! helpers every section shares.

mod builder;
mod catalogs;
mod error;
mod format;
mod types;

pub use builder::*;
pub use catalogs::{Catalog, describe};
pub use error::*;
pub use format::*;
pub use types::*;
