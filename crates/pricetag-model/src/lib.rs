//! `pricetag-model` defines the data model shared across the generator:
//! spreadsheet row records, the closed set of product types and their
//! per-type configuration, and ordered-candidate field resolution.
//!
//! The crate is intentionally self-contained (serde-derived, JSON-safe) so
//! the input layer, the rendering core and the CLI can all depend on it
//! without pulling in each other.

mod product_type;
mod row;

pub mod headers;

pub use product_type::{ParseProductTypeError, ProductType};
pub use row::{CellValue, RowRecord};
