//! The rendering core of the price-tag generator.
//!
//! Takes loaded templates and [`RowRecord`]s and produces finished HTML:
//! - [`fill`]: per-type template filling (placeholder tokens first, then
//!   positional class-marker substitution) with conditional block removal.
//! - [`layout`]: strictly sequential chunking of fragments into fixed-size
//!   page/row groups.
//! - [`document`]: assembly of complete HTML documents (print sheets, list
//!   pages, the aggregate list and the no-template fallback).
//! - [`blocks`]: hand-assembled tag markup for the list modes that do not
//!   fill a template per item.
//!
//! Templates are externally authored compatibility artifacts: every class
//! name the regexes match on must exist unchanged in the template files.
//!
//! [`RowRecord`]: pricetag_model::RowRecord

pub mod blocks;
pub mod document;
mod fill;
mod layout;
mod template;

pub use fill::{escape_html, fill};
pub use layout::{layout, PRINT_PAGE_SIZE, PRINT_ROW_SIZE};
pub use template::{load_css, Template, TemplateError};
