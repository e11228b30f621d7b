use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of product types the generator knows about.
///
/// Each type fixes a template filling strategy, a spreadsheet source file,
/// an output subdirectory and the per-mode layout group sizes; dispatch is
/// always on this enum rather than on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Simple,
    Accessories,
    Promotions,
    SimpleAccessories,
}

impl ProductType {
    /// All types, in the batch-processing order.
    pub const ALL: [ProductType; 4] = [
        ProductType::Accessories,
        ProductType::Promotions,
        ProductType::Simple,
        ProductType::SimpleAccessories,
    ];

    /// Directory-style name, used for `templates/{name}/` and
    /// `results/{name}/` paths.
    pub fn dir_name(self) -> &'static str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Accessories => "accessories",
            ProductType::Promotions => "promotions",
            ProductType::SimpleAccessories => "simple_accessories",
        }
    }

    /// Spreadsheet file (under the excel directory) feeding this type.
    pub fn source_file(self) -> &'static str {
        match self {
            ProductType::Simple => "simple.xlsx",
            ProductType::Accessories => "accessories.xlsx",
            ProductType::Promotions => "promotions.xlsx",
            ProductType::SimpleAccessories => "simple_accessories.xlsx",
        }
    }

    /// Tags per row in the per-type list documents (2x grids for most
    /// types, one tag per row for the plain accessory list).
    pub fn list_group_size(self) -> usize {
        match self {
            ProductType::SimpleAccessories => 1,
            _ => 2,
        }
    }

    /// CSS class of the list document's body container. Promotions add the
    /// `sale` modifier the stylesheet keys off.
    pub fn list_body_class(self) -> &'static str {
        match self {
            ProductType::Promotions => "node-1 sale",
            _ => "node-1",
        }
    }

    /// Human-readable badge label for the aggregate list cards.
    pub fn badge_label(self) -> &'static str {
        match self {
            ProductType::Simple => "Обычный",
            ProductType::Promotions => "Акция",
            ProductType::Accessories => "Аксессуар",
            ProductType::SimpleAccessories => "Товар",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product type '{0}' (expected: simple|accessories|promotions|simple_accessories)")]
pub struct ParseProductTypeError(pub String);

impl FromStr for ProductType {
    type Err = ParseProductTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(ProductType::Simple),
            "accessories" => Ok(ProductType::Accessories),
            "promotions" => Ok(ProductType::Promotions),
            "simple_accessories" => Ok(ProductType::SimpleAccessories),
            other => Err(ParseProductTypeError(other.to_string())),
        }
    }
}
