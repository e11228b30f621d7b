use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::run::run_with_args;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One print sheet per product type (pages of 4 tags, 2 per row).
    Print,
    /// One HTML file per product row, plus a copy of the image assets.
    Individual,
    /// A single aggregate list of every product of every type.
    List,
    /// List of simple tags rendered through the simple template.
    SimpleList,
    /// List of promotion tags.
    PromotionsList,
    /// List of accessory tags.
    AccessoriesList,
    /// List of plain accessory tags, one per row.
    SimpleAccessoriesList,
}

#[derive(Parser)]
#[command(
    name = "pricetag",
    about = "Generate printable price-tag HTML from spreadsheet product data."
)]
pub struct Args {
    /// Generation mode.
    #[arg(value_enum, default_value_t = Mode::Print)]
    pub mode: Mode,

    /// Directory holding the per-type .xlsx source files.
    #[arg(long, default_value = "excel")]
    pub excel_dir: PathBuf,

    /// Directory holding the per-type template folders.
    #[arg(long, default_value = "templates")]
    pub templates_dir: PathBuf,

    /// Directory holding shared assets (images referenced by templates).
    #[arg(long, default_value = "assets")]
    pub assets_dir: PathBuf,

    /// Output directory.
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,
}

pub fn run() -> Result<()> {
    run_with_args(Args::parse())
}
