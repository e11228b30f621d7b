//! Mode orchestration: wires the spreadsheet reader, the template fillers
//! and the document assemblers to the output tree.
//!
//! Per-type input problems (missing source file, unreadable workbook, no
//! data rows) are reported and skipped so one bad file never aborts a
//! batch; a run only fails outright when it would otherwise write nothing,
//! or when a list mode's required template is absent.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use pricetag_format::sanitize_file_name;
use pricetag_fs::{copy_dir_all, write_atomic};
use pricetag_model::{headers, ProductType, RowRecord};
use pricetag_render::document::{
    aggregate_list_document, generic_tag_document, inline_css, list_document, print_document,
    print_document_fallback, rewrite_image_paths_for_list, rewrite_image_paths_for_print,
    strip_document_shell,
};
use pricetag_render::{
    blocks, fill, layout, load_css, Template, TemplateError, PRINT_PAGE_SIZE,
};
use pricetag_xlsx::read_rows;

use crate::cli::{Args, Mode};

pub fn run_with_args(args: Args) -> Result<()> {
    fs::create_dir_all(&args.results_dir).with_context(|| {
        format!("create results directory {}", args.results_dir.display())
    })?;

    match args.mode {
        Mode::Print => generate_print_sheets(&args)?,
        Mode::Individual => generate_individual(&args)?,
        Mode::List => generate_aggregate_list(&args)?,
        Mode::SimpleList => generate_type_list(&args, ProductType::Simple)?,
        Mode::PromotionsList => generate_type_list(&args, ProductType::Promotions)?,
        Mode::AccessoriesList => generate_type_list(&args, ProductType::Accessories)?,
        Mode::SimpleAccessoriesList => {
            generate_type_list(&args, ProductType::SimpleAccessories)?
        }
    }

    println!("Price tag generation finished");
    Ok(())
}

/// Read the rows feeding `ty`, treating a missing or unreadable source
/// file as "nothing to do" rather than an error.
fn load_rows(args: &Args, ty: ProductType) -> Option<Vec<RowRecord>> {
    let path = args.excel_dir.join(ty.source_file());
    if !path.exists() {
        println!("Source file {} not found, skipping", ty.source_file());
        return None;
    }
    match read_rows(&path) {
        Ok(rows) => Some(rows),
        Err(err) => {
            warn!("failed to read {}: {err}", path.display());
            println!("Error reading {}: {err}", ty.source_file());
            None
        }
    }
}

fn type_output_dir(args: &Args, ty: ProductType) -> Result<PathBuf> {
    let dir = args.results_dir.join(ty.dir_name());
    fs::create_dir_all(&dir)
        .with_context(|| format!("create output directory {}", dir.display()))?;
    Ok(dir)
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    write_atomic(path, html.as_bytes()).with_context(|| format!("write {}", path.display()))
}

// ---------------------------------------------------------------------------
// Print sheets
// ---------------------------------------------------------------------------

fn generate_print_sheets(args: &Args) -> Result<()> {
    println!("Creating print sheets...");
    let mut wrote_any = false;
    for ty in ProductType::ALL {
        println!("Creating print sheet for {ty}...");
        wrote_any |= generate_print_sheet_for(args, ty)?;
    }
    if !wrote_any {
        bail!("no print sheets were generated (no input data)");
    }
    Ok(())
}

fn generate_print_sheet_for(args: &Args, ty: ProductType) -> Result<bool> {
    let Some(rows) = load_rows(args, ty) else {
        return Ok(false);
    };
    if rows.is_empty() {
        println!("No data for {ty}");
        return Ok(false);
    }

    let html = match Template::load(&args.templates_dir, ty) {
        Ok(template) => {
            let tags: Vec<String> = rows
                .iter()
                .map(|row| {
                    let filled = fill(ty, &template.html, row);
                    let filled = rewrite_image_paths_for_print(&filled);
                    let body = strip_document_shell(&filled);
                    format!(r#"<div class="price-tag">{body}</div>"#)
                })
                .collect();
            let pages = layout(&tags, PRINT_PAGE_SIZE);
            print_document(ty, &pages, template.css.as_deref().unwrap_or(""))
        }
        Err(TemplateError::Missing { path }) => {
            debug!("no template at {}, using compact tags", path.display());
            let css = load_css(&args.templates_dir, ty)?.unwrap_or_default();
            let tags: Vec<String> = rows.iter().map(|row| blocks::compact_tag(ty, row)).collect();
            let pages = layout(&tags, PRINT_PAGE_SIZE);
            print_document_fallback(ty, &pages, &css)
        }
        Err(err) => return Err(err.into()),
    };

    let page_count = rows.len().div_ceil(PRINT_PAGE_SIZE);
    let out = type_output_dir(args, ty)?.join("print_sheet.html");
    write_output(&out, &html)?;
    println!("Created print sheet for {ty}: {}", out.display());
    println!("Total pages: {page_count}");
    Ok(true)
}

// ---------------------------------------------------------------------------
// Individual tags
// ---------------------------------------------------------------------------

/// File name for one generated tag: the sanitized product name (or a
/// prefixed product id / article number) plus the 1-based row index.
fn output_file_name(row: &RowRecord, index: usize) -> String {
    let base = if row.present(headers::NAME) {
        sanitize_file_name(&row.get(headers::NAME).map(|v| v.display()).unwrap_or_default())
    } else if row.present(headers::PRODUCT_NAME) {
        sanitize_file_name(
            &row.get(headers::PRODUCT_NAME)
                .map(|v| v.display())
                .unwrap_or_default(),
        )
    } else if row.present(headers::PRODUCT_ID) {
        format!(
            "id_{}",
            sanitize_file_name(
                &row.get(headers::PRODUCT_ID)
                    .map(|v| v.display())
                    .unwrap_or_default()
            )
        )
    } else if row.present(headers::SKU) {
        format!(
            "art_{}",
            sanitize_file_name(&row.get(headers::SKU).map(|v| v.display()).unwrap_or_default())
        )
    } else {
        "price_tag".to_string()
    };

    format!("{base}_{}.html", index + 1)
}

fn generate_individual(args: &Args) -> Result<()> {
    let mut total = 0usize;
    for ty in ProductType::ALL {
        println!("Processing file: {}", ty.source_file());
        let Some(rows) = load_rows(args, ty) else {
            continue;
        };
        if rows.is_empty() {
            println!("No data for {ty}");
            continue;
        }

        let out_dir = type_output_dir(args, ty)?;
        let template = match Template::load(&args.templates_dir, ty) {
            Ok(t) => Some(t),
            Err(TemplateError::Missing { path }) => {
                debug!("no template at {}, using generic tags", path.display());
                None
            }
            Err(err) => return Err(err.into()),
        };

        for (index, row) in rows.iter().enumerate() {
            let html = match &template {
                Some(t) => {
                    let filled = fill(ty, &t.html, row);
                    let filled = match &t.css {
                        Some(css) => inline_css(&filled, css),
                        None => filled,
                    };
                    rewrite_image_paths_for_list(&filled)
                }
                None => generic_tag_document(row),
            };

            let file_name = output_file_name(row, index);
            write_output(&out_dir.join(&file_name), &html)?;
            println!("Created price tag: {file_name}");
            total += 1;
        }

        copy_images(args, &out_dir)?;
    }

    if total == 0 {
        bail!("no price tags were generated (no input data)");
    }
    Ok(())
}

/// Mirror the shared image assets next to the generated tags so their
/// relative `images/...` references resolve.
fn copy_images(args: &Args, out_dir: &Path) -> Result<()> {
    let src = args.assets_dir.join("images");
    if !src.is_dir() {
        return Ok(());
    }
    let dst = out_dir.join("images");
    let copied = copy_dir_all(&src, &dst)
        .with_context(|| format!("copy images to {}", dst.display()))?;
    debug!("copied {copied} image(s) to {}", dst.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Aggregate list
// ---------------------------------------------------------------------------

fn generate_aggregate_list(args: &Args) -> Result<()> {
    println!("Creating price tag list...");
    let mut cards = Vec::new();
    for ty in ProductType::ALL {
        let Some(rows) = load_rows(args, ty) else {
            continue;
        };
        println!("Loaded {ty}: {} products", rows.len());
        cards.extend(rows.iter().map(|row| blocks::aggregate_card(ty, row)));
    }

    if cards.is_empty() {
        bail!("no data for the price tag list");
    }

    let out = args.results_dir.join("price_tags_list.html");
    write_output(&out, &aggregate_list_document(&cards))?;
    println!("Created price tag list: {}", out.display());
    println!("Total products: {}", cards.len());
    Ok(())
}

// ---------------------------------------------------------------------------
// Per-type lists
// ---------------------------------------------------------------------------

fn generate_type_list(args: &Args, ty: ProductType) -> Result<()> {
    println!("Creating {ty} price tag list...");
    let Some(rows) = load_rows(args, ty) else {
        bail!("no {ty} price tag list was generated (no input data)");
    };
    if rows.is_empty() {
        bail!("no {ty} price tag list was generated (no data rows)");
    }
    println!("Loaded {ty}: {} products", rows.len());

    let (tag_blocks, css): (Vec<String>, String) = match ty {
        // The simple list fills the real template per row and lifts the tag
        // block out of the filled document.
        ProductType::Simple => {
            let template = Template::load(&args.templates_dir, ty)
                .with_context(|| format!("the {ty} list requires the {ty} template"))?;
            let tag_blocks = rows
                .iter()
                .filter_map(|row| {
                    let filled = fill(ty, &template.html, row);
                    blocks::extract_simple_block(&filled)
                })
                .collect();
            (tag_blocks, template.css.unwrap_or_default())
        }
        // These lists build their markup directly but still refuse to run
        // without the template whose stylesheet they depend on.
        ProductType::Accessories => {
            let template = Template::load(&args.templates_dir, ty)
                .with_context(|| format!("the {ty} list requires the {ty} template"))?;
            let tag_blocks = rows.iter().map(blocks::accessories_block).collect();
            (tag_blocks, template.css.unwrap_or_default())
        }
        ProductType::Promotions => {
            let template = Template::load(&args.templates_dir, ty)
                .with_context(|| format!("the {ty} list requires the {ty} template"))?;
            let tag_blocks = rows.iter().map(blocks::promotions_block).collect();
            (tag_blocks, template.css.unwrap_or_default())
        }
        // Plain accessory tags need no skeleton at all, only the stylesheet.
        ProductType::SimpleAccessories => {
            let css = load_css(&args.templates_dir, ty)?.unwrap_or_default();
            let tag_blocks = rows.iter().map(blocks::simple_accessories_block).collect();
            (tag_blocks, css)
        }
    };

    let out = type_output_dir(args, ty)?.join(format!("{}_price_tags_list.html", ty.dir_name()));
    write_output(&out, &list_document(ty, &css, &tag_blocks))?;
    println!("Created {ty} price tag list: {}", out.display());
    println!("Total products: {}", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricetag_model::CellValue;

    fn row(cells: &[(&str, &str)]) -> RowRecord {
        let mut r = RowRecord::new();
        for (header, value) in cells {
            r.insert(*header, CellValue::Text((*value).to_string()));
        }
        r
    }

    #[test]
    fn file_name_prefers_short_name_header() {
        let r = row(&[("Название", "Чехол iPhone"), ("Название товара", "другое")]);
        assert_eq!(output_file_name(&r, 0), "Чехол_iPhone_1.html");
    }

    #[test]
    fn file_name_falls_back_to_id_then_sku() {
        let by_id = row(&[("ID товара (QR Code)", "AB-123")]);
        assert_eq!(output_file_name(&by_id, 2), "id_AB-123_3.html");

        let by_sku = row(&[("Артикул", "X 55")]);
        assert_eq!(output_file_name(&by_sku, 0), "art_X_55_1.html");

        assert_eq!(output_file_name(&RowRecord::new(), 4), "price_tag_5.html");
    }
}
