//! Assembly of complete HTML documents from filled fragments.
//!
//! Everything here is pure string work: the generated CSS is embedded
//! inline in a `<style>` block (no external stylesheet links besides the
//! fixed web-font reference), and image paths inside fragments are
//! rewritten per output mode without touching the filesystem.

use once_cell::sync::Lazy;
use pricetag_format::format_price;
use pricetag_model::{headers, ProductType, RowRecord};
use regex::Regex;

use crate::fill::escape_html;
use crate::layout::{layout, PRINT_ROW_SIZE};

/// The only external reference generated documents keep.
pub const FONT_LINK: &str =
    r#"<link href="https://fonts.googleapis.com/css?family=Inter&display=swap" rel="stylesheet">"#;

/// Rewrite template-relative image paths for list-style output, where the
/// images sit next to the document (`images/...`).
pub fn rewrite_image_paths_for_list(html: &str) -> String {
    html.replace("../assets/images/", "images/")
        .replace("assets/images/", "images/")
}

/// Rewrite image paths for print output, where the document references the
/// shared `assets/images/` tree.
pub fn rewrite_image_paths_for_print(html: &str) -> String {
    html.replace("images/", "assets/images/")
}

/// Embed a stylesheet inline at the end of the document head.
pub fn inline_css(html: &str, css: &str) -> String {
    html.replace("</head>", &format!("<style>{css}</style></head>"))
}

static BODY_SHELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<body[^>]*>(.*)</body>").expect("shell pattern"));
static HTML_SHELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<html[^>]*>(.*)</html>").expect("shell pattern"));
static HEAD_SHELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<head>.*</head>").expect("shell pattern"));

/// Reduce a filled full-page template to its body content so it can be
/// embedded as a fragment inside a print sheet.
pub fn strip_document_shell(html: &str) -> String {
    let html = BODY_SHELL.replace_all(html, "${1}");
    let html = HTML_SHELL.replace_all(&html, "${1}");
    HEAD_SHELL.replace_all(&html, "").into_owned()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Layout shell for print sheets built on the real per-type templates.
const PRINT_CSS: &str = r#"
        @media print {
            body { margin: 0; }
            .page { page-break-after: always; }
            .page:last-child { page-break-after: avoid; }
        }

        body {
            margin: 0;
            padding: 20px;
            font-family: "Inter", sans-serif;
            background: white;
        }

        .page {
            width: 794px;
            min-height: 1123px;
            margin: 0 auto 20px auto;
            border: 1px solid #ccc;
            padding: 20px;
            box-sizing: border-box;
            display: flex;
            flex-direction: column;
            gap: 20px;
            align-items: center;
        }

        .price-tag-row {
            display: flex;
            gap: 20px;
            justify-content: center;
            width: 100%;
        }

        .price-tag {
            width: 264px;
            height: auto;
            min-height: 378px;
            border-radius: 8px;
            padding: 15px;
            box-sizing: border-box;
            display: flex;
            flex-direction: column;
            justify-content: flex-start;
            overflow: visible;
            position: relative;
            background: white;
            border: 1px solid #eee;
            flex-shrink: 0;
        }

        .page-info {
            text-align: center;
            font-size: 12px;
            color: #666;
            margin-top: 10px;
        }
"#;

/// Layout shell for the fallback print sheet (no template available).
const PRINT_FALLBACK_CSS: &str = r#"
        @media print {
            body { margin: 0; }
            .page { page-break-after: always; }
            .page:last-child { page-break-after: avoid; }
        }

        body {
            margin: 0;
            padding: 20px;
            font-family: Arial, sans-serif;
            background: white;
        }

        .page {
            width: 794px;
            min-height: 1123px;
            margin: 0 auto 20px auto;
            border: 1px solid #ccc;
            padding: 20px;
            box-sizing: border-box;
            display: flex;
            flex-direction: column;
            gap: 20px;
            align-items: center;
        }

        .price-tag-row {
            display: flex;
            gap: 20px;
            justify-content: center;
            width: 100%;
        }

        .price-tag {
            width: 264px;
            height: auto;
            min-height: 378px;
            border: 2px solid #333;
            border-radius: 10px;
            padding: 15px;
            box-sizing: border-box;
            display: flex;
            flex-direction: column;
            justify-content: flex-start;
            background: white;
            overflow: visible;
            flex-shrink: 0;
        }

        .page-info {
            text-align: center;
            font-size: 12px;
            color: #666;
            margin-top: 10px;
        }
"#;

/// Assemble the print sheet for `ty` from pages of already-wrapped
/// `<div class="price-tag">` fragments. Each page renders its tags as
/// horizontal pairs and ends with a 1-based page label.
pub fn print_document(ty: ProductType, pages: &[&[String]], template_css: &str) -> String {
    let title = format!(
        "Лист для печати ценников - {}",
        capitalize_first(ty.dir_name())
    );

    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {FONT_LINK}
    <style>{PRINT_CSS}
        {template_css}
    </style>
</head>
<body>"#
    );

    for (page_index, page) in pages.iter().enumerate() {
        html.push_str(r#"<div class="page">"#);
        for pair in layout(page, PRINT_ROW_SIZE) {
            html.push_str(r#"<div class="price-tag-row">"#);
            for tag in pair {
                html.push_str(tag);
            }
            html.push_str("</div>");
        }
        html.push_str(&format!(
            r#"<div class="page-info">Страница {}</div>"#,
            page_index + 1
        ));
        html.push_str("</div>");
    }

    html.push_str("</body></html>");
    html
}

/// Fallback print sheet used when the per-type template is missing: tags
/// flow directly in the page container without pairing.
pub fn print_document_fallback(ty: ProductType, pages: &[&[String]], template_css: &str) -> String {
    let title = format!(
        "Лист для печати ценников - {}",
        capitalize_first(ty.dir_name())
    );

    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{PRINT_FALLBACK_CSS}
        {template_css}
    </style>
</head>
<body>"#
    );

    for (page_index, page) in pages.iter().enumerate() {
        html.push_str(r#"<div class="page">"#);
        for tag in *page {
            html.push_str(tag);
        }
        html.push_str(&format!(
            r#"<div class="page-info">Страница {}</div>"#,
            page_index + 1
        ));
        html.push_str("</div>");
    }

    html.push_str("</body></html>");
    html
}

fn list_title(ty: ProductType) -> &'static str {
    match ty {
        ProductType::Simple => "Список Simple ценников",
        ProductType::Accessories => "Список Accessories ценников",
        ProductType::Promotions => "Список Promotions ценников",
        ProductType::SimpleAccessories => "Список Simple Accessories ценников",
    }
}

/// Assemble a per-type list document: tag blocks grouped into
/// `flex-block` rows inside the type's body container, styled by the
/// template's own CSS.
pub fn list_document(ty: ProductType, css: &str, blocks: &[String]) -> String {
    let title = list_title(ty);
    let body_class = ty.list_body_class();

    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {FONT_LINK}
    <style>{css}</style>
</head>
<body>
    <div class="{body_class}">"#
    );

    for group in layout(blocks, ty.list_group_size()) {
        html.push_str(r#"<div class="flex-block">"#);
        for block in group {
            html.push_str(block);
        }
        html.push_str("</div>");
    }

    html.push_str(
        r#"</div>
</body>
</html>"#,
    );
    html
}

/// Self-contained stylesheet for the aggregate list document.
const AGGREGATE_LIST_CSS: &str = r#"
        *, *::before, *::after { box-sizing: border-box; }
        body {
            margin: 0;
            padding: 20px;
            font-family: "Inter", sans-serif;
            background: #f5f5f5;
        }

        .lst-container {
            display: flex;
            flex-direction: column;
            gap: 20px;
            max-width: 1120px;
            margin: 0 auto;
        }

        .lst-grid {
            display: grid;
            grid-template-columns: repeat(2, minmax(264px, 1fr));
            gap: 20px;
            width: 100%;
            align-items: start;
        }

        .lst-item {
            background: white;
            border-radius: 8px;
            border: 1px solid #e8e8e8;
            padding: 15px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            width: 100%;
            max-width: 540px;
        }

        .lst-header {
            display: flex;
            align-items: center;
            gap: 10px;
            margin-bottom: 15px;
        }

        .lst-image {
            width: 60px;
            height: 60px;
            border-radius: 4px;
        }

        .lst-title {
            font-size: 16px;
            font-weight: 700;
            color: #1e1e1e;
            margin: 0;
        }

        .lst-specs {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 10px;
            margin-bottom: 15px;
        }

        .lst-spec-item {
            background: #fafafa;
            padding: 8px;
            border-radius: 4px;
            text-align: center;
        }

        .lst-spec-label {
            font-size: 10px;
            color: #6b6b6b;
            margin-bottom: 2px;
        }

        .lst-spec-value {
            font-size: 12px;
            font-weight: 500;
            color: #1e1e1e;
        }

        .lst-prices {
            background: linear-gradient(180deg, #652D86 0%, #550981 100%);
            border-radius: 6px;
            padding: 15px;
            color: white;
        }

        .lst-installment {
            margin-bottom: 10px;
        }

        .lst-installment-label {
            font-size: 9px;
            font-style: italic;
            margin-bottom: 5px;
        }

        .lst-installment-value {
            font-size: 20px;
            font-weight: 700;
        }

        .lst-regular {
            font-size: 17px;
            font-weight: 500;
        }

        .lst-type {
            position: absolute;
            top: 10px;
            right: 10px;
            background: #652D86;
            color: white;
            padding: 4px 8px;
            border-radius: 4px;
            font-size: 10px;
            font-weight: 500;
        }

        @media (max-width: 768px) {
            .lst-grid {
                grid-template-columns: 1fr;
            }
        }
"#;

/// Assemble the aggregate list: every row of every type rendered as a
/// `lst-item` card in a two-column grid.
pub fn aggregate_list_document(cards: &[String]) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Список всех ценников</title>
    {FONT_LINK}
    <style>{AGGREGATE_LIST_CSS}</style>
</head>
<body>
    <div class="lst-container">
        <h1>Список всех ценников</h1>
        <div class="lst-grid">"#
    );

    for card in cards {
        html.push_str(card);
    }

    html.push_str(
        r#"</div>
    </div>
</body>
</html>"#,
    );
    html
}

/// Minimal generic tag document used when a per-type template file is
/// missing in per-row generation: name and price only, no template input.
pub fn generic_tag_document(row: &RowRecord) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Ценник</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }
        .price-tag { border: 2px solid #333; padding: 20px; max-width: 300px; }
        .name { font-size: 18px; font-weight: bold; margin-bottom: 10px; }
        .price { font-size: 24px; color: #e74c3c; font-weight: bold; }
        .specs { margin: 10px 0; font-size: 14px; }
    </style>
</head>
<body>
    <div class="price-tag">"#,
    );

    let name_key = [headers::PRODUCT_NAME, headers::NAME]
        .into_iter()
        .find(|k| row.present(k));
    if let Some(name) = name_key.and_then(|k| row.get(k)) {
        html.push_str(&format!(
            r#"<div class="name">{}</div>"#,
            escape_html(&name.display())
        ));
    }

    let price_key = [headers::PRICE_NO_INSTALLMENT, headers::PRICE]
        .into_iter()
        .find(|k| row.present(k));
    if let Some(price) = price_key.and_then(|k| row.get(k)) {
        html.push_str(&format!(
            r#"<div class="price">{}</div>"#,
            format_price(&price.display())
        ));
    }

    html.push_str(
        r#"</div>
</body>
</html>"#,
    );
    html
}
