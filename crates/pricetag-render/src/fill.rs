//! Per-type template filling.
//!
//! Two substitution strategies coexist for compatibility with the template
//! set as shipped:
//!
//! 1. Placeholder strategy: literal `{{Поле}}` tokens, replaced globally.
//!    Afterwards, conditional blocks whose field is absent are deleted by
//!    their marker class (`old-price`, `installment`).
//! 2. Positional strategy: hand-authored templates carry sample values
//!    instead of tokens; known container/leaf classes locate the text to
//!    replace, and an absent field deletes the whole container rather than
//!    leaving stale sample text.
//!
//! Placeholder substitution always runs first; the positional path only
//! kicks in when the output came back byte-identical (no tokens existed).
//! That order matters: each strategy corrupts the other kind of template.

use once_cell::sync::Lazy;
use pricetag_format::format_price;
use pricetag_model::{headers, ProductType, RowRecord};
use regex::{Captures, Regex};

/// Escape free text for embedding in markup (the `htmlspecialchars`
/// contract: `&`, `<`, `>`, `"`, `'`).
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Fill a template skeleton with one row's data. The skeleton string is
/// borrowed; fills never leak state between rows sharing one template.
pub fn fill(ty: ProductType, template_html: &str, row: &RowRecord) -> String {
    match ty {
        ProductType::Simple => fill_simple(template_html, row),
        ProductType::Accessories => fill_accessories(template_html, row),
        ProductType::Promotions => fill_promotions(template_html, row),
        ProductType::SimpleAccessories => fill_simple_accessories(template_html, row),
    }
}

// ---------------------------------------------------------------------------
// Marker classes and compiled patterns.
//
// These class names are contracts with the template files; a template that
// renames or re-nests them breaks conditional removal. Deletion is always
// the shortest span from the marker's open tag to the next close tag at
// text level (non-greedy), matching the templates' flat nesting.
// ---------------------------------------------------------------------------

fn marker_div(marker: &str) -> Regex {
    Regex::new(&format!(
        r#"(?s)<div[^>]*class="[^"]*{marker}[^"]*"[^>]*>.*?</div>"#
    ))
    .expect("marker pattern")
}

fn white_text(class: &str) -> Regex {
    Regex::new(&format!(
        r#"(?s)(<p\s+class="{class}"><span\s+class="text-white">)(.*?)(</span></p>)"#
    ))
    .expect("text pattern")
}

fn dark_text(class: &str) -> Regex {
    Regex::new(&format!(
        r#"(?s)(<p\s+class="{class}"><span\s+class="text-rgb-30-30-30">)(.*?)(</span></p>)"#
    ))
    .expect("text pattern")
}

static OLD_PRICE_DIV: Lazy<Regex> = Lazy::new(|| marker_div("old-price"));
static INSTALLMENT_DIV: Lazy<Regex> = Lazy::new(|| marker_div("installment"));
static ACC_OLD_PRICE_DIV: Lazy<Regex> = Lazy::new(|| marker_div("frame-17-6"));
static ACC_INSTALLMENT_DIV: Lazy<Regex> = Lazy::new(|| marker_div("frame-15-8"));
static PROMO_INSTALLMENT_DIV: Lazy<Regex> = Lazy::new(|| marker_div("frame-17-38"));

// Accessories template leaves (loose whitespace between tags).
static ACC_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(<p\s+class="text-3">\s*<span\s+class="text-white">)(.*?)(</span>\s*</p>)"#)
        .expect("text pattern")
});
static ACC_PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(<p\s+class="text-5">\s*<span\s+class="text-white">)(.*?)(</span>\s*</p>)"#)
        .expect("text pattern")
});
static ACC_OLD_PRICE_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)(<div[^>]*class="[^"]*frame-17-6[^"]*"[^>]*>.*?<p\s+class="text-7"><span\s+class="text-white">)(.*?)(</span></p>.*?</div>)"#,
    )
    .expect("text pattern")
});
static ACC_INSTALLMENT_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)(<div[^>]*class="[^"]*frame-15-8[^"]*"[^>]*>.*?<p\s+class="text-9"><span\s+class="text-white">)(.*?)(</span></p>.*?</div>)"#,
    )
    .expect("text pattern")
});

// Phone-template leaves, shared by the simple and promotions fillers.
static NAME_TEXT: Lazy<Regex> = Lazy::new(|| dark_text("text-7"));
static CAMERA_TEXT: Lazy<Regex> = Lazy::new(|| dark_text("text-16"));
static DISPLAY_TEXT: Lazy<Regex> = Lazy::new(|| dark_text("text-22"));
static BATTERY_TEXT: Lazy<Regex> = Lazy::new(|| dark_text("text-29"));
static MEMORY_TEXT: Lazy<Regex> = Lazy::new(|| dark_text("text-35"));
static MAIN_PRICE_TEXT: Lazy<Regex> = Lazy::new(|| white_text("text-47"));
static INSTALLMENT_PRICE_TEXT: Lazy<Regex> = Lazy::new(|| white_text("text-43"));

static OLD_PRICE_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(<span\s+class="old-price">)(.*?)(</span>)"#).expect("text pattern")
});
static OLD_PRICE_SPAN_STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)<span\s+class="old-price">.*?</span>"#).expect("text pattern"));

// Sample literals in the simple template. The old-price span carries the
// same text as the main price, so the span's copy is parked on a sentinel
// while the global price replace runs, then restored.
const SIMPLE_OLD_PRICE_SAMPLE: &str = r#"<span class="old-price">12 000 000 сум</span>"#;
const SIMPLE_OLD_PRICE_SENTINEL: &str = r#"<span class="old-price">TEMP_OLD_PRICE</span>"#;
const SIMPLE_PRICE_SAMPLE: &str = "12 000 000 сум";
const SIMPLE_INSTALLMENT_SAMPLE: &str = "1 130 000";

/// Replace the inner text (capture group 2) of up to `limit` matches with
/// `value`, reassembling from the surrounding capture groups so `value` is
/// taken literally. `limit == 0` replaces every match.
fn replace_inner(re: &Regex, html: &str, value: &str, limit: usize) -> String {
    re.replacen(html, limit, |caps: &Captures<'_>| {
        format!("{}{}{}", &caps[1], value, &caps[3])
    })
    .into_owned()
}

fn strip_block(re: &Regex, html: &str) -> String {
    re.replace_all(html, "").into_owned()
}

/// Placeholder value for a free-text field: present (even if empty) rows
/// substitute the escaped value, absent keys substitute the empty string.
fn placeholder_text(row: &RowRecord, key: &str) -> String {
    if row.present(key) {
        escape_html(&row.get(key).map(|v| v.display()).unwrap_or_default())
    } else {
        String::new()
    }
}

/// Placeholder value for a price field. A present-but-empty cell still
/// runs through the formatter (yielding the bare suffix), mirroring the
/// no-guard formatter contract.
fn placeholder_price(row: &RowRecord, key: &str) -> String {
    if row.present(key) {
        format_price(&row.get(key).map(|v| v.display()).unwrap_or_default())
    } else {
        String::new()
    }
}

fn apply_placeholders(html: &str, replacements: &[(&str, String)]) -> String {
    let mut out = html.to_string();
    for (token, value) in replacements {
        out = out.replace(token, value);
    }
    out
}

fn formatted(row: &RowRecord, key: &str) -> Option<String> {
    row.non_empty(key).map(|v| format_price(&v.display()))
}

fn escaped(row: &RowRecord, key: &str) -> Option<String> {
    row.non_empty(key).map(|v| escape_html(&v.display()))
}

// ---------------------------------------------------------------------------
// Accessories
// ---------------------------------------------------------------------------

fn fill_accessories(template_html: &str, row: &RowRecord) -> String {
    let replacements = [
        ("{{Название}}", placeholder_text(row, headers::NAME)),
        ("{{Цена}}", placeholder_price(row, headers::PRICE)),
        ("{{Старая цена}}", placeholder_price(row, headers::OLD_PRICE)),
        ("{{Рассрочка}}", placeholder_text(row, headers::INSTALLMENT)),
    ];

    let after_placeholders = apply_placeholders(template_html, &replacements);
    if after_placeholders != template_html {
        let mut html = after_placeholders;
        if row.non_empty(headers::OLD_PRICE).is_none() {
            html = strip_block(&OLD_PRICE_DIV, &html);
        }
        if row.non_empty(headers::INSTALLMENT).is_none() {
            html = strip_block(&INSTALLMENT_DIV, &html);
        }
        return html;
    }

    // No placeholders: the shipped template is hand-authored with sample
    // values; substitute by class markers instead.
    let mut html = template_html.to_string();

    if let Some(name) = escaped(row, headers::NAME) {
        html = replace_inner(&ACC_NAME, &html, &name, 0);
    }
    if let Some(price) = formatted(row, headers::PRICE) {
        html = replace_inner(&ACC_PRICE, &html, &price, 0);
    }

    match formatted(row, headers::OLD_PRICE) {
        Some(old_price) => html = replace_inner(&ACC_OLD_PRICE_TEXT, &html, &old_price, 0),
        None => html = strip_block(&ACC_OLD_PRICE_DIV, &html),
    }

    match escaped(row, headers::INSTALLMENT) {
        Some(installment) => html = replace_inner(&ACC_INSTALLMENT_TEXT, &html, &installment, 0),
        None => html = strip_block(&ACC_INSTALLMENT_DIV, &html),
    }

    html
}

// ---------------------------------------------------------------------------
// Promotions
// ---------------------------------------------------------------------------

fn fill_promotions(template_html: &str, row: &RowRecord) -> String {
    let replacements = [
        ("{{Название товара}}", placeholder_text(row, headers::PRODUCT_NAME)),
        ("{{Камера }}", placeholder_text(row, headers::CAMERA)),
        ("{{Дисплей}}", placeholder_text(row, headers::DISPLAY)),
        ("{{Батарея}}", placeholder_text(row, headers::BATTERY)),
        ("{{Память}}", placeholder_text(row, headers::MEMORY)),
        ("{{Старая Цена}}", placeholder_price(row, headers::OLD_PRICE_CAP)),
        (
            "{{Цена без рассрочки}}",
            placeholder_price(row, headers::PRICE_NO_INSTALLMENT),
        ),
        (
            "{{Цена с рассрочкой}}",
            placeholder_price(row, headers::PRICE_WITH_INSTALLMENT),
        ),
    ];

    let after_placeholders = apply_placeholders(template_html, &replacements);
    if after_placeholders != template_html {
        let mut html = after_placeholders;
        if row.non_empty(headers::OLD_PRICE_CAP).is_none() {
            html = strip_block(&OLD_PRICE_DIV, &html);
        }
        if row.non_empty(headers::PRICE_WITH_INSTALLMENT).is_none() {
            html = strip_block(&INSTALLMENT_DIV, &html);
        }
        return html;
    }

    let mut html = template_html.to_string();

    if let Some(name) = escaped(row, headers::PRODUCT_NAME) {
        html = replace_inner(&NAME_TEXT, &html, &name, 0);
    }
    if let Some(camera) = escaped(row, headers::CAMERA) {
        html = replace_inner(&CAMERA_TEXT, &html, &camera, 1);
    }
    if let Some(display) = escaped(row, headers::DISPLAY) {
        html = replace_inner(&DISPLAY_TEXT, &html, &display, 1);
    }
    if let Some(battery) = escaped(row, headers::BATTERY) {
        html = replace_inner(&BATTERY_TEXT, &html, &battery, 1);
    }
    if let Some(memory) = escaped(row, headers::MEMORY) {
        html = replace_inner(&MEMORY_TEXT, &html, &memory, 1);
    }

    match formatted(row, headers::OLD_PRICE_CAP) {
        Some(old_price) => html = replace_inner(&OLD_PRICE_SPAN, &html, &old_price, 0),
        None => html = strip_block(&OLD_PRICE_SPAN_STRIP, &html),
    }

    if let Some(price) = formatted(row, headers::PRICE_NO_INSTALLMENT) {
        html = replace_inner(&MAIN_PRICE_TEXT, &html, &price, 1);
    }

    match formatted(row, headers::PRICE_WITH_INSTALLMENT) {
        Some(installment) => html = replace_inner(&INSTALLMENT_PRICE_TEXT, &html, &installment, 1),
        None => html = strip_block(&PROMO_INSTALLMENT_DIV, &html),
    }

    html
}

// ---------------------------------------------------------------------------
// Simple (phone tags)
// ---------------------------------------------------------------------------

fn fill_simple(template_html: &str, row: &RowRecord) -> String {
    let mut html = template_html.to_string();

    if let Some(name) = escaped(row, headers::PRODUCT_NAME) {
        html = replace_inner(&NAME_TEXT, &html, &name, 0);
    }
    if let Some(camera) = escaped(row, headers::CAMERA) {
        html = replace_inner(&CAMERA_TEXT, &html, &camera, 0);
    }
    if let Some(display) = escaped(row, headers::DISPLAY) {
        html = replace_inner(&DISPLAY_TEXT, &html, &display, 0);
    }
    if let Some(battery) = escaped(row, headers::BATTERY) {
        html = replace_inner(&BATTERY_TEXT, &html, &battery, 0);
    }
    if let Some(memory) = escaped(row, headers::MEMORY) {
        html = replace_inner(&MEMORY_TEXT, &html, &memory, 0);
    }

    // Park the old-price sample on a sentinel first: its text is identical
    // to the main price sample, and the global price replace below must not
    // clobber it. An absent old price removes the span outright.
    let old_price = formatted(row, headers::OLD_PRICE_CAP);
    match &old_price {
        Some(_) => html = html.replace(SIMPLE_OLD_PRICE_SAMPLE, SIMPLE_OLD_PRICE_SENTINEL),
        None => html = html.replace(SIMPLE_OLD_PRICE_SAMPLE, ""),
    }

    if let Some(price) = formatted(row, headers::PRICE_NO_INSTALLMENT) {
        html = html.replace(SIMPLE_PRICE_SAMPLE, &price);
    }

    if let Some(old_price) = old_price {
        html = html.replace(
            SIMPLE_OLD_PRICE_SENTINEL,
            &format!(r#"<span class="old-price">{old_price}</span>"#),
        );
    }

    if let Some(installment) = formatted(row, headers::PRICE_WITH_INSTALLMENT) {
        html = html.replace(SIMPLE_INSTALLMENT_SAMPLE, &installment);
    }

    html
}

// ---------------------------------------------------------------------------
// Simple accessories
// ---------------------------------------------------------------------------

fn fill_simple_accessories(template_html: &str, row: &RowRecord) -> String {
    let name = if row.present(headers::NAME) {
        placeholder_text(row, headers::NAME)
    } else {
        "Название товара".to_string()
    };
    let price = if row.present(headers::PRICE) {
        placeholder_price(row, headers::PRICE)
    } else {
        "—".to_string()
    };

    apply_placeholders(
        template_html,
        &[("{{Название}}", name), ("{{Цена}}", price)],
    )
}
