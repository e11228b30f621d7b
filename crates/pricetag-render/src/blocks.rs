//! Hand-assembled tag markup for the modes that do not fill a template
//! per item: the per-type list blocks, the aggregate-list cards and the
//! compact fallback tags for print sheets without a template.
//!
//! Field lists here are per mode and deliberately do not share one
//! per-type schema with the template fillers: the accessories list shows
//! `—` where the template path would delete the block, and the aggregate
//! card falls back from "Цена без рассрочки" to "Цена".

use once_cell::sync::Lazy;
use pricetag_format::format_price;
use pricetag_model::{headers, CellValue, ProductType, RowRecord};
use regex::Regex;

use crate::fill::escape_html;

const DASH: &str = "—";

fn text_or(row: &RowRecord, key: &str, fallback: &str) -> String {
    match row.non_empty(key) {
        Some(v) => escape_html(&v.display()),
        None => fallback.to_string(),
    }
}

fn price_or_dash(row: &RowRecord, key: &str) -> String {
    match row.non_empty(key) {
        Some(v) => format_price(&v.display()),
        None => DASH.to_string(),
    }
}

/// One tag for the simple-accessories list: name and price only, no
/// conditional blocks.
pub fn simple_accessories_block(row: &RowRecord) -> String {
    let name = text_or(row, headers::NAME, "Название товара");
    let price = price_or_dash(row, headers::PRICE);

    format!(
        r#"<div class="block">
            <div class="frame-30-2">
                <p class="text-3"><span class="text-white">{name}</span></p>
            </div>
            <div class="frame-31-4">
                <div class="frame-17-6">
                    <p class="text-7">
                        <span class="text-white">{price}</span></p>
                </div>
            </div>
        </div>"#
    )
}

/// One tag for the accessories list. Missing fields render as dashes
/// instead of being removed.
pub fn accessories_block(row: &RowRecord) -> String {
    let name = text_or(row, headers::NAME, "Название товара");
    let old_price = price_or_dash(row, headers::OLD_PRICE);
    let price = price_or_dash(row, headers::PRICE);
    let installment = text_or(row, headers::INSTALLMENT, DASH);

    format!(
        r#"<div class="block accessories-block">
            <div class="frame-30-2">
                <p class="text-3"><span class="text-white">{name}</span></p>
            </div>
            <div class="frame-31-4">
                <p class="text-5"><span class="text-white">{old_price}</span></p>
                <div class="frame-17-6">
                    <p class="text-7"><span class="text-white">{price}</span></p>
                </div>
                <div class="frame-15-8">
                    <p class="text-9"><span class="text-white">{installment}</span></p>
                </div>
            </div>
        </div>"#
    )
}

/// One tag for the promotions list: full spec grid plus the price panel.
/// The old-price span is emitted only when the field is present.
pub fn promotions_block(row: &RowRecord) -> String {
    let name = text_or(row, headers::PRODUCT_NAME, "Название товара");
    let camera = text_or(row, headers::CAMERA, DASH);
    let display = text_or(row, headers::DISPLAY, DASH);
    let battery = text_or(row, headers::BATTERY, DASH);
    let memory = text_or(row, headers::MEMORY, DASH);
    let installment_price = price_or_dash(row, headers::PRICE_WITH_INSTALLMENT);
    let price = price_or_dash(row, headers::PRICE_NO_INSTALLMENT);

    let old_price_span = match row.non_empty(headers::OLD_PRICE_CAP) {
        Some(v) => format!(
            r#"<span class="old-price">{}</span>"#,
            format_price(&v.display())
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="block">
            <div class="frame-4-2">
                <div class="frame-25-3">
                    <img src="images/node-4.svg" class="node-4" alt="Товар" />
                </div>
                <div class="frame-26-5">
                    <div class="frame-33-6">
                        <p class="text-7"><span class="text-rgb-30-30-30">{name}</span></p>
                    </div>
                </div>
            </div>
            <div class="frame-24-8">
                <div class="frame-2-9">
                    <div class="frame-6-10">
                        <div class="frame-7-11">
                            <div class="icons-sbi-12">
                                <img src="images/vector-13.svg" class="vector-13" alt="vector" />
                            </div>
                            <div class="frame-12-14">
                                <p class="text-15"><span class="text-rgb-107-107-107">Камера</span></p>
                                <p class="text-16"><span class="text-rgb-30-30-30">{camera}</span></p>
                            </div>
                        </div>
                        <div class="frame-8-17">
                            <div class="icons-sbi-18">
                                <img src="images/vector-19.svg" class="vector-19" alt="vector" />
                            </div>
                            <div class="frame-12-20">
                                <p class="text-21"><span class="text-rgb-107-107-107">Дисплей</span></p>
                                <p class="text-22"><span class="text-rgb-30-30-30">{display}</span></p>
                            </div>
                        </div>
                    </div>
                    <div class="frame-5-23">
                        <div class="frame-7-24">
                            <div class="icons-sbi-25">
                                <img src="images/vector-26.svg" class="vector-26" alt="vector" />
                            </div>
                            <div class="frame-12-27">
                                <p class="text-28"><span class="text-rgb-107-107-107">Батарея</span></p>
                                <p class="text-29"><span class="text-rgb-30-30-30">{battery}</span></p>
                            </div>
                        </div>
                        <div class="frame-8-30">
                            <div class="icons-sbi-31">
                                <img src="images/vector-32.svg" class="vector-32" alt="vector" />
                            </div>
                            <div class="frame-12-33">
                                <p class="text-34"><span class="text-rgb-107-107-107">Память</span></p>
                                <p class="text-35"><span class="text-rgb-30-30-30">{memory}</span></p>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="frame-23-36">
                    <div class="frame-20-37">
                        <div class="frame-17-38">
                            <div class="frame-22-39">
                                <p class="text-40"><span class="text-white">Цена в рассрочку:</span></p>
                                <div class="frame-32-41">
                                    <p class="text-42"><span class="text-white">от</span></p>
                                    <p class="text-43"><span class="text-white">{installment_price}</span></p>
                                    <p class="text-44"><span class="text-white">сум/мес</span></p>
                                </div>
                            </div>
                        </div>
                        <div class="frame-15-45">{old_price_span}<p class="text-46">
                            <span class="text-white">Цена без рассрочки:</span>
                        </p>
                        <p class="text-47"><span class="text-white">{price}</span></p>
                        </div>
                    </div>
                </div>
            </div>
        </div>"#
    )
}

/// Append the currency word when a hand-entered price lacks it. The
/// compact tags echo prices as typed rather than reformatting them.
fn with_currency(value: &CellValue) -> String {
    let text = escape_html(&value.display());
    if text.contains("сум") {
        text
    } else {
        format!("{text} сум")
    }
}

/// Compact fallback tag for print sheets when no template exists for the
/// type. Self-wrapped in the `price-tag` container.
pub fn compact_tag(ty: ProductType, row: &RowRecord) -> String {
    let mut html = String::from(r#"<div class="price-tag">"#);

    if ty == ProductType::Promotions {
        html.push_str(r#"<div class="promotion-badge">АКЦИЯ</div>"#);
    }

    let name_key = [headers::PRODUCT_NAME, headers::NAME]
        .into_iter()
        .find(|k| row.present(k));
    if let Some(name) = name_key.and_then(|k| row.get(k)) {
        html.push_str(&format!(
            r#"<div class="product-name">{}</div>"#,
            escape_html(&name.display())
        ));
    }

    let mut specs = Vec::new();
    for (label, key) in [
        ("Камера", headers::CAMERA),
        ("Дисплей", headers::DISPLAY),
        ("Батарея", headers::BATTERY),
        ("Память", headers::MEMORY),
    ] {
        if let Some(value) = row.non_empty(key) {
            specs.push(format!("{label}: {}", escape_html(&value.display())));
        }
    }
    if !specs.is_empty() {
        html.push_str(&format!(
            r#"<div class="product-description">{}</div>"#,
            specs.join("<br>")
        ));
    }

    if let Some(price) = row
        .non_empty(headers::PRICE_NO_INSTALLMENT)
        .or_else(|| row.non_empty(headers::PRICE))
    {
        html.push_str(&format!(
            r#"<div class="price">{}</div>"#,
            with_currency(price)
        ));
    }

    if ty == ProductType::Promotions {
        if let Some(old_price) = row.non_empty(headers::OLD_PRICE_CAP) {
            html.push_str(&format!(
                r#"<div class="old-price">{}</div>"#,
                with_currency(old_price)
            ));
        }
    }

    if row.present(headers::PRODUCT_ID) {
        if let Some(id) = row.get(headers::PRODUCT_ID) {
            html.push_str(&format!(
                r#"<div class="barcode">ID: {}</div>"#,
                escape_html(&id.display())
            ));
        }
    }

    html.push_str("</div>");
    html
}

/// One card for the aggregate list document.
pub fn aggregate_card(ty: ProductType, row: &RowRecord) -> String {
    let name = [headers::PRODUCT_NAME, headers::NAME]
        .into_iter()
        .find(|k| row.present(k))
        .and_then(|k| row.get(k))
        .map(|v| escape_html(&v.display()))
        .unwrap_or_else(|| "Название не указано".to_string());

    let mut html = format!(
        r#"<div class="lst-item" style="position: relative;">
            <div class="lst-type">{}</div>
            <div class="lst-header">
                <img src="../assets/images/node-4.svg" class="lst-image" alt="Товар" />
                <h3 class="lst-title">{name}</h3>
            </div>
            <div class="lst-specs">"#,
        ty.badge_label()
    );

    for (label, key) in [
        ("Камера", headers::CAMERA),
        ("Дисплей", headers::DISPLAY),
        ("Батарея", headers::BATTERY),
        ("Память", headers::MEMORY),
    ] {
        if let Some(value) = row.non_empty(key) {
            html.push_str(&format!(
                r#"<div class="lst-spec-item">
                <div class="lst-spec-label">{label}</div>
                <div class="lst-spec-value">{}</div>
            </div>"#,
                escape_html(&value.display())
            ));
        }
    }

    html.push_str(
        r#"</div>
            <div class="lst-prices">"#,
    );

    if let Some(installment) = row.non_empty(headers::PRICE_WITH_INSTALLMENT) {
        html.push_str(&format!(
            r#"<div class="lst-installment">
                <div class="lst-installment-label">Цена в рассрочку:</div>
                <div class="lst-installment-value">от {}/мес</div>
            </div>"#,
            format_price(&installment.display())
        ));
    }

    if let Some(price) = row.first_of(&[headers::PRICE_NO_INSTALLMENT, headers::PRICE]) {
        html.push_str(&format!(
            r#"<div class="lst-regular">{}</div>"#,
            format_price(&price.display())
        ));
    }

    html.push_str(
        r#"</div>
        </div>"#,
    );
    html
}

/// The filled simple template embeds each tag in a deeply nested shell;
/// the simple list extracts just the first `div.block` span (the tag
/// itself plus its four closing wrappers, as the template nests them).
static SIMPLE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div\s+class="block"[^>]*>.*?</div>\s*</div>\s*</div>\s*</div>\s*</div>"#)
        .expect("block pattern")
});

pub fn extract_simple_block(filled_html: &str) -> Option<String> {
    SIMPLE_BLOCK
        .find(filled_html)
        .map(|m| m.as_str().to_string())
}
