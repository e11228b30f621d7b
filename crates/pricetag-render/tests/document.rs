use pretty_assertions::assert_eq;
use pricetag_model::{CellValue, ProductType, RowRecord};
use pricetag_render::document::{
    aggregate_list_document, generic_tag_document, inline_css, list_document, print_document,
    print_document_fallback, rewrite_image_paths_for_list, rewrite_image_paths_for_print,
    strip_document_shell,
};

fn row(cells: &[(&str, &str)]) -> RowRecord {
    let mut r = RowRecord::new();
    for (header, value) in cells {
        r.insert(*header, CellValue::Text((*value).to_string()));
    }
    r
}

#[test]
fn shell_strip_keeps_body_content_only() {
    let html = r#"<!DOCTYPE html>
<html lang="ru"><head><title>x</title><style>body{}</style></head>
<body class="page"><div class="block">содержимое</div></body></html>"#;

    let stripped = strip_document_shell(html);
    assert!(stripped.contains(r#"<div class="block">содержимое</div>"#));
    assert!(!stripped.contains("<body"));
    assert!(!stripped.contains("<html"));
    assert!(!stripped.contains("<head>"));
    assert!(!stripped.contains("<title>"));
}

#[test]
fn image_paths_rewritten_per_mode() {
    let fragment = r#"<img src="../assets/images/node-4.svg"><img src="assets/images/v.svg">"#;
    assert_eq!(
        rewrite_image_paths_for_list(fragment),
        r#"<img src="images/node-4.svg"><img src="images/v.svg">"#
    );

    let for_print = rewrite_image_paths_for_print(r#"<img src="images/vector-13.svg">"#);
    assert_eq!(for_print, r#"<img src="assets/images/vector-13.svg">"#);
}

#[test]
fn inline_css_lands_in_head() {
    let html = "<html><head><title>t</title></head><body></body></html>";
    let out = inline_css(html, ".block{color:red}");
    assert!(out.contains("<style>.block{color:red}</style></head>"));
}

#[test]
fn print_document_pairs_tags_and_numbers_pages() {
    let tags: Vec<String> = (1..=5)
        .map(|i| format!(r#"<div class="price-tag">tag {i}</div>"#))
        .collect();
    let pages: Vec<&[String]> = vec![&tags[0..4], &tags[4..5]];

    let out = print_document(ProductType::Simple, &pages, "");

    assert_eq!(out.matches(r#"<div class="page">"#).count(), 2);
    // First page: 4 tags as two pairs; second: one lone tag in one row.
    assert_eq!(out.matches(r#"<div class="price-tag-row">"#).count(), 3);
    assert!(out.contains("Страница 1"));
    assert!(out.contains("Страница 2"));
    assert!(out.contains("tag 5"));
    assert!(out.contains("Лист для печати ценников - Simple"));
    assert!(out.contains("fonts.googleapis.com"));
}

#[test]
fn print_fallback_has_no_row_wrappers() {
    let tags: Vec<String> = vec![r#"<div class="price-tag">x</div>"#.to_string()];
    let pages: Vec<&[String]> = vec![&tags[..]];

    let out = print_document_fallback(ProductType::Accessories, &pages, "");
    assert_eq!(out.matches(r#"<div class="price-tag-row">"#).count(), 0);
    assert!(out.contains("Страница 1"));
    assert!(out.contains("Лист для печати ценников - Accessories"));
}

#[test]
fn list_document_groups_blocks_in_pairs() {
    let blocks: Vec<String> = (1..=3)
        .map(|i| format!(r#"<div class="block">b{i}</div>"#))
        .collect();
    let out = list_document(ProductType::Accessories, ".block{}", &blocks);

    assert_eq!(out.matches(r#"<div class="flex-block">"#).count(), 2);
    assert!(out.contains(r#"<div class="node-1">"#));
    assert!(out.contains("Список Accessories ценников"));
}

#[test]
fn promotions_list_uses_sale_body_class() {
    let blocks = vec![r#"<div class="block">x</div>"#.to_string()];
    let out = list_document(ProductType::Promotions, "", &blocks);
    assert!(out.contains(r#"<div class="node-1 sale">"#));
}

#[test]
fn simple_accessories_list_is_single_column() {
    let blocks: Vec<String> = (1..=2)
        .map(|i| format!(r#"<div class="block">b{i}</div>"#))
        .collect();
    let out = list_document(ProductType::SimpleAccessories, "", &blocks);
    assert_eq!(out.matches(r#"<div class="flex-block">"#).count(), 2);
}

#[test]
fn aggregate_list_embeds_all_cards() {
    let cards = vec![
        r#"<div class="lst-item">один</div>"#.to_string(),
        r#"<div class="lst-item">два</div>"#.to_string(),
    ];
    let out = aggregate_list_document(&cards);

    assert!(out.contains("Список всех ценников"));
    assert!(out.contains("lst-grid"));
    assert!(out.contains("один"));
    assert!(out.contains("два"));
}

#[test]
fn generic_document_prefers_product_name_and_no_installment_price() {
    let r = row(&[
        ("Название товара", "Телефон X"),
        ("Название", "Другое имя"),
        ("Цена без рассрочки", "5000000"),
        ("Цена", "999"),
    ]);
    let out = generic_tag_document(&r);

    assert!(out.contains("Телефон X"));
    assert!(!out.contains("Другое имя"));
    assert!(out.contains("5 000 000 сум"));
    assert!(!out.contains("999 сум"));
}

#[test]
fn generic_document_handles_missing_fields() {
    let out = generic_tag_document(&RowRecord::new());
    assert!(out.contains(r#"<div class="price-tag">"#));
    assert!(!out.contains(r#"class="name""#));
    assert!(!out.contains(r#"class="price">"#));
}
