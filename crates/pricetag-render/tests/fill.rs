use pretty_assertions::assert_eq;
use pricetag_model::{CellValue, ProductType, RowRecord};
use pricetag_render::fill;

fn row(cells: &[(&str, &str)]) -> RowRecord {
    let mut r = RowRecord::new();
    for (header, value) in cells {
        r.insert(*header, CellValue::Text((*value).to_string()));
    }
    r
}

const ACCESSORIES_PLACEHOLDER: &str = r#"<html><head></head><body>
<div class="block accessories-block">
    <p class="name">{{Название}}</p>
    <div class="price-box old-price"><span>{{Старая цена}}</span></div>
    <p class="current">{{Цена}}</p>
    <div class="price-box installment"><span>{{Рассрочка}}</span></div>
</div>
</body></html>"#;

#[test]
fn accessories_placeholder_substitution() {
    let r = row(&[
        ("Название", "Чехол <Pro>"),
        ("Цена", "150000"),
        ("Старая цена", "200000"),
        ("Рассрочка", "12 мес"),
    ]);
    let out = fill(ProductType::Accessories, ACCESSORIES_PLACEHOLDER, &r);

    assert!(out.contains("Чехол &lt;Pro&gt;"));
    assert!(out.contains("150 000 сум"));
    assert!(out.contains("200 000 сум"));
    assert!(out.contains("12 мес"));
    assert!(!out.contains("{{"));
}

#[test]
fn accessories_missing_fields_remove_marked_blocks() {
    let r = row(&[("Название", "Чехол"), ("Цена", "150000")]);
    let out = fill(ProductType::Accessories, ACCESSORIES_PLACEHOLDER, &r);

    assert!(!out.contains("old-price"));
    assert!(!out.contains("installment"));
    assert!(out.contains("150 000 сум"));
}

#[test]
fn accessories_positional_fallback_replaces_sample_values() {
    // No {{..}} tokens anywhere: the positional path must kick in.
    let template = r#"<div class="block accessories-block">
    <p class="text-3">
        <span class="text-white">Наушники Образец</span>
    </p>
    <p class="text-5">
        <span class="text-white">999 999 сум</span>
    </p>
    <div class="frame-17-6"><p class="text-7"><span class="text-white">888 888 сум</span></p></div>
    <div class="frame-15-8"><p class="text-9"><span class="text-white">24 мес</span></p></div>
</div>"#;

    let r = row(&[
        ("Название", "AirPods"),
        ("Цена", "1500000"),
        ("Старая цена", "1800000"),
        ("Рассрочка", "6 мес"),
    ]);
    let out = fill(ProductType::Accessories, template, &r);

    assert!(out.contains("AirPods"));
    assert!(!out.contains("Наушники Образец"));
    assert!(out.contains("1 500 000 сум"));
    assert!(out.contains("1 800 000 сум"));
    assert!(out.contains("6 мес"));
}

#[test]
fn accessories_positional_fallback_strips_absent_blocks() {
    let template = r#"<div class="block">
    <p class="text-3"><span class="text-white">Образец</span></p>
    <div class="frame-17-6"><p class="text-7"><span class="text-white">старая</span></p></div>
    <div class="frame-15-8"><p class="text-9"><span class="text-white">рассрочка</span></p></div>
</div>"#;

    let r = row(&[("Название", "Кабель")]);
    let out = fill(ProductType::Accessories, template, &r);

    assert!(!out.contains("frame-17-6"));
    assert!(!out.contains("frame-15-8"));
    assert!(out.contains("Кабель"));
}

#[test]
fn promotions_placeholder_substitution_and_removal() {
    let template = r#"<html><body>
<p>{{Название товара}}</p>
<p>{{Камера }}</p>
<div class="old-price-wrap old-price"><span>{{Старая Цена}}</span></div>
<p>{{Цена без рассрочки}}</p>
<div class="installment"><span>{{Цена с рассрочкой}}</span></div>
</body></html>"#;

    let r = row(&[
        ("Название товара", "iPhone 15"),
        ("Камера ", "48 МП"),
        ("Цена без рассрочки", "15000000"),
    ]);
    let out = fill(ProductType::Promotions, template, &r);

    assert!(out.contains("iPhone 15"));
    assert!(out.contains("48 МП"));
    assert!(out.contains("15 000 000 сум"));
    assert!(!out.contains("old-price"));
    assert!(!out.contains("installment"));
}

#[test]
fn promotions_positional_fills_specs_and_prices() {
    let template = r#"<div class="block">
<p class="text-7"><span class="text-rgb-30-30-30">Образец</span></p>
<p class="text-16"><span class="text-rgb-30-30-30">12 МП</span></p>
<p class="text-22"><span class="text-rgb-30-30-30">6.1"</span></p>
<p class="text-29"><span class="text-rgb-30-30-30">4000 мАч</span></p>
<p class="text-35"><span class="text-rgb-30-30-30">128 ГБ</span></p>
<div class="frame-17-38"><p class="text-43"><span class="text-white">1 000 000</span></p></div>
<span class="old-price">9 999 999 сум</span>
<p class="text-47"><span class="text-white">8 888 888 сум</span></p>
</div>"#;

    let r = row(&[
        ("Название товара", "Galaxy S24"),
        ("Камера ", "200 МП"),
        ("Дисплей", "6.8\""),
        ("Батарея", "5000 мАч"),
        ("Память", "256 ГБ"),
        ("Старая Цена", "18000000"),
        ("Цена без рассрочки", "16000000"),
        ("Цена с рассрочкой", "1400000"),
    ]);
    let out = fill(ProductType::Promotions, template, &r);

    assert!(out.contains("Galaxy S24"));
    assert!(out.contains("200 МП"));
    assert!(out.contains("6.8&quot;"));
    assert!(out.contains("5000 мАч"));
    assert!(out.contains("256 ГБ"));
    assert!(out.contains("18 000 000 сум"));
    assert!(out.contains("16 000 000 сум"));
    assert!(out.contains("1 400 000 сум"));
}

#[test]
fn promotions_positional_missing_installment_drops_panel() {
    let template = r#"<div class="block">
<p class="text-7"><span class="text-rgb-30-30-30">Образец</span></p>
<div class="frame-17-38"><p class="text-43"><span class="text-white">1 000 000</span></p></div>
<p class="text-47"><span class="text-white">8 888 888 сум</span></p>
</div>"#;

    let r = row(&[
        ("Название товара", "Redmi"),
        ("Цена без рассрочки", "2000000"),
    ]);
    let out = fill(ProductType::Promotions, template, &r);

    assert!(!out.contains("frame-17-38"));
    assert!(out.contains("2 000 000 сум"));
}

const SIMPLE_TEMPLATE: &str = r#"<div class="block">
<p class="text-7"><span class="text-rgb-30-30-30">Телефон Образец</span></p>
<p class="text-16"><span class="text-rgb-30-30-30">12 МП</span></p>
<div class="prices"><span class="old-price">12 000 000 сум</span>
<p class="text-47"><span class="text-white">12 000 000 сум</span></p>
<p class="text-43"><span class="text-white">1 130 000</span></p></div>
</div>"#;

#[test]
fn simple_old_price_survives_global_price_replace() {
    // Sample old price and main price are textually identical; the fill
    // must end with them carrying their own distinct values.
    let r = row(&[
        ("Название товара", "iPhone 14"),
        ("Старая Цена", "14000000"),
        ("Цена без рассрочки", "12500000"),
        ("Цена с рассрочкой", "1100000"),
    ]);
    let out = fill(ProductType::Simple, SIMPLE_TEMPLATE, &r);

    assert!(out.contains(r#"<span class="old-price">14 000 000 сум</span>"#));
    assert!(out.contains("12 500 000 сум"));
    assert!(out.contains("1 100 000 сум"));
    assert!(!out.contains("TEMP_OLD_PRICE"));
    assert!(!out.contains("12 000 000 сум"));
}

#[test]
fn simple_missing_old_price_removes_span() {
    let r = row(&[
        ("Название товара", "iPhone SE"),
        ("Цена без рассрочки", "6000000"),
    ]);
    let out = fill(ProductType::Simple, SIMPLE_TEMPLATE, &r);

    assert!(!out.contains("old-price"));
    assert!(out.contains("6 000 000 сум"));
}

#[test]
fn simple_fill_does_not_mutate_shared_template() {
    let template = SIMPLE_TEMPLATE.to_string();
    let first = row(&[("Название товара", "Первый")]);
    let second = row(&[("Название товара", "Второй")]);

    let out_a = fill(ProductType::Simple, &template, &first);
    let out_b = fill(ProductType::Simple, &template, &second);

    assert!(out_a.contains("Первый"));
    assert!(out_b.contains("Второй"));
    assert!(!out_b.contains("Первый"));
    assert_eq!(template, SIMPLE_TEMPLATE);
}

#[test]
fn simple_accessories_defaults_for_missing_fields() {
    let template = r#"<div class="block"><p>{{Название}}</p><p>{{Цена}}</p></div>"#;
    let out = fill(ProductType::SimpleAccessories, template, &RowRecord::new());

    assert!(out.contains("Название товара"));
    assert!(out.contains("—"));
}

#[test]
fn simple_accessories_formats_price() {
    let template = r#"<p>{{Название}}</p><p>{{Цена}}</p>"#;
    let r = row(&[("Название", "Брелок"), ("Цена", "75000")]);
    let out = fill(ProductType::SimpleAccessories, template, &r);

    assert!(out.contains("Брелок"));
    assert!(out.contains("75 000 сум"));
}
