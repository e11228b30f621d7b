//! Spreadsheet column header names, verbatim.
//!
//! These strings are contracts with externally authored spreadsheets: the
//! trailing space in [`CAMERA`] and the capitalization split between
//! [`OLD_PRICE`] and [`OLD_PRICE_CAP`] both exist in real source files and
//! must never be "fixed". Each output mode resolves its own candidate list
//! from these; there is no canonical per-type schema.

/// Product name as the accessory sheets spell it.
pub const NAME: &str = "Название";
/// Product name as the phone sheets spell it.
pub const PRODUCT_NAME: &str = "Название товара";

/// Camera spec. The trailing space is part of the real header.
pub const CAMERA: &str = "Камера ";
pub const DISPLAY: &str = "Дисплей";
pub const BATTERY: &str = "Батарея";
pub const MEMORY: &str = "Память";

pub const PRICE: &str = "Цена";
/// Old price, lowercase "цена" (accessory sheets).
pub const OLD_PRICE: &str = "Старая цена";
/// Old price, capitalized "Цена" (phone/promotion sheets).
pub const OLD_PRICE_CAP: &str = "Старая Цена";
pub const PRICE_NO_INSTALLMENT: &str = "Цена без рассрочки";
pub const PRICE_WITH_INSTALLMENT: &str = "Цена с рассрочкой";
/// Free-text installment description (not a price).
pub const INSTALLMENT: &str = "Рассрочка";

pub const PRODUCT_ID: &str = "ID товара (QR Code)";
pub const SKU: &str = "Артикул";
