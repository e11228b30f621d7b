use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One spreadsheet cell, as extracted by the input layer.
///
/// Numbers are preserved as numbers so the price formatter can round them;
/// everything else arrives as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Blank,
}

impl CellValue {
    /// True for values the generator treats as "no usable data":
    /// blanks and empty text. Numeric zero is a real value.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Blank => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Render the cell for substitution into a template.
    ///
    /// Integral floats print without a decimal point (`1500000.0` ->
    /// `"1500000"`), which is what `f64`'s `Display` already does.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Blank => String::new(),
        }
    }
}

/// One product's field data, keyed by spreadsheet column header.
///
/// Header keys are stored verbatim: two source files for the same logical
/// field may spell their headers differently ("Цена" vs "Цена без
/// рассрочки"), and some headers carry a literal trailing space ("Камера ")
/// that is part of the key. Lookups never normalize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    cells: BTreeMap<String, CellValue>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        self.cells.insert(header.into(), value);
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header)
    }

    /// Whether the column exists with a non-blank value. Empty text counts
    /// as present (the distinction matters for placeholder substitution,
    /// where a present-but-empty price still runs through the formatter).
    pub fn present(&self, header: &str) -> bool {
        matches!(self.cells.get(header), Some(v) if !matches!(v, CellValue::Blank))
    }

    /// The value of `header` if it is present and non-empty.
    pub fn non_empty(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header).filter(|v| !v.is_empty())
    }

    /// Ordered-candidate field resolution: the first header in `candidates`
    /// with a present, non-empty value wins. Exact key match only.
    pub fn first_of(&self, candidates: &[&str]) -> Option<&CellValue> {
        candidates.iter().find_map(|h| self.non_empty(h))
    }

    /// True when every cell of the row is empty; such rows never reach the
    /// rendering core.
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_empty)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate headers and values in stable (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(pairs: &[(&str, CellValue)]) -> RowRecord {
        let mut r = RowRecord::new();
        for (k, v) in pairs {
            r.insert(*k, v.clone());
        }
        r
    }

    #[test]
    fn first_of_respects_candidate_order() {
        let r = row(&[
            ("Название", CellValue::Text("чехол".into())),
            ("Название товара", CellValue::Text("iPhone".into())),
        ]);
        let v = r.first_of(&["Название товара", "Название"]).unwrap();
        assert_eq!(v.display(), "iPhone");
    }

    #[test]
    fn first_of_skips_empty_values() {
        let r = row(&[
            ("Название товара", CellValue::Text(String::new())),
            ("Название", CellValue::Text("чехол".into())),
        ]);
        let v = r.first_of(&["Название товара", "Название"]).unwrap();
        assert_eq!(v.display(), "чехол");
    }

    #[test]
    fn trailing_space_headers_are_distinct_keys() {
        let r = row(&[("Камера ", CellValue::Text("48 МП".into()))]);
        assert!(r.non_empty("Камера ").is_some());
        assert!(r.non_empty("Камера").is_none());
    }

    #[test]
    fn present_but_empty_text_is_not_non_empty() {
        let r = row(&[("Цена", CellValue::Text(String::new()))]);
        assert!(r.present("Цена"));
        assert!(r.non_empty("Цена").is_none());
    }

    #[test]
    fn numeric_zero_is_a_real_value() {
        let r = row(&[("Цена", CellValue::Number(0.0))]);
        assert!(r.non_empty("Цена").is_some());
    }

    #[test]
    fn blank_rows_are_detected() {
        let r = row(&[
            ("Цена", CellValue::Blank),
            ("Название", CellValue::Text(String::new())),
        ]);
        assert!(r.is_blank());
    }
}
