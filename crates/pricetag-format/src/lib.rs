//! Display formatting for price tags.
//!
//! Two small, dependency-free pieces:
//! - [`format_price`]: canonical price strings with single-space thousands
//!   grouping and the fixed " сум" currency suffix.
//! - [`sanitize_file_name`]: safe output file base names for per-product
//!   HTML files.

/// Currency suffix appended to every formatted price. Templates carry the
/// same literal in their sample values, so the exact spelling (leading
/// space included) is load-bearing.
pub const CURRENCY_SUFFIX: &str = " сум";

/// Normalize a raw price value into its display form.
///
/// The input may be a plain number (`"3600000"`), a pre-formatted string
/// that already carries the currency suffix (`"2 400 000 сум"`), or
/// arbitrary text. Any existing suffix is stripped, the remainder is
/// trimmed, numeric values are re-grouped with single spaces and no decimal
/// point, and the suffix is appended unconditionally.
///
/// Non-numeric input passes through trimmed but still receives the suffix,
/// so callers must not route free text (or known-empty fields) through this
/// function. `format_price("")` is `" сум"`.
pub fn format_price(raw: &str) -> String {
    let stripped = raw.replace(CURRENCY_SUFFIX, "");
    let trimmed = stripped.trim();

    let body = match parse_plain_number(trimmed) {
        Some(value) => render_grouped(value),
        None => trimmed.to_string(),
    };

    format!("{body}{CURRENCY_SUFFIX}")
}

/// Accepts what a spreadsheet cell can plausibly hold as a price: optional
/// sign, digits, optional fractional part (rounded away below). NaN/inf
/// spellings are rejected even though `f64::from_str` accepts them.
fn parse_plain_number(s: &str) -> Option<f64> {
    if s.is_empty() || !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn render_grouped(value: f64) -> String {
    // Round half away from zero, matching spreadsheet display conventions.
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits, ' ');
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let len = int_part.len();
    if len <= 3 {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(len + len / 3);
    let mut first_group = len % 3;
    if first_group == 0 {
        first_group = 3;
    }

    out.push_str(&int_part[..first_group]);
    let mut idx = first_group;
    while idx < len {
        out.push(sep);
        out.push_str(&int_part[idx..idx + 3]);
        idx += 3;
    }

    out
}

/// Maximum length (in characters) of a sanitized file base name.
const MAX_FILE_NAME_CHARS: usize = 50;

/// Convert an arbitrary product name or id into a safe file base name.
///
/// Latin and Cyrillic (а–я/А–Я) alphanumerics, hyphens and underscores are
/// kept; whitespace runs collapse to a single underscore; everything else
/// is dropped. The result is capped at 50 characters.
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len().min(MAX_FILE_NAME_CHARS));
    let mut in_whitespace = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if !is_file_name_char(ch) {
            continue;
        }
        if in_whitespace {
            out.push('_');
            in_whitespace = false;
        }
        out.push(ch);
        // Stop once we cannot possibly emit more characters.
        if out.chars().count() >= MAX_FILE_NAME_CHARS {
            break;
        }
    }
    if in_whitespace && !out.is_empty() {
        // Trailing whitespace still maps to an underscore, as long as the cap allows it.
        if out.chars().count() < MAX_FILE_NAME_CHARS {
            out.push('_');
        }
    }

    out.chars().take(MAX_FILE_NAME_CHARS).collect()
}

fn is_file_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ('а'..='я').contains(&ch) || ('А'..='Я').contains(&ch) || ch == '-' || ch == '_'
}
