//! Value converters shared by every length-like utility family.
//!
//! A token is converted in a fixed order: keyword, fraction, bare number.
//! Anything else yields `None` so callers report the class as unresolved.

/// One step of the spacing scale, in rem.
pub const SPACING_STEP_REM: f64 = 0.25;

/// Which viewport dimension `screen` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Formats a number the way CSS authors write it: no forced decimal point
/// for integers, shortest round-trip digits otherwise.
///
/// `1.0` → `"1"`, `0.125` → `"0.125"`, `1.0 / 3.0 * 100.0` → `"33.33333333333333"`
pub fn format_number(n: f64) -> String {
    // -0.0 prints as "-0"
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}

/// Returns true for `4`, `0.5`, `12.25`; false for `-1`, `.5`, `1.`, `1e3`.
pub fn is_unsigned_decimal(token: &str) -> bool {
    let mut parts = token.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();

    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match frac_part {
        None => digits(int_part),
        Some(frac) => digits(int_part) && digits(frac),
    }
}

/// Literal keywords: `auto`, `full`, `screen`, `min`, `max`, `fit`, `px`.
///
/// `screen` needs an axis; without one it is not recognized.
pub fn keyword_value(token: &str, axis: Option<Axis>) -> Option<&'static str> {
    match token {
        "auto" => Some("auto"),
        "full" => Some("100%"),
        "screen" => match axis? {
            Axis::Horizontal => Some("100vw"),
            Axis::Vertical => Some("100vh"),
        },
        "min" => Some("min-content"),
        "max" => Some("max-content"),
        "fit" => Some("fit-content"),
        "px" => Some("1px"),
        _ => None,
    }
}

/// `N/D` → `(N / D) * 100` as a percentage. Zero denominators and results
/// too large for an `f64` are rejected.
pub fn fraction_to_percent(token: &str) -> Option<String> {
    let (num, den) = token.split_once('/')?;
    if !is_unsigned_integer(num) || !is_unsigned_integer(den) {
        return None;
    }
    let num: f64 = num.parse().ok()?;
    let den: f64 = den.parse().ok()?;
    if den == 0.0 || !den.is_finite() {
        return None;
    }
    let percent = num / den * 100.0;
    if !percent.is_finite() {
        return None;
    }
    Some(format!("{}%", format_number(percent)))
}

/// Bare number → `n * 0.25rem`. Zero renders as `0`; overflowing tokens
/// yield `None`.
pub fn spacing_to_rem(token: &str) -> Option<String> {
    if !is_unsigned_decimal(token) {
        return None;
    }
    let n: f64 = token.parse().ok()?;
    let rem = n * SPACING_STEP_REM;
    if !rem.is_finite() {
        return None;
    }
    if rem == 0.0 {
        return Some("0".to_string());
    }
    Some(format!("{}rem", format_number(rem)))
}

/// Converts a length token: keyword, then fraction, then spacing scale.
///
/// ```
/// use twgloss_core::units::{convert_length, Axis};
///
/// assert_eq!(convert_length("1/2", None).as_deref(), Some("50%"));
/// assert_eq!(convert_length("4", None).as_deref(), Some("1rem"));
/// assert_eq!(convert_length("screen", Some(Axis::Vertical)).as_deref(), Some("100vh"));
/// assert_eq!(convert_length("huge", None), None);
/// ```
pub fn convert_length(token: &str, axis: Option<Axis>) -> Option<String> {
    if let Some(keyword) = keyword_value(token, axis) {
        return Some(keyword.to_string());
    }
    if token.contains('/') {
        return fraction_to_percent(token);
    }
    spacing_to_rem(token)
}

/// Re-applies a leading minus sign to an already converted value.
///
/// Only numeric lengths can be negated; keywords such as `auto` or
/// `min-content` return `None`. Zero stays unsigned.
pub fn apply_sign(value: String, negative: bool) -> Option<String> {
    if !negative || value == "0" {
        return Some(value);
    }
    let starts_numeric = value.bytes().next().is_some_and(|b| b.is_ascii_digit());
    if !starts_numeric {
        return None;
    }
    Some(format!("-{}", value))
}

/// Parses the numeric prefix of a CSS length (`"1.875rem"` → `1.875`).
pub fn leading_number(value: &str) -> Option<f64> {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

fn is_unsigned_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keywords() {
        assert_eq!(convert_length("auto", None).as_deref(), Some("auto"));
        assert_eq!(convert_length("full", None).as_deref(), Some("100%"));
        assert_eq!(convert_length("min", None).as_deref(), Some("min-content"));
        assert_eq!(convert_length("max", None).as_deref(), Some("max-content"));
        assert_eq!(convert_length("fit", None).as_deref(), Some("fit-content"));
        assert_eq!(convert_length("px", None).as_deref(), Some("1px"));
    }

    #[test]
    fn test_screen_depends_on_axis() {
        assert_eq!(
            convert_length("screen", Some(Axis::Horizontal)).as_deref(),
            Some("100vw")
        );
        assert_eq!(
            convert_length("screen", Some(Axis::Vertical)).as_deref(),
            Some("100vh")
        );
        assert_eq!(convert_length("screen", None), None);
    }

    #[test]
    fn test_fractions() {
        assert_eq!(fraction_to_percent("1/2").as_deref(), Some("50%"));
        assert_eq!(fraction_to_percent("1/3").as_deref(), Some("33.33333333333333%"));
        assert_eq!(fraction_to_percent("2/3").as_deref(), Some("66.66666666666666%"));
        assert_eq!(fraction_to_percent("1/4").as_deref(), Some("25%"));
        assert_eq!(fraction_to_percent("1/0"), None);
        assert_eq!(fraction_to_percent("a/2"), None);
        assert_eq!(fraction_to_percent("1/"), None);
    }

    #[test]
    fn test_spacing_scale() {
        assert_eq!(spacing_to_rem("4").as_deref(), Some("1rem"));
        assert_eq!(spacing_to_rem("0.5").as_deref(), Some("0.125rem"));
        assert_eq!(spacing_to_rem("1.5").as_deref(), Some("0.375rem"));
        assert_eq!(spacing_to_rem("96").as_deref(), Some("24rem"));
        assert_eq!(spacing_to_rem("0").as_deref(), Some("0"));
        assert_eq!(spacing_to_rem("-1"), None);
        assert_eq!(spacing_to_rem("1e3"), None);
        assert_eq!(spacing_to_rem(".5"), None);
    }

    #[test]
    fn test_overflowing_tokens_are_rejected() {
        let huge = "9".repeat(400);
        assert_eq!(spacing_to_rem(&huge), None);
        assert_eq!(fraction_to_percent(&format!("{}/1", huge)), None);
        assert_eq!(convert_length(&huge, None), None);
        assert_eq!(convert_length(&format!("{}/1", huge), None), None);
        assert_eq!(fraction_to_percent(&format!("1/{}", huge)), None);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert_eq!(convert_length("huge", None), None);
        assert_eq!(convert_length("", None), None);
    }

    #[test]
    fn test_apply_sign() {
        assert_eq!(apply_sign("1rem".into(), true).as_deref(), Some("-1rem"));
        assert_eq!(apply_sign("50%".into(), true).as_deref(), Some("-50%"));
        assert_eq!(apply_sign("0".into(), true).as_deref(), Some("0"));
        assert_eq!(apply_sign("auto".into(), true), None);
        assert_eq!(apply_sign("auto".into(), false).as_deref(), Some("auto"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.625), "0.625");
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("1.875rem"), Some(1.875));
        assert_eq!(leading_number("1"), Some(1.0));
        assert_eq!(leading_number("rem"), None);
    }
}
