use std::str::FromStr;

use palette::Srgb;
use phf::phf_ordered_map;
use twgloss_core::TranslationEntry;

use super::single;
use crate::colors::{color_value, COLORS, SHADES};
use crate::rule::{Enumeration, Generator, RuleError, RuleMatch};

/// A utility prefix that sets a color, e.g. `bg` → `background-color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRole {
    pub property: &'static str,
    pub label: &'static str,
}

macro_rules! role {
    ($property:expr, $label:expr) => {
        ColorRole {
            property: $property,
            label: $label,
        }
    };
}

pub static COLOR_ROLES: phf::OrderedMap<&'static str, ColorRole> = phf_ordered_map! {
    "bg" => role!("background-color", "background color"),
    "text" => role!("color", "text color"),
    "border" => role!("border-color", "border color"),
    "divide" => role!("border-color", "divider color"),
    "outline" => role!("outline-color", "outline color"),
    "ring" => role!("--tw-ring-color", "ring color"),
    "ring-offset" => role!("--tw-ring-offset-color", "ring offset color"),
    "accent" => role!("accent-color", "accent color"),
    "caret" => role!("caret-color", "caret color"),
    "fill" => role!("fill", "SVG fill color"),
    "stroke" => role!("stroke", "SVG stroke color"),
    "placeholder" => role!("color", "placeholder text color"),
    "from" => role!("--tw-gradient-from", "gradient start color"),
    "via" => role!("--tw-gradient-via", "gradient middle color"),
    "to" => role!("--tw-gradient-to", "gradient end color"),
};

const ROLE_KEYS: &str =
    "bg|text|border|divide|outline|ring|ring-offset|accent|caret|fill|stroke|placeholder|from|via|to";

/// `rgb(r, g, b)` for 3- or 6-digit hex colors.
pub(crate) fn rgb_triplet(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !matches!(digits.len(), 3 | 6) {
        return None;
    }
    let color = Srgb::<u8>::from_str(digits).ok()?;
    Some(format!("rgb({}, {}, {})", color.red, color.green, color.blue))
}

fn with_rgb(hex: &str) -> String {
    match rgb_triplet(hex) {
        Some(rgb) => format!("{}, {}", hex, rgb),
        None => hex.to_string(),
    }
}

/// `{role}-{color}-{shade}` from the default palette.
pub fn palette_color() -> Result<Generator<ColorRole>, RuleError> {
    let pattern = format!(r"^({})-(\w+)-(\d{{2,3}})$", ROLE_KEYS);
    let keys = COLOR_ROLES.keys().flat_map(|role| {
        COLORS.keys().flat_map(move |color| {
            SHADES
                .iter()
                .map(move |shade| format!("{}-{}-{}", role, color, shade))
        })
    });
    Ok(
        Generator::data_backed("color", &pattern, &COLOR_ROLES, resolve_palette_color)?
            .with_enumeration(Enumeration::new("", keys)),
    )
}

fn resolve_palette_color(m: &RuleMatch<'_>, role: &ColorRole) -> Option<TranslationEntry> {
    let color = m.group(2)?;
    let shade = m.group(3)?;
    let hex = color_value(color, shade)?;
    single(
        role.property,
        hex,
        format!("Sets the {} to {}-{} ({}).", role.label, color, shade, with_rgb(hex)),
    )
}

/// `{role}-[#hex]` with 3, 4, 6 or 8 hex digits.
pub fn arbitrary_color() -> Result<Generator<ColorRole>, RuleError> {
    let pattern = format!(r"^({})-\[#([0-9a-fA-F]+)\]$", ROLE_KEYS);
    Generator::data_backed("arbitrary-color", &pattern, &COLOR_ROLES, |m, role| {
        let digits = m.group(2)?;
        if !matches!(digits.len(), 3 | 4 | 6 | 8) {
            return None;
        }
        let hex = format!("#{}", digits);
        single(
            role.property,
            &hex,
            format!("Sets the {} to the custom color {}.", role.label, with_rgb(&hex)),
        )
    })
}

/// `stroke-{0|1|2}`. Registered ahead of [`stroke`], whose token branch
/// would otherwise claim these.
pub fn stroke_width() -> Result<Generator, RuleError> {
    Ok(Generator::new("stroke-width", "^stroke-(0|1|2)$", |m| {
        let width = m.group(1)?;
        single("stroke-width", width, format!("Sets the SVG stroke width to {}.", width))
    })?
    .with_enumeration(Enumeration::new("stroke-", ["0", "1", "2"])))
}

/// Shared by `fill-*` and `stroke-*`: keyword, literal hex, or a theme token.
fn paint_value(token: &str, property: &str) -> String {
    match token {
        "none" | "inherit" => token.to_string(),
        "current" => "currentColor".to_string(),
        hex if hex.starts_with('#') => hex.to_string(),
        name => format!("var(--tw-{}-{})", property, name),
    }
}

fn resolve_paint(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
    let property = m.group(1)?;
    let value = paint_value(m.group(2)?, property);
    let what = if property == "fill" { "fill" } else { "stroke color" };
    single(property, &value, format!("Sets the SVG {} to {}.", what, value))
}

pub fn fill() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "fill",
        r"^(fill)-(none|current|inherit|#[0-9a-fA-F]{3,8}|[a-zA-Z0-9-]+)$",
        resolve_paint,
    )?
    .with_enumeration(Enumeration::new("fill-", ["none", "current", "inherit"])))
}

pub fn stroke() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "stroke",
        r"^(stroke)-(none|current|inherit|#[0-9a-fA-F]{3,8}|[a-zA-Z0-9-]+)$",
        resolve_paint,
    )?
    .with_enumeration(Enumeration::new("stroke-", ["none", "current", "inherit"])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_color() {
        let rule = palette_color().unwrap();
        let entry = rule.resolve("bg-blue-500").unwrap();
        assert_eq!(entry.css, "background-color: #3b82f6;");
        assert_eq!(
            entry.description,
            "Sets the background color to blue-500 (#3b82f6, rgb(59, 130, 246))."
        );
        assert_eq!(
            rule.resolve("ring-offset-red-50").unwrap().css,
            "--tw-ring-offset-color: #fef2f2;"
        );
    }

    #[test]
    fn test_unknown_color_is_claimed_but_unresolved() {
        let rule = palette_color().unwrap();
        assert!(rule.matches("bg-notacolor-500"));
        assert_eq!(rule.resolve("bg-notacolor-500"), None);
        assert_eq!(rule.resolve("bg-blue-550"), None);
    }

    #[test]
    fn test_arbitrary_color_lengths() {
        let rule = arbitrary_color().unwrap();
        assert_eq!(rule.resolve("text-[#ff0000]").unwrap().css, "color: #ff0000;");
        assert_eq!(
            rule.resolve("bg-[#fff]").unwrap().description,
            "Sets the background color to the custom color #fff, rgb(255, 255, 255)."
        );
        assert_eq!(rule.resolve("bg-[#ff000080]").unwrap().css, "background-color: #ff000080;");
        assert_eq!(rule.resolve("bg-[#ff00]").unwrap().css, "background-color: #ff00;");
        assert_eq!(rule.resolve("bg-[#ff000]"), None);
        assert_eq!(rule.resolve("bg-[#ff]"), None);
    }

    #[test]
    fn test_paint_values() {
        assert_eq!(fill().unwrap().resolve("fill-none").unwrap().css, "fill: none;");
        assert_eq!(
            fill().unwrap().resolve("fill-current").unwrap().css,
            "fill: currentColor;"
        );
        assert_eq!(
            stroke().unwrap().resolve("stroke-brand").unwrap().css,
            "stroke: var(--tw-stroke-brand);"
        );
        assert_eq!(stroke().unwrap().resolve("stroke-#0af").unwrap().css, "stroke: #0af;");
    }

    #[test]
    fn test_rgb_triplet() {
        assert_eq!(rgb_triplet("#3b82f6").as_deref(), Some("rgb(59, 130, 246)"));
        assert_eq!(rgb_triplet("#fff").as_deref(), Some("rgb(255, 255, 255)"));
        assert_eq!(rgb_triplet("#ff000080"), None);
    }
}
