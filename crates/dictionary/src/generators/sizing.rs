//! Length families: size, spacing, inset and `[arbitrary]` lengths.

use twgloss_core::units::{apply_sign, convert_length, Axis};
use twgloss_core::TranslationEntry;

use super::multi;
use crate::rule::{Enumeration, Generator, RuleError, RuleMatch};
use crate::theme_values::{FRACTIONS, SPACING_STEPS};

/// Properties a length prefix writes, with the phrase used in descriptions.
struct Target {
    properties: &'static [&'static str],
    label: &'static str,
    axis: Option<Axis>,
    /// Whether a leading `-` is meaningful.
    signed: bool,
}

const fn target(
    properties: &'static [&'static str],
    label: &'static str,
    axis: Option<Axis>,
    signed: bool,
) -> Target {
    Target {
        properties,
        label,
        axis,
        signed,
    }
}

fn length_target(code: &str) -> Option<Target> {
    use Axis::{Horizontal, Vertical};
    let t = match code {
        "w" => target(&["width"], "width", Some(Horizontal), false),
        "h" => target(&["height"], "height", Some(Vertical), false),
        "min-w" => target(&["min-width"], "minimum width", Some(Horizontal), false),
        "max-w" => target(&["max-width"], "maximum width", Some(Horizontal), false),
        "min-h" => target(&["min-height"], "minimum height", Some(Vertical), false),
        "max-h" => target(&["max-height"], "maximum height", Some(Vertical), false),

        "p" => target(&["padding"], "padding on all sides", None, false),
        "px" => target(&["padding-left", "padding-right"], "horizontal padding", None, false),
        "py" => target(&["padding-top", "padding-bottom"], "vertical padding", None, false),
        "pt" => target(&["padding-top"], "top padding", None, false),
        "pr" => target(&["padding-right"], "right padding", None, false),
        "pb" => target(&["padding-bottom"], "bottom padding", None, false),
        "pl" => target(&["padding-left"], "left padding", None, false),
        "m" => target(&["margin"], "margin on all sides", None, true),
        "mx" => target(&["margin-left", "margin-right"], "horizontal margin", None, true),
        "my" => target(&["margin-top", "margin-bottom"], "vertical margin", None, true),
        "mt" => target(&["margin-top"], "top margin", None, true),
        "mr" => target(&["margin-right"], "right margin", None, true),
        "mb" => target(&["margin-bottom"], "bottom margin", None, true),
        "ml" => target(&["margin-left"], "left margin", None, true),

        "inset" => target(&["top", "right", "bottom", "left"], "offset from all four edges", None, true),
        "inset-x" => target(&["right", "left"], "left and right offsets", None, true),
        "inset-y" => target(&["top", "bottom"], "top and bottom offsets", None, true),
        "top" => target(&["top"], "top offset", None, true),
        "right" => target(&["right"], "right offset", None, true),
        "bottom" => target(&["bottom"], "bottom offset", None, true),
        "left" => target(&["left"], "left offset", None, true),

        "gap" => target(&["gap"], "gap between rows and columns", None, false),
        "gap-x" => target(&["column-gap"], "gap between columns", None, false),
        "gap-y" => target(&["row-gap"], "gap between rows", None, false),
        _ => return None,
    };
    Some(t)
}

const SIZE_CODES: &[&str] = &["w", "h", "min-w", "max-w", "min-h", "max-h"];
const SPACING_CODES: &[&str] = &[
    "p", "px", "py", "pt", "pr", "pb", "pl", "m", "mx", "my", "mt", "mr", "mb", "ml",
];
const INSET_CODES: &[&str] = &["inset", "inset-x", "inset-y", "top", "right", "bottom", "left"];

/// Every `{code}-{token}` pair, in code order then token order.
pub(crate) fn cross(codes: &[&str], tokens: &[&[&str]]) -> Vec<String> {
    codes
        .iter()
        .flat_map(|code| {
            tokens
                .iter()
                .flat_map(|group| group.iter())
                .map(move |token| format!("{}-{}", code, token))
        })
        .collect()
}

/// Shared resolve for signed length families: groups are
/// `(sign)?`, `code`, `token`.
fn resolve_length(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
    let negative = m.has(1);
    let code = m.group(2)?;
    let token = m.group(3)?;
    let target = length_target(code)?;

    if negative && !target.signed {
        return None;
    }
    let value = apply_sign(convert_length(token, target.axis)?, negative)?;

    Some(multi(
        target.properties,
        &value,
        format!("Sets the {} to {}.", target.label, value),
    ))
}

/// `{w|h|min-w|max-w|min-h|max-h}-{value}`. A leading `-` is claimed but
/// never resolves.
pub fn size() -> Result<Generator, RuleError> {
    let keys = cross(
        SIZE_CODES,
        &[SPACING_STEPS, FRACTIONS, &["full", "screen", "min", "max", "fit", "auto"]],
    );
    Ok(Generator::new(
        "size",
        r"^(-)?(w|h|min-w|max-w|min-h|max-h)-(\d+/\d+|full|screen|min|max|fit|auto|px|\d+(?:\.\d+)?)$",
        resolve_length,
    )?
    .with_enumeration(Enumeration::new("", keys)))
}

/// `[-]{p|px|…|m|mx|…}-{value}`. Only margins take a sign.
pub fn spacing() -> Result<Generator, RuleError> {
    let mut keys = cross(&SPACING_CODES[..7], &[SPACING_STEPS]);
    keys.extend(cross(&SPACING_CODES[7..], &[SPACING_STEPS, &["auto"]]));
    Ok(Generator::new(
        "spacing",
        r"^(-)?(p|px|py|pt|pr|pb|pl|m|mx|my|mt|mr|mb|ml)-(auto|px|\d+/\d+|\d+(?:\.\d+)?)$",
        resolve_length,
    )?
    .with_enumeration(Enumeration::new("", keys)))
}

/// `[-]{inset|inset-x|inset-y|top|right|bottom|left}-{value}`
pub fn inset() -> Result<Generator, RuleError> {
    let keys = cross(INSET_CODES, &[SPACING_STEPS, &["full", "auto"], FRACTIONS]);
    Ok(Generator::new(
        "inset",
        r"^(-)?(inset-x|inset-y|inset|top|right|bottom|left)-(\d+/\d+|full|auto|px|\d+(?:\.\d+)?)$",
        resolve_length,
    )?
    .with_enumeration(Enumeration::new("", keys)))
}

/// `{code}-[value]` for any length family. `_` becomes a space and `\_`
/// a literal underscore.
pub fn arbitrary_length() -> Result<Generator, RuleError> {
    Generator::new(
        "arbitrary-length",
        r"^(w|h|min-w|max-w|min-h|max-h|px|py|pt|pr|pb|pl|p|mx|my|mt|mr|mb|ml|m|inset-x|inset-y|inset|top|right|bottom|left|gap-x|gap-y|gap)-\[([^\]]+)\]$",
        |m| {
            let target = length_target(m.group(1)?)?;
            let value = unescape_arbitrary(m.group(2)?);
            Some(multi(
                target.properties,
                &value,
                format!("Sets the {} to the custom value {}.", target.label, value),
            ))
        },
    )
}

pub(crate) fn unescape_arbitrary(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'_') => {
                out.push('_');
                chars.next();
            }
            '_' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Value of a gap-like token: the spacing scale plus `px`.
pub(crate) fn resolve_gap(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
    let target = length_target(m.group(1)?)?;
    let value = convert_length(m.group(2)?, None)?;
    Some(multi(
        target.properties,
        &value,
        format!("Sets the {} to {}.", target.label, value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_size_fraction_and_keywords() {
        let rule = size().unwrap();
        assert_eq!(rule.resolve("w-1/3").unwrap().css, "width: 33.33333333333333%;");
        assert_eq!(rule.resolve("h-screen").unwrap().css, "height: 100vh;");
        assert_eq!(rule.resolve("min-w-screen").unwrap().css, "min-width: 100vw;");
        assert_eq!(rule.resolve("max-h-fit").unwrap().css, "max-height: fit-content;");
        assert_eq!(rule.resolve("w-0").unwrap().css, "width: 0;");
    }

    #[test]
    fn test_size_never_signed() {
        let rule = size().unwrap();
        assert!(rule.matches("-w-4"));
        assert_eq!(rule.resolve("-w-4"), None);
    }

    #[test]
    fn test_spacing_sides() {
        let rule = spacing().unwrap();
        assert_eq!(
            rule.resolve("px-4").unwrap().css,
            "padding-left: 1rem;\npadding-right: 1rem;"
        );
        assert_eq!(rule.resolve("p-px").unwrap().css, "padding: 1px;");
        assert_eq!(rule.resolve("mx-auto").unwrap().css, "margin-left: auto;\nmargin-right: auto;");
        assert_eq!(
            rule.resolve("mb-2.5").unwrap().description,
            "Sets the bottom margin to 0.625rem."
        );
    }

    #[test]
    fn test_spacing_negative_margin_only() {
        let rule = spacing().unwrap();
        assert_eq!(rule.resolve("-mt-4").unwrap().css, "margin-top: -1rem;");
        assert_eq!(rule.resolve("-m-0").unwrap().css, "margin: 0;");
        // Negative padding matches but has no meaning
        assert!(rule.matches("-p-4"));
        assert_eq!(rule.resolve("-p-4"), None);
        // A sign on a keyword cannot be applied
        assert_eq!(rule.resolve("-m-auto"), None);
    }

    #[test]
    fn test_inset_axes() {
        let rule = inset().unwrap();
        assert_eq!(
            rule.resolve("inset-0").unwrap().css,
            "top: 0;\nright: 0;\nbottom: 0;\nleft: 0;"
        );
        assert_eq!(rule.resolve("inset-x-4").unwrap().css, "right: 1rem;\nleft: 1rem;");
        assert_eq!(rule.resolve("-top-1/2").unwrap().css, "top: -50%;");
        assert_eq!(rule.resolve("left-full").unwrap().css, "left: 100%;");
    }

    #[test]
    fn test_arbitrary_length() {
        let rule = arbitrary_length().unwrap();
        assert_eq!(rule.resolve("w-[13px]").unwrap().css, "width: 13px;");
        assert_eq!(
            rule.resolve("m-[calc(100%_-_1rem)]").unwrap().css,
            "margin: calc(100% - 1rem);"
        );
        assert_eq!(
            rule.resolve("py-[2px]").unwrap().css,
            "padding-top: 2px;\npadding-bottom: 2px;"
        );
    }

    #[test]
    fn test_unescape_arbitrary() {
        assert_eq!(unescape_arbitrary("a_b"), "a b");
        assert_eq!(unescape_arbitrary(r"a\_b"), "a_b");
        assert_eq!(unescape_arbitrary("10px_20px"), "10px 20px");
    }

    #[test]
    fn test_cross_keys() {
        assert_eq!(
            cross(&["w", "h"], &[&["1", "2"]]),
            vec!["w-1", "w-2", "h-1", "h-2"]
        );
    }
}
