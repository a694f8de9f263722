use twgloss_core::TranslationEntry;

use super::multi;
use crate::rule::{Enumeration, Generator, RuleError, RuleMatch};
use crate::theme_values::{BORDER_WIDTHS, DEFAULT_RADIUS, RADII};

const BORDER_SIDES: &[(&str, &[&str], &str)] = &[
    ("t", &["border-top-width"], "top border"),
    ("r", &["border-right-width"], "right border"),
    ("b", &["border-bottom-width"], "bottom border"),
    ("l", &["border-left-width"], "left border"),
    ("x", &["border-left-width", "border-right-width"], "left and right borders"),
    ("y", &["border-top-width", "border-bottom-width"], "top and bottom borders"),
];

const CORNERS: &[(&str, &[&str], &str)] = &[
    ("t", &["border-top-left-radius", "border-top-right-radius"], "the top corners"),
    ("r", &["border-top-right-radius", "border-bottom-right-radius"], "the right corners"),
    ("b", &["border-bottom-right-radius", "border-bottom-left-radius"], "the bottom corners"),
    ("l", &["border-top-left-radius", "border-bottom-left-radius"], "the left corners"),
    ("tl", &["border-top-left-radius"], "the top-left corner"),
    ("tr", &["border-top-right-radius"], "the top-right corner"),
    ("br", &["border-bottom-right-radius"], "the bottom-right corner"),
    ("bl", &["border-bottom-left-radius"], "the bottom-left corner"),
];

fn lookup(
    table: &'static [(&'static str, &'static [&'static str], &'static str)],
    key: &str,
) -> Option<(&'static [&'static str], &'static str)> {
    table
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, properties, label)| (*properties, *label))
}

/// `border`, `border-{w}`, `border-{side}`, `border-{side}-{w}`
pub fn border_width() -> Result<Generator, RuleError> {
    let widths: Vec<&str> = BORDER_WIDTHS.keys().copied().collect();
    let mut keys = vec![String::new()];
    keys.extend(widths.iter().map(|w| format!("-{}", w)));
    for (side, _, _) in BORDER_SIDES {
        keys.push(format!("-{}", side));
        keys.extend(widths.iter().map(|w| format!("-{}-{}", side, w)));
    }

    Ok(Generator::new(
        "border-width",
        r"^border(?:-(0|2|4|8))?$|^border-([trblxy])(?:-(0|2|4|8))?$",
        resolve_border_width,
    )?
    .with_enumeration(Enumeration::new("border", keys)))
}

fn resolve_border_width(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
    let width_of = |key: Option<&str>| match key {
        Some(k) => BORDER_WIDTHS.get(k).copied(),
        None => Some("1px"),
    };

    let (properties, label, width) = match m.group(2) {
        Some(side) => {
            let (properties, label) = lookup(BORDER_SIDES, side)?;
            (properties, label, width_of(m.group(3))?)
        }
        None => (&["border-width"][..], "border width on all sides", width_of(m.group(1))?),
    };

    let description = if m.group(2).is_some() {
        format!("Sets the {} width to {}.", label, width)
    } else {
        format!("Sets the {} to {}.", label, width)
    };
    Some(multi(properties, width, description))
}

/// `rounded`, `rounded-{size}`, `rounded-{corner}`, `rounded-{corner}-{size}`
pub fn border_radius() -> Result<Generator, RuleError> {
    let sizes: Vec<&str> = RADII.keys().copied().collect();
    let mut keys = vec![String::new()];
    keys.extend(sizes.iter().map(|s| format!("-{}", s)));
    for (corner, _, _) in CORNERS {
        keys.push(format!("-{}", corner));
        keys.extend(sizes.iter().map(|s| format!("-{}-{}", corner, s)));
    }

    Ok(Generator::new(
        "border-radius",
        r"^rounded(?:-(none|sm|md|lg|xl|2xl|3xl|full))?$|^rounded-(tl|tr|br|bl|t|r|b|l)(?:-(none|sm|md|lg|xl|2xl|3xl|full))?$",
        resolve_border_radius,
    )?
    .with_enumeration(Enumeration::new("rounded", keys)))
}

fn resolve_border_radius(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
    let radius_of = |key: Option<&str>| match key {
        Some(k) => RADII.get(k).copied(),
        None => Some(DEFAULT_RADIUS),
    };

    let (properties, label, radius) = match m.group(2) {
        Some(corner) => {
            let (properties, label) = lookup(CORNERS, corner)?;
            (properties, label, radius_of(m.group(3))?)
        }
        None => (&["border-radius"][..], "all corners", radius_of(m.group(1))?),
    };

    let description = if radius == "0" {
        format!("Removes the rounding from {}.", label)
    } else {
        format!("Rounds {} with a {} radius.", label, radius)
    };
    Some(multi(properties, radius, description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_border_width_forms() {
        let rule = border_width().unwrap();
        assert_eq!(rule.resolve("border").unwrap().css, "border-width: 1px;");
        assert_eq!(rule.resolve("border-2").unwrap().css, "border-width: 2px;");
        assert_eq!(rule.resolve("border-t").unwrap().css, "border-top-width: 1px;");
        assert_eq!(
            rule.resolve("border-x-4").unwrap().css,
            "border-left-width: 4px;\nborder-right-width: 4px;"
        );
        assert_eq!(rule.resolve("border-b-0").unwrap().css, "border-bottom-width: 0;");
        assert!(!rule.matches("border-3"));
    }

    #[test]
    fn test_border_radius_forms() {
        let rule = border_radius().unwrap();
        assert_eq!(rule.resolve("rounded").unwrap().css, "border-radius: 0.25rem;");
        assert_eq!(rule.resolve("rounded-lg").unwrap().css, "border-radius: 0.5rem;");
        assert_eq!(
            rule.resolve("rounded-t-md").unwrap().css,
            "border-top-left-radius: 0.375rem;\nborder-top-right-radius: 0.375rem;"
        );
        assert_eq!(
            rule.resolve("rounded-tl").unwrap().css,
            "border-top-left-radius: 0.25rem;"
        );
        assert_eq!(
            rule.resolve("rounded-none").unwrap().description,
            "Removes the rounding from all corners."
        );
        assert_eq!(
            rule.resolve("rounded-br-full").unwrap().description,
            "Rounds the bottom-right corner with a 9999px radius."
        );
    }
}
