use twgloss_core::units::{apply_sign, convert_length, fraction_to_percent};
use twgloss_core::TranslationEntry;

use super::sizing::{cross, resolve_gap};
use super::single;
use crate::rule::{Enumeration, Generator, RuleError, RuleMatch};
use crate::theme_values::{COLUMN_WIDTHS, FRACTIONS, SPACING_STEPS, Z_INDEX_STEPS};

fn numbers(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
    range.map(|n| n.to_string()).collect()
}

/// `columns-{n | n/d | 3xs..7xl}`
pub fn columns() -> Result<Generator, RuleError> {
    let keys = numbers(1..=12)
        .into_iter()
        .chain(COLUMN_WIDTHS.keys().map(|k| k.to_string()));
    Ok(Generator::new(
        "columns",
        r"^columns-(\d+|\d+/\d+|3xs|2xs|xs|sm|md|lg|xl|2xl|3xl|4xl|5xl|6xl|7xl)$",
        resolve_columns,
    )?
    .with_enumeration(Enumeration::new("columns-", keys)))
}

fn resolve_columns(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
    let value = m.group(1)?;
    if value.bytes().all(|b| b.is_ascii_digit()) {
        return single("columns", value, format!("Splits the content into {} columns.", value));
    }
    if value.contains('/') {
        let width = fraction_to_percent(value)?;
        return single(
            "columns",
            &width,
            format!("Sets the ideal column width to {} of the container.", width),
        );
    }
    let width = COLUMN_WIDTHS.get(value)?;
    single(
        "columns",
        width,
        format!("Sets the ideal column width to {} ({}).", width, value),
    )
}

/// `z-{n|auto}`
pub fn z_index() -> Result<Generator, RuleError> {
    Ok(Generator::new("z-index", r"^z-(\d+|auto)$", |m| {
        let value = m.group(1)?;
        let description = if value == "auto" {
            "Lets the browser decide the stack order (z-index: auto).".to_string()
        } else {
            format!("Sets the stack order (z-index) to {}.", value)
        };
        single("z-index", value, description)
    })?
    .with_enumeration(Enumeration::new("z-", Z_INDEX_STEPS.iter().copied())))
}

/// `{gap|gap-x|gap-y}-{n|px}`
pub fn gap() -> Result<Generator, RuleError> {
    Ok(
        Generator::new("gap", r"^(gap-x|gap-y|gap)-(px|\d+(?:\.\d+)?)$", resolve_gap)?
            .with_enumeration(Enumeration::new("", cross(&["gap", "gap-x", "gap-y"], &[SPACING_STEPS]))),
    )
}

/// `flex-{1|auto|initial|none}`, `grow[-0]`, `shrink[-0]`, `basis-*`
pub fn flex() -> Result<Generator, RuleError> {
    let mut keys: Vec<String> = [
        "flex-1", "flex-auto", "flex-initial", "flex-none", "grow", "grow-0", "shrink", "shrink-0",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect();
    keys.extend(cross(&["basis"], &[SPACING_STEPS, &["auto", "full"], FRACTIONS]));

    Ok(Generator::new(
        "flex",
        r"^(?:flex-(?P<flex>1|auto|initial|none)|(?P<grow>grow|shrink)(?P<zero>-0)?|basis-(?P<basis>auto|full|px|\d+/\d+|\d+(?:\.\d+)?))$",
        resolve_flex,
    )?
    .with_enumeration(Enumeration::new("", keys)))
}

fn resolve_flex(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
    if let Some(flex) = m.name("flex") {
        let (value, description) = match flex {
            "1" => ("1 1 0%", "Lets the item grow and shrink as needed, ignoring its initial size."),
            "auto" => ("1 1 auto", "Lets the item grow and shrink, starting from its initial size."),
            "initial" => ("0 1 auto", "Lets the item shrink but not grow past its initial size."),
            _ => ("none", "Prevents the item from growing or shrinking."),
        };
        return single("flex", value, description);
    }
    if let Some(kind) = m.name("grow") {
        let zero = m.name("zero").is_some();
        let value = if zero { "0" } else { "1" };
        let description = match (kind, zero) {
            ("grow", false) => "Lets the item grow to fill free space.",
            ("grow", true) => "Prevents the item from growing.",
            (_, false) => "Lets the item shrink when space is tight.",
            (_, true) => "Prevents the item from shrinking.",
        };
        return single(&format!("flex-{}", kind), value, description);
    }
    let value = convert_length(m.name("basis")?, None)?;
    single("flex-basis", &value, format!("Sets the initial main size of the item to {}.", value))
}

/// `grid-cols-{1..12}`, `grid-rows-{1..6}`, `col-span-{1..12}`, `row-span-{1..6}`
pub fn grid() -> Result<Generator, RuleError> {
    let mut keys = Vec::new();
    for (prefix, max) in [("grid-cols", 12), ("grid-rows", 6), ("col-span", 12), ("row-span", 6)] {
        keys.extend(numbers(1..=max).into_iter().map(|n| format!("{}-{}", prefix, n)));
    }
    Ok(Generator::new(
        "grid",
        r"^(grid-cols|grid-rows|col-span|row-span)-(\d{1,2})$",
        resolve_grid,
    )?
    .with_enumeration(Enumeration::new("", keys)))
}

fn resolve_grid(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
    let kind = m.group(1)?;
    let raw = m.group(2)?;
    let n: u32 = raw.parse().ok()?;
    let max = if matches!(kind, "grid-cols" | "col-span") { 12 } else { 6 };
    if n == 0 || n > max {
        return None;
    }
    match kind {
        "grid-cols" => single(
            "grid-template-columns",
            &format!("repeat({}, minmax(0, 1fr))", n),
            format!("Creates a grid with {} equal columns.", n),
        ),
        "grid-rows" => single(
            "grid-template-rows",
            &format!("repeat({}, minmax(0, 1fr))", n),
            format!("Creates a grid with {} equal rows.", n),
        ),
        "col-span" => single(
            "grid-column",
            &format!("span {} / span {}", n, n),
            format!("Makes the item span {} columns.", n),
        ),
        _ => single(
            "grid-row",
            &format!("span {} / span {}", n, n),
            format!("Makes the item span {} rows.", n),
        ),
    }
}

/// `order-{n|first|last|none}`
pub fn order() -> Result<Generator, RuleError> {
    let keys = numbers(1..=12)
        .into_iter()
        .chain(["first", "last", "none"].iter().map(|k| k.to_string()));
    Ok(Generator::new("order", r"^order-(\d{1,2}|first|last|none)$", |m| {
        let (value, description) = match m.group(1)? {
            "first" => ("-9999".to_string(), "Places the item before all others.".to_string()),
            "last" => ("9999".to_string(), "Places the item after all others.".to_string()),
            "none" => ("0".to_string(), "Resets the item to source order.".to_string()),
            n => (n.to_string(), format!("Sets the item's order to {}.", n)),
        };
        single("order", &value, description)
    })?
    .with_enumeration(Enumeration::new("order-", keys)))
}

/// `aspect-{auto|square|video}`
pub fn aspect() -> Result<Generator, RuleError> {
    Ok(Generator::new("aspect", "^aspect-(auto|square|video)$", |m| {
        let value = match m.group(1)? {
            "auto" => "auto",
            "square" => "1 / 1",
            _ => "16 / 9",
        };
        single("aspect-ratio", value, format!("Sets the aspect ratio to {}.", value))
    })?
    .with_enumeration(Enumeration::new("aspect-", ["auto", "square", "video"])))
}

/// `[-]space-{x|y}-{n|px}`: spacing between children.
pub fn space_between() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "space-between",
        r"^(-)?space-(x|y)-(px|\d+(?:\.\d+)?)$",
        |m| {
            let negative = m.has(1);
            let value = apply_sign(convert_length(m.group(3)?, None)?, negative)?;
            let (property, direction) = match m.group(2)? {
                "x" => ("margin-left", "horizontal"),
                _ => ("margin-top", "vertical"),
            };
            single(
                property,
                &value,
                format!("Adds {} of {} space between child elements.", value, direction),
            )
        },
    )?
    .with_enumeration(Enumeration::new("", cross(&["space-x", "space-y"], &[SPACING_STEPS]))))
}

const PLACE_VALUES: &[&str] = &["start", "end", "center", "between", "around", "evenly", "stretch", "auto"];

/// `place-{content|items|self}-{value}`
pub fn place() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "place",
        "^place-(content|items|self)-(start|end|center|between|around|evenly|stretch|auto)$",
        |m| {
            let kind = m.group(1)?;
            let value = m.group(2)?;
            let what = match kind {
                "content" => "content",
                "items" => "items",
                _ => "this item",
            };
            single(
                &format!("place-{}", kind),
                value,
                format!("Places {} at {} along both axes.", what, value),
            )
        },
    )?
    .with_enumeration(Enumeration::new(
        "",
        cross(&["place-content", "place-items", "place-self"], &[PLACE_VALUES]),
    )))
}

pub fn justify_items() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "justify-items",
        "^justify-items-(start|end|center|stretch)$",
        |m| {
            let value = m.group(1)?;
            single(
                "justify-items",
                value,
                format!("Aligns grid items to {} along their inline axis.", value),
            )
        },
    )?
    .with_enumeration(Enumeration::new(
        "justify-items-",
        ["start", "end", "center", "stretch"],
    )))
}

pub fn justify_self() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "justify-self",
        "^justify-self-(auto|start|end|center|stretch)$",
        |m| {
            let value = m.group(1)?;
            single(
                "justify-self",
                value,
                format!("Aligns this grid item to {} along its inline axis.", value),
            )
        },
    )?
    .with_enumeration(Enumeration::new(
        "justify-self-",
        ["auto", "start", "end", "center", "stretch"],
    )))
}

/// `clear-{left|right|both|start|end|none}`
pub fn clear() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "clear",
        "^clear-(left|right|both|start|end|none)$",
        |m| {
            let (value, description) = match m.group(1)? {
                "left" => ("left", "Moves the element below any preceding left floats."),
                "right" => ("right", "Moves the element below any preceding right floats."),
                "both" => ("both", "Moves the element below all preceding floats."),
                "start" => (
                    "inline-start",
                    "Moves the element below floats on the inline-start side.",
                ),
                "end" => (
                    "inline-end",
                    "Moves the element below floats on the inline-end side.",
                ),
                _ => ("none", "Does not clear floats."),
            };
            single("clear", value, description)
        },
    )?
    .with_enumeration(Enumeration::new(
        "clear-",
        ["left", "right", "both", "start", "end", "none"],
    )))
}
