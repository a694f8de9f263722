use twgloss_core::units::{is_unsigned_decimal, leading_number};
use twgloss_core::{Declaration, TranslationEntry};

use super::single;
use crate::rule::{Enumeration, Generator, RuleError, RuleMatch};
use crate::theme_values::{
    FontSize, Keyword, FONT_FAMILIES, FONT_SIZES, FONT_WEIGHTS, LEADING, LINE_HEIGHT_STEPS,
    TRACKING,
};

const SIZE_KEYS: &str = "xs|sm|base|lg|xl|2xl|3xl|4xl|5xl|6xl|7xl|8xl|9xl";

/// `text-{size}`: rule block binding the theme's font-size and line-height
/// custom properties.
pub fn text_size() -> Result<Generator<FontSize>, RuleError> {
    let pattern = format!("^text-({})$", SIZE_KEYS);
    Ok(
        Generator::data_backed("text-size", &pattern, &FONT_SIZES, resolve_text_size)?
            .with_enumeration(Enumeration::new("text-", FONT_SIZES.keys().copied())),
    )
}

fn resolve_text_size(m: &RuleMatch<'_>, size: &FontSize) -> Option<TranslationEntry> {
    let class = m.class();
    let key = m.group(1)?;
    let ratio = line_height_ratio(size);

    let line_height_note = match &ratio {
        Some(ratio) => format!("calc({} / {}) ≈ {}", size.line_height, size.font_size, ratio),
        None => size.line_height.to_string(),
    };
    let css = format!(
        ".{class} {{\n  font-size: var(--{class}) /* {fs} /* {px} */ */;\n  line-height: var(--tw-leading, var(--{class}--line-height) /* {lh} */);\n}}",
        class = class,
        fs = size.font_size,
        px = size.font_size_px,
        lh = line_height_note,
    );

    let mut description = format!(
        "Sets the font size to {} ({} / {}) with a line height of {}",
        key.to_uppercase(),
        size.font_size,
        size.font_size_px,
        size.line_height,
    );
    if let Some(ratio) = ratio {
        description.push_str(&format!(" (≈ {} times the font size)", ratio));
    }
    description.push('.');

    Some(TranslationEntry::new(css, description))
}

/// Line-height ÷ font-size to 4 decimals, only when the line height is a
/// rem/em length. Unitless line heights are already ratios.
fn line_height_ratio(size: &FontSize) -> Option<String> {
    if is_unsigned_decimal(size.line_height) || !size.line_height.ends_with("em") {
        return None;
    }
    let font_size = leading_number(size.font_size)?;
    let line_height = leading_number(size.line_height)?;
    if font_size == 0.0 {
        return None;
    }
    Some(format!("{:.4}", line_height / font_size))
}

/// `text-{size}/{n}`: font size with an explicit line-height step.
pub fn text_size_with_line_height() -> Result<Generator<FontSize>, RuleError> {
    let pattern = format!(r"^text-({})/(\d+)$", SIZE_KEYS);
    let keys = FONT_SIZES.keys().flat_map(|size| {
        LINE_HEIGHT_STEPS
            .keys()
            .map(move |step| format!("{}/{}", size, step))
    });
    Ok(Generator::data_backed(
        "text-size-line-height",
        &pattern,
        &FONT_SIZES,
        resolve_text_size_with_line_height,
    )?
    .with_enumeration(Enumeration::new("text-", keys)))
}

fn resolve_text_size_with_line_height(
    m: &RuleMatch<'_>,
    size: &FontSize,
) -> Option<TranslationEntry> {
    let key = m.group(1)?;
    let line_height = LINE_HEIGHT_STEPS.get(m.group(2)?)?;
    Some(TranslationEntry::new(
        format!(
            "font-size: {}; /* {} */\nline-height: {};",
            size.font_size, size.font_size_px, line_height
        ),
        format!(
            "Sets the font size to {} ({} / {}) and the line height to {}.",
            key, size.font_size, size.font_size_px, line_height
        ),
    ))
}

pub fn font_family() -> Result<Generator<Keyword>, RuleError> {
    Ok(Generator::data_backed(
        "font-family",
        "^font-(sans|serif|mono)$",
        &FONT_FAMILIES,
        |_, family| {
            single(
                "font-family",
                family.value,
                format!("Uses the {} font stack.", family.label),
            )
        },
    )?
    .with_enumeration(Enumeration::new("font-", FONT_FAMILIES.keys().copied())))
}

pub fn font_weight() -> Result<Generator<Keyword>, RuleError> {
    Ok(Generator::data_backed(
        "font-weight",
        "^font-(thin|extralight|light|normal|medium|semibold|bold|extrabold|black|[1-9]00)$",
        &FONT_WEIGHTS,
        resolve_font_weight,
    )?
    .with_enumeration(Enumeration::new("font-", FONT_WEIGHTS.keys().copied())))
}

fn resolve_font_weight(_: &RuleMatch<'_>, weight: &Keyword) -> Option<TranslationEntry> {
    let description = if weight.label == weight.value {
        format!("Sets the font weight to {}.", weight.value)
    } else {
        format!("Sets the font weight to {} ({}).", weight.value, weight.label)
    };
    single("font-weight", weight.value, description)
}

pub fn font_style() -> Result<Generator, RuleError> {
    Ok(
        Generator::new("font-style", "^(italic|not-italic)$", |m| match m.group(1)? {
            "italic" => single("font-style", "italic", "Sets the text in italics."),
            _ => single("font-style", "normal", "Displays the text upright, without italics."),
        })?
        .with_enumeration(Enumeration::new("", ["italic", "not-italic"])),
    )
}

pub fn tracking() -> Result<Generator<Keyword>, RuleError> {
    Ok(Generator::data_backed(
        "tracking",
        "^tracking-(tighter|tight|normal|wide|wider|widest)$",
        &TRACKING,
        |_, tracking| {
            single(
                "letter-spacing",
                tracking.value,
                format!("Sets the letter spacing to {} ({}).", tracking.value, tracking.label),
            )
        },
    )?
    .with_enumeration(Enumeration::new("tracking-", TRACKING.keys().copied())))
}

pub fn leading() -> Result<Generator, RuleError> {
    let keys = LEADING.keys().chain(LINE_HEIGHT_STEPS.keys()).copied();
    Ok(Generator::new(
        "leading",
        "^leading-(none|tight|snug|normal|relaxed|loose|[3-9]|10)$",
        resolve_leading,
    )?
    .with_enumeration(Enumeration::new("leading-", keys)))
}

fn resolve_leading(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
    let key = m.group(1)?;
    if let Some(keyword) = LEADING.get(key) {
        return single(
            "line-height",
            keyword.value,
            format!("Sets the line height to {} ({}).", keyword.value, keyword.label),
        );
    }
    let step = LINE_HEIGHT_STEPS.get(key)?;
    single("line-height", step, format!("Sets the line height to {}.", step))
}

pub fn text_decoration() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "text-decoration",
        "^(underline|line-through|no-underline)$",
        |m| match m.group(1)? {
            "underline" => single("text-decoration-line", "underline", "Underlines the text."),
            "line-through" => single(
                "text-decoration-line",
                "line-through",
                "Draws a line through the text.",
            ),
            _ => single("text-decoration-line", "none", "Removes text decoration lines."),
        },
    )?
    .with_enumeration(Enumeration::new("", ["underline", "line-through", "no-underline"])))
}

pub fn text_transform() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "text-transform",
        "^(uppercase|lowercase|capitalize|normal-case)$",
        |m| {
            let (value, description) = match m.group(1)? {
                "uppercase" => ("uppercase", "Displays the text in uppercase."),
                "lowercase" => ("lowercase", "Displays the text in lowercase."),
                "capitalize" => ("capitalize", "Capitalizes the first letter of each word."),
                _ => ("none", "Displays the text with its original casing."),
            };
            single("text-transform", value, description)
        },
    )?
    .with_enumeration(Enumeration::new(
        "",
        ["uppercase", "lowercase", "capitalize", "normal-case"],
    )))
}

pub fn underline_offset() -> Result<Generator, RuleError> {
    Ok(Generator::new(
        "underline-offset",
        r"^underline-offset-(auto|from-font|\d+)$",
        |m| {
            let value = m.group(1)?;
            let (css_value, description) = match value {
                "auto" => ("auto".to_string(), "Lets the browser choose the underline offset.".to_string()),
                "from-font" => (
                    "from-font".to_string(),
                    "Uses the underline offset defined by the font.".to_string(),
                ),
                n => (format!("{}px", n), format!("Offsets the underline by {}px.", n)),
            };
            Some(TranslationEntry::from_declarations(
                &[Declaration::new("text-underline-offset", css_value)],
                description,
            ))
        },
    )?
    .with_enumeration(Enumeration::new(
        "underline-offset-",
        ["auto", "from-font", "0", "1", "2", "4", "8"],
    )))
}
