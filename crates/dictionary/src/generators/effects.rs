use twgloss_core::units::{apply_sign, convert_length};

use super::sizing::{cross, unescape_arbitrary};
use super::single;
use crate::rule::{Enumeration, Generator, RuleError, RuleMatch};
use crate::theme_values::{FRACTIONS, OPACITY, ROTATE_DEGREES, SCALE_FACTORS, SKEW_DEGREES, SPACING_STEPS};

const FULL: &[&str] = &["full"];

fn axis_name(axis: &str) -> &'static str {
    if axis.eq_ignore_ascii_case("x") {
        "horizontally"
    } else {
        "vertically"
    }
}

/// `{scale|scale-x|scale-y}-{n}`
pub fn scale() -> Result<Generator, RuleError> {
    let factors: Vec<&str> = SCALE_FACTORS.keys().copied().collect();
    Ok(Generator::new("scale", r"^(scale|scale-x|scale-y)-(\d+)$", |m| {
        let factor = SCALE_FACTORS.get(m.group(2)?)?;
        let (function, description) = match m.group(1)? {
            "scale" => ("scale", format!("Scales the element to {}×.", factor)),
            "scale-x" => ("scaleX", format!("Scales the element horizontally to {}×.", factor)),
            _ => ("scaleY", format!("Scales the element vertically to {}×.", factor)),
        };
        single("transform", &format!("{}({})", function, factor), description)
    })?
    .with_enumeration(Enumeration::new(
        "",
        cross(&["scale", "scale-x", "scale-y"], &[&factors]),
    )))
}

/// Degrees with an optional leading minus, `0` never signed.
fn signed_degrees(m: &RuleMatch<'_>, group: usize) -> Option<String> {
    let degrees = m.group(group)?;
    apply_sign(degrees.to_string(), m.has(1))
}

/// `[-]rotate-{deg}`
pub fn rotate() -> Result<Generator, RuleError> {
    Ok(Generator::new("rotate", r"^(-)?rotate-(\d{1,3})$", |m| {
        let degrees = signed_degrees(m, 2)?;
        single(
            "transform",
            &format!("rotate({}deg)", degrees),
            format!("Rotates the element by {} degrees.", degrees),
        )
    })?
    .with_enumeration(Enumeration::new("rotate-", ROTATE_DEGREES.iter().copied())))
}

/// `[-]translate-{x|y}-{value}`
pub fn translate() -> Result<Generator, RuleError> {
    let keys = cross(
        &["translate-x", "translate-y"],
        &[SPACING_STEPS, FULL, FRACTIONS],
    );
    Ok(Generator::new(
        "translate",
        r"^(-)?translate-(x|y)-(px|full|\d+/\d+|\d+(?:\.\d+)?)$",
        |m| {
            let axis = m.group(2)?;
            let value = apply_sign(convert_length(m.group(3)?, None)?, m.has(1))?;
            single(
                "transform",
                &format!("translate{}({})", axis.to_uppercase(), value),
                format!("Moves the element {} by {}.", axis_name(axis), value),
            )
        },
    )?
    .with_enumeration(Enumeration::new("", keys)))
}

/// `[-]skew-{x|y}-{deg}`
pub fn skew() -> Result<Generator, RuleError> {
    Ok(Generator::new("skew", r"^(-)?skew-(x|y)-(\d{1,3})$", |m| {
        let axis = m.group(2)?;
        let degrees = signed_degrees(m, 3)?;
        single(
            "transform",
            &format!("skew{}({}deg)", axis.to_uppercase(), degrees),
            format!("Skews the element {} by {} degrees.", axis_name(axis), degrees),
        )
    })?
    .with_enumeration(Enumeration::new(
        "",
        cross(&["skew-x", "skew-y"], &[SKEW_DEGREES]),
    )))
}

/// `opacity-{n}`, where n is a percentage step.
pub fn opacity() -> Result<Generator<&'static str>, RuleError> {
    Ok(
        Generator::data_backed("opacity", r"^opacity-(\d+)$", &OPACITY, |m, value| {
            single(
                "opacity",
                value,
                format!("Sets the opacity to {}%.", m.group(1)?),
            )
        })?
        .with_enumeration(Enumeration::new("opacity-", OPACITY.keys().copied())),
    )
}

const MASK_SHAPES: &[&str] = &[
    "squircle",
    "circle",
    "hex",
    "star",
    "decagon",
    "pentagon",
    "diamond",
    "heart",
    "parallelogram",
    "parallelogram-2",
    "parallelogram-3",
    "parallelogram-4",
];

/// `mask`, `mask-none`, `mask-{shape}`
pub fn mask() -> Result<Generator, RuleError> {
    let mut keys = vec![String::new(), "-none".to_string()];
    keys.extend(MASK_SHAPES.iter().map(|s| format!("-{}", s)));
    Ok(Generator::new(
        "mask",
        r"^mask(?:-(none|squircle|circle|hex|star|decagon|pentagon|diamond|heart|parallelogram(?:-\d+)?))?$",
        |m| match m.group(1) {
            None => single("mask", "var(--tw-mask)", "Applies the current mask shape."),
            Some("none") => single("mask", "none", "Removes the mask."),
            Some(shape) => single(
                "mask",
                &format!("var(--tw-mask-{})", shape),
                format!("Clips the element to a {} mask.", shape),
            ),
        },
    )?
    .with_enumeration(Enumeration::new("mask", keys)))
}

/// Builds a `mask-{property}-{value}` rule whose value passes through
/// `render` and whose description reads "Sets the mask {label} to {value}."
macro_rules! mask_property {
    ($fn_name:ident, $name:literal, $pattern:literal, $property:literal, $label:literal, [$($key:literal),*], $render:expr) => {
        pub fn $fn_name() -> Result<Generator, RuleError> {
            Ok(Generator::new($name, $pattern, |m| {
                let render: fn(&str) -> String = $render;
                let value = render(m.group(1)?);
                single($property, &value, format!("Sets the mask {} to {}.", $label, value))
            })?
            .with_enumeration(Enumeration::new(
                concat!($name, "-"),
                [$($key),*],
            )))
        }
    };
}

mask_property!(
    mask_clip,
    "mask-clip",
    "^mask-clip-(border|padding|content|text)$",
    "mask-clip",
    "clipping area",
    ["border", "padding", "content", "text"],
    |v| v.to_string()
);

mask_property!(
    mask_composite,
    "mask-composite",
    "^mask-composite-(add|subtract|intersect|exclude)$",
    "mask-composite",
    "compositing operation",
    ["add", "subtract", "intersect", "exclude"],
    |v| v.to_string()
);

mask_property!(
    mask_image,
    "mask-image",
    r"^mask-image-(none|url\(.+\))$",
    "mask-image",
    "image",
    ["none"],
    |v| v.to_string()
);

mask_property!(
    mask_mode,
    "mask-mode",
    "^mask-mode-(match-source|luminance|alpha)$",
    "mask-mode",
    "mode",
    ["match-source", "luminance", "alpha"],
    |v| v.to_string()
);

mask_property!(
    mask_origin,
    "mask-origin",
    "^mask-origin-(border|padding|content)$",
    "mask-origin",
    "origin",
    ["border", "padding", "content"],
    |v| format!("{}-box", v)
);

mask_property!(
    mask_position,
    "mask-position",
    "^mask-position-(.+)$",
    "mask-position",
    "position",
    ["center", "top", "bottom", "left", "right"],
    unescape_arbitrary
);

mask_property!(
    mask_repeat,
    "mask-repeat",
    "^mask-repeat-(no-repeat|repeat|repeat-x|repeat-y|space|round)$",
    "mask-repeat",
    "repeat behavior",
    ["no-repeat", "repeat", "repeat-x", "repeat-y", "space", "round"],
    |v| v.to_string()
);

mask_property!(
    mask_size,
    "mask-size",
    r"^mask-size-(auto|cover|contain|\d+(?:px|rem|%)?)$",
    "mask-size",
    "size",
    ["auto", "cover", "contain"],
    |v| v.to_string()
);

mask_property!(
    mask_type,
    "mask-type",
    "^mask-type-(luminance|alpha)$",
    "mask-type",
    "type",
    ["luminance", "alpha"],
    |v| v.to_string()
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scale_axes() {
        let rule = scale().unwrap();
        assert_eq!(rule.resolve("scale-150").unwrap().css, "transform: scale(1.5);");
        assert_eq!(rule.resolve("scale-x-50").unwrap().css, "transform: scaleX(0.5);");
        assert_eq!(rule.resolve("scale-33"), None);
    }

    #[test]
    fn test_rotate_and_skew_signs() {
        assert_eq!(
            rotate().unwrap().resolve("-rotate-45").unwrap().css,
            "transform: rotate(-45deg);"
        );
        assert_eq!(
            rotate().unwrap().resolve("-rotate-0").unwrap().css,
            "transform: rotate(0deg);"
        );
        assert_eq!(
            skew().unwrap().resolve("skew-y-6").unwrap().css,
            "transform: skewY(6deg);"
        );
    }

    #[test]
    fn test_translate_values() {
        let rule = translate().unwrap();
        assert_eq!(
            rule.resolve("-translate-x-4").unwrap().css,
            "transform: translateX(-1rem);"
        );
        assert_eq!(
            rule.resolve("translate-y-1/2").unwrap().css,
            "transform: translateY(50%);"
        );
        assert_eq!(
            rule.resolve("translate-x-full").unwrap().description,
            "Moves the element horizontally by 100%."
        );
    }

    #[test]
    fn test_opacity_description() {
        let entry = opacity().unwrap().resolve("opacity-75").unwrap();
        assert_eq!(entry.css, "opacity: 0.75;");
        assert_eq!(entry.description, "Sets the opacity to 75%.");
    }

    #[test]
    fn test_mask_shapes() {
        let rule = mask().unwrap();
        assert_eq!(rule.resolve("mask").unwrap().css, "mask: var(--tw-mask);");
        assert_eq!(rule.resolve("mask-none").unwrap().css, "mask: none;");
        assert_eq!(
            rule.resolve("mask-parallelogram-3").unwrap().css,
            "mask: var(--tw-mask-parallelogram-3);"
        );
    }

    #[test]
    fn test_mask_properties() {
        assert_eq!(
            mask_origin().unwrap().resolve("mask-origin-padding").unwrap().css,
            "mask-origin: padding-box;"
        );
        assert_eq!(
            mask_position().unwrap().resolve("mask-position-10px_20px").unwrap().css,
            "mask-position: 10px 20px;"
        );
        assert_eq!(
            mask_size().unwrap().resolve("mask-size-100px").unwrap().css,
            "mask-size: 100px;"
        );
        assert_eq!(
            mask_image().unwrap().resolve("mask-image-url(a.svg)").unwrap().css,
            "mask-image: url(a.svg);"
        );
    }
}
