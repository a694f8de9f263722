//! Default theme scales backing the generators.
//!
//! Tables use `phf::OrderedMap` where key order drives reverse-index
//! output; plain slices where a generator only needs a seed list.

use phf::phf_ordered_map;

/// Font size with its pixel equivalent and default line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSize {
    pub font_size: &'static str,
    pub font_size_px: &'static str,
    /// Either a length (`1.5rem`) or a unitless multiplier (`1`).
    pub line_height: &'static str,
}

/// A keyword mapped to its CSS value and a short human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub value: &'static str,
    pub label: &'static str,
}

/// `text-{size}`
pub static FONT_SIZES: phf::OrderedMap<&'static str, FontSize> = phf_ordered_map! {
    "xs" => FontSize { font_size: "0.75rem", font_size_px: "12px", line_height: "1rem" },
    "sm" => FontSize { font_size: "0.875rem", font_size_px: "14px", line_height: "1.25rem" },
    "base" => FontSize { font_size: "1rem", font_size_px: "16px", line_height: "1.5rem" },
    "lg" => FontSize { font_size: "1.125rem", font_size_px: "18px", line_height: "1.75rem" },
    "xl" => FontSize { font_size: "1.25rem", font_size_px: "20px", line_height: "1.75rem" },
    "2xl" => FontSize { font_size: "1.5rem", font_size_px: "24px", line_height: "2rem" },
    "3xl" => FontSize { font_size: "1.875rem", font_size_px: "30px", line_height: "2.25rem" },
    "4xl" => FontSize { font_size: "2.25rem", font_size_px: "36px", line_height: "2.5rem" },
    "5xl" => FontSize { font_size: "3rem", font_size_px: "48px", line_height: "1" },
    "6xl" => FontSize { font_size: "3.75rem", font_size_px: "60px", line_height: "1" },
    "7xl" => FontSize { font_size: "4.5rem", font_size_px: "72px", line_height: "1" },
    "8xl" => FontSize { font_size: "6rem", font_size_px: "96px", line_height: "1" },
    "9xl" => FontSize { font_size: "8rem", font_size_px: "128px", line_height: "1" },
};

/// Line-height overrides for `text-{size}/{n}` and `leading-{n}`.
pub static LINE_HEIGHT_STEPS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "3" => "0.75rem",
    "4" => "1rem",
    "5" => "1.25rem",
    "6" => "1.5rem",
    "7" => "1.75rem",
    "8" => "2rem",
    "9" => "2.25rem",
    "10" => "2.5rem",
};

/// `leading-{keyword}`
pub static LEADING: phf::OrderedMap<&'static str, Keyword> = phf_ordered_map! {
    "none" => Keyword { value: "1", label: "no extra space" },
    "tight" => Keyword { value: "1.25", label: "tight" },
    "snug" => Keyword { value: "1.375", label: "snug" },
    "normal" => Keyword { value: "1.5", label: "normal" },
    "relaxed" => Keyword { value: "1.625", label: "relaxed" },
    "loose" => Keyword { value: "2", label: "loose" },
};

/// `tracking-{keyword}`
pub static TRACKING: phf::OrderedMap<&'static str, Keyword> = phf_ordered_map! {
    "tighter" => Keyword { value: "-0.05em", label: "much tighter" },
    "tight" => Keyword { value: "-0.025em", label: "tighter" },
    "normal" => Keyword { value: "0em", label: "normal" },
    "wide" => Keyword { value: "0.025em", label: "slightly wider" },
    "wider" => Keyword { value: "0.05em", label: "wider" },
    "widest" => Keyword { value: "0.1em", label: "much wider" },
};

/// `font-{family}`
pub static FONT_FAMILIES: phf::OrderedMap<&'static str, Keyword> = phf_ordered_map! {
    "sans" => Keyword {
        value: "ui-sans-serif, system-ui, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, \"Noto Sans\", sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\", \"Noto Color Emoji\"",
        label: "sans-serif",
    },
    "serif" => Keyword {
        value: "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif",
        label: "serif",
    },
    "mono" => Keyword {
        value: "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace",
        label: "monospace",
    },
};

/// `font-{weight}`, named and numeric.
pub static FONT_WEIGHTS: phf::OrderedMap<&'static str, Keyword> = phf_ordered_map! {
    "thin" => Keyword { value: "100", label: "thin" },
    "extralight" => Keyword { value: "200", label: "extra light" },
    "light" => Keyword { value: "300", label: "light" },
    "normal" => Keyword { value: "400", label: "normal" },
    "medium" => Keyword { value: "500", label: "medium" },
    "semibold" => Keyword { value: "600", label: "semibold" },
    "bold" => Keyword { value: "700", label: "bold" },
    "extrabold" => Keyword { value: "800", label: "extra bold" },
    "black" => Keyword { value: "900", label: "black" },
    "100" => Keyword { value: "100", label: "100" },
    "200" => Keyword { value: "200", label: "200" },
    "300" => Keyword { value: "300", label: "300" },
    "400" => Keyword { value: "400", label: "400" },
    "500" => Keyword { value: "500", label: "500" },
    "600" => Keyword { value: "600", label: "600" },
    "700" => Keyword { value: "700", label: "700" },
    "800" => Keyword { value: "800", label: "800" },
    "900" => Keyword { value: "900", label: "900" },
};

/// `columns-{keyword}` widths.
pub static COLUMN_WIDTHS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "3xs" => "16rem",
    "2xs" => "18rem",
    "xs" => "20rem",
    "sm" => "24rem",
    "md" => "28rem",
    "lg" => "32rem",
    "xl" => "36rem",
    "2xl" => "42rem",
    "3xl" => "48rem",
    "4xl" => "56rem",
    "5xl" => "64rem",
    "6xl" => "72rem",
    "7xl" => "80rem",
};

/// `scale-{n}` factors.
pub static SCALE_FACTORS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0",
    "50" => "0.5",
    "75" => "0.75",
    "90" => "0.9",
    "95" => "0.95",
    "100" => "1",
    "105" => "1.05",
    "110" => "1.1",
    "125" => "1.25",
    "150" => "1.5",
    "200" => "2",
};

/// `opacity-{n}`
pub static OPACITY: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0",
    "5" => "0.05",
    "10" => "0.1",
    "20" => "0.2",
    "25" => "0.25",
    "30" => "0.3",
    "40" => "0.4",
    "50" => "0.5",
    "60" => "0.6",
    "70" => "0.7",
    "75" => "0.75",
    "80" => "0.8",
    "90" => "0.9",
    "95" => "0.95",
    "100" => "1",
};

/// `border-{n}` widths. Bare `border` is 1px.
pub static BORDER_WIDTHS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0",
    "2" => "2px",
    "4" => "4px",
    "8" => "8px",
};

/// `rounded-{size}`. Bare `rounded` uses [`DEFAULT_RADIUS`].
pub static RADII: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "0",
    "sm" => "0.125rem",
    "md" => "0.375rem",
    "lg" => "0.5rem",
    "xl" => "0.75rem",
    "2xl" => "1rem",
    "3xl" => "1.5rem",
    "full" => "9999px",
};

pub const DEFAULT_RADIUS: &str = "0.25rem";

/// Seed steps of the spacing scale, used to enumerate open-ended families.
pub const SPACING_STEPS: &[&str] = &[
    "0", "px", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10",
    "11", "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60",
    "64", "72", "80", "96",
];

/// Seed fractions for width-like families.
pub const FRACTIONS: &[&str] = &[
    "1/2", "1/3", "2/3", "1/4", "2/4", "3/4", "1/5", "2/5", "3/5", "4/5", "1/6", "2/6", "3/6",
    "4/6", "5/6",
];

pub const Z_INDEX_STEPS: &[&str] = &["0", "10", "20", "30", "40", "50", "auto"];

pub const ROTATE_DEGREES: &[&str] = &["0", "1", "2", "3", "6", "12", "45", "90", "180"];

pub const SKEW_DEGREES: &[&str] = &["0", "1", "2", "3", "6", "12"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_sizes_keep_declaration_order() {
        let keys: Vec<&str> = FONT_SIZES.keys().copied().collect();
        assert_eq!(keys.first(), Some(&"xs"));
        assert_eq!(keys.last(), Some(&"9xl"));
        assert_eq!(keys.len(), 13);
    }

    #[test]
    fn test_font_size_lookup() {
        let size = FONT_SIZES.get("3xl").unwrap();
        assert_eq!(size.font_size, "1.875rem");
        assert_eq!(size.font_size_px, "30px");
        assert_eq!(size.line_height, "2.25rem");
    }

    #[test]
    fn test_numeric_weights_follow_named_ones() {
        assert_eq!(FONT_WEIGHTS.get("bold").map(|k| k.value), Some("700"));
        assert_eq!(FONT_WEIGHTS.get("700").map(|k| k.value), Some("700"));
        assert_eq!(FONT_WEIGHTS.len(), 18);
    }
}
