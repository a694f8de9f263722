//! Built-in pattern rules.
//!
//! [`builtin`] returns them in precedence order: the first rule whose
//! pattern matches a class owns it, even when its resolve step fails.

mod border;
mod color;
mod effects;
mod layout;
mod sizing;
mod typography;

use twgloss_core::{Declaration, TranslationEntry};

use crate::rule::{Rule, RuleError};

/// One declaration, wrapped for direct return from a resolve fn.
pub(crate) fn single(
    property: &str,
    value: &str,
    description: impl Into<String>,
) -> Option<TranslationEntry> {
    Some(TranslationEntry::from_declarations(
        &[Declaration::new(property, value)],
        description,
    ))
}

/// The same value written to each property, one declaration per line.
pub(crate) fn multi(
    properties: &[&str],
    value: &str,
    description: impl Into<String>,
) -> TranslationEntry {
    let declarations: Vec<Declaration> = properties
        .iter()
        .map(|property| Declaration::new(*property, value))
        .collect();
    TranslationEntry::from_declarations(&declarations, description)
}

fn boxed<R: Rule + 'static>(rule: Result<R, RuleError>) -> Result<Box<dyn Rule>, RuleError> {
    rule.map(|rule| Box::new(rule) as Box<dyn Rule>)
}

/// Every built-in rule, in precedence order.
pub fn builtin() -> Vec<Result<Box<dyn Rule>, RuleError>> {
    vec![
        boxed(typography::text_size()),
        boxed(typography::text_size_with_line_height()),
        boxed(layout::columns()),
        boxed(sizing::inset()),
        boxed(layout::z_index()),
        boxed(sizing::size()),
        boxed(sizing::spacing()),
        boxed(color::palette_color()),
        boxed(typography::font_family()),
        boxed(typography::font_weight()),
        boxed(typography::font_style()),
        boxed(typography::tracking()),
        boxed(typography::leading()),
        boxed(typography::text_decoration()),
        boxed(typography::text_transform()),
        boxed(effects::scale()),
        boxed(effects::rotate()),
        boxed(effects::translate()),
        boxed(effects::skew()),
        boxed(layout::gap()),
        boxed(border::border_width()),
        boxed(border::border_radius()),
        boxed(effects::opacity()),
        boxed(layout::flex()),
        boxed(layout::grid()),
        boxed(layout::order()),
        boxed(layout::aspect()),
        boxed(color::arbitrary_color()),
        boxed(sizing::arbitrary_length()),
        boxed(typography::underline_offset()),
        boxed(layout::space_between()),
        boxed(layout::place()),
        boxed(layout::justify_items()),
        boxed(layout::justify_self()),
        boxed(effects::mask()),
        boxed(effects::mask_clip()),
        boxed(effects::mask_composite()),
        boxed(effects::mask_image()),
        boxed(effects::mask_mode()),
        boxed(effects::mask_origin()),
        boxed(effects::mask_position()),
        boxed(effects::mask_repeat()),
        boxed(effects::mask_size()),
        boxed(effects::mask_type()),
        boxed(color::stroke_width()),
        boxed(color::fill()),
        boxed(color::stroke()),
        boxed(layout::clear()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_patterns_compile() {
        for rule in builtin() {
            assert!(rule.is_ok(), "{}", rule.err().map(|e| e.to_string()).unwrap_or_default());
        }
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let mut names: Vec<String> = builtin()
            .into_iter()
            .flatten()
            .map(|rule| rule.name().to_string())
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_multi_writes_each_property() {
        let entry = multi(&["top", "bottom"], "0", "Pins.");
        assert_eq!(entry.css, "top: 0;\nbottom: 0;");
    }
}
