use serde::{Deserialize, Serialize};

/// Result of resolving one utility class: a CSS snippet plus a readable
/// explanation of what it does.
///
/// `css` may hold several newline-joined declarations (`px-4` sets two
/// sides) or a whole rule block (`text-3xl`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub css: String,
    pub description: String,
}

impl TranslationEntry {
    pub fn new(css: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            description: description.into(),
        }
    }

    /// Builds an entry whose css is the given declarations, one per line.
    pub fn from_declarations(declarations: &[Declaration], description: impl Into<String>) -> Self {
        let css = declarations
            .iter()
            .map(Declaration::to_css)
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(css, description)
    }

    /// Replaces the description, keeping the css.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// One-line excerpt of the css for list views.
    ///
    /// Rule blocks open with a selector line, so the second line is the
    /// first real declaration; single declarations have only one line.
    pub fn css_preview(&self) -> &str {
        preview_line(&self.css)
    }
}

fn preview_line(css: &str) -> &str {
    let mut lines = css.lines();
    let first = lines.next().unwrap_or("");
    match lines.next().map(str::trim) {
        Some(second) if !second.is_empty() => second,
        _ => first.trim(),
    }
}

/// A single CSS declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// Property name, e.g. "padding-left"
    pub property: String,
    /// Property value, e.g. "1rem"
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// `property: value;`
    pub fn to_css(&self) -> String {
        format!("{}: {};", self.property, self.value)
    }
}

/// One materialized reverse-search item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedClass {
    pub class_name: String,
    pub css: String,
    pub description: String,
}

impl IndexedClass {
    pub fn new(class_name: impl Into<String>, entry: TranslationEntry) -> Self {
        Self {
            class_name: class_name.into(),
            css: entry.css,
            description: entry.description,
        }
    }

    /// See [`TranslationEntry::css_preview`].
    pub fn css_preview(&self) -> &str {
        preview_line(&self.css)
    }

    /// Case-insensitive substring match against name, css and description.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.class_name.to_lowercase().contains(needle)
            || self.css.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_declarations_joins_lines() {
        let entry = TranslationEntry::from_declarations(
            &[
                Declaration::new("padding-left", "1rem"),
                Declaration::new("padding-right", "1rem"),
            ],
            "Sets horizontal padding.",
        );
        assert_eq!(entry.css, "padding-left: 1rem;\npadding-right: 1rem;");
    }

    #[test]
    fn test_css_preview_single_line() {
        let entry = TranslationEntry::new("display: flex;", "");
        assert_eq!(entry.css_preview(), "display: flex;");
    }

    #[test]
    fn test_css_preview_rule_block() {
        let entry = TranslationEntry::new(
            ".text-xs {\n  font-size: var(--text-xs);\n  line-height: 1;\n}",
            "",
        );
        assert_eq!(entry.css_preview(), "font-size: var(--text-xs);");
    }

    #[test]
    fn test_css_preview_two_declarations() {
        let entry = TranslationEntry::new("top: 0;\nbottom: 0;", "");
        assert_eq!(entry.css_preview(), "bottom: 0;");
    }

    #[test]
    fn test_indexed_class_matching() {
        let item = IndexedClass::new(
            "w-full",
            TranslationEntry::new("width: 100%;", "Sets the width to 100%."),
        );
        assert!(item.matches_lowercase("w-full"));
        assert!(item.matches_lowercase("width: 100%"));
        assert!(item.matches_lowercase("sets the width"));
        assert!(!item.matches_lowercase("height"));
    }

    #[test]
    fn test_indexed_class_json_keys() {
        let item = IndexedClass::new("flex", TranslationEntry::new("display: flex;", "Flex."));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"className":"flex","css":"display: flex;","description":"Flex."}"#
        );
    }
}
