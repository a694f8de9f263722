//! Single-class lookup: variant decomposition, then static dictionary, then
//! pattern rules.

use serde::{Deserialize, Serialize};
use twgloss_core::{split_class_list, TranslationEntry};
use twgloss_variant::{Decomposer, Decomposition};

use crate::registry::Registry;
use crate::static_dict::StaticDictionary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorOptions {
    /// Prepend variant fragments ("when hovered, ") to descriptions.
    pub describe_variants: bool,
    /// Cap on reverse search results. `None` returns every match.
    pub max_search_results: Option<usize>,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            describe_variants: true,
            max_search_results: None,
        }
    }
}

/// Turns raw class tokens into [`TranslationEntry`] values.
///
/// Immutable once built; share it by reference.
#[derive(Debug)]
pub struct Translator {
    dictionary: StaticDictionary,
    registry: Registry,
    decomposer: Decomposer,
    options: TranslatorOptions,
}

impl Translator {
    /// Built-in dictionary, rules and variant prefixes with default options.
    pub fn new() -> Self {
        Self {
            dictionary: StaticDictionary::new(),
            registry: Registry::builtin(),
            decomposer: Decomposer::default(),
            options: TranslatorOptions::default(),
        }
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_decomposer(mut self, decomposer: Decomposer) -> Self {
        self.decomposer = decomposer;
        self
    }

    pub fn with_options(mut self, options: TranslatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn describe_variants(mut self, enabled: bool) -> Self {
        self.options.describe_variants = enabled;
        self
    }

    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    pub fn dictionary(&self) -> &StaticDictionary {
        &self.dictionary
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolves a class with no variant prefixes: static first, then the
    /// first matching rule.
    pub fn resolve_core(&self, core: &str) -> Option<TranslationEntry> {
        if let Some(entry) = self.dictionary.lookup(core) {
            return Some(entry);
        }
        self.registry.resolve(core)
    }

    /// Resolves one raw class token, variant prefixes included.
    ///
    /// ```
    /// use twgloss_dictionary::Translator;
    ///
    /// let translator = Translator::new();
    /// let entry = translator.translate("-mt-4").unwrap();
    /// assert_eq!(entry.css, "margin-top: -1rem;");
    /// assert!(translator.translate("totally-not-a-class").is_none());
    /// ```
    pub fn translate(&self, raw: &str) -> Option<TranslationEntry> {
        let raw = raw.trim();
        let decomposition = self.decomposer.decompose(raw);
        if decomposition.core.is_empty() {
            tracing::debug!(class = raw, "No core class after variant prefixes");
            return None;
        }

        let Some(entry) = self.resolve_core(&decomposition.core) else {
            tracing::debug!(class = raw, core = %decomposition.core, "Unresolved class");
            return None;
        };
        let description = self.decorate(&decomposition, &entry.description);
        Some(entry.with_description(description))
    }

    /// Translates every whitespace-separated token, in order. Duplicates
    /// are kept.
    pub fn translate_list<'a>(&self, text: &'a str) -> Vec<(&'a str, Option<TranslationEntry>)> {
        split_class_list(text)
            .into_iter()
            .map(|class| (class, self.translate(class)))
            .collect()
    }

    pub fn decompose(&self, raw: &str) -> Decomposition {
        self.decomposer.decompose(raw.trim())
    }

    /// Applies the variant fragments of `decomposition` to a core
    /// description, unless variant descriptions are turned off.
    pub fn decorate(&self, decomposition: &Decomposition, description: &str) -> String {
        if self.options.describe_variants {
            decomposition.decorate(description)
        } else {
            description.to_string()
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_static_entry() {
        let entry = Translator::new().translate("flex").unwrap();
        assert_eq!(entry.css, "display: flex;");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let translator = Translator::new();
        assert_eq!(translator.translate("  flex "), translator.translate("flex"));
    }

    #[test]
    fn test_all_prefix_input_is_unresolved() {
        let translator = Translator::new();
        assert_eq!(translator.translate("hover:"), None);
        assert_eq!(translator.translate("md:hover:"), None);
        assert_eq!(translator.translate(""), None);
    }

    #[test]
    fn test_variant_descriptions_can_be_disabled() {
        let plain = Translator::new().describe_variants(false);
        let decorated = Translator::new();
        let a = plain.translate("hover:flex").unwrap();
        let b = decorated.translate("hover:flex").unwrap();
        assert_eq!(a.css, b.css);
        assert_eq!(a.description, plain.translate("flex").unwrap().description);
        assert!(b.description.starts_with("When hovered, "));
    }

    #[test]
    fn test_translate_list_keeps_order_and_duplicates() {
        let translator = Translator::new();
        let results = translator.translate_list(" flex  nope\tflex ");
        let classes: Vec<&str> = results.iter().map(|(class, _)| *class).collect();
        assert_eq!(classes, vec!["flex", "nope", "flex"]);
        assert!(results[0].1.is_some());
        assert!(results[1].1.is_none());
        assert_eq!(results[0].1, results[2].1);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: TranslatorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TranslatorOptions::default());

        let options: TranslatorOptions =
            serde_json::from_str(r#"{"describeVariants":false,"maxSearchResults":5}"#).unwrap();
        assert!(!options.describe_variants);
        assert_eq!(options.max_search_results, Some(5));
    }
}
