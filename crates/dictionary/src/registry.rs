//! Ordered collection of pattern rules.

use twgloss_core::TranslationEntry;

use crate::generators;
use crate::rule::{Rule, RuleError};

/// Rules in precedence order. The first rule whose pattern matches a class
/// owns it: if that rule cannot resolve the class, no later rule is tried.
#[derive(Default)]
pub struct Registry {
    rules: Vec<Box<dyn Rule>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in rules. A rule whose pattern fails to compile is logged and
    /// left out; the rest still load.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for rule in generators::builtin() {
            match rule {
                Ok(rule) => registry.push(rule),
                Err(error) => tracing::warn!(%error, "Skipping rule"),
            }
        }
        registry
    }

    /// Built-in rules, failing on the first pattern that does not compile.
    pub fn try_builtin() -> Result<Self, RuleError> {
        let rules = generators::builtin()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Appends a rule with the lowest precedence.
    pub fn push(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref() as &dyn Rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules().find(|rule| rule.name() == name)
    }

    /// The rule that owns `class`, if any.
    pub fn matching_rule(&self, class: &str) -> Option<&dyn Rule> {
        self.rules().find(|rule| rule.matches(class))
    }

    /// Resolves through the first rule that claims `class`, matching each
    /// pattern once.
    pub fn resolve(&self, class: &str) -> Option<TranslationEntry> {
        self.rules().find_map(|rule| {
            let entry = rule.try_resolve(class)?;
            tracing::trace!(class, rule = rule.name(), resolved = entry.is_some(), "Pattern match");
            Some(entry)
        })
        .flatten()
    }

    /// Materializes a rule's enumeration into resolved entries.
    ///
    /// Keys whose class the rule does not resolve are logged and skipped.
    pub fn enumerate(&self, rule: &dyn Rule) -> Vec<(String, TranslationEntry)> {
        let Some(enumeration) = rule.enumeration() else {
            return Vec::new();
        };
        enumeration
            .class_names()
            .filter_map(|class| match rule.resolve(&class) {
                Some(entry) => Some((class, entry)),
                None => {
                    tracing::warn!(rule = rule.name(), class = %class, "Enumerated class does not resolve");
                    None
                }
            })
            .collect()
    }

    /// [`Registry::enumerate`] over every rule, in precedence order.
    pub fn enumerate_all(&self) -> Vec<(String, TranslationEntry)> {
        self.rules().flat_map(|rule| self.enumerate(rule)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Enumeration, Generator};
    use pretty_assertions::assert_eq;

    fn claims_everything(_: &crate::rule::RuleMatch<'_>) -> Option<TranslationEntry> {
        None
    }

    fn resolves_everything(m: &crate::rule::RuleMatch<'_>) -> Option<TranslationEntry> {
        Some(TranslationEntry::new("", m.class()))
    }

    #[test]
    fn test_builtin_loads_every_rule() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), generators::builtin().len());
        assert!(Registry::try_builtin().is_ok());
    }

    #[test]
    fn test_first_match_wins_without_fallthrough() {
        let mut registry = Registry::new();
        registry.push(Box::new(Generator::new("first", "^x-", claims_everything).unwrap()));
        registry.push(Box::new(Generator::new("second", "^x-", resolves_everything).unwrap()));

        assert_eq!(registry.matching_rule("x-1").map(|r| r.name()), Some("first"));
        assert_eq!(registry.resolve("x-1"), None);
    }

    #[test]
    fn test_unmatched_class() {
        let registry = Registry::builtin();
        assert!(registry.matching_rule("totally-not-a-class").is_none());
        assert_eq!(registry.resolve("totally-not-a-class"), None);
    }

    #[test]
    fn test_palette_color_claims_unknown_hue() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.matching_rule("bg-notacolor-500").map(|r| r.name()),
            Some("color")
        );
        assert_eq!(registry.resolve("bg-notacolor-500"), None);
    }

    fn digits_only(m: &crate::rule::RuleMatch<'_>) -> Option<TranslationEntry> {
        let n = m.group(1)?;
        if n == "0" {
            return None;
        }
        Some(TranslationEntry::new(format!("n: {};", n), ""))
    }

    #[test]
    fn test_enumerate_skips_keys_that_do_not_resolve() {
        let registry = Registry::new();
        let rule = Generator::new("n", r"^n-(\d+)$", digits_only)
            .unwrap()
            .with_enumeration(Enumeration::new("n-", ["1", "x", "2", "0", "3"]));

        let classes: Vec<String> = registry
            .enumerate(&rule)
            .into_iter()
            .map(|(class, _)| class)
            .collect();
        assert_eq!(classes, vec!["n-1", "n-2", "n-3"]);
    }

    #[test]
    fn test_claimed_class_resolves_through_single_rule() {
        let mut registry = Registry::new();
        registry.push(Box::new(Generator::new("n", r"^n-(\d+)$", digits_only).unwrap()));
        registry.push(Box::new(Generator::new("any", "^n-", resolves_everything).unwrap()));

        assert_eq!(registry.resolve("n-0"), None);
        assert_eq!(registry.resolve("n-4").map(|e| e.css), Some("n: 4;".to_string()));
        assert_eq!(registry.resolve("n-x").map(|e| e.description), Some("n-x".to_string()));
    }

    #[test]
    fn test_enumerate_without_enumeration_is_empty() {
        let registry = Registry::new();
        let rule = Generator::new("bare", "^bare$", resolves_everything).unwrap();
        assert!(registry.enumerate(&rule).is_empty());
    }

    #[test]
    fn test_get_by_name() {
        let registry = Registry::builtin();
        assert_eq!(registry.get("opacity").map(|r| r.name()), Some("opacity"));
        assert!(registry.get("nope").is_none());
    }
}
