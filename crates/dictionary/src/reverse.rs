//! Materialized index of every class the dictionary and enumerable rules
//! can produce, for free-text search.

use indexmap::IndexMap;
use twgloss_core::{IndexedClass, TranslationEntry};

use crate::translator::Translator;

#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    /// Keyed by class name, in build order.
    items: IndexMap<String, IndexedClass>,
    max_results: Option<usize>,
}

impl ReverseIndex {
    /// Static entries in declaration order, then each enumerable rule's
    /// classes in registry order.
    ///
    /// A class is indexed only when the rule that enumerates it is also the
    /// one that would resolve it, so every item equals what
    /// [`Translator::translate`] returns for the same name.
    pub fn build(translator: &Translator) -> Self {
        let dictionary = translator.dictionary();
        let registry = translator.registry();

        let mut items: IndexMap<String, IndexedClass> = IndexMap::with_capacity(dictionary.len());
        let mut push = |class: String, entry: TranslationEntry| {
            if items.contains_key(&class) {
                return;
            }
            let decomposition = translator.decompose(&class);
            let description = translator.decorate(&decomposition, &entry.description);
            let item = IndexedClass::new(class.clone(), entry.with_description(description));
            items.insert(class, item);
        };

        for (class, entry) in dictionary.iter() {
            push(class.to_string(), entry);
        }

        for rule in registry.rules() {
            for (class, entry) in registry.enumerate(rule) {
                if dictionary.contains(&class) {
                    continue;
                }
                let owner = registry.matching_rule(&class).map(|r| r.name());
                if owner != Some(rule.name()) {
                    tracing::debug!(class = %class, rule = rule.name(), ?owner, "Enumerated class is shadowed");
                    continue;
                }
                push(class, entry);
            }
        }

        tracing::debug!(
            total = items.len(),
            static_count = dictionary.len(),
            rules = registry.len(),
            "Built reverse index"
        );

        Self {
            items,
            max_results: translator.options().max_search_results,
        }
    }

    /// Case-insensitive substring search over class name, css and
    /// description. A blank term finds nothing.
    pub fn search(&self, term: &str) -> Vec<&IndexedClass> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.items
            .values()
            .filter(|item| item.matches_lowercase(&needle))
            .take(self.max_results.unwrap_or(usize::MAX))
            .collect()
    }

    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedClass> {
        self.items.values()
    }

    pub fn get(&self, class: &str) -> Option<&IndexedClass> {
        self.items.get(class)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let items: Vec<&IndexedClass> = self.items.values().collect();
        serde_json::to_string(&items)
    }

    /// Short digest of every item in order: `ri_` plus 12 hex digits.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for item in self.items.values() {
            for field in [&item.class_name, &item.css, &item.description] {
                hasher.update(field.as_bytes());
                hasher.update(&[0]);
            }
        }
        let hex = format!("{}", hasher.finalize());
        format!("ri_{}", &hex[..12])
    }
}
