use serde::{Deserialize, Serialize};

use crate::prefix_map::VariantPrefixMap;

/// A variant prefix peeled off a class, with its description fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub prefix: String,
    pub fragment: String,
}

impl Variant {
    fn new(prefix: &str, fragment: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            fragment: fragment.to_string(),
        }
    }
}

/// A raw class split into its variant prefixes and core class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Breakpoint prefix, if any.
    pub responsive: Option<Variant>,
    /// State prefixes in the order they were peeled.
    pub states: Vec<Variant>,
    /// What is left once no registered prefix matches. May be empty.
    pub core: String,
}

impl Decomposition {
    pub fn has_variants(&self) -> bool {
        self.responsive.is_some() || !self.states.is_empty()
    }

    /// Fragments in composition order: responsive first, then states.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.responsive
            .iter()
            .chain(self.states.iter())
            .map(|v| v.fragment.as_str())
    }

    /// Prefixes joined back together, e.g. `"md:hover:"`.
    pub fn prefix(&self) -> String {
        self.responsive
            .iter()
            .chain(self.states.iter())
            .map(|v| v.prefix.as_str())
            .collect()
    }

    /// Prepends this decomposition's fragments to a core description.
    pub fn decorate(&self, description: &str) -> String {
        let fragments: Vec<&str> = self.fragments().collect();
        compose_description(&fragments, description)
    }
}

/// Splits raw class names into variants and a core name.
#[derive(Debug, Clone)]
pub struct Decomposer {
    responsive: VariantPrefixMap,
    states: VariantPrefixMap,
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new(VariantPrefixMap::responsive(), VariantPrefixMap::states())
    }
}

impl Decomposer {
    pub fn new(responsive: VariantPrefixMap, states: VariantPrefixMap) -> Self {
        Self { responsive, states }
    }

    pub fn responsive(&self) -> &VariantPrefixMap {
        &self.responsive
    }

    pub fn states(&self) -> &VariantPrefixMap {
        &self.states
    }

    /// Peels at most one breakpoint prefix, then state prefixes until none
    /// matches.
    ///
    /// A breakpoint prefix after a state prefix is not recognized, so
    /// `hover:md:p-4` keeps `md:p-4` as its core.
    ///
    /// ```
    /// use twgloss_variant::Decomposer;
    ///
    /// let d = Decomposer::default().decompose("md:dark:hover:bg-blue-500");
    /// assert_eq!(d.core, "bg-blue-500");
    /// assert_eq!(d.prefix(), "md:dark:hover:");
    /// ```
    pub fn decompose(&self, raw: &str) -> Decomposition {
        let (responsive, mut rest) = match self.responsive.match_prefix(raw) {
            Some((prefix, fragment)) => (Some(Variant::new(prefix, fragment)), &raw[prefix.len()..]),
            None => (None, raw),
        };

        let mut states = Vec::new();
        while let Some((prefix, fragment)) = self.states.match_prefix(rest) {
            states.push(Variant::new(prefix, fragment));
            rest = &rest[prefix.len()..];
        }

        tracing::trace!(raw, core = rest, stacked = states.len(), "Decomposed class");

        Decomposition {
            responsive,
            states,
            core: rest.to_string(),
        }
    }
}

/// Joins fragments and a core description into one sentence.
///
/// The core description's first letter is lower-cased so it reads as a
/// continuation, and the result's first letter is upper-cased. Leading
/// acronyms such as `CSS` are left alone. Without fragments the description
/// is returned unchanged.
pub fn compose_description(fragments: &[&str], description: &str) -> String {
    if fragments.is_empty() {
        return description.to_string();
    }

    let mut composed: String = fragments.concat();
    composed.push_str(&lowercase_first(description));
    uppercase_first(&composed)
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        // Acronym: keep as written
        (Some(_), Some(second)) if second.is_uppercase() => s.to_string(),
        (Some(first), _) => {
            let mut out: String = first.to_lowercase().collect();
            out.push_str(&s[first.len_utf8()..]);
            out
        }
        (None, _) => String::new(),
    }
}

fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
