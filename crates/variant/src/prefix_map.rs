use indexmap::IndexMap;

/// Ordered mapping from a colon-terminated variant prefix to the phrase that
/// describes it.
///
/// Lookup walks entries in declaration order and the first prefix the input
/// starts with wins. Because every prefix ends in `:`, no registered prefix
/// can shadow a longer one (`focus:` never matches `focus-within:p-4`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantPrefixMap {
    entries: IndexMap<String, String>,
}

impl VariantPrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prefix. Prefixes without the trailing `:` are rejected and
    /// `false` is returned; re-inserting an existing prefix replaces its
    /// fragment but keeps its position.
    pub fn insert(&mut self, prefix: impl Into<String>, fragment: impl Into<String>) -> bool {
        let prefix = prefix.into();
        if prefix.len() < 2 || !prefix.ends_with(':') {
            tracing::warn!(prefix = %prefix, "Variant prefix must end with ':'");
            return false;
        }
        self.entries.insert(prefix, fragment.into());
        true
    }

    /// Breakpoint prefixes. At most one applies to a class.
    pub fn responsive() -> Self {
        RESPONSIVE_PREFIXES.iter().copied().collect()
    }

    /// Interaction, structural, pseudo-element and media prefixes. Any number
    /// may stack.
    pub fn states() -> Self {
        STATE_PREFIXES.iter().copied().collect()
    }

    /// Returns the first declared `(prefix, fragment)` that `input` starts with.
    pub fn match_prefix(&self, input: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .find(|(prefix, _)| input.starts_with(prefix.as_str()))
            .map(|(prefix, fragment)| (prefix.as_str(), fragment.as_str()))
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, f)| (p.as_str(), f.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for VariantPrefixMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (prefix, fragment) in iter {
            map.insert(prefix, fragment);
        }
        map
    }
}

const RESPONSIVE_PREFIXES: &[(&str, &str)] = &[
    ("sm:", "at the sm breakpoint (640px) and wider, "),
    ("md:", "at the md breakpoint (768px) and wider, "),
    ("lg:", "at the lg breakpoint (1024px) and wider, "),
    ("xl:", "at the xl breakpoint (1280px) and wider, "),
    ("2xl:", "at the 2xl breakpoint (1536px) and wider, "),
];

const STATE_PREFIXES: &[(&str, &str)] = &[
    // Pseudo-classes
    ("hover:", "when hovered, "),
    ("focus:", "when focused, "),
    ("focus-within:", "when the element or a descendant has focus, "),
    ("focus-visible:", "when focused via keyboard, "),
    ("active:", "while being pressed, "),
    ("visited:", "for visited links, "),
    ("target:", "when it is the URL fragment target, "),
    ("disabled:", "when disabled, "),
    ("enabled:", "when enabled, "),
    ("checked:", "when checked, "),
    ("indeterminate:", "when in the indeterminate state, "),
    ("required:", "when required, "),
    ("invalid:", "when the value is invalid, "),
    ("placeholder-shown:", "while the placeholder is shown, "),
    ("read-only:", "when read-only, "),
    ("first:", "for the first child, "),
    ("last:", "for the last child, "),
    ("only:", "for an only child, "),
    ("odd:", "for odd children, "),
    ("even:", "for even children, "),
    ("first-of-type:", "for the first of its type, "),
    ("last-of-type:", "for the last of its type, "),
    ("empty:", "when it has no children, "),
    ("open:", "when open, "),
    // Parent and sibling state
    ("group-hover:", "when the parent group is hovered, "),
    ("group-focus:", "when the parent group is focused, "),
    ("peer-hover:", "when the preceding peer is hovered, "),
    ("peer-focus:", "when the preceding peer is focused, "),
    ("peer-checked:", "when the preceding peer is checked, "),
    // Pseudo-elements
    ("before:", "on the ::before pseudo-element, "),
    ("after:", "on the ::after pseudo-element, "),
    ("placeholder:", "on the placeholder text, "),
    ("file:", "on the file input button, "),
    ("marker:", "on list markers, "),
    ("selection:", "on selected text, "),
    ("first-line:", "on the first line of text, "),
    ("first-letter:", "on the first letter, "),
    // Media and environment
    ("dark:", "in dark mode, "),
    ("motion-safe:", "when motion is allowed, "),
    ("motion-reduce:", "when reduced motion is preferred, "),
    ("print:", "when printing, "),
    ("portrait:", "in portrait orientation, "),
    ("landscape:", "in landscape orientation, "),
    ("contrast-more:", "when more contrast is requested, "),
    ("rtl:", "in right-to-left layouts, "),
    ("ltr:", "in left-to-right layouts, "),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_maps_are_disjoint() {
        let responsive = VariantPrefixMap::responsive();
        let states = VariantPrefixMap::states();
        assert_eq!(responsive.len(), 5);
        for (prefix, _) in responsive.iter() {
            assert!(!states.contains(prefix), "{} is in both maps", prefix);
        }
    }

    #[test]
    fn test_every_prefix_ends_with_colon() {
        for map in [VariantPrefixMap::responsive(), VariantPrefixMap::states()] {
            for (prefix, fragment) in map.iter() {
                assert!(prefix.ends_with(':'), "{}", prefix);
                assert!(!fragment.is_empty(), "{}", prefix);
            }
        }
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let map = VariantPrefixMap::responsive();
        let prefixes: Vec<&str> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, vec!["sm:", "md:", "lg:", "xl:", "2xl:"]);
    }

    #[test]
    fn test_match_prefix_respects_delimiter() {
        let states = VariantPrefixMap::states();
        assert_eq!(
            states.match_prefix("focus-within:p-4").map(|(p, _)| p),
            Some("focus-within:")
        );
        assert_eq!(states.match_prefix("focus:p-4").map(|(p, _)| p), Some("focus:"));
        assert_eq!(states.match_prefix("hoverp-4"), None);
    }

    #[test]
    fn test_insert_rejects_missing_delimiter() {
        let mut map = VariantPrefixMap::new();
        assert!(!map.insert("hover", "when hovered, "));
        assert!(!map.insert(":", "nothing"));
        assert!(map.insert("hover:", "when hovered, "));
        assert_eq!(map.get("hover:"), Some("when hovered, "));
        assert_eq!(map.len(), 1);
    }
}
