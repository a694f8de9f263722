use regex::{Captures, Regex};
use twgloss_core::TranslationEntry;

/// A pattern-driven resolver for one family of utility classes.
///
/// The registry only depends on this trait; concrete families are built
/// from [`Generator`].
pub trait Rule: Send + Sync {
    /// Stable identifier, used in logs and lookups.
    fn name(&self) -> &str;

    fn pattern(&self) -> &Regex;

    /// Whether this rule claims `class`. A claimed class is never offered
    /// to later rules, even when [`Rule::resolve`] then yields nothing.
    fn matches(&self, class: &str) -> bool {
        self.pattern().is_match(class)
    }

    /// Resolves a core class name. `None` when the pattern does not match or
    /// the matched parameters have no meaning (unknown color, negative
    /// padding, ...).
    fn resolve(&self, class: &str) -> Option<TranslationEntry>;

    /// [`Rule::matches`] and [`Rule::resolve`] in one step: `None` when the
    /// class is not claimed, `Some(None)` when it is claimed but has no
    /// meaning.
    fn try_resolve(&self, class: &str) -> Option<Option<TranslationEntry>> {
        if self.matches(class) {
            Some(self.resolve(class))
        } else {
            None
        }
    }

    /// Finite key set for reverse-index materialization, if any.
    fn enumeration(&self) -> Option<&Enumeration> {
        None
    }
}

/// Regex captures of a class matched by a [`Generator`].
pub struct RuleMatch<'a> {
    class: &'a str,
    captures: Captures<'a>,
}

impl<'a> RuleMatch<'a> {
    /// The full core class name.
    pub fn class(&self) -> &'a str {
        self.class
    }

    /// Capture group `i`, if it participated in the match.
    pub fn group(&self, i: usize) -> Option<&'a str> {
        self.captures.get(i).map(|m| m.as_str())
    }

    pub fn name(&self, name: &str) -> Option<&'a str> {
        self.captures.name(name).map(|m| m.as_str())
    }

    /// True when group `i` matched a non-empty string.
    pub fn has(&self, i: usize) -> bool {
        self.group(i).is_some_and(|s| !s.is_empty())
    }
}

/// How to rebuild class names from enumeration keys:
/// `prefix + key + suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    pub prefix: String,
    pub keys: Vec<String>,
    pub suffix: String,
}

impl Enumeration {
    pub fn new<I, S>(prefix: &str, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.to_string(),
            keys: keys.into_iter().map(Into::into).collect(),
            suffix: String::new(),
        }
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    /// Synthesized class names, in key order.
    pub fn class_names(&self) -> impl Iterator<Item = String> + '_ {
        self.keys
            .iter()
            .map(move |key| format!("{}{}{}", self.prefix, key, self.suffix))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A rule whose pattern failed to compile.
#[derive(Debug)]
pub struct RuleError {
    pub rule: String,
    pub source: regex::Error,
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid pattern for rule '{}': {}", self.rule, self.source)
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

pub type PlainResolve = fn(&RuleMatch<'_>) -> Option<TranslationEntry>;
pub type DataResolve<D> = fn(&RuleMatch<'_>, &D) -> Option<TranslationEntry>;

enum Resolver<D: 'static> {
    Plain(PlainResolve),
    /// Looks up capture group 1 in the table before calling the function.
    Data(&'static phf::OrderedMap<&'static str, D>, DataResolve<D>),
}

/// The standard [`Rule`]: an anchored regex plus a pure resolve function,
/// optionally backed by a data table keyed by capture group 1.
pub struct Generator<D: 'static = ()> {
    name: &'static str,
    pattern: Regex,
    resolver: Resolver<D>,
    enumeration: Option<Enumeration>,
}

impl Generator<()> {
    pub fn new(name: &'static str, pattern: &str, resolve: PlainResolve) -> Result<Self, RuleError> {
        Ok(Self {
            name,
            pattern: compile(name, pattern)?,
            resolver: Resolver::Plain(resolve),
            enumeration: None,
        })
    }
}

impl<D: 'static> Generator<D> {
    pub fn data_backed(
        name: &'static str,
        pattern: &str,
        data: &'static phf::OrderedMap<&'static str, D>,
        resolve: DataResolve<D>,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            name,
            pattern: compile(name, pattern)?,
            resolver: Resolver::Data(data, resolve),
            enumeration: None,
        })
    }

    pub fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = Some(enumeration);
        self
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError {
        rule: name.to_string(),
        source,
    })
}

impl<D: Send + Sync + 'static> Rule for Generator<D> {
    fn name(&self) -> &str {
        self.name
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn resolve(&self, class: &str) -> Option<TranslationEntry> {
        self.try_resolve(class).flatten()
    }

    fn try_resolve(&self, class: &str) -> Option<Option<TranslationEntry>> {
        let captures = self.pattern.captures(class)?;
        Some(self.resolve_match(&RuleMatch { class, captures }))
    }

    fn enumeration(&self) -> Option<&Enumeration> {
        self.enumeration.as_ref()
    }
}

impl<D: 'static> Generator<D> {
    fn resolve_match(&self, m: &RuleMatch<'_>) -> Option<TranslationEntry> {
        match &self.resolver {
            Resolver::Plain(resolve) => resolve(m),
            Resolver::Data(data, resolve) => {
                let key = m.group(1).unwrap_or("");
                match data.get(key) {
                    Some(item) => resolve(m, item),
                    None => {
                        tracing::warn!(rule = self.name, key, "No data item for matched key");
                        None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phf::phf_ordered_map;
    use pretty_assertions::assert_eq;

    static SIZES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
        "sm" => "1px",
        "lg" => "2px",
    };

    fn outline(m: &RuleMatch<'_>) -> Option<TranslationEntry> {
        Some(TranslationEntry::new(
            format!("outline-width: {}px;", m.group(1)?),
            "Sets the outline width.",
        ))
    }

    fn sized(_: &RuleMatch<'_>, value: &&'static str) -> Option<TranslationEntry> {
        Some(TranslationEntry::new(format!("size: {};", value), ""))
    }

    #[test]
    fn test_plain_generator() {
        let rule = Generator::new("outline", r"^outline-(\d+)$", outline).unwrap();
        assert!(rule.matches("outline-2"));
        assert_eq!(
            rule.resolve("outline-2").map(|e| e.css),
            Some("outline-width: 2px;".to_string())
        );
        assert_eq!(rule.resolve("outline-x"), None);
    }

    #[test]
    fn test_data_backed_generator() {
        let rule = Generator::data_backed("size", r"^size-(\w+)$", &SIZES, sized).unwrap();
        assert_eq!(rule.resolve("size-lg").map(|e| e.css), Some("size: 2px;".into()));
        // Matches the pattern but has no data item
        assert!(rule.matches("size-xl"));
        assert_eq!(rule.resolve("size-xl"), None);
    }

    #[test]
    fn test_try_resolve_separates_claimed_from_unresolved() {
        let rule = Generator::data_backed("size", r"^size-(\w+)$", &SIZES, sized).unwrap();
        assert_eq!(rule.try_resolve("width-lg"), None);
        assert_eq!(rule.try_resolve("size-xl"), Some(None));
        assert_eq!(
            rule.try_resolve("size-sm").flatten().map(|e| e.css),
            Some("size: 1px;".to_string())
        );
    }

    #[test]
    fn test_invalid_pattern_reports_rule_name() {
        let err = Generator::new("broken", r"^(unclosed$", outline).err().unwrap();
        assert_eq!(err.rule, "broken");
        assert!(err.to_string().starts_with("Invalid pattern for rule 'broken'"));
    }

    #[test]
    fn test_enumeration_class_names() {
        let e = Enumeration::new("text-", ["xs", "sm"]).with_suffix("/4");
        let names: Vec<String> = e.class_names().collect();
        assert_eq!(names, vec!["text-xs/4", "text-sm/4"]);
        assert_eq!(e.len(), 2);
    }
}
