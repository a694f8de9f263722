//! Utility class resolution: static dictionary, pattern rules, the
//! [`Translator`] facade and the [`ReverseIndex`] built from them.

pub mod colors;
pub mod generators;
pub mod registry;
pub mod reverse;
pub mod rule;
pub mod static_dict;
pub mod theme_values;
pub mod translator;

pub use registry::Registry;
pub use reverse::ReverseIndex;
pub use rule::{Enumeration, Generator, Rule, RuleError, RuleMatch};
pub use static_dict::StaticDictionary;
pub use translator::{Translator, TranslatorOptions};
pub use twgloss_core::{IndexedClass, TranslationEntry};
