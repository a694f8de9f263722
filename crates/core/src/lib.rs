pub mod normalize;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use normalize::split_class_list;
pub use types::{Declaration, IndexedClass, TranslationEntry};
