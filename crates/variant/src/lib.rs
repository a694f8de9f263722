//! Variant prefix handling: splitting `md:hover:bg-blue-500` into its
//! breakpoint, state prefixes and core class, and phrasing the prefixes.

pub mod decompose;
pub mod prefix_map;

pub use decompose::{compose_description, Decomposer, Decomposition, Variant};
pub use prefix_map::VariantPrefixMap;
