//! Analysis engine: ref selection, prior-release lookup and compatibility

pub mod compatibility;
pub mod legacy;
pub mod selection;
pub mod version_analyzer;

pub use compatibility::{
    decide_compatibility, parse_since_version, resolve_prior_release, CompatLevel, Compatibility,
    NoCompatReason,
};
pub use legacy::LegacyTagMapper;
pub use selection::select_current_ref;
pub use version_analyzer::{Derivation, VersionAnalyzer};
