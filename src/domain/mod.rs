//! Domain logic - pure naming and versioning rules independent of git operations

pub mod branch;
pub mod flux_ref;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use branch::{DevelopBranch, FluxBranch, TopicBranch};
pub use flux_ref::{FluxRef, FluxVersioned};
pub use prerelease::{parse_prerelease, Identifier};
pub use tag::{tag_precedence, FluxTag, PrereleaseTag, ReleaseTag};
pub use version::{precedence, SemVer};
