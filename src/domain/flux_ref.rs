//! Flux refs: branch and tag names that embed a semantic version
//!
//! Four naming conventions are recognised:
//!
//! | Ref                     | Kind                                 |
//! |-------------------------|--------------------------------------|
//! | `develop-X.Y.Z`         | [`DevelopBranch`]                    |
//! | `topic-X.Y.Z-name`      | [`TopicBranch`]                      |
//! | `release-X.Y.Z`         | [`ReleaseTag`]                       |
//! | `release-X.Y.Z-alpha.N` | [`PrereleaseTag`]                    |
//!
//! A name that carries the right prefix but the wrong version shape is simply
//! not a match for that kind.

use crate::domain::branch::{DevelopBranch, FluxBranch, TopicBranch};
use crate::domain::tag::{FluxTag, PrereleaseTag, ReleaseTag};
use crate::domain::version::SemVer;
use std::fmt;

/// Accessors shared by every flux ref kind
pub trait FluxVersioned {
    /// Literal ref name prefix, e.g. `"develop-"`
    fn prefix(&self) -> &'static str;

    /// Full version embedded in the ref name
    fn version(&self) -> SemVer;

    /// Version this ref ultimately produces once any prerelease is dropped
    fn target_release_version(&self) -> SemVer {
        self.version().core()
    }

    /// Always `<prefix><version>`
    fn ref_name(&self) -> String {
        format!("{}{}", self.prefix(), self.version())
    }

    fn major(&self) -> u64 {
        self.version().major
    }

    fn minor(&self) -> u64 {
        self.version().minor
    }

    fn patch(&self) -> u64 {
        self.version().patch
    }
}

/// Strip `prefix` and parse the remainder as a version
pub(crate) fn parse_prefixed(name: &str, prefix: &str) -> Option<SemVer> {
    let rest = name.strip_prefix(prefix)?;
    SemVer::parse(rest).ok()
}

/// Any recognised branch or tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FluxRef {
    Branch(FluxBranch),
    Tag(FluxTag),
}

impl FluxRef {
    /// Classify a ref name, trying branch kinds before tag kinds
    pub fn parse(name: &str) -> Option<Self> {
        FluxBranch::parse(name)
            .map(FluxRef::Branch)
            .or_else(|| FluxTag::parse(name).map(FluxRef::Tag))
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, FluxRef::Branch(_))
    }
}

impl FluxVersioned for FluxRef {
    fn prefix(&self) -> &'static str {
        match self {
            FluxRef::Branch(b) => b.prefix(),
            FluxRef::Tag(t) => t.prefix(),
        }
    }

    fn version(&self) -> SemVer {
        match self {
            FluxRef::Branch(b) => b.version(),
            FluxRef::Tag(t) => t.version(),
        }
    }

    fn target_release_version(&self) -> SemVer {
        match self {
            FluxRef::Branch(b) => b.target_release_version(),
            FluxRef::Tag(t) => t.target_release_version(),
        }
    }
}

impl From<FluxBranch> for FluxRef {
    fn from(branch: FluxBranch) -> Self {
        FluxRef::Branch(branch)
    }
}

impl From<FluxTag> for FluxRef {
    fn from(tag: FluxTag) -> Self {
        FluxRef::Tag(tag)
    }
}

impl From<DevelopBranch> for FluxRef {
    fn from(branch: DevelopBranch) -> Self {
        FluxRef::Branch(FluxBranch::Develop(branch))
    }
}

impl From<TopicBranch> for FluxRef {
    fn from(branch: TopicBranch) -> Self {
        FluxRef::Branch(FluxBranch::Topic(branch))
    }
}

impl From<ReleaseTag> for FluxRef {
    fn from(tag: ReleaseTag) -> Self {
        FluxRef::Tag(FluxTag::Release(tag))
    }
}

impl From<PrereleaseTag> for FluxRef {
    fn from(tag: PrereleaseTag) -> Self {
        FluxRef::Tag(FluxTag::Prerelease(tag))
    }
}

impl fmt::Display for FluxRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ref_name())
    }
}
