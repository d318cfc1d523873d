use crate::domain::flux_ref::{parse_prefixed, FluxVersioned};
use crate::domain::prerelease::Identifier;
use crate::domain::version::{precedence, SemVer};
use std::cmp::Ordering;
use std::fmt;

pub const RELEASE_PREFIX: &str = "release-";

/// `release-X.Y.Z`: a published release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseTag {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ReleaseTag {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ReleaseTag {
            major,
            minor,
            patch,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let v = parse_prefixed(name, RELEASE_PREFIX)?;
        v.is_plain()
            .then(|| ReleaseTag::new(v.major, v.minor, v.patch))
    }
}

impl FluxVersioned for ReleaseTag {
    fn prefix(&self) -> &'static str {
        RELEASE_PREFIX
    }

    fn version(&self) -> SemVer {
        SemVer::new(self.major, self.minor, self.patch)
    }
}

/// `release-X.Y.Z-alpha.N`: the Nth alpha leading up to release `X.Y.Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrereleaseTag {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub alpha: u64,
}

impl PrereleaseTag {
    pub fn new(major: u64, minor: u64, patch: u64, alpha: u64) -> Self {
        PrereleaseTag {
            major,
            minor,
            patch,
            alpha,
        }
    }

    /// Parse `release-X.Y.Z-alpha.N`; the prerelease must be exactly `alpha.N`
    pub fn parse(name: &str) -> Option<Self> {
        let v = parse_prefixed(name, RELEASE_PREFIX)?;
        match (v.prerelease_identifiers(), &v.build) {
            ([Identifier::Alphanumeric(label), Identifier::Numeric(alpha)], None)
                if label == "alpha" =>
            {
                Some(PrereleaseTag::new(v.major, v.minor, v.patch, *alpha))
            }
            _ => None,
        }
    }
}

impl FluxVersioned for PrereleaseTag {
    fn prefix(&self) -> &'static str {
        RELEASE_PREFIX
    }

    fn version(&self) -> SemVer {
        SemVer::new(self.major, self.minor, self.patch).with_prerelease(vec![
            Identifier::alpha("alpha"),
            Identifier::Numeric(self.alpha),
        ])
    }
}

/// A tag following one of the flux naming conventions
///
/// Tags are totally ordered by the precedence of their versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluxTag {
    Release(ReleaseTag),
    Prerelease(PrereleaseTag),
}

impl FluxTag {
    pub fn parse(name: &str) -> Option<Self> {
        ReleaseTag::parse(name)
            .map(FluxTag::Release)
            .or_else(|| PrereleaseTag::parse(name).map(FluxTag::Prerelease))
    }
}

impl FluxVersioned for FluxTag {
    fn prefix(&self) -> &'static str {
        RELEASE_PREFIX
    }

    fn version(&self) -> SemVer {
        match self {
            FluxTag::Release(t) => t.version(),
            FluxTag::Prerelease(t) => t.version(),
        }
    }
}

/// Precedence order over tags, derived from their versions
pub fn tag_precedence(a: &FluxTag, b: &FluxTag) -> Ordering {
    precedence(&a.version(), &b.version())
}

impl Ord for FluxTag {
    fn cmp(&self, other: &Self) -> Ordering {
        tag_precedence(self, other)
    }
}

impl PartialOrd for FluxTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ref_name())
    }
}

impl fmt::Display for PrereleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ref_name())
    }
}

impl fmt::Display for FluxTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ref_name())
    }
}
