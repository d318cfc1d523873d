//! Prior-release resolution and the compatibility decision table

use crate::boundary::BoundaryWarning;
use crate::domain::{precedence, FluxTag, FluxVersioned, ReleaseTag, SemVer};
use std::fmt;
use tracing::{debug, warn};

/// How strictly a release must match the prior one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompatLevel {
    BinaryCompatible,
    /// Implies [`CompatLevel::BinaryCompatible`]
    BinaryAndSourceCompatible,
}

impl CompatLevel {
    /// Whether satisfying `self` also satisfies `other`
    pub fn implies(self, other: CompatLevel) -> bool {
        self >= other
    }
}

impl fmt::Display for CompatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatLevel::BinaryCompatible => write!(f, "binary compatible"),
            CompatLevel::BinaryAndSourceCompatible => write!(f, "binary and source compatible"),
        }
    }
}

/// Why no compatibility guarantee is required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoCompatReason {
    NotPlainRelease,
    FirstUnstableRelease,
    FirstMajorRelease,
    NoPriorRelease,
    PriorOutsideSeries,
    IntroducedAfterPrior,
}

impl fmt::Display for NoCompatReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            NoCompatReason::NotPlainRelease => "not a plain release version",
            NoCompatReason::FirstUnstableRelease => "first release of an unstable 0.y series",
            NoCompatReason::FirstMajorRelease => "first release of a new major series",
            NoCompatReason::NoPriorRelease => "no prior release exists",
            NoCompatReason::PriorOutsideSeries => "prior release is outside this series",
            NoCompatReason::IntroducedAfterPrior => "artifact did not exist in prior release",
        };
        write!(f, "{}", msg)
    }
}

/// Outcome of the compatibility decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    NoCompat(NoCompatReason),
    Require { level: CompatLevel, against: SemVer },
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compatibility::NoCompat(reason) => write!(f, "no compatibility required ({})", reason),
            Compatibility::Require { level, against } => {
                write!(f, "must be {} with {}", level, against)
            }
        }
    }
}

/// Find the latest release not exceeding `target`.
///
/// Release tags count, alpha tags never do, and names outside the flux
/// conventions are offered to `legacy`.
pub fn resolve_prior_release<S, F>(all_tags: &[S], legacy: F, target: &SemVer) -> Option<SemVer>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<ReleaseTag>,
{
    let mut releases: Vec<SemVer> = all_tags
        .iter()
        .map(|name| name.as_ref())
        .filter_map(|name| match FluxTag::parse(name) {
            Some(FluxTag::Release(tag)) => Some(tag),
            Some(FluxTag::Prerelease(_)) => None,
            None => legacy(name),
        })
        .map(|tag| tag.version())
        .collect();
    releases.sort_by(precedence);
    releases.dedup();

    let prior = releases
        .into_iter()
        .rev()
        .find(|v| precedence(v, target).is_le());
    debug!(
        target_version = %target,
        prior = ?prior.as_ref().map(|v| v.to_string()),
        "resolved prior release"
    );
    prior
}

/// Classify the compatibility `current` owes to `prior`.
///
/// `since` is the version the artifact first appeared in, if known.
pub fn decide_compatibility(
    current: &SemVer,
    prior: Option<&SemVer>,
    since: Option<&SemVer>,
) -> Compatibility {
    let (major, minor, patch) = (current.major, current.minor, current.patch);

    if current.build.is_some() {
        Compatibility::NoCompat(NoCompatReason::NotPlainRelease)
    } else if major == 0 && patch == 0 {
        Compatibility::NoCompat(NoCompatReason::FirstUnstableRelease)
    } else if major > 0 && minor == 0 && patch == 0 {
        Compatibility::NoCompat(NoCompatReason::FirstMajorRelease)
    } else if patch == 0 {
        handle_prior(
            SemVer::new(major, minor - 1, 0),
            CompatLevel::BinaryCompatible,
            prior,
            since,
        )
    } else {
        handle_prior(
            SemVer::new(major, minor, 0),
            CompatLevel::BinaryAndSourceCompatible,
            prior,
            since,
        )
    }
}

fn handle_prior(
    first_version: SemVer,
    level: CompatLevel,
    prior: Option<&SemVer>,
    since: Option<&SemVer>,
) -> Compatibility {
    match prior {
        None => Compatibility::NoCompat(NoCompatReason::NoPriorRelease),
        Some(p) if precedence(p, &first_version).is_lt() => {
            Compatibility::NoCompat(NoCompatReason::PriorOutsideSeries)
        }
        Some(p) if since.is_some_and(|s| precedence(s, p).is_gt()) => {
            Compatibility::NoCompat(NoCompatReason::IntroducedAfterPrior)
        }
        Some(p) => Compatibility::Require {
            level,
            against: p.clone(),
        },
    }
}

/// Parse a configured "introduced since" version.
///
/// Anything but a bare `X.Y.Z` is logged, reported as a warning and ignored.
pub fn parse_since_version(value: &str) -> (Option<SemVer>, Option<BoundaryWarning>) {
    let reason = match SemVer::parse(value) {
        Ok(v) if v.is_plain() => return (Some(v), None),
        Ok(_) => "prerelease and build metadata are not allowed".to_string(),
        Err(e) => e.to_string(),
    };
    warn!(value, %reason, "ignoring malformed 'since' version");
    (
        None,
        Some(BoundaryWarning::MalformedSinceVersion {
            value: value.to_string(),
            reason,
        }),
    )
}
