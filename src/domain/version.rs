//! Semantic version model, parser and precedence ordering
//!
//! Grammar (ordered choice, whitespace significant, total over the input):
//!
//! ```text
//! semver     := core ('-' prerelease)? ('+' build)?
//! core       := numeric '.' numeric '.' numeric
//! prerelease := identifier ('.' identifier)*
//! build      := [0-9A-Za-z-]+
//! ```
//!
//! Build metadata is a single opaque token; dotted build metadata is rejected.

use crate::domain::prerelease::{compare_prerelease, render_prerelease, Identifier, Scanner, Step};
use crate::error::ParseError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Identifier>,
    pub build: Option<String>,
}

impl SemVer {
    /// Create a plain `major.minor.patch` version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: None,
        }
    }

    /// Replace the prerelease identifiers
    pub fn with_prerelease(mut self, prerelease: Vec<Identifier>) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Replace the build metadata
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// Parse a complete version string.
    ///
    /// # Returns
    /// * `Ok(SemVer)` - Parsed version
    /// * `Err(ParseError)` - Carries the offset of the first character that
    ///   could not be consumed, e.g. `"1.2"` fails at offset 3
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(s);
        semver(&mut scanner)
            .and_then(|v| scanner.end().map(|_| v))
            .map_err(|offset| ParseError::new(s, offset))
    }

    /// Prerelease identifiers joined with `.`, if there are any
    pub fn prerelease_string(&self) -> Option<String> {
        if self.prerelease.is_empty() {
            None
        } else {
            Some(render_prerelease(&self.prerelease))
        }
    }

    /// Raw prerelease identifier list
    pub fn prerelease_identifiers(&self) -> &[Identifier] {
        &self.prerelease
    }

    /// Destructure into `(major, minor, patch, prerelease, build)` with the
    /// prerelease flattened to a display string
    pub fn parts(&self) -> (u64, u64, u64, Option<String>, Option<&str>) {
        (
            self.major,
            self.minor,
            self.patch,
            self.prerelease_string(),
            self.build.as_deref(),
        )
    }

    /// Same `major.minor.patch` with prerelease and build removed
    pub fn core(&self) -> SemVer {
        SemVer::new(self.major, self.minor, self.patch)
    }

    /// True when there is neither prerelease nor build metadata
    pub fn is_plain(&self) -> bool {
        self.prerelease.is_empty() && self.build.is_none()
    }
}

fn semver(scanner: &mut Scanner<'_>) -> Step<SemVer> {
    let major = scanner.numeric()?;
    scanner.literal(b'.')?;
    let minor = scanner.numeric()?;
    scanner.literal(b'.')?;
    let patch = scanner.numeric()?;

    let mark = scanner.pos();
    let prerelease = match scanner.literal(b'-').and_then(|_| scanner.prerelease()) {
        Ok(ids) => ids,
        Err(_) => {
            scanner.reset(mark);
            Vec::new()
        }
    };

    let mark = scanner.pos();
    let build = match scanner.literal(b'+').and_then(|_| scanner.alphanumeric()) {
        Ok(token) => Some(token.to_string()),
        Err(_) => {
            scanner.reset(mark);
            None
        }
    };

    Ok(SemVer {
        major,
        minor,
        patch,
        prerelease,
        build,
    })
}

/// Total precedence order over versions.
///
/// Core numbers first, then prerelease (absent sorts highest), then build
/// metadata (absent sorts lowest, otherwise lexicographic).
pub fn precedence(a: &SemVer, b: &SemVer) -> Ordering {
    (a.major, a.minor, a.patch)
        .cmp(&(b.major, b.minor, b.patch))
        .then_with(|| compare_prerelease(&a.prerelease, &b.prerelease))
        .then_with(|| a.build.cmp(&b.build))
}

impl Ord for SemVer {
    fn cmp(&self, other: &Self) -> Ordering {
        precedence(self, other)
    }
}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for SemVer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemVer::parse(s)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = self.prerelease_string() {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
