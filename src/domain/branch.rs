use crate::domain::flux_ref::{parse_prefixed, FluxVersioned};
use crate::domain::prerelease::{parse_prerelease, render_prerelease, Identifier};
use crate::domain::version::SemVer;
use crate::error::{FluxError, Result};
use std::fmt;

pub const DEVELOP_PREFIX: &str = "develop-";
pub const TOPIC_PREFIX: &str = "topic-";

/// `develop-X.Y.Z`: the integration branch for an upcoming release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DevelopBranch {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl DevelopBranch {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        DevelopBranch {
            major,
            minor,
            patch,
        }
    }

    /// Parse `develop-X.Y.Z`; any prerelease or build makes it a non-match
    pub fn parse(name: &str) -> Option<Self> {
        let v = parse_prefixed(name, DEVELOP_PREFIX)?;
        v.is_plain()
            .then(|| DevelopBranch::new(v.major, v.minor, v.patch))
    }
}

impl FluxVersioned for DevelopBranch {
    fn prefix(&self) -> &'static str {
        DEVELOP_PREFIX
    }

    fn version(&self) -> SemVer {
        SemVer::new(self.major, self.minor, self.patch)
    }
}

/// `topic-X.Y.Z-name`: a feature branch targeting release `X.Y.Z`
///
/// The topic is validated against the prerelease grammar, so fields are only
/// reachable through [`TopicBranch::new`] or [`TopicBranch::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicBranch {
    major: u64,
    minor: u64,
    patch: u64,
    topic: Vec<Identifier>,
}

impl TopicBranch {
    /// Build a topic branch from its parts.
    ///
    /// # Returns
    /// * `Ok(TopicBranch)` - When `topic` is a valid prerelease string
    /// * `Err(FluxError::Construction)` - When it is empty or malformed
    pub fn new(major: u64, minor: u64, patch: u64, topic: impl AsRef<str>) -> Result<Self> {
        let topic = topic.as_ref();
        let identifiers = parse_prerelease(topic).map_err(|e| {
            FluxError::construction(format!(
                "'{}' is not a valid topic name (offset {})",
                topic, e.offset
            ))
        })?;
        Ok(TopicBranch {
            major,
            minor,
            patch,
            topic: identifiers,
        })
    }

    /// Parse `topic-X.Y.Z-name`; a missing topic or any build is a non-match
    pub fn parse(name: &str) -> Option<Self> {
        let v = parse_prefixed(name, TOPIC_PREFIX)?;
        if v.prerelease.is_empty() || v.build.is_some() {
            return None;
        }
        Some(TopicBranch {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            topic: v.prerelease,
        })
    }

    /// The topic name as written after the version
    pub fn topic(&self) -> String {
        render_prerelease(&self.topic)
    }
}

impl FluxVersioned for TopicBranch {
    fn prefix(&self) -> &'static str {
        TOPIC_PREFIX
    }

    fn version(&self) -> SemVer {
        SemVer::new(self.major, self.minor, self.patch).with_prerelease(self.topic.clone())
    }
}

/// A branch following one of the flux naming conventions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FluxBranch {
    Develop(DevelopBranch),
    Topic(TopicBranch),
}

impl FluxBranch {
    pub fn parse(name: &str) -> Option<Self> {
        DevelopBranch::parse(name)
            .map(FluxBranch::Develop)
            .or_else(|| TopicBranch::parse(name).map(FluxBranch::Topic))
    }
}

impl FluxVersioned for FluxBranch {
    fn prefix(&self) -> &'static str {
        match self {
            FluxBranch::Develop(b) => b.prefix(),
            FluxBranch::Topic(b) => b.prefix(),
        }
    }

    fn version(&self) -> SemVer {
        match self {
            FluxBranch::Develop(b) => b.version(),
            FluxBranch::Topic(b) => b.version(),
        }
    }
}

impl fmt::Display for DevelopBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ref_name())
    }
}

impl fmt::Display for TopicBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ref_name())
    }
}

impl fmt::Display for FluxBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ref_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_develop_branch() {
        let branch = DevelopBranch::parse("develop-0.1.2").unwrap();
        assert_eq!(branch, DevelopBranch::new(0, 1, 2));
        assert_eq!(branch.version(), branch.target_release_version());
        assert_eq!(branch.to_string(), "develop-0.1.2");
    }

    #[test]
    fn test_develop_branch_rejects_prerelease() {
        assert_eq!(DevelopBranch::parse("develop-0.1.2-MY-NAME"), None);
        assert_eq!(DevelopBranch::parse("develop-0.1.2+b1"), None);
    }

    #[test]
    fn test_topic_branch() {
        let branch = TopicBranch::parse("topic-0.1.2-MY-NAME").unwrap();
        assert_eq!(branch, TopicBranch::new(0, 1, 2, "MY-NAME").unwrap());
        assert_eq!(branch.topic(), "MY-NAME");
        assert_eq!(branch.target_release_version(), SemVer::new(0, 1, 2));
        assert_eq!(branch.version().to_string(), "0.1.2-MY-NAME");
    }

    #[test]
    fn test_topic_branch_dotted_topic() {
        let branch = TopicBranch::parse("topic-2.0.0-login.v2").unwrap();
        assert_eq!(branch.topic(), "login.v2");
    }

    #[test]
    fn test_topic_branch_requires_topic() {
        assert_eq!(TopicBranch::parse("topic-0.1.2"), None);
        assert_eq!(TopicBranch::parse("topic-0.1.2-x+b1"), None);
    }

    #[test]
    fn test_topic_branch_construction_validates() {
        for topic in ["", "my topic", "a..b", "01", "bad_name"] {
            let err = TopicBranch::new(1, 0, 0, topic).unwrap_err();
            assert!(
                matches!(err, FluxError::Construction(_)),
                "{:?} should be rejected",
                topic
            );
        }
    }

    #[test]
    fn test_flux_branch_parse() {
        assert!(matches!(
            FluxBranch::parse("develop-1.0.0"),
            Some(FluxBranch::Develop(_))
        ));
        assert!(matches!(
            FluxBranch::parse("topic-1.0.0-x"),
            Some(FluxBranch::Topic(_))
        ));
        assert_eq!(FluxBranch::parse("release-1.0.0"), None);
        assert_eq!(FluxBranch::parse("main"), None);
    }
}
