use crate::analyzer::compatibility::{
    decide_compatibility, parse_since_version, resolve_prior_release, Compatibility,
};
use crate::analyzer::legacy::LegacyTagMapper;
use crate::analyzer::selection::select_current_ref;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{FluxRef, FluxTag, FluxVersioned, SemVer};
use crate::error::Result;
use crate::git::Repository;
use tracing::debug;

/// Everything derived from one repository snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    /// The ref that determined the version
    pub current: FluxRef,
    /// Version of `current`; its rendering is the build version string
    pub version: SemVer,
    /// Latest release not exceeding the current target release
    pub prior_release: Option<SemVer>,
    pub compatibility: Compatibility,
    pub warnings: Vec<BoundaryWarning>,
}

/// Derives the release version and compatibility requirement from refs
pub struct VersionAnalyzer {
    legacy: LegacyTagMapper,
    since: Option<String>,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(legacy: LegacyTagMapper, since: Option<String>) -> Self {
        VersionAnalyzer { legacy, since }
    }

    /// Build an analyzer from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let legacy = LegacyTagMapper::from_rules(&config.legacy_tags)?;
        Ok(VersionAnalyzer::new(legacy, config.compatibility.since.clone()))
    }

    /// Read the branch and tags from a repository and derive from them
    pub fn analyze_repository<R: Repository>(&self, repo: &R) -> Result<Derivation> {
        let branch = repo.current_branch()?;
        let head_tags = repo.tags_at_head()?;
        let all_tags = repo.list_tags()?;
        self.analyze(branch.as_deref(), &head_tags, &all_tags)
    }

    /// Derive from already-collected ref names
    ///
    /// # Arguments
    /// * `branch` - Current branch name, `None` when HEAD is detached
    /// * `head_tags` - Tags pointing at the current commit
    /// * `all_tags` - Every tag in the repository history
    pub fn analyze<S: AsRef<str>>(
        &self,
        branch: Option<&str>,
        head_tags: &[S],
        all_tags: &[S],
    ) -> Result<Derivation> {
        let mut warnings = Vec::new();
        if branch.is_none() {
            warnings.push(BoundaryWarning::DetachedHead);
        }
        warnings.extend(
            head_tags
                .iter()
                .map(|tag| tag.as_ref())
                .filter(|tag| FluxTag::parse(tag).is_none())
                .map(|tag| BoundaryWarning::UnrecognizedHeadTag {
                    tag: tag.to_string(),
                }),
        );

        let current = select_current_ref(branch, head_tags)?;
        debug!(current = %current, "selected current ref");

        let since = match self.since.as_deref() {
            Some(value) => {
                let (since, warning) = parse_since_version(value);
                warnings.extend(warning);
                since
            }
            None => None,
        };

        let version = current.version();
        let prior_release = resolve_prior_release(
            all_tags,
            |name| self.legacy.map(name),
            &current.target_release_version(),
        );
        let compatibility = decide_compatibility(&version, prior_release.as_ref(), since.as_ref());

        Ok(Derivation {
            current,
            version,
            prior_release,
            compatibility,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::compatibility::{CompatLevel, NoCompatReason};
    use crate::config::LegacyTagRule;
    use crate::error::FluxError;
    use crate::git::MockRepository;

    fn analyzer() -> VersionAnalyzer {
        VersionAnalyzer::new(LegacyTagMapper::default(), None)
    }

    fn v(s: &str) -> SemVer {
        SemVer::parse(s).unwrap()
    }

    #[test]
    fn test_develop_branch_minor_release() {
        let mut repo = MockRepository::new(Some("develop-1.3.0"));
        repo.tag_commit("release-1.2.5", "c1")
            .tag_commit("release-1.2.4", "c0")
            .tag_commit("release-1.3.0-alpha.0", "c2");

        let derivation = analyzer().analyze_repository(&repo).unwrap();
        assert_eq!(derivation.version.to_string(), "1.3.0");
        assert_eq!(derivation.prior_release, Some(v("1.2.5")));
        assert_eq!(
            derivation.compatibility,
            Compatibility::Require {
                level: CompatLevel::BinaryCompatible,
                against: v("1.2.5"),
            }
        );
        assert!(derivation.warnings.is_empty());
    }

    #[test]
    fn test_topic_branch_patch_release() {
        let mut repo = MockRepository::new(Some("topic-1.3.2-fix-login"));
        repo.tag_commit("release-1.3.1", "c1")
            .tag_commit("release-1.4.0", "c2");

        let derivation = analyzer().analyze_repository(&repo).unwrap();
        assert_eq!(derivation.version.to_string(), "1.3.2-fix-login");
        assert_eq!(derivation.prior_release, Some(v("1.3.1")));
        assert_eq!(
            derivation.compatibility,
            Compatibility::Require {
                level: CompatLevel::BinaryAndSourceCompatible,
                against: v("1.3.1"),
            }
        );
    }

    #[test]
    fn test_release_tag_at_detached_head() {
        let mut repo = MockRepository::new(None);
        repo.tag_head("release-2.0.0").tag_head("nightly");

        let derivation = analyzer().analyze_repository(&repo).unwrap();
        assert_eq!(derivation.version.to_string(), "2.0.0");
        // a tag at HEAD counts as its own prior release
        assert_eq!(derivation.prior_release, Some(v("2.0.0")));
        assert_eq!(
            derivation.compatibility,
            Compatibility::NoCompat(NoCompatReason::FirstMajorRelease)
        );
        assert_eq!(
            derivation.warnings,
            vec![
                BoundaryWarning::DetachedHead,
                BoundaryWarning::UnrecognizedHeadTag {
                    tag: "nightly".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_selection_failure_propagates() {
        let repo = MockRepository::new(Some("main"));
        let err = analyzer().analyze_repository(&repo).unwrap_err();
        assert!(matches!(err, FluxError::Selection(_)));
    }

    #[test]
    fn test_since_version_blocks_compat() {
        let analyzer = VersionAnalyzer::new(LegacyTagMapper::default(), Some("1.3.0".to_string()));
        let derivation = analyzer
            .analyze(Some("develop-1.3.0"), &[], &["release-1.2.0"])
            .unwrap();
        assert_eq!(
            derivation.compatibility,
            Compatibility::NoCompat(NoCompatReason::IntroducedAfterPrior)
        );
    }

    #[test]
    fn test_malformed_since_version_is_ignored() {
        let analyzer =
            VersionAnalyzer::new(LegacyTagMapper::default(), Some("1.3.0-rc.1".to_string()));
        let derivation = analyzer
            .analyze(Some("develop-1.3.0"), &[], &["release-1.2.0"])
            .unwrap();
        assert!(matches!(derivation.compatibility, Compatibility::Require { .. }));
        assert!(matches!(
            derivation.warnings.as_slice(),
            [BoundaryWarning::MalformedSinceVersion { .. }]
        ));
    }

    #[test]
    fn test_from_config_with_legacy_tags() {
        let config = Config {
            legacy_tags: vec![LegacyTagRule {
                pattern: r"^v(\d+)\.(\d+)\.(\d+)$".to_string(),
            }],
            ..Config::default()
        };
        let analyzer = VersionAnalyzer::from_config(&config).unwrap();
        let derivation = analyzer
            .analyze(Some("develop-1.3.1"), &[], &["v1.3.0", "v1.2.9"])
            .unwrap();
        assert_eq!(derivation.prior_release, Some(v("1.3.0")));
    }
}
