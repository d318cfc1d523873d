use crate::config::LegacyTagRule;
use crate::domain::ReleaseTag;
use crate::error::{FluxError, Result};
use regex::Regex;

/// Maps tags created before the flux conventions were adopted onto releases.
///
/// Each rule is a regex whose first three capture groups are the major,
/// minor and patch numbers. Rules are tried in order; the first one that
/// matches and yields three numbers wins.
#[derive(Debug, Clone, Default)]
pub struct LegacyTagMapper {
    patterns: Vec<Regex>,
}

impl LegacyTagMapper {
    /// Compile mapping rules from configuration
    ///
    /// # Returns
    /// * `Ok(LegacyTagMapper)` - All patterns compiled
    /// * `Err(FluxError::Config)` - A pattern is invalid or has fewer than three groups
    pub fn from_rules(rules: &[LegacyTagRule]) -> Result<Self> {
        let patterns = rules
            .iter()
            .map(|rule| {
                let re = Regex::new(&rule.pattern).map_err(|e| {
                    FluxError::config(format!("Invalid legacy tag pattern '{}': {}", rule.pattern, e))
                })?;
                // captures_len counts the implicit whole-match group
                if re.captures_len() < 4 {
                    return Err(FluxError::config(format!(
                        "Legacy tag pattern '{}' needs three capture groups (major, minor, patch)",
                        rule.pattern
                    )));
                }
                Ok(re)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(LegacyTagMapper { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Map a legacy tag name to the release it stands for
    pub fn map(&self, tag: &str) -> Option<ReleaseTag> {
        self.patterns.iter().find_map(|re| {
            let captures = re.captures(tag)?;
            let number = |i: usize| captures.get(i)?.as_str().parse::<u64>().ok();
            Some(ReleaseTag::new(number(1)?, number(2)?, number(3)?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str) -> LegacyTagRule {
        LegacyTagRule {
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn test_map_v_prefixed_tags() {
        let mapper = LegacyTagMapper::from_rules(&[rule(r"^v(\d+)\.(\d+)\.(\d+)$")]).unwrap();
        assert_eq!(mapper.map("v1.2.3"), Some(ReleaseTag::new(1, 2, 3)));
        assert_eq!(mapper.map("v1.2"), None);
        assert_eq!(mapper.map("release-1.2.3"), None);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let mapper = LegacyTagMapper::from_rules(&[
            rule(r"^rel_(\d+)_(\d+)_(\d+)$"),
            rule(r"^rel_(\d+)_(\d+)_(\d+)_hotfix$"),
            rule(r"^(\d+)_(\d+)_(\d+)"),
        ])
        .unwrap();
        assert_eq!(mapper.map("rel_2_0_1"), Some(ReleaseTag::new(2, 0, 1)));
        assert_eq!(mapper.map("rel_2_0_1_hotfix"), Some(ReleaseTag::new(2, 0, 1)));
        assert_eq!(mapper.map("3_1_4_extra"), Some(ReleaseTag::new(3, 1, 4)));
    }

    #[test]
    fn test_unreadable_numbers_fall_through() {
        let mapper = LegacyTagMapper::from_rules(&[
            rule(r"^x(\d*)\.(\d*)\.(\d*)$"),
            rule(r"^x(\d+)\.(\d+)\.(\d+)(\.\.)?$"),
        ])
        .unwrap();
        assert_eq!(mapper.map("x.."), None);
        assert_eq!(mapper.map("x1.2.3"), Some(ReleaseTag::new(1, 2, 3)));
        assert_eq!(mapper.map("x1.2.99999999999999999999999"), None);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = LegacyTagMapper::from_rules(&[rule(r"^v(\d+")]).unwrap_err();
        assert!(matches!(err, FluxError::Config(_)));
    }

    #[test]
    fn test_pattern_needs_three_groups() {
        let err = LegacyTagMapper::from_rules(&[rule(r"^v(\d+)\.(\d+)$")]).unwrap_err();
        assert!(err.to_string().contains("three capture groups"));
    }

    #[test]
    fn test_empty_mapper() {
        let mapper = LegacyTagMapper::default();
        assert!(mapper.is_empty());
        assert_eq!(mapper.map("v1.0.0"), None);
    }
}
