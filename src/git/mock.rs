use crate::error::Result;
use crate::git::Repository;
use std::collections::BTreeMap;

/// Mock repository for testing without actual git operations
///
/// Commits are identified by plain strings; HEAD is one of them.
pub struct MockRepository {
    branch: Option<String>,
    head: String,
    tags: BTreeMap<String, String>,
}

impl MockRepository {
    /// Create a new mock repository with HEAD on `branch`
    pub fn new(branch: Option<&str>) -> Self {
        MockRepository {
            branch: branch.map(|b| b.to_string()),
            head: "HEAD".to_string(),
            tags: BTreeMap::new(),
        }
    }

    /// Add a tag pointing at the HEAD commit
    pub fn tag_head(&mut self, name: impl Into<String>) -> &mut Self {
        let head = self.head.clone();
        self.tags.insert(name.into(), head);
        self
    }

    /// Add a tag pointing at some earlier commit
    pub fn tag_commit(&mut self, name: impl Into<String>, commit: impl Into<String>) -> &mut Self {
        self.tags.insert(name.into(), commit.into());
        self
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn tags_at_head(&self) -> Result<Vec<String>> {
        Ok(self
            .tags
            .iter()
            .filter(|(_, commit)| **commit == self.head)
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_branch() {
        let repo = MockRepository::new(Some("develop-1.0.0"));
        assert_eq!(repo.current_branch().unwrap().as_deref(), Some("develop-1.0.0"));
    }

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::default();
        repo.tag_head("release-1.0.0")
            .tag_commit("release-0.9.0", "abc123");

        assert_eq!(repo.tags_at_head().unwrap(), vec!["release-1.0.0".to_string()]);
        assert_eq!(
            repo.list_tags().unwrap(),
            vec!["release-0.9.0".to_string(), "release-1.0.0".to_string()]
        );
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert_eq!(repo.current_branch().unwrap(), None);
        assert!(repo.list_tags().unwrap().is_empty());
    }
}
