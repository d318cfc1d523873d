//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only
//! repository queries git-flux needs, allowing for a real implementation
//! backed by `git2` and an in-memory one for testing.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Code that derives versions depends on the [Repository] trait only.
//!
//! ```rust
//! # use git_flux::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_flux::Result<()> {
//! let branch = repo.current_branch()?;
//! let head_tags = repo.tags_at_head()?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Snapshot queries against a repository
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// `git2::Error` into [crate::error::FluxError::Git].
pub trait Repository {
    /// Short name of the branch HEAD points at
    ///
    /// # Returns
    /// * `Ok(Some(name))` - HEAD is on a local branch
    /// * `Ok(None)` - HEAD is detached
    /// * `Err` - If HEAD cannot be read
    fn current_branch(&self) -> Result<Option<String>>;

    /// Names of all tags whose target commit is the HEAD commit
    ///
    /// Both lightweight and annotated tags are considered. The order is
    /// unspecified.
    fn tags_at_head(&self) -> Result<Vec<String>>;

    /// Names of every tag in the repository
    fn list_tags(&self) -> Result<Vec<String>>;
}
