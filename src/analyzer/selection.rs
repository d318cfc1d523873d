use crate::domain::{tag_precedence, FluxBranch, FluxRef, FluxTag};
use crate::error::{FluxError, Result};
use tracing::debug;

/// Message shown when neither the branch nor any tag follows a flux convention
pub const SELECTION_FAILURE_MESSAGE: &str = "the current branch must be named \
develop-X.Y.Z or topic-X.Y.Z-name, or HEAD must carry a tag named \
release-X.Y.Z or release-X.Y.Z-alpha.N";

/// Pick the ref that determines the current version.
///
/// A matching branch always wins. Otherwise matching tags are ranked by
/// ascending precedence (ties by name) and the first, i.e. the lowest, is
/// chosen.
///
/// # Arguments
/// * `branch_name` - Current branch, `None` when HEAD is detached
/// * `tag_names` - Tags pointing at the current commit
///
/// # Returns
/// * `Ok(FluxRef)` - The selected ref
/// * `Err(FluxError::Selection)` - When nothing matches
pub fn select_current_ref<S: AsRef<str>>(
    branch_name: Option<&str>,
    tag_names: &[S],
) -> Result<FluxRef> {
    let branch = branch_name.and_then(FluxBranch::parse);
    if let Some(branch) = &branch {
        debug!(branch = %branch, "branch follows flux naming");
    }

    let mut tags: Vec<(FluxTag, &str)> = tag_names
        .iter()
        .map(|name| name.as_ref())
        .filter_map(|name| FluxTag::parse(name).map(|tag| (tag, name)))
        .collect();
    tags.sort_by(|(a, a_name), (b, b_name)| tag_precedence(a, b).then_with(|| a_name.cmp(b_name)));
    tags.dedup_by(|(_, a_name), (_, b_name)| a_name == b_name);
    debug!(candidates = tags.len(), "tags at HEAD follow flux naming");

    branch
        .map(FluxRef::Branch)
        .into_iter()
        .chain(tags.into_iter().map(|(tag, _)| FluxRef::Tag(tag)))
        .next()
        .ok_or_else(|| FluxError::selection(SELECTION_FAILURE_MESSAGE))
}
