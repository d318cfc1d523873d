use std::fmt;

/// Warnings raised while deriving a version from repository state.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The configured "introduced since" version is not a bare X.Y.Z
    MalformedSinceVersion { value: String, reason: String },
    /// HEAD does not point at a branch
    DetachedHead,
    /// A tag at HEAD does not follow the release tag naming convention
    UnrecognizedHeadTag { tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MalformedSinceVersion { value, reason } => {
                write!(
                    f,
                    "Ignoring 'since' version '{}': {}",
                    value, reason
                )
            }
            BoundaryWarning::DetachedHead => {
                write!(f, "HEAD is detached; only tags at HEAD are considered")
            }
            BoundaryWarning::UnrecognizedHeadTag { tag } => {
                write!(
                    f,
                    "Tag '{}' at HEAD does not match release-X.Y.Z or release-X.Y.Z-alpha.N",
                    tag
                )
            }
        }
    }
}
