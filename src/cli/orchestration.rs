//! Main workflow orchestration logic
//!
//! Keeps the derive workflow callable without clap: `main.rs` only maps
//! command-line flags onto [`DeriveWorkflowArgs`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::analyzer::{Derivation, VersionAnalyzer};
use crate::config::{load_config, Config};
use crate::domain::SemVer;
use crate::error::Result;
use crate::git::{Git2Repository, Repository};

/// Arguments for the derive workflow
///
/// Values given here override the configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeriveWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Directory inside the repository to inspect
    pub repo_path: PathBuf,

    /// "Introduced since" version overriding `[compatibility] since`
    pub since: Option<String>,

    /// Version file overriding `[output] version_file`
    pub output: Option<PathBuf>,
}

/// Result of a successful derive workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub derivation: Derivation,

    /// File the version string was written to, if any
    pub written_to: Option<PathBuf>,
}

/// Main derive workflow
///
/// 1. Load configuration and apply overrides
/// 2. Open the git repository
/// 3. Derive version and compatibility
/// 4. Optionally write the version file
pub fn run_derive_workflow(args: &DeriveWorkflowArgs) -> Result<WorkflowResult> {
    let config = apply_overrides(load_config(args.config_path.as_deref())?, args);
    let repo = Git2Repository::open(&args.repo_path)?;
    derive_with_repository(&repo, &config)
}

/// Run the workflow against any repository implementation
pub fn derive_with_repository<R: Repository>(repo: &R, config: &Config) -> Result<WorkflowResult> {
    let analyzer = VersionAnalyzer::from_config(config)?;
    let derivation = analyzer.analyze_repository(repo)?;

    let written_to = match &config.output.version_file {
        Some(path) => {
            write_version_file(path, &derivation.version)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(WorkflowResult {
        derivation,
        written_to,
    })
}

fn apply_overrides(mut config: Config, args: &DeriveWorkflowArgs) -> Config {
    if let Some(since) = &args.since {
        config.compatibility.since = Some(since.clone());
    }
    if let Some(output) = &args.output {
        config.output.version_file = Some(output.clone());
    }
    debug!(?config, "effective configuration");
    config
}

/// Write the version string followed by a newline, creating parent directories
pub fn write_version_file(path: &Path, version: &SemVer) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{}\n", version))?;
    info!(path = %path.display(), %version, "wrote version file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    #[test]
    fn test_apply_overrides() {
        let args = DeriveWorkflowArgs {
            since: Some("1.0.0".to_string()),
            output: Some(PathBuf::from("out/version")),
            ..DeriveWorkflowArgs::default()
        };
        let config = apply_overrides(Config::default(), &args);
        assert_eq!(config.compatibility.since.as_deref(), Some("1.0.0"));
        assert_eq!(config.output.version_file, Some(PathBuf::from("out/version")));
    }

    #[test]
    fn test_overrides_keep_config_values() {
        let mut config = Config::default();
        config.compatibility.since = Some("0.5.0".to_string());
        let config = apply_overrides(config, &DeriveWorkflowArgs::default());
        assert_eq!(config.compatibility.since.as_deref(), Some("0.5.0"));
        assert_eq!(config.output.version_file, None);
    }

    #[test]
    fn test_derive_without_output() {
        let repo = MockRepository::new(Some("develop-0.2.0"));
        let result = derive_with_repository(&repo, &Config::default()).unwrap();
        assert_eq!(result.derivation.version.to_string(), "0.2.0");
        assert_eq!(result.written_to, None);
    }
}
