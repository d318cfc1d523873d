//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text; `display_*` functions print it.

use console::style;

use crate::analyzer::{Compatibility, Derivation};
use crate::boundary::BoundaryWarning;
use crate::domain::{FluxBranch, FluxRef, FluxTag};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

fn describe_ref(current: &FluxRef) -> &'static str {
    match current {
        FluxRef::Branch(FluxBranch::Develop(_)) => "develop branch",
        FluxRef::Branch(FluxBranch::Topic(_)) => "topic branch",
        FluxRef::Tag(FluxTag::Release(_)) => "release tag",
        FluxRef::Tag(FluxTag::Prerelease(_)) => "alpha tag",
    }
}

/// Build the summary lines for a derivation, without styling.
///
/// # Example
/// ```ignore
/// Version:       1.3.0
/// Derived from:  develop branch develop-1.3.0
/// Prior release: 1.2.5
/// Compatibility: must be binary compatible with 1.2.5
/// ```
pub fn format_derivation(derivation: &Derivation) -> Vec<String> {
    let prior = derivation
        .prior_release
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "none".to_string());
    vec![
        format!("Version:       {}", derivation.version),
        format!(
            "Derived from:  {} {}",
            describe_ref(&derivation.current),
            derivation.current
        ),
        format!("Prior release: {}", prior),
        format!("Compatibility: {}", derivation.compatibility),
    ]
}

/// Print the derivation summary, highlighting the version and verdict.
pub fn display_derivation(derivation: &Derivation) {
    for warning in &derivation.warnings {
        display_boundary_warning(warning);
    }

    println!("\n{}", style(format!("Version {}", derivation.version)).bold());
    for line in format_derivation(derivation).iter().skip(1) {
        println!("  {}", line);
    }

    match &derivation.compatibility {
        Compatibility::Require { level, against } => display_status(&format!(
            "Public API must stay {} with {}",
            level, against
        )),
        Compatibility::NoCompat(reason) => {
            display_success(&format!("No compatibility check needed: {}", reason))
        }
    }
}
