//! User interface module - terminal output for derived versions.
//!
//! Formatting lives in `formatter`; nothing here reads user input.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_derivation, display_error, display_status, display_success,
    format_derivation,
};
