//! Command handlers for both binaries.
//!
//! Handlers own everything user-facing: progress lines, the final report,
//! and the mapping from results to exit status.

pub mod pack;
pub mod validate;
