//! Clock port for obtaining the current time.

use chrono::{DateTime, Local};

/// Provides the current local time.
///
/// Archive names carry a local timestamp; tests substitute a fixed clock
/// so names are predictable.
pub trait Clock: Send + Sync {
    /// Returns the current local time.
    fn now(&self) -> DateTime<Local>;
}
