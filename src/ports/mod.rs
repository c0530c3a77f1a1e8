//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the tools and the host
//! system (wall-clock time, filesystem). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod filesystem;

pub use clock::Clock;
pub use filesystem::FileSystem;
