pub mod cli;
pub mod core;
pub mod ui;

// Re-export for convenience
pub use crate::core::engine::{GameEngine, Outcome, Snapshot, Status, MAX_ATTEMPTS};
pub use crate::core::words::{Category, WordBank};
