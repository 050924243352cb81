//! Command implementations for fm-cli

pub mod reorder;
pub mod reset;

pub use reorder::run_reorder;
pub use reset::run_reset;
