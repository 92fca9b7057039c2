//! Input/output operations: CLI, constants, errors and progress display

/// Command-line interface and batch runner
pub mod cli;
/// Engine constants and runtime defaults
pub mod configuration;
/// Error types for loading and generation
pub mod error;
/// Progress display for batch generation
pub mod progress;
