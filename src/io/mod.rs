//! Input/output adapters, configuration and error handling

/// Command-line interface and problem directory loading
pub mod cli;
/// Solver constants and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG decoding and export
pub mod image;
/// Batch progress display
pub mod progress;
