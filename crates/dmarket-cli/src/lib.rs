/*
[INPUT]:  Public API exports for dmarket-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod commands;
pub mod config;

// Re-export main types for convenience
pub use commands::{TargetPricing, build_target_request, create_target_from_market};
pub use config::{CliConfig, Overrides};
