//! Configuration for tidygate.
//!
//! This module defines the Config struct that represents `tidygate.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.
//! CLI flags override file values field by field; that merge lives with the
//! commands, not here.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
