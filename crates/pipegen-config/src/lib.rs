//! YAML document handling for pipegen.
//!
//! This crate handles:
//! - Blueprint reading (blueprint.yml)
//! - Pipeline writing (.gitlab-ci.yml)
//! - Default file locations

pub mod blueprint;
pub mod error;
pub mod paths;
pub mod pipeline;

pub use blueprint::{parse_blueprint, read_blueprint};
pub use error::{ConfigError, ConfigResult};
pub use paths::GeneratorPaths;
pub use pipeline::{render_pipeline, write_pipeline};
