//! Default file locations.

use std::path::PathBuf;

pub const DEFAULT_BLUEPRINT_PATH: &str = "blueprints/blueprint.yml";
pub const DEFAULT_OUTPUT_PATH: &str = ".gitlab-ci.yml";
pub const DEFAULT_TEMPLATE_ROOT: &str = "templates";

/// Input, output and template locations for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPaths {
    /// Blueprint document to read.
    pub blueprint: PathBuf,
    /// Pipeline document to write.
    pub output: PathBuf,
    /// Template root interpolated into include paths.
    pub template_root: String,
}

impl Default for GeneratorPaths {
    fn default() -> Self {
        Self {
            blueprint: PathBuf::from(DEFAULT_BLUEPRINT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            template_root: DEFAULT_TEMPLATE_ROOT.to_string(),
        }
    }
}
