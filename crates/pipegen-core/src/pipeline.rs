//! Pipeline definition types.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A generated CI pipeline definition.
///
/// Field order is the serialization order: `include`, `stages`, `variables`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDefinition {
    /// Template fragments pulled into the pipeline, in order.
    pub include: Vec<Include>,
    /// Pipeline stages.
    pub stages: Vec<Stage>,
    /// Pipeline-level variables.
    pub variables: Variables,
}

impl PipelineDefinition {
    /// Include paths in declaration order.
    pub fn include_paths(&self) -> Vec<&str> {
        self.include.iter().map(|i| i.local.as_str()).collect()
    }
}

/// A reference to a template fragment in the same repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Include {
    /// Repository-relative path of the fragment.
    pub local: String,
}

impl Include {
    pub fn local(path: impl Into<String>) -> Self {
        Self { local: path.into() }
    }
}

/// A named phase of pipeline execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[display("lint")]
    Lint,
    #[display("build")]
    Build,
    #[display("test")]
    Test,
    #[display("deploy")]
    Deploy,
}

impl Stage {
    /// Every stage, in execution order.
    pub const ALL: [Stage; 4] = [Stage::Lint, Stage::Build, Stage::Test, Stage::Deploy];
}

/// Variables exported to every job of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variables {
    #[serde(rename = "PROJECT_NAME")]
    pub project_name: String,
    /// Comma-separated deployment targets.
    #[serde(rename = "DEPLOY_ENVIRONMENTS")]
    pub deploy_environments: String,
}
