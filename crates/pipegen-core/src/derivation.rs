//! Pipeline derivation.

use tracing::debug;

use crate::blueprint::Blueprint;
use crate::layout::TemplateLayout;
use crate::pipeline::{Include, PipelineDefinition, Stage, Variables};

/// Derive a pipeline definition using the default template layout.
pub fn derive(blueprint: &Blueprint) -> PipelineDefinition {
    derive_pipeline(blueprint, &TemplateLayout::default())
}

/// Derive a pipeline definition from a blueprint.
///
/// Includes are ordered build, deploy, lint, then one test fragment per
/// entry of `test_types`. No template existence checks are made.
pub fn derive_pipeline(blueprint: &Blueprint, layout: &TemplateLayout) -> PipelineDefinition {
    let mut include = Vec::with_capacity(3 + blueprint.test_types.len());
    include.push(Include::local(layout.build_path(&blueprint.language)));
    include.push(Include::local(layout.deploy_path(&blueprint.deploy_method)));
    include.push(Include::local(layout.lint_path()));
    include.extend(
        blueprint
            .test_types
            .iter()
            .map(|t| Include::local(layout.test_path(t))),
    );

    debug!(
        project = %blueprint.project_name,
        includes = include.len(),
        "derived pipeline"
    );

    PipelineDefinition {
        include,
        stages: Stage::ALL.to_vec(),
        variables: Variables {
            project_name: blueprint.project_name.clone(),
            deploy_environments: blueprint.environments.join(","),
        },
    }
}
