//! CLI command implementations.

use anyhow::{Context, Result};
use pipegen_config::{GeneratorPaths, read_blueprint, write_pipeline};
use pipegen_core::{PipelineDefinition, TemplateLayout, derive, derive_pipeline};
use std::path::Path;
use tracing::info;

/// Read the blueprint, derive the pipeline and write it out.
pub fn generate(paths: &GeneratorPaths) -> Result<()> {
    let pipeline = build_pipeline(paths)?;

    write_pipeline(&pipeline, &paths.output)
        .with_context(|| format!("Failed to write pipeline: {}", paths.output.display()))?;
    info!(
        output = %paths.output.display(),
        includes = pipeline.include.len(),
        "pipeline generated"
    );

    println!("✅ Pipeline generated: {}", paths.output.display());
    Ok(())
}

/// Read and derive a blueprint without writing any output.
pub fn validate(blueprint_path: &Path) -> Result<()> {
    let blueprint = read_blueprint(blueprint_path)
        .with_context(|| format!("Failed to load blueprint: {}", blueprint_path.display()))?;
    let pipeline = derive(&blueprint);

    println!("Blueprint is valid ({} includes)", pipeline.include.len());
    Ok(())
}

fn build_pipeline(paths: &GeneratorPaths) -> Result<PipelineDefinition> {
    let blueprint = read_blueprint(&paths.blueprint)
        .with_context(|| format!("Failed to load blueprint: {}", paths.blueprint.display()))?;
    let layout = TemplateLayout::with_root(paths.template_root.as_str());

    Ok(derive_pipeline(&blueprint, &layout))
}
