//! Pipeline document writing.

use crate::{ConfigError, ConfigResult};
use pipegen_core::PipelineDefinition;
use std::path::Path;
use tracing::debug;

/// Render a pipeline definition as YAML, keeping field declaration order.
pub fn render_pipeline(pipeline: &PipelineDefinition) -> ConfigResult<String> {
    serde_yaml::to_string(pipeline).map_err(ConfigError::Serialize)
}

/// Render a pipeline definition and write it to `path`.
///
/// Parent directories are not created. A failed write may leave a partial file.
pub fn write_pipeline(pipeline: &PipelineDefinition, path: impl AsRef<Path>) -> ConfigResult<()> {
    let path = path.as_ref();
    let content = render_pipeline(pipeline)?;

    std::fs::write(path, &content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "wrote pipeline");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipegen_core::{Blueprint, derive};

    fn api_pipeline() -> PipelineDefinition {
        derive(
            &Blueprint::new("api", "go", "k8s")
                .with_environments(["staging", "prod"])
                .with_test_types(["unit", "integration"]),
        )
    }

    #[test]
    fn test_render_preserves_key_order() {
        let yaml = render_pipeline(&api_pipeline()).unwrap();

        let include = yaml.find("include:").unwrap();
        let stages = yaml.find("stages:").unwrap();
        let variables = yaml.find("variables:").unwrap();
        assert!(include < stages && stages < variables);

        let project = yaml.find("PROJECT_NAME").unwrap();
        let environments = yaml.find("DEPLOY_ENVIRONMENTS").unwrap();
        assert!(project < environments);

        let build = yaml.find("templates/build/go.yml").unwrap();
        let deploy = yaml.find("templates/deploy/k8s.yml").unwrap();
        let lint = yaml.find("templates/scan/lint.yml").unwrap();
        let unit = yaml.find("templates/test/unit.yml").unwrap();
        let integration = yaml.find("templates/test/integration.yml").unwrap();
        assert!(build < deploy && deploy < lint && lint < unit && unit < integration);
    }

    #[test]
    fn test_render_shape() {
        let yaml = render_pipeline(&api_pipeline()).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(doc["include"][0]["local"], "templates/build/go.yml");
        assert_eq!(doc["stages"][0], "lint");
        assert_eq!(doc["stages"][3], "deploy");
        assert_eq!(doc["variables"]["PROJECT_NAME"], "api");
        assert_eq!(doc["variables"]["DEPLOY_ENVIRONMENTS"], "staging,prod");
    }

    #[test]
    fn test_empty_environments_render_as_empty_string() {
        let pipeline = derive(&Blueprint::new("web", "node", "ssh"));
        let yaml = render_pipeline(&pipeline).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(doc["variables"]["DEPLOY_ENVIRONMENTS"], "");
        assert_eq!(doc["include"].as_sequence().unwrap().len(), 3);
    }

    #[test]
    fn test_numeric_project_name_written_as_string() {
        let input = "project_name: 42\nlanguage: go\ndeploy_method: k8s\nenvironments: []\n";
        let blueprint = crate::parse_blueprint(input).unwrap();
        let yaml = render_pipeline(&derive(&blueprint)).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert!(doc["variables"]["PROJECT_NAME"].is_string());
        assert_eq!(doc["variables"]["PROJECT_NAME"], "42");
    }

    #[test]
    fn test_write_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".gitlab-ci.yml");
        let pipeline = api_pipeline();

        write_pipeline(&pipeline, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: PipelineDefinition = serde_yaml::from_str(&written).unwrap();
        assert_eq!(parsed, pipeline);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(".gitlab-ci.yml");

        assert!(matches!(
            write_pipeline(&api_pipeline(), &path),
            Err(ConfigError::Write { .. })
        ));
        assert!(!path.exists());
    }
}
