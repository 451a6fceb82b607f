//! Template path layout.
//!
//! Include paths have the shape `{root}/{namespace}/{key}.{extension}`, e.g.
//! `templates/build/go.yml`. Keys are interpolated verbatim.

/// Where template fragments live, per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    /// Directory holding all template namespaces. Empty means repository root.
    pub root: String,
    pub build_namespace: String,
    pub deploy_namespace: String,
    pub scan_namespace: String,
    pub test_namespace: String,
    /// Fragment name of the lint job inside the scan namespace.
    pub lint_template: String,
    /// File extension, without the leading dot.
    pub extension: String,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            root: "templates".to_string(),
            build_namespace: "build".to_string(),
            deploy_namespace: "deploy".to_string(),
            scan_namespace: "scan".to_string(),
            test_namespace: "test".to_string(),
            lint_template: "lint".to_string(),
            extension: "yml".to_string(),
        }
    }
}

impl TemplateLayout {
    /// Default layout rooted at a different directory.
    pub fn with_root(root: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            root: root.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn build_path(&self, language: &str) -> String {
        self.path(&self.build_namespace, language)
    }

    pub fn deploy_path(&self, deploy_method: &str) -> String {
        self.path(&self.deploy_namespace, deploy_method)
    }

    pub fn lint_path(&self) -> String {
        self.path(&self.scan_namespace, &self.lint_template)
    }

    pub fn test_path(&self, test_type: &str) -> String {
        self.path(&self.test_namespace, test_type)
    }

    fn path(&self, namespace: &str, key: &str) -> String {
        if self.root.is_empty() {
            format!("{}/{}.{}", namespace, key, self.extension)
        } else {
            format!("{}/{}/{}.{}", self.root, namespace, key, self.extension)
        }
    }
}
