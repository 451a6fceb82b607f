//! Project blueprint model.

/// A declarative description of a project's pipeline needs.
///
/// Values are kept exactly as written in the blueprint document; nothing
/// here checks them against the available templates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blueprint {
    /// Project identifier, exported as `PROJECT_NAME`.
    pub project_name: String,
    /// Selects the build template.
    pub language: String,
    /// Selects the deploy template.
    pub deploy_method: String,
    /// Deployment targets, in order.
    pub environments: Vec<String>,
    /// One test template per entry, in order.
    pub test_types: Vec<String>,
}

impl Blueprint {
    pub fn new(
        project_name: impl Into<String>,
        language: impl Into<String>,
        deploy_method: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            language: language.into(),
            deploy_method: deploy_method.into(),
            environments: Vec::new(),
            test_types: Vec::new(),
        }
    }

    pub fn with_environments<I, S>(mut self, environments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.environments = environments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_test_types<I, S>(mut self, test_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_types = test_types.into_iter().map(Into::into).collect();
        self
    }
}
