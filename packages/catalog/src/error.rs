use thiserror::Error;

/// Failures surfaced while parsing or validating catalog data.
///
/// These are data-authoring errors: the shipped catalog is validated by
/// tests, so a user of the published binary should never see one.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate tool id '{0}'")]
    DuplicateToolId(String),

    #[error("template '{template}' declares variable '{variable}' but its text never contains {{{{{variable}}}}}")]
    MissingPlaceholder { template: String, variable: String },

    #[error("no config template defined for platform '{0}'")]
    MissingTemplate(String),
}
