//! The static data set the directory is built from.
//!
//! Tools, config templates and mirror presets are authored as TOML, embedded
//! into the binary and parsed exactly once. Validation happens at load time
//! so that rendering and search can stay free of error handling.

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CatalogError;
use crate::generate::placeholder;
use crate::types::mirror::MirrorPreset;
use crate::types::template::{ConfigTemplate, Platform};
use crate::types::tool::ToolRecord;

const TOOLS_TOML: &str = include_str!("../data/tools.toml");
const TEMPLATES_TOML: &str = include_str!("../data/templates.toml");
const MIRRORS_TOML: &str = include_str!("../data/mirrors.toml");

/// Immutable catalog of tools, config templates and mirror presets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
pub struct Catalog {
    #[serde(default)]
    pub tools: Vec<ToolRecord>,

    #[serde(default)]
    pub templates: Vec<ConfigTemplate>,

    #[serde(default)]
    pub mirrors: Vec<MirrorPreset>,
}

impl Catalog {
    /// Parse and validate a catalog from its three TOML documents.
    pub fn parse(tools: &str, templates: &str, mirrors: &str) -> Result<Self, CatalogError> {
        #[derive(Deserialize)]
        struct ToolsFile {
            #[serde(default)]
            tools: Vec<ToolRecord>,
        }

        #[derive(Deserialize)]
        struct TemplatesFile {
            #[serde(default)]
            templates: Vec<ConfigTemplate>,
        }

        #[derive(Deserialize)]
        struct MirrorsFile {
            #[serde(default)]
            mirrors: Vec<MirrorPreset>,
        }

        let tools: ToolsFile = toml::from_str(tools)?;
        let templates: TemplatesFile = toml::from_str(templates)?;
        let mirrors: MirrorsFile = toml::from_str(mirrors)?;

        let catalog = Self {
            tools: tools.tools,
            templates: templates.templates,
            mirrors: mirrors.mirrors,
        };
        catalog.validate()?;

        tracing::debug!(
            tools = catalog.tools.len(),
            templates = catalog.templates.len(),
            mirrors = catalog.mirrors.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog embedded in the binary, parsed on first use.
    ///
    /// The embedded data is covered by tests, so the parse cannot fail in a
    /// released binary.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
            Catalog::parse(TOOLS_TOML, TEMPLATES_TOML, MIRRORS_TOML)
                .expect("embedded catalog data is valid")
        });
        &BUILTIN
    }

    /// Data-authoring checks: unique tool ids, every declared template
    /// variable present literally in its template text, and a template for
    /// every supported platform.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for tool in &self.tools {
            if !seen.insert(tool.id.as_str()) {
                return Err(CatalogError::DuplicateToolId(tool.id.clone()));
            }
        }

        for template in &self.templates {
            for variable in &template.variables {
                if !template.template.contains(&placeholder(variable)) {
                    return Err(CatalogError::MissingPlaceholder {
                        template: template.id.clone(),
                        variable: variable.clone(),
                    });
                }
            }
        }

        for platform in Platform::ALL {
            if self.template_for(platform).is_none() {
                return Err(CatalogError::MissingTemplate(platform.to_string()));
            }
        }

        Ok(())
    }

    /// Look up a tool by id.
    pub fn tool(&self, id: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// The config template targeting the given platform.
    pub fn template_for(&self, platform: Platform) -> Option<&ConfigTemplate> {
        self.templates.iter().find(|t| t.platform == platform)
    }

    /// Look up a mirror preset by id.
    pub fn mirror(&self, id: &str) -> Option<&MirrorPreset> {
        self.mirrors.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(!catalog.tools.is_empty());
        assert!(!catalog.mirrors.is_empty());
        catalog.validate().unwrap();
    }

    #[test]
    fn test_builtin_covers_every_platform() {
        let catalog = Catalog::builtin();
        for platform in Platform::ALL {
            let template = catalog.template_for(platform).unwrap();
            assert!(template.variables.contains(&"MIRROR_URL".to_string()));
        }
    }

    #[test]
    fn test_duplicate_tool_ids_are_rejected() {
        let tool = ToolRecord {
            id: "twice".to_string(),
            name: "Twice".to_string(),
            description: String::new(),
            category: crate::types::tool::Category::Utilities,
            status: Default::default(),
            href: Url::parse("https://toolbox.example.com/twice").unwrap(),
            icon: String::new(),
        };
        let catalog = Catalog {
            tools: vec![tool.clone(), tool],
            templates: Catalog::builtin().templates.clone(),
            mirrors: Vec::new(),
        };

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateToolId(id)) if id == "twice"
        ));
    }

    #[test]
    fn test_declared_variable_must_appear_in_text() {
        let mut catalog = Catalog {
            tools: Vec::new(),
            templates: Catalog::builtin().templates.clone(),
            mirrors: Vec::new(),
        };
        catalog.templates[0].variables.push("GHOST".to_string());

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::MissingPlaceholder { variable, .. }) if variable == "GHOST"
        ));
    }

    #[test]
    fn test_missing_platform_template_is_rejected() {
        let catalog = Catalog::default();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::MissingTemplate(_))
        ));
    }
}
