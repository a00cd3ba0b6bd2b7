use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// One catalog entry describing a utility available in the toolbox.
///
/// Records are immutable: the catalog is parsed once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ToolRecord {
    /// Unique, kebab-case identifier (e.g. `docker-center`).
    pub id: String,

    /// Display name shown on the tool card.
    pub name: String,

    /// A short, human-readable description of what the tool does.
    #[serde(default)]
    pub description: String,

    /// Which shelf of the directory the tool sits on.
    pub category: Category,

    /// Whether the tool is live or still being built.
    #[serde(default)]
    pub status: ToolStatus,

    /// Where the tool lives.
    pub href: Url,

    /// Icon reference, resolved by the presentation layer.
    #[serde(default)]
    pub icon: String,
}

impl ToolRecord {
    /// Whether the tool can actually be opened.
    pub fn is_active(&self) -> bool {
        self.status == ToolStatus::Active
    }
}

/// The fixed set of directory categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DevTools,
    Utilities,
    Entertainment,
    Learning,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::DevTools,
        Category::Utilities,
        Category::Entertainment,
        Category::Learning,
    ];

    /// Kebab-case identifier used in data files and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::DevTools => "dev-tools",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Learning => "learning",
        }
    }

    /// Display label as shown on the site.
    pub fn label(&self) -> &'static str {
        match self {
            Category::DevTools => "开发工具",
            Category::Utilities => "实用工具",
            Category::Entertainment => "娱乐工具",
            Category::Learning => "学习工具",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown category '{0}' (expected dev-tools, utilities, entertainment or learning)")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s || c.label() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Lifecycle status of a tool card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ToolStatus {
    #[default]
    Active,
    ComingSoon,
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolStatus::Active => write!(f, "active"),
            ToolStatus::ComingSoon => write!(f, "coming-soon"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown status '{0}' (expected active or coming-soon)")]
pub struct ParseToolStatusError(String);

impl FromStr for ToolStatus {
    type Err = ParseToolStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ToolStatus::Active),
            "coming-soon" => Ok(ToolStatus::ComingSoon),
            other => Err(ParseToolStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert!("gardening".parse::<Category>().is_err());
    }

    #[test]
    fn test_status_serde_uses_kebab_case() {
        let status: ToolStatus = serde_json::from_str("\"coming-soon\"").unwrap();
        assert_eq!(status, ToolStatus::ComingSoon);
        assert_eq!(status.to_string(), "coming-soon");
    }
}
