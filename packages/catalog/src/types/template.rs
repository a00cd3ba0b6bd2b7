use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Target operating system for a config template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    #[serde(alias = "darwin")]
    Macos,
    Windows,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Macos, Platform::Windows];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "linux"),
            Platform::Macos => write!(f, "macos"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown platform '{0}' (expected linux, macos or windows)")]
pub struct ParsePlatformError(String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::Macos),
            "windows" => Ok(Platform::Windows),
            other => Err(ParsePlatformError(other.to_string())),
        }
    }
}

/// A configuration snippet containing `{{VARIABLE}}` placeholder tokens.
///
/// Every name listed in `variables` must appear literally as `{{name}}`
/// somewhere in `template`; catalog validation enforces this so that
/// rendering never has to handle the mismatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConfigTemplate {
    /// Unique template identifier (e.g. `daemon-linux`).
    pub id: String,

    /// Which operating system this snippet targets.
    pub platform: Platform,

    /// Instructions shown alongside the rendered config.
    #[serde(default)]
    pub description: String,

    /// Variable names this template declares, in substitution order.
    #[serde(default)]
    pub variables: Vec<String>,

    /// Raw template text; placeholders appear literally as `{{NAME}}`.
    pub template: String,
}
