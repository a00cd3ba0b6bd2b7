use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// A well-known registry mirror suggested by the quick-config helper.
///
/// The URL is treated as an opaque endpoint; it is never resolved or
/// validated beyond being a syntactically valid URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MirrorPreset {
    /// Short identifier used on the command line (e.g. `ustc`).
    pub id: String,

    /// Display name of the mirror provider.
    pub name: String,

    /// The mirror endpoint.
    pub url: Url,

    #[serde(default)]
    pub description: String,
}
