//! Core of the developer toolbox directory: the static tool catalog,
//! search and autocomplete over it, and `{{VARIABLE}}` config template
//! rendering for the Docker mirror quick-config helper.
//!
//! Everything here is pure and synchronous. The catalog is parsed once from
//! embedded TOML; callers hold `&ToolRecord` references into it. Persistence
//! of user preferences lives with the caller, never in this crate.

pub mod catalog;
pub mod error;
pub mod generate;
pub mod search;
pub mod types;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use generate::generate;
pub use search::{search, suggestions, SUGGESTION_LIMIT};
pub use types::mirror::MirrorPreset;
pub use types::template::{ConfigTemplate, Platform};
pub use types::tool::{Category, ToolRecord, ToolStatus};
