//! Substring search and autocomplete over the tool list.
//!
//! Both functions are pure: they never mutate the input slice and return
//! references into it, preserving the catalog's source order. Ranking beyond
//! source order is deliberately not implemented.

use crate::types::tool::ToolRecord;

/// Maximum number of autocomplete suggestions returned by [`suggestions`].
pub const SUGGESTION_LIMIT: usize = 5;

/// Return every tool whose name, description or category contains the query.
///
/// The query is trimmed and lowercased first; an empty (or whitespace-only)
/// query is the identity and returns the whole list. Matching is inclusive:
/// a hit in any one field is enough.
pub fn search<'a>(tools: &'a [ToolRecord], query: &str) -> Vec<&'a ToolRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tools.iter().collect();
    }

    tools.iter().filter(|tool| matches(tool, &needle)).collect()
}

/// A bounded prefix of [`search`] results, intended for autocomplete.
pub fn suggestions<'a>(tools: &'a [ToolRecord], query: &str) -> Vec<&'a ToolRecord> {
    let mut hits = search(tools, query);
    hits.truncate(SUGGESTION_LIMIT);
    hits
}

/// Case-insensitive substring containment against a single record.
///
/// The category matches on both its display label and its kebab-case slug,
/// so `开发工具` and `dev-tools` find the same tools. `needle` must already
/// be trimmed and lowercased.
fn matches(tool: &ToolRecord, needle: &str) -> bool {
    tool.name.to_lowercase().contains(needle)
        || tool.description.to_lowercase().contains(needle)
        || tool.category.label().contains(needle)
        || tool.category.slug().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tool::{Category, ToolStatus};
    use url::Url;

    fn record(id: &str, name: &str, description: &str, category: Category) -> ToolRecord {
        ToolRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            status: ToolStatus::Active,
            href: Url::parse("https://toolbox.example.com/t").unwrap(),
            icon: String::new(),
        }
    }

    fn sample() -> Vec<ToolRecord> {
        vec![
            record(
                "docker-center",
                "Docker 镜像加速中心",
                "国内镜像源状态监控与一键配置",
                Category::DevTools,
            ),
            record(
                "json-formatter",
                "JSON 格式化",
                "格式化与校验 JSON 文本",
                Category::DevTools,
            ),
            record(
                "game-2048",
                "2048 小游戏",
                "经典数字合并游戏",
                Category::Entertainment,
            ),
        ]
    }

    #[test]
    fn test_empty_and_whitespace_queries_are_identity() {
        let tools = sample();
        assert_eq!(search(&tools, "").len(), tools.len());
        assert_eq!(search(&tools, "   \t ").len(), tools.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let tools = sample();
        let upper = search(&tools, "Docker");
        let lower = search(&tools, "docker");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id, "docker-center");
    }

    #[test]
    fn test_fragment_matches_via_substring() {
        let tools = sample();
        let hits = search(&tools, "dock");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "docker-center");
    }

    #[test]
    fn test_category_query_returns_whole_category() {
        let tools = sample();
        let by_label = search(&tools, "开发工具");
        assert_eq!(by_label.len(), 2);

        let by_slug = search(&tools, "dev-tools");
        assert_eq!(by_label, by_slug);
    }

    #[test]
    fn test_unmatched_query_yields_empty() {
        let tools = sample();
        assert!(search(&tools, "xyz123").is_empty());
    }

    #[test]
    fn test_suggestions_are_a_capped_prefix_of_search() {
        let tools: Vec<ToolRecord> = (0..10)
            .map(|i| {
                record(
                    &format!("tool-{}", i),
                    &format!("Tool {}", i),
                    "",
                    Category::Utilities,
                )
            })
            .collect();

        let all = search(&tools, "tool");
        let capped = suggestions(&tools, "tool");
        assert_eq!(all.len(), 10);
        assert_eq!(capped.len(), SUGGESTION_LIMIT);
        assert_eq!(&all[..SUGGESTION_LIMIT], &capped[..]);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let tools = sample();
        let ids: Vec<&str> = search(&tools, "游戏")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["game-2048"]);

        let everything: Vec<&str> = search(&tools, "").iter().map(|t| t.id.as_str()).collect();
        assert_eq!(everything, vec!["docker-center", "json-formatter", "game-2048"]);
    }
}
