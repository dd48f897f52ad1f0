use serde::{Deserialize, Serialize};
use std::fmt;

/// How a [`RouteRule`] pattern is compared against `location.pathname`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMatch {
    Exact,
    Prefix,
    /// Matches anywhere in the path, so `/search/` also gates
    /// `/products/search/results/`.
    Substring,
}

impl RouteMatch {
    pub fn matches(self, pattern: &str, path: &str) -> bool {
        match self {
            RouteMatch::Exact => path == pattern,
            RouteMatch::Prefix => path.starts_with(pattern),
            RouteMatch::Substring => path.contains(pattern),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    PanelToggle,
    DeleteBinder,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::PanelToggle => write!(f, "panel toggle"),
            Behavior::DeleteBinder => write!(f, "delete binder"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    #[serde(rename = "match")]
    pub kind: RouteMatch,
    pub pattern: String,
    pub behaviors: Vec<Behavior>,
}

impl RouteRule {
    pub fn new(kind: RouteMatch, pattern: impl Into<String>, behaviors: &[Behavior]) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            behaviors: behaviors.to_vec(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.kind.matches(&self.pattern, path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    pub rules: Vec<RouteRule>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            rules: vec![
                RouteRule::new(RouteMatch::Exact, "/", &[Behavior::DeleteBinder]),
                RouteRule::new(
                    RouteMatch::Exact,
                    "/history/",
                    &[Behavior::PanelToggle, Behavior::DeleteBinder],
                ),
                RouteRule::new(RouteMatch::Substring, "/search/", &[Behavior::DeleteBinder]),
            ],
        }
    }
}

impl RouteTable {
    /// Behaviors of every rule matching `path`, each listed once in the order
    /// first seen.
    pub fn behaviors_for(&self, path: &str) -> Vec<Behavior> {
        let mut active = Vec::new();
        for rule in self.rules.iter().filter(|rule| rule.matches(path)) {
            for behavior in &rule.behaviors {
                if !active.contains(behavior) {
                    active.push(*behavior);
                }
            }
        }
        active
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn root_activates_only_delete_binder() {
        let table = RouteTable::default();
        assert_eq!(table.behaviors_for("/"), vec![Behavior::DeleteBinder]);
    }

    #[test]
    fn history_activates_both_behaviors_once() {
        let table = RouteTable::default();
        assert_eq!(
            table.behaviors_for("/history/"),
            vec![Behavior::PanelToggle, Behavior::DeleteBinder]
        );
    }

    #[test]
    fn search_segment_matches_anywhere_in_path() {
        let table = RouteTable::default();
        assert_eq!(table.behaviors_for("/search/"), vec![Behavior::DeleteBinder]);
        assert_eq!(
            table.behaviors_for("/products/search/results/"),
            vec![Behavior::DeleteBinder]
        );
    }

    #[test]
    fn exact_rules_do_not_normalise_trailing_slash() {
        let table = RouteTable::default();
        assert!(table.behaviors_for("/history").is_empty());
        assert!(table.behaviors_for("/history/2024/").is_empty());
        assert!(table.behaviors_for("/login/").is_empty());
    }

    #[test]
    fn panel_toggle_is_gated_to_history() {
        let table = RouteTable::default();
        for path in ["/", "/search/", "/a/search/b", "/settings/"] {
            assert!(!table.behaviors_for(path).contains(&Behavior::PanelToggle));
        }
    }

    #[test]
    fn prefix_rule_matches_nested_paths() {
        let rule = RouteRule::new(RouteMatch::Prefix, "/portfolio/", &[Behavior::DeleteBinder]);
        assert!(rule.matches("/portfolio/"));
        assert!(rule.matches("/portfolio/aapl/"));
        assert!(!rule.matches("/x/portfolio/"));
    }

    #[test]
    fn deserialize_route_rule_uses_match_key() {
        let raw = r#"[{"match":"prefix","pattern":"/watch/","behaviors":["delete_binder"]}]"#;
        let table: RouteTable = serde_json::from_str(raw).unwrap();
        assert_eq!(table.rules[0].kind, RouteMatch::Prefix);
        assert_eq!(table.behaviors_for("/watch/1/"), vec![Behavior::DeleteBinder]);
    }
}
