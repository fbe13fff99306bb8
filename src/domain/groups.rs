//! Groups mini-syntax: comma separated integers and `<int>-<int>` ranges.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupsError {
    #[error("Could not get max of empty slice")]
    Empty,
}

/// Returns true when `groups` is one or more `<int>` or `<int>-<int>`
/// segments separated by commas, with no whitespace.
pub fn matches_grammar(groups: &str) -> bool {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    let grammar = GRAMMAR.get_or_init(|| {
        Regex::new(r"^[0-9]+(-[0-9]+)?(,[0-9]+(-[0-9]+)?)*$").expect("groups grammar must compile")
    });
    grammar.is_match(groups)
}

/// Returns the integer tokens written in `groups`, left to right.
///
/// Commas and hyphens are both treated as plain separators, so ranges are
/// not expanded: `"0,2-5"` yields `[0, 2, 5]`. The result is only meant for
/// bounding the highest group id.
///
/// # Panics
///
/// Panics if a token is not a valid group id. Callers must run the groups
/// validators first.
pub fn split_groups(groups: &str) -> Vec<u32> {
    groups
        .split([',', '-'])
        .map(|token| {
            token
                .parse::<u32>()
                .unwrap_or_else(|e| panic!("unvalidated groups token '{}': {}", token, e))
        })
        .collect()
}

/// Maximum of a non-empty slice of group ids.
pub fn max_of(nums: &[u32]) -> Result<u32, GroupsError> {
    nums.iter().copied().max().ok_or(GroupsError::Empty)
}

/// Joins selected group ids into the canonical groups string.
pub fn join_groups(groups: &[u32]) -> String {
    groups.iter().map(u32::to_string).collect::<Vec<_>>().join(",")
}
