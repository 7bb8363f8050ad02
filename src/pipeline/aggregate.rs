use crate::domain::{Category, ToolEntry};

/// One summary row: a category and how many surviving tools landed in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: &'static str,
    pub tool_count: usize,
}

/// Groups surviving entries by category in first-encounter order, then sorts
/// by descending count. The sort is stable, so tied categories keep the
/// order in which they were first seen rather than an alphabetic one.
pub fn summarize(entries: &[ToolEntry]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for entry in entries {
        let label = entry
            .category
            .unwrap_or(Category::GeneralUtilities)
            .label();
        match counts.iter_mut().find(|count| count.category == label) {
            Some(count) => count.tool_count += 1,
            None => counts.push(CategoryCount {
                category: label,
                tool_count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.tool_count.cmp(&a.tool_count));
    counts
}
