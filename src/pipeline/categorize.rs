use crate::domain::{Category, ToolEntry};

/// Ordered category rules over the lowercased enhanced synopsis; first match
/// wins. Evaluated in fixed sequence so the outcome never depends on table
/// iteration order.
const CATEGORY_RULES: [(&[&str], Category); 8] = [
    (&["authentication", "token"], Category::Security),
    (&["learning", "labs", "training"], Category::Education),
    (&["diagram"], Category::Diagramming),
    (&["stream", "video", "recording"], Category::MediaTools),
    (&["git", "repository"], Category::CodeRepositories),
    (&["meeting", "conference"], Category::Meetings),
    (&["automation", "ansible"], Category::Automation),
    (&["terminal"], Category::CliUtilities),
];

pub fn categorize(enhanced_synopsis: &str) -> Category {
    let lowered = enhanced_synopsis.to_lowercase();
    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return category;
        }
    }
    Category::GeneralUtilities
}

/// Assigns exactly one category per entry, from the enhanced synopsis
pub fn categorize_all(entries: Vec<ToolEntry>) -> Vec<ToolEntry> {
    entries
        .into_iter()
        .map(|mut entry| {
            entry.category = Some(categorize(entry.enhanced_synopsis.as_deref().unwrap_or("")));
            entry
        })
        .collect()
}
