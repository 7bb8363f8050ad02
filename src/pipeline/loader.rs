use crate::domain::ToolEntry;
use crate::pipeline::schema::SchemaMap;

/// Known `Tool_Type` typos in the source export, fixed by exact match.
/// Anything else passes through unchanged.
const TOOL_TYPE_FIXES: [(&str, &str); 7] = [
    ("colaboration", "Collaboration"),
    ("auth", "Authentication"),
    ("authentcation", "Authentication"),
    ("applcation", "Application"),
    ("informaton", "Information"),
    ("Demo Tool", "Demo"),
    ("Video Editing", "Media Tool"),
];

pub fn normalize_tool_type(raw: &str) -> String {
    TOOL_TYPE_FIXES
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Converts reconciled rows into typed entries, preserving input row order.
/// URLs are trimmed and tool types run through the typo table; no row is
/// dropped here regardless of content.
pub fn load_entries(schema: &SchemaMap, rows: &[Vec<String>]) -> Vec<ToolEntry> {
    rows.iter()
        .map(|row| {
            let field = |canonical: &str| -> String {
                schema
                    .index_of(canonical)
                    .and_then(|index| row.get(index))
                    .cloned()
                    .unwrap_or_default()
            };
            ToolEntry::new(
                field("URL").trim().to_string(),
                field("Name"),
                field("Synopsis"),
                normalize_tool_type(&field("Tool_Type")),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::schema;

    fn schema_for(raw: &[&str]) -> SchemaMap {
        let headers: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        schema::reconcile(&headers).unwrap()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn typo_table_is_exact_match() {
        assert_eq!(normalize_tool_type("colaboration"), "Collaboration");
        assert_eq!(normalize_tool_type("auth"), "Authentication");
        assert_eq!(normalize_tool_type("Demo Tool"), "Demo");
        // No fuzzy matching: unknown values pass through as-is
        assert_eq!(normalize_tool_type("Colaboration"), "Colaboration");
        assert_eq!(normalize_tool_type("Collaboration"), "Collaboration");
    }

    #[test]
    fn entries_keep_input_row_order_and_trim_urls() {
        let schema = schema_for(&["url", "name", "synopsis", "tool_type"]);
        let rows = vec![
            row(&["  https://one.example/  ", "One", "first tool", "Demo Tool"]),
            row(&["https://two.example/", "Two", "second tool", "informaton"]),
        ];

        let entries = load_entries(&schema, &rows);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "https://one.example/");
        assert_eq!(entries[0].tool_type, "Demo");
        assert_eq!(entries[1].name, "Two");
        assert_eq!(entries[1].tool_type, "Information");
        assert!(entries[0].url_status.is_none());
        assert!(entries[0].category.is_none());
    }

    #[test]
    fn short_rows_produce_empty_fields_not_drops() {
        let schema = schema_for(&["url", "name", "synopsis", "tool_type"]);
        let rows = vec![row(&["https://short.example/"])];

        let entries = load_entries(&schema, &rows);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "");
        assert_eq!(entries[0].synopsis, "");
    }
}
