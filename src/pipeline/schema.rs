use std::collections::HashMap;

use crate::error::{CatalogError, Result};

/// Canonical columns every downstream stage depends on
pub const REQUIRED_COLUMNS: [&str; 4] = ["URL", "Name", "Synopsis", "Tool_Type"];

/// Alias table consulted when a canonical column is missing after
/// canonicalization. Matching is case-insensitive and an alias is only
/// applied while its target is still absent.
const COLUMN_ALIASES: [(&str, &str); 9] = [
    ("Url", "URL"),
    ("Link", "URL"),
    ("Links", "URL"),
    ("Web_Link", "URL"),
    ("Tool_Name", "Name"),
    ("Title", "Name"),
    ("Description", "Synopsis"),
    ("Type", "Tool_Type"),
    ("Category", "Tool_Type"),
];

/// Result of reconciling raw headers against the canonical schema: a pure
/// mapping from canonical column name to source column index. The raw input
/// is left untouched for diagnostics.
#[derive(Debug, Clone)]
pub struct SchemaMap {
    columns: HashMap<String, usize>,
    /// `(source header, canonical target)` pairs where an alias fired
    pub applied_aliases: Vec<(String, String)>,
}

impl SchemaMap {
    pub fn index_of(&self, canonical: &str) -> Option<usize> {
        self.columns.get(canonical).copied()
    }
}

/// Canonicalizes a raw header: trims surrounding whitespace, title-cases,
/// and replaces spaces with underscores. Title-casing follows the source
/// export convention: a letter is uppercased when the preceding character is
/// not a letter, lowercased otherwise, so `"tool name "` becomes `Tool_Name`
/// and `"URL"` becomes `Url`.
pub fn canonicalize_header(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut prev_alpha = false;
    for ch in trimmed.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out.replace(' ', "_")
}

/// Reconciles raw headers to the canonical schema, applying the alias table
/// for whatever is still missing. Fails when required columns remain absent,
/// reporting both the missing set and the columns actually present.
pub fn reconcile(raw_headers: &[String]) -> Result<SchemaMap> {
    let canonical: Vec<String> = raw_headers
        .iter()
        .map(|header| canonicalize_header(header))
        .collect();

    let mut columns: HashMap<String, usize> = HashMap::new();
    for (index, name) in canonical.iter().enumerate() {
        // First occurrence wins on duplicate headers
        columns.entry(name.clone()).or_insert(index);
    }

    let mut applied_aliases = Vec::new();
    if REQUIRED_COLUMNS.iter().any(|col| !columns.contains_key(*col)) {
        for (alias, target) in COLUMN_ALIASES {
            if columns.contains_key(target) {
                continue;
            }
            let matched = canonical
                .iter()
                .enumerate()
                .find(|(_, name)| name.eq_ignore_ascii_case(alias));
            if let Some((index, name)) = matched {
                columns.insert(target.to_string(), index);
                applied_aliases.push((name.clone(), target.to_string()));
            }
        }
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !columns.contains_key(**col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CatalogError::Schema {
            missing,
            available: canonical,
        });
    }

    Ok(SchemaMap {
        columns,
        applied_aliases,
    })
}
