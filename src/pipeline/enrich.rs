use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::ToolEntry;

/// Fallback when an entry has no synopsis and no rule matches
pub const MISSING_SYNOPSIS_TEXT: &str = "Tool description not available";

/// Placeholder substituted with the configured company name
const COMPANY_TOKEN: &str = "{company}";

/// Exact-match display name rewrites for well-known tools
static NAME_REWRITES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Draw.io", "Draw.io – Web Diagramming Tool"),
        ("Doitlive", "Doitlive – Terminal Demo Simulator"),
        ("Skype", "Skype – Web-Based Video & Voice Communication"),
        ("Trello", "Trello – Visual Project Management Boards"),
        ("Lucidchart", "Lucidchart – Intelligent Diagramming Platform"),
        ("Jupyterlab", "JupyterLab – Interactive Data Science Environment"),
    ])
});

struct SynopsisRule {
    keywords: &'static [&'static str],
    replacement: &'static str,
}

/// Ordered synopsis rules; the first rule with a matching keyword wins, so a
/// synopsis mentioning both "diagram" and "video" always gets the diagramming
/// text. The order is a contract, not an accident of table iteration.
const SYNOPSIS_RULES: [SynopsisRule; 6] = [
    SynopsisRule {
        keywords: &["diagram"],
        replacement: "Tool for creating flowcharts, architecture maps, and process diagrams.",
    },
    SynopsisRule {
        keywords: &["learning", "labs"],
        replacement: "Interactive learning tools and environments for {company} technologies.",
    },
    SynopsisRule {
        keywords: &["authentic", "token"],
        replacement: "Authentication and identity tools for secure access control.",
    },
    SynopsisRule {
        keywords: &["stream", "video"],
        replacement: "Utilities for recording, streaming, and multimedia editing.",
    },
    SynopsisRule {
        keywords: &["terminal"],
        replacement: "CLI tools for sysadmin workflows and shell automation.",
    },
    SynopsisRule {
        keywords: &["git"],
        replacement: "Repositories or tools for managing source code and collaboration.",
    },
];

/// Rewrites display names and produces the enhanced synopsis. Both transforms
/// are pure functions of the existing fields.
pub struct EnrichmentEngine {
    company_name: String,
}

impl EnrichmentEngine {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
        }
    }

    pub fn rewrite_name(&self, name: &str) -> String {
        NAME_REWRITES
            .get(name)
            .map(|rewritten| rewritten.to_string())
            .unwrap_or_else(|| name.to_string())
    }

    pub fn enhance_synopsis(&self, synopsis: &str) -> String {
        let lowered = synopsis.to_lowercase();
        for rule in &SYNOPSIS_RULES {
            if rule.keywords.iter().any(|keyword| lowered.contains(keyword)) {
                return rule.replacement.replace(COMPANY_TOKEN, &self.company_name);
            }
        }
        if synopsis.trim().is_empty() {
            MISSING_SYNOPSIS_TEXT.to_string()
        } else {
            synopsis.to_string()
        }
    }

    pub fn enrich_all(&self, entries: Vec<ToolEntry>) -> Vec<ToolEntry> {
        entries
            .into_iter()
            .map(|mut entry| {
                entry.name = self.rewrite_name(&entry.name);
                entry.enhanced_synopsis = Some(self.enhance_synopsis(&entry.synopsis));
                entry
            })
            .collect()
    }
}
