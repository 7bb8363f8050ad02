use serde::{Deserialize, Serialize};

/// A single catalog row as it moves through the pipeline. The optional fields
/// are assigned by their owning stage and left untouched afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolEntry {
    pub url: String,
    pub name: String,
    pub synopsis: String,
    pub tool_type: String,
    /// Set exactly once by the liveness validator
    pub url_status: Option<UrlStatus>,
    /// Set by the enrichment engine
    pub enhanced_synopsis: Option<String>,
    /// Set by the categorizer
    pub category: Option<Category>,
}

impl ToolEntry {
    pub fn new(url: String, name: String, synopsis: String, tool_type: String) -> Self {
        Self {
            url,
            name,
            synopsis,
            tool_type,
            url_status: None,
            enhanced_synopsis: None,
            category: None,
        }
    }
}

/// Classification of a tool URL after the liveness probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlStatus {
    Ok,
    Restricted,
    HttpError(u16),
    Invalid,
}

impl UrlStatus {
    /// Only `Ok` entries survive into the cleaned catalog
    pub fn is_live(&self) -> bool {
        matches!(self, UrlStatus::Ok)
    }

    pub fn label(&self) -> String {
        match self {
            UrlStatus::Ok => "OK".to_string(),
            UrlStatus::Restricted => "Restricted".to_string(),
            UrlStatus::HttpError(code) => format!("Error {}", code),
            UrlStatus::Invalid => "Invalid".to_string(),
        }
    }
}

/// The closed set of catalog categories: eight rule-assigned labels plus the
/// default assigned when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Security,
    Education,
    Diagramming,
    MediaTools,
    CodeRepositories,
    Meetings,
    Automation,
    CliUtilities,
    GeneralUtilities,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Security,
        Category::Education,
        Category::Diagramming,
        Category::MediaTools,
        Category::CodeRepositories,
        Category::Meetings,
        Category::Automation,
        Category::CliUtilities,
        Category::GeneralUtilities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Security => "Security",
            Category::Education => "Education",
            Category::Diagramming => "Diagramming",
            Category::MediaTools => "Media Tools",
            Category::CodeRepositories => "Code Repositories",
            Category::Meetings => "Meetings",
            Category::Automation => "Automation",
            Category::CliUtilities => "CLI Utilities",
            Category::GeneralUtilities => "General Utilities",
        }
    }
}
