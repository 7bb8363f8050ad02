use csv::Writer;
use std::path::Path;

use crate::domain::ToolEntry;
use crate::error::{CatalogError, Result};
use crate::pipeline::aggregate::CategoryCount;

/// Cleaned catalog columns: the canonical schema in order, then the fields
/// added by the pipeline stages.
pub const CLEANED_HEADERS: [&str; 7] = [
    "URL",
    "Name",
    "Synopsis",
    "Tool_Type",
    "URL_Status",
    "Enhanced_Synopsis",
    "Category",
];

pub const SUMMARY_HEADERS: [&str; 2] = ["Category", "Tool_Count"];

/// Writes one row per surviving entry. Surviving entries always carry a
/// status, enhancement, and category by the time they reach this point.
pub fn write_cleaned_catalog(path: &Path, entries: &[ToolEntry]) -> Result<()> {
    let mut writer = Writer::from_path(path).map_err(|e| output_error(path, e))?;
    writer
        .write_record(CLEANED_HEADERS)
        .map_err(|e| output_error(path, e))?;
    for entry in entries {
        let record = [
            entry.url.clone(),
            entry.name.clone(),
            entry.synopsis.clone(),
            entry.tool_type.clone(),
            entry
                .url_status
                .as_ref()
                .map(|status| status.label())
                .unwrap_or_default(),
            entry.enhanced_synopsis.clone().unwrap_or_default(),
            entry
                .category
                .map(|category| category.label().to_string())
                .unwrap_or_default(),
        ];
        writer.write_record(&record).map_err(|e| output_error(path, e))?;
    }
    writer.flush().map_err(|e| output_error(path, e))?;
    Ok(())
}

pub fn write_summary(path: &Path, summary: &[CategoryCount]) -> Result<()> {
    let mut writer = Writer::from_path(path).map_err(|e| output_error(path, e))?;
    writer
        .write_record(SUMMARY_HEADERS)
        .map_err(|e| output_error(path, e))?;
    for count in summary {
        writer
            .write_record([count.category.to_string(), count.tool_count.to_string()])
            .map_err(|e| output_error(path, e))?;
    }
    writer.flush().map_err(|e| output_error(path, e))?;
    Ok(())
}

fn output_error(path: &Path, error: impl std::fmt::Display) -> CatalogError {
    CatalogError::OutputWrite {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, UrlStatus};

    fn surviving_entry() -> ToolEntry {
        let mut entry = ToolEntry::new(
            "https://ok.example/".to_string(),
            "Draw.io – Web Diagramming Tool".to_string(),
            "diagram tool".to_string(),
            "Collaboration".to_string(),
        );
        entry.url_status = Some(UrlStatus::Ok);
        entry.enhanced_synopsis =
            Some("Tool for creating flowcharts, architecture maps, and process diagrams.".to_string());
        entry.category = Some(Category::Diagramming);
        entry
    }

    #[test]
    fn cleaned_catalog_round_trips_through_csv() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Cleaned_Tools.csv");
        write_cleaned_catalog(&path, &[surviving_entry()])?;

        let mut reader = csv::Reader::from_path(&path)?;
        assert_eq!(reader.headers()?, &CLEANED_HEADERS[..]);
        let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "https://ok.example/");
        assert_eq!(&rows[0][4], "OK");
        assert_eq!(&rows[0][6], "Diagramming");
        Ok(())
    }

    #[test]
    fn summary_writes_category_and_count_columns() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Tools_Summary.csv");
        let summary = vec![
            CategoryCount { category: "Diagramming", tool_count: 3 },
            CategoryCount { category: "Security", tool_count: 1 },
        ];
        write_summary(&path, &summary)?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content, "Category,Tool_Count\nDiagramming,3\nSecurity,1\n");
        Ok(())
    }

    #[test]
    fn unwritable_path_reports_which_output_failed() {
        let err = write_summary(Path::new("no-such-dir/Tools_Summary.csv"), &[]).unwrap_err();
        match err {
            CatalogError::OutputWrite { path, .. } => {
                assert!(path.contains("Tools_Summary.csv"));
            }
            other => panic!("expected output error, got {other:?}"),
        }
    }
}
