use calamine::{open_workbook_auto, Data, Reader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{CatalogError, Result};

/// Raw tabular data lifted out of the source workbook: one header row plus
/// the data rows, every cell coerced to a string.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reads the first sheet of an `.xlsx`/`.xls` workbook. When the workbook has
/// several sheets the first one in declared order is used and the rest are
/// logged and ignored.
pub fn read_spreadsheet(path: &Path) -> Result<SourceTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| source_error(path, e))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_owned();
    let first = match sheet_names.first() {
        Some(name) => name.clone(),
        None => {
            return Err(CatalogError::SourceRead {
                path: path.display().to_string(),
                message: "workbook contains no sheets".to_string(),
            })
        }
    };
    if sheet_names.len() > 1 {
        warn!(sheets = ?sheet_names, "multiple sheets found; using first sheet '{}'", first);
        println!("📑 Found multiple sheets {:?}; using first sheet '{}'", sheet_names, first);
    }

    let range = workbook
        .worksheet_range(&first)
        .map_err(|e| source_error(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_to_string).collect())
        .unwrap_or_default();
    let rows: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    info!("read {} rows from sheet '{}'", rows.len(), first);
    Ok(SourceTable { headers, rows })
}

/// Finds the input workbook when none was given on the command line: first
/// `.xlsx`/`.xls` file in the working directory, then in `data/`. The
/// failure diagnostic lists any spreadsheet-like files (including `.csv`)
/// that were found instead.
pub fn discover_input() -> Result<PathBuf> {
    discover_input_in(&[Path::new("."), Path::new("data")])
}

fn discover_input_in(dirs: &[&Path]) -> Result<PathBuf> {
    for dir in dirs {
        if let Some(found) = first_spreadsheet_in(dir)? {
            info!("discovered input file {}", found.display());
            return Ok(found);
        }
    }

    let searched: Vec<String> = dirs.iter().map(|dir| dir.display().to_string()).collect();
    let near_misses = spreadsheet_like_files(dirs)?;
    let message = if near_misses.is_empty() {
        format!("no .xlsx or .xls file found in {}", searched.join(", "))
    } else {
        format!(
            "no .xlsx or .xls file found in {}; spreadsheet-like files present: {:?}",
            searched.join(", "),
            near_misses
        )
    };
    Err(CatalogError::SourceRead {
        path: ".".to_string(),
        message,
    })
}

/// Files that look like tabular exports but are not readable workbooks,
/// surfaced in the discovery failure message
fn spreadsheet_like_files(dirs: &[&Path]) -> Result<Vec<String>> {
    let mut found = Vec::new();
    for dir in dirs {
        if !dir.is_dir() {
            continue;
        }
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("xlsx") | Some("xls") | Some("csv")
            ) {
                found.push(path.display().to_string());
            }
        }
    }
    found.sort();
    Ok(found)
}

fn first_spreadsheet_in(dir: &Path) -> Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("xlsx") | Some("xls")
            )
        })
        .collect();
    candidates.sort();
    Ok(candidates.into_iter().next())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // Spreadsheets store integers as floats; keep "1234" rather than "1234.0"
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn source_error(path: &Path, error: impl std::fmt::Display) -> CatalogError {
    CatalogError::SourceRead {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn cell_coercion_handles_numbers_and_blanks() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("https://a.example".into())), "https://a.example");
        assert_eq!(cell_to_string(&Data::Float(8080.0)), "8080");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn discovery_picks_first_spreadsheet_alphabetically() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        File::create(dir.path().join("notes.txt"))?;
        File::create(dir.path().join("b_tools.xlsx"))?;
        File::create(dir.path().join("a_tools.xls"))?;

        let found = first_spreadsheet_in(dir.path())?.unwrap();
        assert_eq!(found.file_name().unwrap(), "a_tools.xls");
        Ok(())
    }

    #[test]
    fn discovery_skips_missing_directories() {
        let found = first_spreadsheet_in(Path::new("does-not-exist")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn discovery_failure_lists_spreadsheet_like_files() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        File::create(dir.path().join("exported_tools.csv"))?;
        File::create(dir.path().join("readme.md"))?;

        let err = discover_input_in(&[dir.path()]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("exported_tools.csv"), "{message}");
        assert!(!message.contains("readme.md"));
        Ok(())
    }

    #[test]
    fn discovery_failure_without_candidates_stays_plain() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let err = discover_input_in(&[dir.path()]).unwrap_err();
        assert!(!err.to_string().contains("spreadsheet-like files present"));
        Ok(())
    }
}
