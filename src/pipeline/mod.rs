// Catalog pipeline: schema reconciliation, loading, liveness validation,
// enrichment, categorization, and aggregation, executed as one sequential
// batch pass.

pub mod aggregate;
pub mod categorize;
pub mod enrich;
pub mod liveness;
pub mod loader;
pub mod schema;

use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{info, instrument};

use crate::config::Config;
use crate::domain::ToolEntry;
use crate::error::Result;
use crate::output;
use crate::source::{self, SourceTable};

use self::aggregate::CategoryCount;
use self::enrich::EnrichmentEngine;
use self::liveness::UrlProber;

/// Everything produced by the processing stages, before any output is written
#[derive(Debug)]
pub struct ProcessedCatalog {
    /// Surviving entries, fully enriched and categorized
    pub entries: Vec<ToolEntry>,
    pub summary: Vec<CategoryCount>,
    pub total_rows: usize,
}

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub total_rows: usize,
    pub live_entries: usize,
    pub dropped_entries: usize,
    pub summary: Vec<CategoryCount>,
    pub cleaned_output: String,
    pub summary_output: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub struct Pipeline<'a> {
    config: &'a Config,
    prober: &'a dyn UrlProber,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, prober: &'a dyn UrlProber) -> Self {
        Self { config, prober }
    }

    /// Runs every processing stage over an in-memory table. Each stage takes
    /// the previous stage's collection and returns the next one; nothing is
    /// mutated outside this context.
    pub async fn process(&self, table: &SourceTable) -> Result<ProcessedCatalog> {
        let schema = schema::reconcile(&table.headers)?;
        for (from, to) in &schema.applied_aliases {
            info!("mapped column '{}' -> '{}'", from, to);
        }

        let entries = loader::load_entries(&schema, &table.rows);
        let total_rows = entries.len();

        info!("validating {} URLs", total_rows);
        println!("🔎 Validating {} URLs (this may take a minute)...", total_rows);
        let live = liveness::validate_entries(self.prober, entries).await;
        println!("✅ {} tools with live URLs", live.len());

        let engine = EnrichmentEngine::new(self.config.company_name.clone());
        let enriched = engine.enrich_all(live);
        let categorized = categorize::categorize_all(enriched);
        let summary = aggregate::summarize(&categorized);

        Ok(ProcessedCatalog {
            entries: categorized,
            summary,
            total_rows,
        })
    }

    /// Writes both delimited outputs for a processed catalog
    pub fn write_outputs(&self, catalog: &ProcessedCatalog) -> Result<()> {
        output::write_cleaned_catalog(Path::new(&self.config.cleaned_output), &catalog.entries)?;
        output::write_summary(Path::new(&self.config.summary_output), &catalog.summary)?;
        Ok(())
    }

    /// Full run: read the workbook, process, and write both outputs
    #[instrument(skip(self), fields(input = %input.display()))]
    pub async fn run(&self, input: &Path) -> Result<PipelineResult> {
        let started_at = Utc::now();
        info!("reading source spreadsheet");

        let table = source::read_spreadsheet(input)?;
        let catalog = self.process(&table).await?;
        self.write_outputs(&catalog)?;

        info!(
            "pipeline finished: {} of {} entries survived",
            catalog.entries.len(),
            catalog.total_rows
        );
        Ok(PipelineResult {
            total_rows: catalog.total_rows,
            live_entries: catalog.entries.len(),
            dropped_entries: catalog.total_rows - catalog.entries.len(),
            summary: catalog.summary,
            cleaned_output: self.config.cleaned_output.clone(),
            summary_output: self.config.summary_output.clone(),
            started_at,
            finished_at: Utc::now(),
        })
    }
}
