// src/runner.rs

use std::path::PathBuf;

use log::{info, warn};
use scraper::Html;

use crate::analyze;
use crate::chart;
use crate::error::Error;
use crate::extract;
use crate::file;
use crate::load::{self, Source};
use crate::params::{AnalyzeParams, CHART_FILE, ScrapeParams};

/// What a scrape run produced.
pub struct ScrapeSummary {
    pub out_path: PathBuf,
    pub rows_written: usize,
    pub has_header: bool,
}

/// Load → parse → extract → write. Empty extraction (no header AND no
/// rows) fails the run by policy; a header with zero rows is only warned.
pub fn run_scrape(params: &ScrapeParams) -> Result<ScrapeSummary, Error> {
    let source = Source::parse(&params.source);
    let markup = load::load_markup(&source)?;

    info!("parsing HTML and extracting table");
    let doc = Html::parse_document(&markup);
    let bundle = extract::extract(&doc);

    if bundle.is_empty() {
        return Err(Error::NothingExtracted(params.source.clone()));
    }
    if bundle.rows.is_empty() {
        warn!("table yielded a header but no data rows");
    }

    let rows_written = file::write_table(&params.out, &bundle, params.format)?;
    info!("wrote {rows_written} rows to {}", params.out.display());

    Ok(ScrapeSummary {
        out_path: params.out.clone(),
        rows_written,
        has_header: bundle.header.is_some(),
    })
}

/// What an analyze run produced.
pub struct AnalyzeSummary {
    pub summary_path: PathBuf,
    pub chart_path: Option<PathBuf>,
    pub n_rows: usize,
}

/// Reload a scraped CSV, clean it, summarize, chart.
pub fn run_analyze(params: &AnalyzeParams) -> Result<AnalyzeSummary, Error> {
    let mut ds = file::read_dataset(&params.csv)?;
    info!("loaded CSV with {} rows and {} columns", ds.rows.len(), ds.columns.len());

    analyze::clean(&mut ds);
    let summary = analyze::summarize(&ds, params.plot_col.as_deref())?;

    file::ensure_directory(&params.out_dir)?;
    let summary_path = analyze::write_summary(&summary, &params.out_dir)?;
    info!("saved summary to {}", summary_path.display());

    let chart_path = match &summary.count_col {
        Some(col) => {
            let path = params.out_dir.join(CHART_FILE);
            let written = chart::render_bar_chart(col, &summary.counts, &path)?;
            if let Some(p) = &written {
                info!("saved bar chart to {}", p.display());
            }
            written
        }
        None => None,
    };

    Ok(AnalyzeSummary { summary_path, chart_path, n_rows: summary.n_rows })
}
