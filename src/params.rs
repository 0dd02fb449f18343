// src/params.rs
use std::path::PathBuf;

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// Scrape output
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_TABLE_FILE: &str = "table.csv";

// Analyze output
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const SUMMARY_FILE: &str = "summary.csv";
pub const CHART_FILE: &str = "bar_chart.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug)]
pub struct ScrapeParams {
    pub source: String,              // URL or local HTML file
    pub out: PathBuf,                // output file path
    pub format: ExportFormat,
}

impl ScrapeParams {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            out: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_TABLE_FILE),
            format: ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AnalyzeParams {
    pub csv: PathBuf,                // input CSV (scraper output)
    pub out_dir: PathBuf,            // directory for summary + chart
    pub plot_col: Option<String>,    // column to count; first column if None
}

impl AnalyzeParams {
    pub fn new() -> Self {
        Self {
            csv: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_TABLE_FILE),
            out_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            plot_col: None,
        }
    }
}

impl Default for AnalyzeParams {
    fn default() -> Self {
        Self::new()
    }
}
