// src/cli.rs
use std::env;
use std::path::PathBuf;

use crate::error::Error;
use crate::params::{AnalyzeParams, ExportFormat, ScrapeParams};
use crate::runner;

/// Entry point for the `tabscrape` binary.
pub fn run_scrape() -> Result<(), Error> {
    let params = parse_scrape_args(env::args().skip(1))?;
    runner::run_scrape(&params).map(|_| ())
}

/// Entry point for the `tabstat` binary.
pub fn run_analyze() -> Result<(), Error> {
    let params = parse_analyze_args(env::args().skip(1))?;
    runner::run_analyze(&params).map(|_| ())
}

pub fn parse_scrape_args<I>(args: I) -> Result<ScrapeParams, Error>
where
    I: Iterator<Item = String>,
{
    let mut source: Option<String> = None;
    let mut out_set = false;
    let mut params = ScrapeParams::new(s!());

    let mut args = args;
    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--source" => {
                source = Some(args.next().ok_or_else(|| Error::usage("Missing value for --source"))?);
            }
            "-o" | "--out" => {
                params.out = PathBuf::from(
                    args.next().ok_or_else(|| Error::usage("Missing output path"))?,
                );
                out_set = true;
            }
            "--format" => {
                let v = args.next().ok_or_else(|| Error::usage("Missing value for --format"))?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(Error::usage(format!("Unknown format: {other}"))),
                };
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help_scrape.txt"));
                std::process::exit(0);
            }
            _ => return Err(Error::usage(format!("Unknown arg: {a}"))),
        }
    }

    // default filename tracks the format; an explicit -o keeps its extension
    if !out_set {
        params.out.set_extension(params.format.ext());
    }

    match source {
        Some(src) if !src.is_empty() => {
            params.source = src;
            Ok(params)
        }
        _ => Err(Error::usage("Specify --source <path|url>")),
    }
}

pub fn parse_analyze_args<I>(args: I) -> Result<AnalyzeParams, Error>
where
    I: Iterator<Item = String>,
{
    let mut params = AnalyzeParams::new();

    let mut args = args;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--csv" => {
                params.csv = PathBuf::from(
                    args.next().ok_or_else(|| Error::usage("Missing value for --csv"))?,
                );
            }
            "--out-dir" => {
                params.out_dir = PathBuf::from(
                    args.next().ok_or_else(|| Error::usage("Missing value for --out-dir"))?,
                );
            }
            "--plot-col" => {
                params.plot_col =
                    Some(args.next().ok_or_else(|| Error::usage("Missing value for --plot-col"))?);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help_analyze.txt"));
                std::process::exit(0);
            }
            _ => return Err(Error::usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(params)
}
