// tests/scrape_pipeline.rs
use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use tabscrape::error::Error;
use tabscrape::params::{ExportFormat, ScrapeParams};
use tabscrape::runner::run_scrape;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tabscrape_e2e_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn fixture(dir: &PathBuf, html: &str) -> PathBuf {
    let p = dir.join("page.html");
    fs::write(&p, html).unwrap();
    p
}

fn params(source: &PathBuf, out: PathBuf) -> ScrapeParams {
    let mut params = ScrapeParams::new(source.to_string_lossy().into_owned());
    params.out = out;
    params
}

#[test]
fn file_to_csv_end_to_end() {
    let dir = tmp_dir("basic");
    let page = fixture(
        &dir,
        "<html><body><table>\
         <thead><tr><th>Name</th><th>Score</th></tr></thead>\
         <tr><td>ada</td><td>9</td></tr>\
         <tr><td>grace</td></tr>\
         </table></body></html>",
    );

    let out = dir.join("table.csv");
    let summary = run_scrape(&params(&page, out.clone())).unwrap();
    assert_eq!(summary.rows_written, 2);
    assert!(summary.has_header);

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Name,Score", "ada,9", "grace,"]);
}

#[test]
fn no_table_fails_the_run() {
    let dir = tmp_dir("notable");
    let page = fixture(&dir, "<html><body><p>prose only</p></body></html>");

    let result = run_scrape(&params(&page, dir.join("table.csv")));
    match result {
        Err(Error::NothingExtracted(src)) => assert!(src.ends_with("page.html")),
        other => panic!("expected NothingExtracted, got {:?}", other.map(|s| s.rows_written)),
    }
    assert!(!dir.join("table.csv").exists());
}

#[test]
fn missing_source_file_fails_the_run() {
    let dir = tmp_dir("missing");
    let absent = dir.join("gone.html");
    assert!(matches!(
        run_scrape(&params(&absent, dir.join("table.csv"))),
        Err(Error::MissingFile(_))
    ));
}

#[test]
fn header_only_table_still_writes_the_header() {
    let dir = tmp_dir("hdronly");
    let page = fixture(
        &dir,
        "<table><thead><tr><th>A</th><th>B</th></tr></thead></table>",
    );

    let out = dir.join("table.csv");
    let summary = run_scrape(&params(&page, out.clone())).unwrap();
    assert_eq!(summary.rows_written, 0);

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.trim_end(), "A,B");
}

#[test]
fn tsv_export_uses_tab_delimiter() {
    let dir = tmp_dir("tsv");
    let page = fixture(
        &dir,
        "<table><tr><td>A</td><td>B</td></tr><tr><td>1</td><td>2</td></tr></table>",
    );

    let out = dir.join("table.tsv");
    let mut p = params(&page, out.clone());
    p.format = ExportFormat::Tsv;
    run_scrape(&p).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().next(), Some("A\tB"));
    assert!(text.contains("1\t2"));
}

#[test]
fn output_parent_directories_are_created() {
    let dir = tmp_dir("mkdirs");
    let page = fixture(&dir, "<table><tr><td>x</td></tr></table>");

    let out = dir.join("deep").join("nested").join("table.csv");
    run_scrape(&params(&page, out.clone())).unwrap();
    assert!(out.exists());
}

#[test]
fn cells_with_commas_are_quoted() {
    let dir = tmp_dir("quoting");
    let page = fixture(
        &dir,
        "<table><tr><th>City</th></tr><tr><td>Portland, OR</td></tr></table>",
    );

    let out = dir.join("table.csv");
    run_scrape(&params(&page, out.clone())).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"Portland, OR\""));
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tmp_dir("overwrite");
    let page = fixture(&dir, "<table><tr><th>A</th></tr><tr><td>x</td></tr></table>");
    let out = dir.join("table.csv");

    run_scrape(&params(&page, out.clone())).unwrap();
    let first = fs::read_to_string(&out).unwrap();
    run_scrape(&params(&page, out.clone())).unwrap();
    let second = fs::read_to_string(&out).unwrap();
    assert_eq!(first, second);
}
