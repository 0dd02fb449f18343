// src/chart.rs
//
// SVG bar chart of value counts. Plain markup generation; nothing in the
// chart needs a renderer, and SVG keeps the output inspectable in tests.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Error;
use crate::file::ensure_directory;

const BAR_W: usize = 48;
const GAP: usize = 16;
const MARGIN: usize = 48;
const PLOT_H: usize = 260;
const LABEL_H: usize = 72;
const TITLE_H: usize = 40;
const MAX_LABEL_CHARS: usize = 12;

/// Render counts for `column` as a bar chart at `path`. Nothing to plot
/// is a warning, not an error, and no file is written.
pub fn render_bar_chart(
    column: &str,
    counts: &[(String, usize)],
    path: &Path,
) -> Result<Option<PathBuf>, Error> {
    if counts.is_empty() {
        warn!("no data to plot for column {column}");
        return Ok(None);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, render_svg(column, counts))?;
    Ok(Some(path.to_path_buf()))
}

fn render_svg(column: &str, counts: &[(String, usize)]) -> String {
    let n = counts.len();
    let width = MARGIN * 2 + n * BAR_W + n.saturating_sub(1) * GAP;
    let height = TITLE_H + PLOT_H + LABEL_H;
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    let baseline = TITLE_H + PLOT_H;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    );
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <text x="{x}" y="24" text-anchor="middle" font-family="sans-serif" font-size="16">Counts by {title}</text>"#,
        x = width / 2,
        title = escape(column),
    ));
    svg.push('\n');

    for (i, (key, count)) in counts.iter().enumerate() {
        let bar_h = count * PLOT_H / max;
        let x = MARGIN + i * (BAR_W + GAP);
        let y = baseline - bar_h;
        let cx = x + BAR_W / 2;

        svg.push_str(&format!(
            r##"  <rect x="{x}" y="{y}" width="{BAR_W}" height="{bar_h}" fill="#4c78a8"/>"##,
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <text x="{cx}" y="{vy}" text-anchor="middle" font-family="sans-serif" font-size="11">{count}</text>"#,
            vy = y.saturating_sub(6),
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <text x="{cx}" y="{ly}" text-anchor="middle" font-family="sans-serif" font-size="11">{label}</text>"#,
            ly = baseline + 18,
            label = escape(&truncate(key)),
        ));
        svg.push('\n');
    }

    // x axis
    svg.push_str(&format!(
        r##"  <line x1="{x1}" y1="{baseline}" x2="{x2}" y2="{baseline}" stroke="#333"/>"##,
        x1 = MARGIN / 2,
        x2 = width - MARGIN / 2,
    ));
    svg.push_str("\n</svg>\n");
    svg
}

fn truncate(s: &str) -> String {
    if s.chars().count() <= MAX_LABEL_CHARS {
        return s!(s);
    }
    let mut out: String = s.chars().take(MAX_LABEL_CHARS - 1).collect();
    out.push('…');
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
