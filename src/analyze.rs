// src/analyze.rs
//
// Post-extraction summarization of a scraped CSV: cleaning, best-effort
// numeric coercion, value counts for one column, summary.csv output.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::core::sanitize::parse_number;
use crate::error::Error;
use crate::file::Dataset;
use crate::params::SUMMARY_FILE;

/// Stats for a column whose cells are mostly numeric.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericStats {
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub n_rows: usize,
    pub n_columns: usize,
    /// Column the counts were taken over, if the dataset has columns.
    pub count_col: Option<String>,
    /// Distinct values with occurrence counts, descending, ties by key.
    pub counts: Vec<(String, usize)>,
    /// Present when the counted column coerces to numbers.
    pub numeric: Option<NumericStats>,
}

/// Trim whitespace from every cell in place.
pub fn clean(ds: &mut Dataset) {
    for row in &mut ds.rows {
        for cell in row {
            let trimmed = cell.trim();
            if trimmed.len() != cell.len() {
                *cell = s!(trimmed);
            }
        }
    }
}

/// Values of one column across all rows; rows too short contribute an
/// empty cell so every row is counted.
fn column_values<'a>(ds: &'a Dataset, idx: usize) -> Vec<&'a str> {
    ds.rows
        .iter()
        .map(|row| row.get(idx).map_or("", String::as_str))
        .collect()
}

/// Best-effort coercion of a column. Stats only when a majority of the
/// non-empty cells parse as numbers.
pub fn numeric_stats(values: &[&str]) -> Option<NumericStats> {
    let non_empty = values.iter().filter(|v| !v.is_empty()).count();
    if non_empty == 0 {
        return None;
    }
    let parsed: Vec<f64> = values.iter().filter_map(|v| parse_number(v)).collect();
    if parsed.len() * 2 <= non_empty {
        return None;
    }
    let min = parsed.iter().copied().fold(f64::INFINITY, f64::min);
    let max = parsed.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = parsed.iter().sum::<f64>() / parsed.len() as f64;
    Some(NumericStats { n: parsed.len(), min, max, mean })
}

/// Summarize the dataset, counting values of `count_col` (first column
/// when unset). Naming a column the CSV does not have is an input error.
pub fn summarize(ds: &Dataset, count_col: Option<&str>) -> Result<Summary, Error> {
    let col = match count_col {
        Some(name) => {
            let idx = ds
                .columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| Error::MissingColumn(s!(name)))?;
            Some((s!(name), idx))
        }
        None => ds.columns.first().map(|name| (name.clone(), 0)),
    };

    let (count_col, counts, numeric) = match col {
        Some((name, idx)) => {
            let values = column_values(ds, idx);
            let numeric = numeric_stats(&values);

            let mut tally: HashMap<&str, usize> = HashMap::new();
            for v in &values {
                *tally.entry(v).or_insert(0) += 1;
            }
            let mut counts: Vec<(String, usize)> =
                tally.into_iter().map(|(k, n)| (s!(k), n)).collect();
            counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

            (Some(name), counts, numeric)
        }
        None => (None, Vec::new(), None),
    };

    Ok(Summary {
        n_rows: ds.rows.len(),
        n_columns: ds.columns.len(),
        count_col,
        counts,
        numeric,
    })
}

/// Write `<out_dir>/summary.csv` as metric,value lines.
pub fn write_summary(summary: &Summary, out_dir: &Path) -> Result<PathBuf, Error> {
    let path = out_dir.join(SUMMARY_FILE);
    let mut wtr = Writer::from_path(&path)?;
    wtr.write_record(["metric", "value"])?;
    wtr.write_record(["n_rows", summary.n_rows.to_string().as_str()])?;
    wtr.write_record(["n_columns", summary.n_columns.to_string().as_str()])?;
    for (key, n) in &summary.counts {
        wtr.write_record([format!("count:{key}").as_str(), n.to_string().as_str()])?;
    }
    if let Some(stats) = &summary.numeric {
        wtr.write_record(["numeric_cells", stats.n.to_string().as_str()])?;
        wtr.write_record(["min", stats.min.to_string().as_str()])?;
        wtr.write_record(["max", stats.max.to_string().as_str()])?;
        wtr.write_record(["mean", stats.mean.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(path)
}
