// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use scraper::Html;
use tabscrape::extract;

/// Synthesize a page with one wide table and some surrounding noise.
fn sample_doc(rows: usize) -> String {
    let mut html = String::with_capacity(rows * 120);
    html.push_str("<html><body><p>preamble</p><div><span>noise</span></div><table>");
    html.push_str("<thead><tr>");
    for c in 0..8 {
        html.push_str(&format!("<th>Col{c}</th>"));
    }
    html.push_str("</tr></thead>");
    for r in 0..rows {
        html.push_str("<tr>");
        for c in 0..8 {
            html.push_str(&format!("<td> cell {r}-{c} </td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc_small = sample_doc(50);
    let doc_large = sample_doc(2_000);

    c.bench_function("extract_50_rows", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&doc_small));
            let bundle = extract::extract(&doc);
            black_box(bundle.rows.len())
        })
    });

    c.bench_function("extract_2000_rows", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&doc_large));
            let bundle = extract::extract(&doc);
            black_box(bundle.rows.len())
        })
    });

    // extraction alone, parse hoisted out
    let parsed = Html::parse_document(&doc_large);
    c.bench_function("extract_2000_rows_preparsed", |b| {
        b.iter(|| {
            let bundle = extract::extract(black_box(&parsed));
            black_box(bundle.rows.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
