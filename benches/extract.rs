// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use canoe_failures::{core::Document, extract_failures, xlsx};

/// Synthetic report: `cases` failed test cases, each with a mix of passing
/// rows and repeated failures.
fn build_report(cases: usize) -> String {
    let mut html = String::from("<html><body>\n");
    for c in 0..cases {
        html.push_str(&format!(
            "<table><tr><td class=\"TestcaseHeadingNegativeResult\">Test Case {}/{}: Case {}: Failed</td></tr></table>\n\
             <table><tr><td><big>Main Part of Test Case</big></td></tr></table>\n\
             <div><table class=\"ResultTable\">\n",
            c / 10 + 1, c % 10 + 1, c
        ));
        for r in 0..40 {
            let (class, desc) = if r % 4 == 0 {
                ("NegativeResultCell", format!("Signal {} out of range", r % 3))
            } else {
                ("PositiveResultCell", String::from("ok"))
            };
            html.push_str(&format!(
                "<tr><td>{}.{:03}</td><td>Step {}</td><td>{}</td><td class=\"{}\">x</td></tr>\n",
                c, r, r, desc, class
            ));
        }
        html.push_str("</table></div>\n");
    }
    html.push_str("</body></html>\n");
    html
}

fn bench_extract(c: &mut Criterion) {
    let html = build_report(200);

    c.bench_function("parse_and_extract", |b| {
        b.iter(|| {
            let doc = Document::parse_str(black_box(&html));
            black_box(extract_failures(&doc).len())
        })
    });

    let doc = Document::parse_str(&html);
    c.bench_function("extract_only", |b| {
        b.iter(|| black_box(extract_failures(black_box(&doc)).len()))
    });

    let summary = extract_failures(&doc);
    c.bench_function("write_xlsx", |b| {
        b.iter(|| black_box(xlsx::write_summary(black_box(&summary)).map(|v| v.len())))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
