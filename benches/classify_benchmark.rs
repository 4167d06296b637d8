//! Benchmarks for docaudit classification performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks classify synthetic paragraph streams.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use docaudit::{AnalyzeOptions, Analyzer, DocumentIdentity, DocumentInput, ParagraphRecord};

/// Creates a synthetic paper with the given number of chapters.
fn create_test_input(chapters: usize) -> DocumentInput {
    let mut lines = vec![
        "A Synthetic Study of Benchmark Documents".to_string(),
        "J. Doe".to_string(),
    ];

    for i in 1..=chapters {
        lines.push(format!("{}. Chapter {}", i, i));
        lines.push("This paragraph is ordinary body text for the benchmark.".to_string());
        lines.push(format!("{}.1 Details", i));
        lines.push(format!("[Figure {}] measured values", i));
        lines.push("Source: synthetic data".to_string());
        lines.push("Another body paragraph follows the figure caption here.".to_string());
    }

    lines.push("References".to_string());
    for i in 0..chapters {
        lines.push(format!("Author{}, A. ({}). Title. Journal, 4, 22-31.", i, 1990 + i % 30));
        lines.push(format!("الكاتب{}، محمد ({}). عنوان. دار النشر.", i, 1990 + i % 30));
    }

    let paragraphs = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| ParagraphRecord::new(i, text))
        .collect();
    DocumentInput::from_paragraphs(paragraphs)
}

/// Benchmark the full per-document analysis at various sizes.
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = Analyzer::default();

    for chapters in [5, 50, 500].iter() {
        let input = create_test_input(*chapters);

        group.bench_function(format!("{}_chapters", chapters), |b| {
            b.iter(|| {
                let identity = DocumentIdentity::from_path(1, "bench.json");
                analyzer.analyze(identity, black_box(&input))
            });
        });
    }

    group.finish();
}

/// Benchmark options construction (pattern table clone).
fn bench_options_creation(c: &mut Criterion) {
    c.bench_function("options_creation", |b| {
        b.iter(|| {
            let _options = AnalyzeOptions::new().with_max_heading_words(15).with_max_caption_chars(150);
        });
    });
}

criterion_group!(benches, bench_analyze, bench_options_creation);
criterion_main!(benches);
