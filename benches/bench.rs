//! Criterion benchmarks for the emotion classifier.
//!
//! Covers the stages of a prediction:
//! - Text normalization, plain and stemming
//! - TF-IDF vectorization
//! - End-to-end classification, single and batched

use std::hint::black_box;
use std::path::Path;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use emotion_classifier::model::loader::{ArtifactFormat, FileArtifactLoader};
use emotion_classifier::normalizer::TextNormalizer;
use emotion_classifier::pipeline::InferencePipeline;

/// Generate test sentences for benchmarking.
fn generate_test_sentences(count: usize) -> Vec<String> {
    let words = [
        "I", "am", "so", "happy", "today", "feeling", "really", "scared", "and", "lonely",
        "wow", "that", "was", "unexpected", "I", "love", "you", "this", "makes", "me",
        "furious", "crying", "again", "what", "a", "wonderful", "day", "!!!", "?", "...",
    ];

    (0..count)
        .map(|i| {
            let length = 5 + (i % 20);
            (0..length)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn demo_pipeline() -> InferencePipeline {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("saved_models");
    let loader = FileArtifactLoader::new(dir, ArtifactFormat::Json);
    InferencePipeline::from_loader(&loader, false).unwrap()
}

/// Benchmark text normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let plain = TextNormalizer::new(false).unwrap();
    let stemming = TextNormalizer::new(true).unwrap();
    let texts = generate_test_sentences(100);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("plain", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(plain.normalize(black_box(text)));
            }
        })
    });

    group.bench_function("stemming", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(stemming.normalize(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark vectorization and classification.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let pipeline = demo_pipeline();
    let texts = generate_test_sentences(1000);
    let normalized: Vec<String> = texts
        .iter()
        .map(|t| pipeline.normalizer().normalize(t).unwrap())
        .collect();

    group.bench_function("vectorize_single", |b| {
        b.iter(|| black_box(pipeline.vectorizer().transform(black_box(&normalized[0]))))
    });

    group.bench_function("classify_single", |b| {
        b.iter(|| black_box(pipeline.classify(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("classify_sequential", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(pipeline.classify(text));
            }
        })
    });

    group.bench_function("classify_batch_parallel", |b| {
        b.iter(|| black_box(pipeline.classify_batch(&texts[..])))
    });

    group.finish();
}

criterion_group!(benches, bench_normalization, bench_classification);
criterion_main!(benches);
