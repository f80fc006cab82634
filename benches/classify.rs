use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use qrcontent::{classify, classify_batch, present, ClassifierConfig, DefaultLabels};
use std::hint::black_box;

const SAMPLES: [(&str, &str); 9] = [
    ("email", "mailto:johndoe@example.com?subject=Hello&body=World"),
    ("url", "https://play.google.com/store/apps/details?id=com.example"),
    ("sms", "smsto:+123456789:see you at 10:30"),
    ("geo", "geo:-33.8688,151.2093,58?q=Sydney Opera House"),
    ("phone", "tel:+123456789"),
    ("market", "market://details?id=com.example"),
    ("contact", r"MECARD:N:John Doe;TEL:123;EMAIL:john\@example.com;ADR:Main St\; 4;;"),
    ("wifi", "WIFI:S:Example;T:WPA;P:example123;H:true;;"),
    ("text", "The quick brown fox jumps over the lazy dog"),
];

/// Benchmark each payload kind end to end (classify + render + action)
fn bench_kinds(c: &mut Criterion) {
    let config = ClassifierConfig::default();
    let mut group = c.benchmark_group("classify_kinds");

    for (name, raw) in SAMPLES {
        group.bench_function(name, |b| {
            b.iter(|| present(&classify(black_box(raw), &config), &DefaultLabels));
        });
    }

    group.finish();
}

/// Benchmark URL-grammar rejection on long adversarial input
fn bench_adversarial(c: &mut Criterion) {
    let config = ClassifierConfig::default();
    let mut group = c.benchmark_group("classify_adversarial");

    for size in [1_000, 10_000, 100_000] {
        let dotted = "a.".repeat(size / 2);
        let long_path = format!("http://qrs.ly/{}", "x".repeat(size));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("dotted_{size}"), |b| {
            b.iter(|| classify(black_box(&dotted), &config));
        });
        group.bench_function(format!("long_path_{size}"), |b| {
            b.iter(|| classify(black_box(&long_path), &config));
        });
    }

    group.finish();
}

/// Benchmark parallel batch classification
fn bench_batch(c: &mut Criterion) {
    let config = ClassifierConfig::default();
    let batch: Vec<String> = SAMPLES
        .iter()
        .cycle()
        .take(10_000)
        .map(|(_, raw)| raw.to_string())
        .collect();

    let mut group = c.benchmark_group("classify_batch");
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("mixed_10k", |b| {
        b.iter(|| classify_batch(black_box(&batch), &config));
    });
    group.finish();
}

criterion_group!(benches, bench_kinds, bench_adversarial, bench_batch);
criterion_main!(benches);
