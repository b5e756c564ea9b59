use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use virtaste_flavor::{Config, FlavorModel, Label, TrainingRow};

fn lcg_values(n: usize, seed: u64) -> Vec<f64> {
    let mut values = Vec::with_capacity(n);
    let mut state = seed;
    for _ in 0..n {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        values.push(((state >> 33) as f64) / (u32::MAX as f64));
    }
    values
}

fn feature_names(dim: usize) -> Vec<String> {
    (0..dim).map(|i| format!("f{i:02}")).collect()
}

fn make_rows(labels: &[(&str, &str)], per_label: usize, dim: usize) -> Vec<TrainingRow> {
    let names = feature_names(dim);
    let mut rows = Vec::with_capacity(labels.len() * per_label);
    for (li, (flavor, texture)) in labels.iter().enumerate() {
        let center = lcg_values(dim, 1000 + li as u64);
        for s in 0..per_label {
            let noise = lcg_values(dim, (li * per_label + s) as u64 * 997 + 7);
            let features: Vec<(String, f64)> = names
                .iter()
                .zip(center.iter().zip(noise.iter()))
                .map(|(name, (c, n))| (name.clone(), c + (n - 0.5) * 0.1))
                .collect();
            rows.push(TrainingRow {
                label: Label::new(*flavor, *texture),
                features,
            });
        }
    }
    rows
}

const LABELS: &[(&str, &str)] = &[
    ("sweet", "smooth"),
    ("sour", "crisp"),
    ("bitter", "dry"),
    ("salty", "brittle"),
    ("savory", "creamy"),
    ("sweet", "sticky"),
    ("sour", "juicy"),
    ("bitter", "grainy"),
];

fn bench_build(c: &mut Criterion) {
    let rows = make_rows(LABELS, 25, 16);

    c.bench_function("flavor_build_200rows_16features", |b| {
        b.iter(|| {
            let model = FlavorModel::build(Config::default(), black_box(&rows)).unwrap();
            black_box(model);
        });
    });
}

fn bench_predict(c: &mut Criterion) {
    let rows = make_rows(LABELS, 25, 16);
    let model = FlavorModel::build(Config::default(), &rows).unwrap();

    let query: HashMap<String, f64> = feature_names(16)
        .into_iter()
        .zip(lcg_values(16, 424242))
        .collect();

    c.bench_function("flavor_predict_8labels_16features", |b| {
        b.iter(|| {
            let label = model.predict(black_box(&query));
            black_box(label);
        });
    });
}

criterion_group!(benches, bench_build, bench_predict);
criterion_main!(benches);
