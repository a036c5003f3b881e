/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hea_data::{
    average_range, calculate_density, calculate_youngs_modulus, classify_microstructure,
    classify_processing_method, normalize_and_alphabetize_formula, remove_uncertainty,
};

const FORMULAS: [&str; 5] = [
    "HfNbTaTiZr",
    "CoFeNiSi0.25",
    "Al2CoCrCuFeNi",
    "(CoCrFeNi)95Nb5",
    "Al0.5CoCrCuFeNi",
];

fn formula_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Formulas");

    group.bench_function("normalize_and_alphabetize_formula", |b| {
        b.iter(|| {
            for formula in FORMULAS {
                black_box(normalize_and_alphabetize_formula(black_box(formula)));
            }
        })
    });

    group.bench_function("calculate_density", |b| {
        b.iter(|| {
            for formula in FORMULAS {
                black_box(calculate_density(black_box(formula)).ok());
            }
        })
    });

    group.bench_function("calculate_youngs_modulus", |b| {
        b.iter(|| {
            for formula in FORMULAS {
                black_box(calculate_youngs_modulus(black_box(formula)).ok());
            }
        })
    });

    group.finish();
}

fn cell_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cells");

    group.bench_function("remove_uncertainty", |b| {
        b.iter(|| black_box(remove_uncertainty(black_box(r"1200$\pm$35"))))
    });

    group.bench_function("average_range", |b| {
        b.iter(|| black_box(average_range(black_box(" 20 - 35 "))))
    });

    group.bench_function("classify", |b| {
        b.iter(|| {
            black_box(classify_processing_method(black_box("AC+CR+A")));
            black_box(classify_microstructure(black_box("FCC+L12+sigma")));
        })
    });

    group.finish();
}

criterion_group!(benches, formula_benchmark, cell_benchmark);
criterion_main!(benches);
