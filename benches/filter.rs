use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::sync::Arc;

use mzlist::io::{SpectrumListPtr, SpectrumListSimple};
use mzlist::params::{terms, Unit};
use mzlist::prelude::*;
use mzlist::processing::{
    IndexSetPredicate, MSLevelSetPredicate, FilterMode, IntensityThreshold, SpectrumListFilter,
    SpectrumListTransformer,
};
use mzlist::spectrum::{MZIntensityPair, Spectrum, SpectrumIdentity};
use mzlist::utils::IntegerSet;

fn make_list(n: usize, points: usize) -> SpectrumListPtr {
    let list: SpectrumListSimple = (0..n)
        .map(|i| {
            let mut spectrum = Spectrum::new(SpectrumIdentity::new(0, format!("scan={}", i + 1)));
            spectrum.set(terms::MS_LEVEL, if i % 5 == 0 { 1 } else { 2 }, Unit::Unknown);
            let pairs: Vec<_> = (0..points)
                .map(|j| MZIntensityPair::new(100.0 + j as f64 * 0.5, (j % 97) as f64))
                .collect();
            spectrum.set_mz_intensity_pairs(&pairs, Unit::DetectorCounts);
            spectrum
        })
        .collect();
    Arc::new(list)
}

fn filter_construction(c: &mut Criterion) {
    let inner = make_list(10_000, 16);
    let indices: IntegerSet = "0-999,2000-2999,5000-".parse().unwrap();
    c.bench_function("filter_index_set", |b| {
        b.iter(|| {
            let filter =
                SpectrumListFilter::new(inner.clone(), IndexSetPredicate::new(indices.clone()))
                    .unwrap();
            black_box(filter.len())
        })
    });
    c.bench_function("filter_ms_level", |b| {
        b.iter(|| {
            let filter = SpectrumListFilter::new(
                inner.clone(),
                MSLevelSetPredicate::new(IntegerSet::from_iter([2]), FilterMode::Include),
            )
            .unwrap();
            black_box(filter.len())
        })
    });
}

fn transform_retrieval(c: &mut Criterion) {
    let inner = make_list(100, 2_000);
    let thresholded = SpectrumListTransformer::new(inner, IntensityThreshold::new(50.0));
    c.bench_function("intensity_threshold", |b| {
        b.iter(|| {
            let total: usize = (0..thresholded.len())
                .map(|i| thresholded.spectrum(i, true).unwrap().default_array_length)
                .sum();
            black_box(total)
        })
    });
}

fn integer_set_iteration(c: &mut Criterion) {
    let mut set = IntegerSet::new();
    for i in (0..100_000).step_by(3) {
        set.insert_range(i, i + 1);
    }
    c.bench_function("integer_set_iter", |b| {
        b.iter(|| black_box(set.iter().map(|i| i as i64).sum::<i64>()))
    });
    c.bench_function("integer_set_contains", |b| {
        b.iter(|| black_box((0..100_000).filter(|i| set.contains(*i)).count()))
    });
}

criterion_group!(
    benches,
    filter_construction,
    transform_retrieval,
    integer_set_iteration
);
criterion_main!(benches);
