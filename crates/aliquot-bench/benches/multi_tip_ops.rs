//! Criterion micro-benchmarks for multichannel well resolution.

use aliquot_core::NullDiagnostics;
use aliquot_labware::wells_under_multi_channel_tip;
use aliquot_test_utils::fixtures::{plate_384, plate_96, reservoir_12};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark: Resolve every well of a 96-well plate as the reference.
fn bench_multi_tip_96_all(c: &mut Criterion) {
    let def = plate_96();
    let names: Vec<String> = def.all_well_names().map(|w| w.to_string()).collect();

    c.bench_function("multi_tip_96_all", |b| {
        b.iter(|| {
            for name in &names {
                let wells = wells_under_multi_channel_tip(&def, name, &NullDiagnostics);
                black_box(&wells);
            }
        });
    });
}

/// Benchmark: First-row references on a 384-well plate (linear scan over 384 wells per tip).
fn bench_multi_tip_384_row_a(c: &mut Criterion) {
    let def = plate_384();
    let names: Vec<String> = (1..=24).map(|col| format!("A{col}")).collect();

    c.bench_function("multi_tip_384_row_a", |b| {
        b.iter(|| {
            for name in &names {
                let wells = wells_under_multi_channel_tip(&def, name, &NullDiagnostics);
                black_box(&wells);
            }
        });
    });
}

/// Benchmark: Centered resolution on a 12-trough reservoir.
fn bench_multi_tip_reservoir(c: &mut Criterion) {
    let def = reservoir_12();

    c.bench_function("multi_tip_reservoir", |b| {
        b.iter(|| {
            for col in 1..=12 {
                let wells =
                    wells_under_multi_channel_tip(&def, &format!("A{col}"), &NullDiagnostics);
                black_box(&wells);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_multi_tip_96_all,
    bench_multi_tip_384_row_a,
    bench_multi_tip_reservoir
);
criterion_main!(benches);
