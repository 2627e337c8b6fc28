use criterion::{criterion_group, criterion_main, Criterion};
use seatforge::arrangement::Arrangement;
use seatforge::config::AnnealParams;
use seatforge::core_types::Objective;
use seatforge::experiment::sample_profile;
use seatforge::optimizer::run_annealing;
use seatforge::profile::ScoringScheme;
use seatforge::stability::{find_blocking_pair, swap_delta, welfare};
use std::hint::black_box;
use std::sync::Arc;

fn stability_benchmark(c: &mut Criterion) {
    let profile = sample_profile(0, 24, ScoringScheme::Normalized, 0).unwrap();
    let mut rng = fastrand::Rng::with_seed(1);
    let arr = Arrangement::random(&mut rng, 24);

    c.bench_function("find_blocking_pair_24", |b| {
        b.iter(|| find_blocking_pair(black_box(&profile), black_box(&arr)))
    });

    c.bench_function("welfare_24", |b| {
        b.iter(|| welfare(black_box(&profile), black_box(&arr)))
    });

    c.bench_function("swap_delta_24", |b| {
        b.iter(|| swap_delta(black_box(&profile), black_box(&arr), 3, 17))
    });
}

fn annealing_benchmark(c: &mut Criterion) {
    let profile = Arc::new(sample_profile(0, 12, ScoringScheme::Harmonic, 0).unwrap());
    let params = AnnealParams {
        max_rounds: 2_000,
        ..Default::default()
    };

    c.bench_function("run_annealing_12", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            run_annealing(
                profile.clone(),
                Objective::Maximize,
                &params,
                fastrand::Rng::with_seed(seed),
            )
        })
    });
}

criterion_group!(benches, stability_benchmark, annealing_benchmark);
criterion_main!(benches);
