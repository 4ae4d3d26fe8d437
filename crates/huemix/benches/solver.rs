use criterion::{criterion_group, criterion_main, Criterion};
use huemix::color::Rgb;
use huemix::opt::SolverOptions;
use huemix::palette::Palette;
use huemix::pigment::Pigment;
use huemix::solver::optimal_mix_with;

pub fn run_benchmarks(c: &mut Criterion) {
    let target = Rgb::new(76, 117, 172);
    let palette = Palette::new(Pigment::Blue, Pigment::Green, Pigment::Red);

    let mut group = c.benchmark_group("optimal-mix");
    group.sample_size(10);

    let options = SolverOptions::sequential();
    group.bench_function("sequential", |b| {
        b.iter(|| optimal_mix_with(target, &palette, &options))
    });

    let options = SolverOptions::builder().parallel(true).build();
    group.bench_function("parallel", |b| {
        b.iter(|| optimal_mix_with(target, &palette, &options))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
