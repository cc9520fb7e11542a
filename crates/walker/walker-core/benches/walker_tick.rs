use criterion::{black_box, criterion_group, criterion_main, Criterion};
use walker_core::{evaluate, BasisKind, ControlPath, Session};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("session_tick_default_loop", |b| {
        let mut session = Session::default();
        b.iter(|| {
            session.tick(black_box(1.0 / 60.0));
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for basis in [BasisKind::CatmullRom, BasisKind::BSpline] {
        let path = ControlPath::new(basis, ControlPath::default_loop().points);
        group.bench_function(basis.label(), |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(evaluate(&path, black_box(i as f32 * 0.01)));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick, bench_evaluate);
criterion_main!(benches);
