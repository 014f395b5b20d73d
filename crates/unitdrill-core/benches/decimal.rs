use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unitdrill_core::{Catalog, Decimal, Session};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("integer", |b| {
        b.iter(|| black_box("1000000").parse::<Decimal>())
    });

    group.bench_function("fraction", |b| {
        b.iter(|| black_box("0.000001").parse::<Decimal>())
    });

    group.bench_function("long", |b| {
        b.iter(|| black_box("-123456789012345678901234.567890123456789").parse::<Decimal>())
    });

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let micro: Decimal = "0.000001".parse().unwrap();
    let mega: Decimal = "1000000".parse().unwrap();
    let three = Decimal::from(3u32);

    group.bench_function("multiply", |b| {
        b.iter(|| black_box(&micro) * black_box(&mega))
    });

    group.bench_function("divide_terminating", |b| {
        b.iter(|| black_box(&mega).checked_div(black_box(&micro)))
    });

    group.bench_function("divide_rounded", |b| {
        b.iter(|| Decimal::one().checked_div(black_box(&three)))
    });

    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    let catalog = Catalog::metric();
    let quantity = Decimal::from(750u32);

    c.bench_function("convert_all_pairs", |b| {
        b.iter(|| {
            for from in catalog.units() {
                for to in catalog.units() {
                    black_box(to.from_standard(&from.to_standard(&quantity)));
                }
            }
        })
    });

    let mut session = Session::seeded(Catalog::metric(), 1);
    c.bench_function("prepare_new_equation", |b| {
        b.iter(|| black_box(session.prepare_new_equation()))
    });
}

criterion_group!(benches, bench_parse, bench_arithmetic, bench_conversion);
criterion_main!(benches);
