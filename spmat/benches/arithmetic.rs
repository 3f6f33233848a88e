use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use spmat::SparseMatrix;

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> SparseMatrix {
    let entries: Vec<_> = (0..nnz)
        .map(|_| {
            (
                rng.gen_range(0..rows),
                rng.gen_range(0..cols),
                rng.gen_range(1i64..=9),
            )
        })
        .collect();
    SparseMatrix::from_entries(rows, cols, entries).unwrap()
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let mut rng = StdRng::seed_from_u64(42);

    for &size in &[100usize, 1_000, 10_000] {
        let nnz = size * 4;
        let a = random_matrix(&mut rng, size, size, nnz);
        let b = random_matrix(&mut rng, size, size, nnz);

        group.bench_with_input(BenchmarkId::new("add", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).add(black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("multiply", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).multiply(black_box(&b)).unwrap())
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let text = random_matrix(&mut rng, 5_000, 5_000, 20_000).to_text();

    c.bench_function("parse_20k_entries", |bench| {
        bench.iter(|| SparseMatrix::<i64>::parse(black_box(&text)).unwrap())
    });
}

criterion_group!(benches, bench_arithmetic, bench_parse);
criterion_main!(benches);
