use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_map::AvlTreeMap;

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("map_insert", |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for value in &values {
                map.insert(*value, *value);
            }
            map
        })
    });

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, *value);
    }

    c.bench_function("map_get", |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.get(value));
            }
        })
    });

    c.bench_function("map_iter", |b| {
        b.iter(|| {
            for (k, v) in &map {
                black_box((k, v));
            }
        })
    });

    c.bench_function("map_iter_rev", |b| {
        b.iter(|| {
            for (k, v) in map.iter().rev() {
                black_box((k, v));
            }
        })
    });

    c.bench_function("map_cursor", |b| {
        b.iter(|| {
            let mut cursor = map.begin();
            while let Some(kv) = cursor.key_value() {
                black_box(kv);
                cursor.move_next();
            }
        })
    });

    c.bench_function("map_remove", |b| {
        b.iter(|| {
            let mut map = map.clone();
            for value in &values {
                map.remove(value);
            }
            map
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
