use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use crossbeam_utils::sync::WaitGroup;
use memkv::{
    KvsEngine, MemTable, RayonThreadPool, ShardedMemTable, SharedQueueThreadPool, ThreadPool,
};
use rand::prelude::*;

fn put_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_bench");
    group.bench_function("memtable", |b| {
        b.iter_batched(
            MemTable::new,
            |store| {
                for i in 1..(1 << 12) {
                    store.put(format!("key{}", i), "value".to_string()).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("sharded", |b| {
        b.iter_batched(
            ShardedMemTable::new,
            |store| {
                for i in 1..(1 << 12) {
                    store.put(format!("key{}", i), "value".to_string()).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn get_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_bench");
    for i in &vec![8, 12, 16, 20] {
        group.bench_with_input(format!("memtable_{}", i), i, |b, i| {
            let store = MemTable::new();
            for key_i in 1..(1 << i) {
                store
                    .put(format!("key{}", key_i), "value".to_string())
                    .unwrap();
            }
            let mut rng = SmallRng::seed_from_u64(0);
            b.iter(|| {
                store.get(&format!("key{}", rng.gen_range(1..1 << i)));
            })
        });
    }
    for i in &vec![8, 12, 16, 20] {
        group.bench_with_input(format!("sharded_{}", i), i, |b, i| {
            let store = ShardedMemTable::new();
            for key_i in 1..(1 << i) {
                store
                    .put(format!("key{}", key_i), "value".to_string())
                    .unwrap();
            }
            let mut rng = SmallRng::seed_from_u64(0);
            b.iter(|| {
                store.get(&format!("key{}", rng.gen_range(1..1 << i)));
            })
        });
    }
    group.finish();
}

// Each iteration fans out a batch of jobs on the pool and waits for all of
// them, so the measurement covers lock contention rather than queueing.
fn pool_batch<E: KvsEngine, P: ThreadPool>(store: &E, pool: &P, rng: &mut SmallRng, write: bool) {
    let wg = WaitGroup::new();
    for _ in 0..64 {
        let n_store = store.clone();
        let n = rng.gen_range(1..32);
        let wg = wg.clone();
        pool.spawn(move || {
            if write {
                n_store
                    .put(format!("key{}", n), format!("value{}", n))
                    .unwrap();
            } else {
                n_store.get(&format!("key{}", n));
            }
            drop(wg);
        });
    }
    wg.wait();
}

fn read_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_bench");
    for i in &vec![4, 8, 16, 32] {
        group.bench_with_input(format!("shared_queue_memtable_{i}"), i, |b, i| {
            let store = MemTable::new();
            let pool = SharedQueueThreadPool::new(*i).unwrap();
            for key_i in 1..16 {
                store
                    .put(format!("key{}", key_i), "value".to_string())
                    .unwrap();
            }
            let mut rng = SmallRng::seed_from_u64(1);
            b.iter(|| pool_batch(&store, &pool, &mut rng, false))
        });
    }

    for i in &vec![4, 8, 16, 32] {
        group.bench_with_input(format!("rayon_sharded_{i}"), i, |b, i| {
            let store = ShardedMemTable::new();
            let pool = RayonThreadPool::new(*i).unwrap();
            for key_i in 1..16 {
                store
                    .put(format!("key{}", key_i), "value".to_string())
                    .unwrap();
            }
            let mut rng = SmallRng::seed_from_u64(1);
            b.iter(|| pool_batch(&store, &pool, &mut rng, false))
        });
    }
    group.finish();
}

fn write_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_bench");
    for i in &vec![4, 8, 16, 32] {
        group.bench_with_input(format!("shared_queue_memtable_{i}"), i, |b, i| {
            let store = MemTable::new();
            let pool = SharedQueueThreadPool::new(*i).unwrap();
            let mut rng = SmallRng::seed_from_u64(1);
            b.iter(|| pool_batch(&store, &pool, &mut rng, true))
        });
    }

    for i in &vec![4, 8, 16, 32] {
        group.bench_with_input(format!("rayon_sharded_{i}"), i, |b, i| {
            let store = ShardedMemTable::new();
            let pool = RayonThreadPool::new(*i).unwrap();
            let mut rng = SmallRng::seed_from_u64(1);
            b.iter(|| pool_batch(&store, &pool, &mut rng, true))
        });
    }
    group.finish();
}

criterion_group!(benches, put_bench, get_bench, read_bench, write_bench);
criterion_main!(benches);
