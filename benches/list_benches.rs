use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::prelude::SliceRandom;
use rand::thread_rng;
use slink_collections::linked_list::owned::list::SinglyLinkedList;

const SAMPLE_SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn front_churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("SinglyLinkedList_front");

    for &size in SAMPLE_SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("push_pop_front", size), |b| {
            b.iter_with_setup(
                || {
                    let mut values: Vec<u64> = (0..size as u64).collect();
                    values.shuffle(&mut thread_rng());
                    values
                },
                |values| {
                    let mut list = SinglyLinkedList::new();
                    for value in values {
                        list.push_front(value).unwrap();
                    }
                    while let Ok(value) = list.pop_front() {
                        black_box(value);
                    }
                },
            );
        });
    }

    group.finish();
}

fn tail_append_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("SinglyLinkedList_tail");

    for &size in SAMPLE_SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("push_back_drop", size), |b| {
            b.iter_with_setup(
                || {
                    let mut values: Vec<u64> = (0..size as u64).collect();
                    values.shuffle(&mut thread_rng());
                    values
                },
                |values| {
                    let mut list = SinglyLinkedList::new();
                    for value in values {
                        list.push_back(value).unwrap();
                    }
                    black_box(list.len());
                },
            );
        });
    }

    group.finish();
}

fn mid_insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("SinglyLinkedList_positional");

    for &size in SAMPLE_SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("insert_after_head", size), |b| {
            b.iter_with_setup(
                || {
                    let mut values: Vec<u64> = (0..size as u64).collect();
                    values.shuffle(&mut thread_rng());
                    values
                },
                |values| {
                    let mut list = SinglyLinkedList::new();
                    list.push_front(0).unwrap();
                    for value in values {
                        unsafe { list.insert_after(list.head(), value).unwrap() };
                    }
                    black_box(list.len());
                },
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    front_churn_benchmark,
    tail_append_benchmark,
    mid_insert_benchmark
);
criterion_main!(benches);
