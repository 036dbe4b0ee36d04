use circular_deque::CircularArrayDeque;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

fn bench_add_and_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_back then remove_front (1001)");
    group.bench_function("CircularArrayDeque", |b| {
        b.iter(|| {
            let mut deque = CircularArrayDeque::new();
            for i in 0..1001 {
                deque.add_back(black_box(i));
            }

            let mut sum = 0;
            while let Some(value) = deque.remove_front() {
                sum += value;
            }
            assert_eq!(sum, 500500);
        })
    });
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..1001 {
                deque.push_back(black_box(i));
            }

            let mut sum = 0;
            while let Some(value) = deque.pop_front() {
                sum += value;
            }
            assert_eq!(sum, 500500);
        })
    });
    group.finish();
}

fn bench_alternating_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternating ends (1000)");
    group.bench_function("CircularArrayDeque", |b| {
        b.iter(|| {
            let mut deque = CircularArrayDeque::new();
            for i in 0..1000 {
                if i % 2 == 0 {
                    deque.add_front(black_box(i));
                } else {
                    deque.add_back(black_box(i));
                }
            }
            while deque.remove_back().is_some() {
                black_box(deque.remove_front());
            }
        })
    });
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..1000 {
                if i % 2 == 0 {
                    deque.push_front(black_box(i));
                } else {
                    deque.push_back(black_box(i));
                }
            }
            while deque.pop_back().is_some() {
                black_box(deque.pop_front());
            }
        })
    });
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get (1001)");
    let deque = (0..1001).collect::<CircularArrayDeque<_>>();
    group.bench_function("CircularArrayDeque", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..1001 {
                if let Some(x) = deque.get(black_box(i * 2)) {
                    sum += x;
                }
            }
            assert_eq!(sum, 250500);
        })
    });

    let vec_deque = (0..1001).collect::<VecDeque<_>>();
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..1001 {
                if let Some(x) = vec_deque.get(black_box(i * 2)) {
                    sum += x;
                }
            }
            assert_eq!(sum, 250500);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_add_and_remove, bench_alternating_ends, bench_get);
criterion_main!(benches);
