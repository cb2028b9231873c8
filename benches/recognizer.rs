use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use route_recognizer::{ConfigurableRoute, RouteRecognizer};

const ROUTES: &[&str] = &[
    "",
    "/users",
    "/users/me",
    "/users/:id",
    "/users/:id/posts/:post_id?",
    "/files/*path",
    "/about",
];

fn build() -> RouteRecognizer<usize> {
    let mut recognizer = RouteRecognizer::new();
    recognizer.add_all(
        ROUTES
            .iter()
            .enumerate()
            .map(|(i, p)| ConfigurableRoute::new(p, i)),
    );
    recognizer
}

fn recognizer_recognize(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognizer-recognize");

    group.bench_function("cold", |b| {
        let recognizer = build();
        b.iter(|| {
            recognizer.clear_cache();
            recognizer.recognize("/users/42/posts/7")
        })
    });

    group.bench_function("cached", |b| {
        let recognizer = build();
        b.iter(|| recognizer.recognize("/users/42/posts/7"))
    });

    group.bench_function("star", |b| {
        let recognizer = build();
        b.iter(|| {
            recognizer.clear_cache();
            recognizer.recognize("/files/a/b/c/d/e.txt")
        })
    });
}

fn recognizer_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognizer-add");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            RouteRecognizer::new,
            |recognizer: &mut RouteRecognizer<usize>| {
                recognizer.add(ConfigurableRoute::new("/hello/:name", 1));
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("table", |b| b.iter_with_large_drop(build));
}

criterion_group!(benches, recognizer_recognize, recognizer_add);
criterion_main!(benches);
