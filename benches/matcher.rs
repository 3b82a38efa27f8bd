use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fixture_router::{query_key, CompiledPattern, Element, QueryKeyMatcher, RouteMatcher, RouteRegistry};

fn route_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("route-match");

    group.bench_function("cached-single-route", |b| {
        let matcher = RouteMatcher::new();
        matcher.compile("GET /hello/:name").unwrap();
        b.iter_with_large_drop(|| matcher.match_route("GET /hello/:name", "GET", "/hello/world"))
    });

    group.bench_function("registry-last-of-16", |b| {
        let mut registry: RouteRegistry<usize> = RouteRegistry::new();
        for i in 0..15 {
            registry.insert(&format!("GET /static/{}/:id", i), i);
        }
        registry.insert("GET /users/:id/files/*", 15);
        b.iter_with_large_drop(|| registry.find("GET", "/users/42/files/a/b.txt"))
    });
}

fn route_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("route-compile");

    group.bench_function("uncached", |b| {
        b.iter(|| CompiledPattern::parse("GET /orgs/:org/repos/:repo/*").unwrap())
    });

    group.bench_function("cache-miss", |b| {
        b.iter_batched_ref(
            RouteMatcher::new,
            |matcher: &mut RouteMatcher| {
                matcher.compile("GET /orgs/:org/repos/:repo/*").unwrap();
            },
            BatchSize::SmallInput,
        )
    });
}

fn query_key_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("query-key-match");

    let matcher = QueryKeyMatcher::new();
    let candidate = query_key![
        "users",
        Element::object([("id", "1"), ("status", "active"), ("page", "2")])
    ];
    let pattern = query_key!["users", Element::object([("id", ":uid"), ("status", "active")])];

    group.bench_function("object-subset", |b| {
        b.iter_with_large_drop(|| matcher.match_key(&candidate, &pattern))
    });
}

criterion_group!(benches, route_match, route_compile, query_key_match);
criterion_main!(benches);
