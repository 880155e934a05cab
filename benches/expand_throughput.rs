//! Path expansion throughput benchmarks
//!
//! Measures expansion with:
//! - Simple fields, wildcards, array maps, filter queries and multipaths
//! - Parse-per-call (`expand_path`) versus one parsed document reused
//! - Array fan-out over growing documents (10, 100, 1000 records)
//!
//! Run benchmarks: `cargo bench --bench expand_throughput`
//!
//! Compare specific groups:
//! ```
//! cargo bench --bench expand_throughput -- "path_shapes"
//! cargo bench --bench expand_throughput -- "fan_out"
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jexpand::{Expander, expand_path};
use serde_json::{Value, json};
use std::hint::black_box;

fn family_document() -> &'static str {
    r#"{
        "name": {"first": "Tom", "last": "Anderson"},
        "age": 37,
        "children": ["Sara", "Alex", "Jack"],
        "friends": [
            {"first": "Dale", "last": "Murphy", "age": 44},
            {"first": "Roger", "last": "Craig", "age": 68},
            {"first": "Jane", "last": "Murphy", "age": 47}
        ],
        "families": [
            {
                "surname": "Smith",
                "members": [
                    {"name": "John", "age": 45, "hobbies": [
                        {"name": "reading", "locations": ["library", "home"]},
                        {"name": "cycling", "locations": ["park"]}
                    ]},
                    {"name": "Jane", "age": 42, "hobbies": [
                        {"name": "cooking", "locations": ["kitchen"]},
                        {"name": "gardening", "locations": ["backyard", "greenhouse"]}
                    ]}
                ]
            },
            {
                "surname": "Johnson",
                "members": [
                    {"name": "Bob", "age": 38, "hobbies": [
                        {"name": "fishing", "locations": ["lake", "river"]}
                    ]},
                    {"name": "Alice", "age": 35, "hobbies": [
                        {"name": "painting", "locations": ["studio"]}
                    ]}
                ]
            }
        ]
    }"#
}

fn users_document(count: usize) -> Value {
    let users = (0..count)
        .map(|i| json!({"id": i, "name": format!("user{}", i), "active": i % 3 != 0}))
        .collect::<Vec<_>>();
    json!({ "users": users })
}

const PATH_SHAPES: &[(&str, &str)] = &[
    ("simple_field", "name.first"),
    ("nested_field", "name.last"),
    ("deep_nesting", "families.#.members.#.name"),
    ("deep_query", "families.#.members.#(age<40)#.name"),
    ("wildcard", "name.*"),
    ("complex_mixed", "families.0.members.#.hobbies.#.name"),
    ("simple_multipath", "[name.first,age]"),
    ("complex_multipath", "[name.first,friends.#.first,children.#]"),
];

fn bench_path_shapes(c: &mut Criterion) {
    let bytes = family_document().as_bytes();
    let mut group = c.benchmark_group("path_shapes");

    for (name, path) in PATH_SHAPES {
        group.bench_with_input(BenchmarkId::new("expand_path", name), path, |b, path| {
            b.iter(|| expand_path(black_box(bytes), black_box(path)))
        });
    }

    group.finish();
}

fn bench_reused_document(c: &mut Criterion) {
    let root: Value = serde_json::from_str(family_document()).expect("benchmark document is valid");
    let expander = Expander::new(&root);
    let mut group = c.benchmark_group("reused_document");

    for (name, path) in PATH_SHAPES {
        group.bench_with_input(BenchmarkId::new("expander", name), path, |b, path| {
            b.iter(|| expander.expand(black_box(path)))
        });
    }

    group.bench_function("expand_all", |b| {
        let paths = PATH_SHAPES.iter().map(|(_, path)| *path).collect::<Vec<_>>();
        b.iter(|| expander.expand_all(black_box(&paths)))
    });

    group.finish();
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for count in [10, 100, 1000] {
        let root = users_document(count);
        let expander = Expander::new(&root);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("array_map", count), &count, |b, _| {
            b.iter(|| expander.expand(black_box("users.#.name")))
        });
        group.bench_with_input(BenchmarkId::new("filter_active", count), &count, |b, _| {
            b.iter(|| expander.expand(black_box("users.#(active==true)#.name")))
        });
        group.bench_with_input(BenchmarkId::new("multi_level", count), &count, |b, _| {
            b.iter(|| expander.expand(black_box("[users.#.id,users.#.name]")))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_path_shapes,
    bench_reused_document,
    bench_fan_out
);
criterion_main!(benches);
