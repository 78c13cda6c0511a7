#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Store benchmarks: parse, serialize and the set_query round-trip
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use urlstate::{
    QueryMap, QueryRecord, QuerySchema, UrlSearchParams, UrlStore, ValidationError, coerce,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Filters {
    a: Option<String>,
    b: Option<u32>,
    c: Option<Vec<String>>,
}

struct FiltersSchema;

impl QuerySchema for FiltersSchema {
    type Output = Filters;

    fn safe_parse(&self, raw: &QueryMap) -> Result<Filters, ValidationError> {
        let b = coerce::number(raw, "b").map_err(ValidationError::from)?;
        Ok(Filters {
            a: coerce::string(raw, "a"),
            b,
            c: coerce::string_list(raw, "c"),
        })
    }
}

impl QueryRecord for Filters {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(a) = &self.a {
            pairs.push(("a".to_string(), a.clone()));
        }
        if let Some(b) = self.b {
            pairs.push(("b".to_string(), b.to_string()));
        }
        if let Some(c) = &self.c {
            pairs.push(("c".to_string(), coerce::join_list(c)));
        }
        pairs
    }
}

const QUERY: &str = "a=hello+world&b=42&c=c1%2Cc2%2Cc3";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_query", |b| {
        b.iter(|| UrlSearchParams::parse(black_box(QUERY)));
    });

    let params = UrlSearchParams::parse(QUERY);
    c.bench_function("collapse_entries", |b| {
        b.iter(|| QueryMap::from_entries(black_box(&params).entries()));
    });
}

fn bench_serialize(c: &mut Criterion) {
    let params = UrlSearchParams::parse(QUERY);
    c.bench_function("serialize_query", |b| {
        b.iter(|| black_box(&params).to_string());
    });
}

fn bench_store(c: &mut Criterion) {
    c.bench_function("store_construct", |b| {
        let params = UrlSearchParams::parse(QUERY);
        b.iter(|| UrlStore::new(black_box(&params), FiltersSchema));
    });

    c.bench_function("store_set_query", |b| {
        let store = UrlStore::new(&UrlSearchParams::parse(QUERY), FiltersSchema);
        let mut n = 0u32;
        b.iter(|| {
            n = n.wrapping_add(1);
            store.set_query("b", black_box(n));
        });
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_store);
criterion_main!(benches);
