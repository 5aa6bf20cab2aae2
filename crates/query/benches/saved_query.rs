//! Benchmarks for the saved-candidate query engine
//!
//! Run with: cargo bench --package query

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use model::Candidate;
use query::{SortKey, query};

fn saved_list(size: u64) -> Vec<Candidate> {
    (0..size)
        .map(|i| {
            let login = format!("user{:04}", (i * 7919) % size);
            let mut c = Candidate::new(i, login.clone(), format!("https://github.com/{login}"));
            c.full_name = Some(format!("Candidate {}", (i * 31) % size));
            c.company_name = (i % 3 != 0).then(|| format!("Company {}", i % 17));
            c.user_location = Some(["Berlin", "Lagos", "Lima", "Osaka"][(i % 4) as usize].to_string());
            c
        })
        .collect()
}

fn bench_search_only(c: &mut Criterion) {
    let list = saved_list(200);

    c.bench_function("query_search_only", |b| {
        b.iter(|| black_box(query(black_box(&list), "lag", None, true)))
    });
}

fn bench_search_and_sort(c: &mut Criterion) {
    let list = saved_list(200);

    c.bench_function("query_sort_full_name", |b| {
        b.iter(|| black_box(query(black_box(&list), "", Some(SortKey::FullName), true)))
    });

    c.bench_function("query_sort_company_desc", |b| {
        b.iter(|| black_box(query(black_box(&list), "c", Some(SortKey::CompanyName), false)))
    });
}

criterion_group!(benches, bench_search_only, bench_search_and_sort);
criterion_main!(benches);
