// ABOUTME: Criterion benchmarks for SQLite storage operations
// ABOUTME: Measures inserts, keyed lookups, and paginated listing on an in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! Database benchmarks against an in-memory `SQLite` backend.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::cast_possible_wrap,
    missing_docs
)]

use std::sync::atomic::{AtomicU64, Ordering};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lugiatrack_api::config::{DatabaseConfig, DatabaseUrl};
use lugiatrack_api::database_plugins::{factory::Database, DatabaseProvider};
use lugiatrack_api::models::{Motorcycle, MotorcycleLookup, NewEmployee};
use tokio::runtime::Runtime;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

async fn create_test_db() -> Database {
    let config = DatabaseConfig {
        url: DatabaseUrl::Memory,
        max_connections: 1,
    };
    Database::new(&config).await.unwrap()
}

fn next_employee() -> NewEmployee {
    let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    NewEmployee {
        name: format!("Funcionário {n}"),
        password: "s3nha".into(),
        email: format!("f{n}@lugiatrack.com.br"),
        cpf: format!("{n:011}"),
        role: None,
    }
}

fn motorcycle(n: usize) -> Motorcycle {
    Motorcycle {
        chassis: format!("9BWZZZ377VT{n:06}"),
        plate: format!("ABC{n:04}"),
        slot_id: 1,
        model: "CG 160".into(),
        status: 0,
        description: None,
    }
}

fn bench_employee_create(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("database_employee_create");
    let db = rt.block_on(create_test_db());
    let db = &db;

    group.bench_function("single_employee", |b| {
        b.to_async(&rt).iter(|| async move {
            let employee = next_employee();
            db.create_employee(black_box(&employee)).await.unwrap()
        });
    });

    group.finish();
}

fn bench_motorcycle_queries(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("database_motorcycle_queries");
    let db = rt.block_on(create_test_db());

    rt.block_on(async {
        for n in 0..500 {
            db.create_motorcycle(&motorcycle(n)).await.unwrap();
        }
    });

    let db = &db;
    let by_plate = MotorcycleLookup::new(None, Some(motorcycle(250).plate));
    let by_plate = &by_plate;
    group.bench_function("find_by_plate", |b| {
        b.to_async(&rt)
            .iter(|| async move { db.find_motorcycle(black_box(by_plate)).await.unwrap() });
    });

    for page_size in [10_i64, 50, 100] {
        group.throughput(Throughput::Elements(page_size as u64));
        group.bench_with_input(
            BenchmarkId::new("list_page", page_size),
            &page_size,
            |b, &page_size| {
                b.to_async(&rt).iter(|| async move {
                    db.list_motorcycles(black_box(200), black_box(page_size))
                        .await
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_employee_create, bench_motorcycle_queries);
criterion_main!(benches);
