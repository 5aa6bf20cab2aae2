//! Integration tests for the review pipeline.
//!
//! These drive whole browsing sessions against scripted sources and verify
//! the cross-cutting guarantees: one detail fetch per position, stale fetch
//! results never touching a reloaded queue, monotonic cursor movement, and
//! saved candidates surviving a restart.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{Value, json};
use tokio::sync::Semaphore;

use review::{EnrichmentStatus, ReviewConfig, ReviewPhase, ReviewPipeline};
use sources::{CandidateSource, FixtureSource, StaticSource};
use storage::{KeyValueStore, MemoryStore, SavedCandidateStore, SnapshotStatus};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn record(id: u64, login: &str) -> Value {
    json!({ "userId": id, "userLogin": login, "profileUrl": format!("https://github.com/{login}") })
}

fn detail(id: u64, login: &str, name: &str) -> Value {
    json!({
        "userId": id,
        "userLogin": login,
        "fullName": name,
        "userLocation": "Lisbon",
        "profileUrl": format!("https://github.com/{login}")
    })
}

fn pipeline_over(source: Arc<dyn CandidateSource>, medium: Arc<dyn KeyValueStore>) -> ReviewPipeline {
    let saved = Arc::new(SavedCandidateStore::new(medium));
    ReviewPipeline::new(source, saved, ReviewConfig::default())
}

#[tokio::test]
async fn test_concurrent_enrichment_calls_fetch_once() {
    init_tracing();
    let gate = Arc::new(Semaphore::new(0));
    let source = Arc::new(
        StaticSource::new(json!([record(1, "ada")]))
            .with_detail("ada", detail(1, "ada", "Ada Lovelace"))
            .with_gate(gate.clone()),
    );
    let pipeline = pipeline_over(source.clone(), Arc::new(MemoryStore::new()));
    pipeline.initialize().await.unwrap();

    tokio::join!(
        pipeline.ensure_enriched(),
        pipeline.ensure_enriched(),
        pipeline.ensure_enriched(),
        async {
            tokio::task::yield_now().await;
            assert_eq!(pipeline.enrichment_status(), Some(EnrichmentStatus::InFlight));
            gate.add_permits(3);
        }
    );

    assert_eq!(source.detail_calls(), 1);
    assert_eq!(pipeline.enrichment_status(), Some(EnrichmentStatus::Done));
    assert_eq!(
        pipeline.current().and_then(|c| c.full_name),
        Some("Ada Lovelace".to_string())
    );
}

#[tokio::test]
async fn test_stale_enrichment_never_touches_reloaded_queue() {
    init_tracing();
    let gate = Arc::new(Semaphore::new(0));
    let source = Arc::new(
        StaticSource::new(json!([record(1, "ada"), record(2, "linus")]))
            .with_detail("ada", detail(1, "ada", "Ada Lovelace"))
            .with_gate(gate.clone()),
    );
    let pipeline = pipeline_over(source.clone(), Arc::new(MemoryStore::new()));
    pipeline.initialize().await.unwrap();

    tokio::join!(pipeline.ensure_enriched(), async {
        tokio::task::yield_now().await;
        source.set_list_payload(json!([record(1, "ada")]));
        pipeline.initialize().await.unwrap();
        gate.add_permits(1);
    });

    // The old fetch resolved after the reload and was dropped.
    assert_eq!(source.detail_calls(), 1);
    assert_eq!(pipeline.len(), 1);
    assert_eq!(pipeline.current().unwrap().full_name, None);
    assert_eq!(pipeline.enrichment_status(), Some(EnrichmentStatus::NotStarted));

    // The reloaded queue enriches on its own.
    gate.add_permits(1);
    pipeline.ensure_enriched().await;
    assert_eq!(source.detail_calls(), 2);
    assert_eq!(
        pipeline.current().unwrap().full_name.as_deref(),
        Some("Ada Lovelace")
    );
}

#[tokio::test]
async fn test_stale_enrichment_after_exhaustion_is_dropped() {
    let gate = Arc::new(Semaphore::new(0));
    let source = Arc::new(
        StaticSource::new(json!([record(1, "ada")]))
            .with_detail("ada", detail(1, "ada", "Ada Lovelace"))
            .with_gate(gate.clone()),
    );
    let pipeline = pipeline_over(source.clone(), Arc::new(MemoryStore::new()));
    pipeline.initialize().await.unwrap();

    tokio::join!(pipeline.ensure_enriched(), async {
        tokio::task::yield_now().await;
        pipeline.skip().unwrap();
        pipeline.initialize().await.unwrap();
        gate.add_permits(1);
    });

    assert_eq!(pipeline.phase(), ReviewPhase::Ready { cursor: 0 });
    assert_eq!(pipeline.current().unwrap().full_name, None);
}

#[tokio::test]
async fn test_full_session_and_restart() {
    init_tracing();
    let source: Arc<dyn CandidateSource> = Arc::new(FixtureSource::from_document(json!({
        "candidates": [
            record(1, "ada"),
            { "userId": 2, "userLogin": "incomplete" },
            record(3, "grace"),
            record(4, "linus")
        ],
        "details": {
            "ada": detail(1, "ada", "Ada Lovelace"),
            "grace": detail(3, "grace", "Grace Hopper")
        }
    })));
    let medium: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let pipeline = pipeline_over(source.clone(), medium.clone());

    pipeline.initialize().await.unwrap();
    assert_eq!(pipeline.len(), 3);

    // ada: enrich and save
    pipeline.ensure_enriched().await;
    let ada = pipeline.current().unwrap();
    pipeline.save(&ada).unwrap();

    // grace: skip
    pipeline.ensure_enriched().await;
    pipeline.skip().unwrap();

    // linus: no detail record, save the summary
    pipeline.ensure_enriched().await;
    let linus = pipeline.current().unwrap();
    assert_eq!(linus.full_name, None);
    pipeline.save(&linus).unwrap();

    assert_eq!(pipeline.phase(), ReviewPhase::Exhausted);
    assert!(pipeline.current().is_none());

    // Simulated restart: a fresh store over the same medium.
    let (restored, status) = SavedCandidateStore::open(medium.clone()).unwrap();
    assert_eq!(status, SnapshotStatus::Restored { count: 2 });
    let logins: Vec<String> = restored
        .candidates()
        .unwrap()
        .into_iter()
        .map(|c| c.user_login)
        .collect();
    assert_eq!(logins, vec!["ada", "linus"]);
    assert_eq!(
        restored.candidates().unwrap()[0].full_name.as_deref(),
        Some("Ada Lovelace")
    );
}

#[tokio::test]
async fn test_resaving_after_reload_duplicates_entry() {
    let source: Arc<dyn CandidateSource> = Arc::new(StaticSource::new(json!([record(1, "ada")])));
    let pipeline = pipeline_over(source, Arc::new(MemoryStore::new()));

    for _ in 0..2 {
        pipeline.reinitialize().await.unwrap();
        let current = pipeline.current().unwrap();
        pipeline.save(&current).unwrap();
    }

    assert_eq!(pipeline.saved().len().unwrap(), 2);
    assert_eq!(pipeline.saved().remove("ada").unwrap(), 2);
}

proptest! {
    #[test]
    fn cursor_is_monotonic_until_exhausted(
        count in 1usize..14,
        decisions in prop::collection::vec(any::<bool>(), 0..20),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let records: Vec<Value> = (0..count as u64).map(|i| record(i, &format!("user{i}"))).collect();
        let source: Arc<dyn CandidateSource> = Arc::new(StaticSource::new(Value::Array(records)));
        let pipeline = pipeline_over(source, Arc::new(MemoryStore::new()));
        runtime.block_on(pipeline.initialize()).unwrap();

        let loaded = count.min(10);
        prop_assert_eq!(pipeline.len(), loaded);

        let mut last_cursor = 0;
        let mut saves = 0;
        for (step, save) in decisions.iter().enumerate() {
            if step >= loaded {
                prop_assert!(pipeline.skip().is_err());
                continue;
            }
            if *save {
                let current = pipeline.current().unwrap();
                pipeline.save(&current).unwrap();
                saves += 1;
            } else {
                pipeline.skip().unwrap();
            }

            if step + 1 < loaded {
                prop_assert!(pipeline.cursor() >= last_cursor);
                prop_assert_eq!(pipeline.phase(), ReviewPhase::Ready { cursor: step + 1 });
                last_cursor = pipeline.cursor();
            } else {
                prop_assert_eq!(pipeline.phase(), ReviewPhase::Exhausted);
                prop_assert!(pipeline.is_empty());
                prop_assert_eq!(pipeline.cursor(), 0);
            }
        }
        prop_assert_eq!(pipeline.saved().len().unwrap(), saves);
    }
}
