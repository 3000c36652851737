//! Tests for the load pipeline: store -> worker -> applied app state

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use stint::app::App;
use stint::domain::{ApplicationRecord, Identity, InternshipPosting};
use stint::infrastructure::identity::StaticIdentity;
use stint::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
use stint::infrastructure::store::{DocumentStore, SampleStore, StoreError};

/// Store double whose reads always fail with a transport-ish error
struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn fetch_postings(&self) -> Result<Vec<InternshipPosting>, StoreError> {
        Err(StoreError::Status(503))
    }

    async fn fetch_applications(
        &self,
        _user_id: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError> {
        Err(StoreError::Status(503))
    }

    fn endpoint_name(&self) -> String {
        "failing test store".to_string()
    }
}

/// Store double where only the applications read fails
struct HalfBrokenStore;

#[async_trait]
impl DocumentStore for HalfBrokenStore {
    async fn fetch_postings(&self) -> Result<Vec<InternshipPosting>, StoreError> {
        Ok(vec![InternshipPosting {
            id: "p1".to_string(),
            title: "Backend Intern".to_string(),
            status: "active".to_string(),
            ..Default::default()
        }])
    }

    async fn fetch_applications(
        &self,
        _user_id: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError> {
        Err(StoreError::Status(500))
    }

    fn endpoint_name(&self) -> String {
        "half-broken test store".to_string()
    }
}

fn wait_for_events(bridge: &RuntimeBridge, want: usize, timeout: Duration) -> Vec<RuntimeEvent> {
    let deadline = Instant::now() + timeout;
    let mut events = Vec::new();
    while Instant::now() < deadline && events.len() < want {
        events.extend(bridge.poll_events());
        std::thread::sleep(Duration::from_millis(20));
    }
    events
}

fn apply_events(app: &mut App, events: Vec<RuntimeEvent>) {
    for event in events {
        match event {
            RuntimeEvent::PostingsLoaded(postings) => app.apply_postings(postings),
            RuntimeEvent::ApplicationsLoaded(applications) => {
                app.apply_applications(applications)
            }
            RuntimeEvent::SignedOut => app.apply_signed_out(),
            RuntimeEvent::Error { message } => app.apply_store_error(message),
        }
    }
}

fn test_app() -> App {
    App::new(Identity::new("sam", "Sam Park", "sam@example.edu"))
}

#[test]
fn initial_snapshot_loads_both_lists() {
    let store = SampleStore::with_sample_data("sam");
    let bridge = RuntimeBridge::new(
        Box::new(store),
        Box::new(StaticIdentity::new()),
        "sam".to_string(),
    )
    .expect("bridge");

    let events = wait_for_events(&bridge, 2, Duration::from_secs(2));
    assert_eq!(events.len(), 2, "expected both load events, got {events:?}");

    let mut app = test_app();
    apply_events(&mut app, events);

    assert!(app.engine.source_len() > 0);
    assert!(!app.applications.is_empty());
    assert!(app.pending_application_count() > 0);

    // Store delivers newest-first on both collections
    let created: Vec<_> = app
        .engine
        .source()
        .iter()
        .filter_map(|p| p.created_at)
        .collect();
    assert!(created.windows(2).all(|pair| pair[0] >= pair[1]));

    let submitted: Vec<_> = app
        .applications
        .iter()
        .filter_map(|a| a.submitted_at)
        .collect();
    assert!(submitted.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn failed_reads_leave_lists_unchanged() {
    let bridge = RuntimeBridge::new(
        Box::new(FailingStore),
        Box::new(StaticIdentity::new()),
        "sam".to_string(),
    )
    .expect("bridge");

    let events = wait_for_events(&bridge, 2, Duration::from_secs(2));
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|event| matches!(event, RuntimeEvent::Error { .. })));

    // First load failing against an empty app: stays empty, no panic
    let mut app = test_app();
    apply_events(&mut app, events);
    assert_eq!(app.engine.source_len(), 0);
    assert!(app.applications.is_empty());
    // The failure is visible as notices only
    assert_eq!(app.notices.len(), 2);
}

#[test]
fn partial_failure_updates_only_the_healthy_list() {
    let bridge = RuntimeBridge::new(
        Box::new(HalfBrokenStore),
        Box::new(StaticIdentity::new()),
        "sam".to_string(),
    )
    .expect("bridge");

    let events = wait_for_events(&bridge, 2, Duration::from_secs(2));
    assert_eq!(events.len(), 2);

    let mut app = test_app();
    // Seed the application list to check it survives the failed read
    app.apply_applications(vec![ApplicationRecord {
        id: "a1".to_string(),
        status: "pending".to_string(),
        ..Default::default()
    }]);

    apply_events(&mut app, events);
    assert_eq!(app.engine.source_len(), 1);
    assert_eq!(app.applications.len(), 1, "failed read must not clear the list");
}

#[test]
fn refresh_reissues_both_reads() {
    let bridge = RuntimeBridge::new(
        Box::new(SampleStore::with_sample_data("sam")),
        Box::new(StaticIdentity::new()),
        "sam".to_string(),
    )
    .expect("bridge");

    let initial = wait_for_events(&bridge, 2, Duration::from_secs(2));
    assert_eq!(initial.len(), 2);

    bridge.send(RuntimeCommand::Refresh).expect("send refresh");
    let refreshed = wait_for_events(&bridge, 2, Duration::from_secs(2));
    assert_eq!(refreshed.len(), 2, "refresh should reload both lists");
}

#[tokio::test]
async fn sample_store_applies_query_semantics() {
    let active = |id: &str, days: i64| InternshipPosting {
        id: id.to_string(),
        status: "active".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 3, 1 + days as u32, 9, 0, 0).single(),
        ..Default::default()
    };
    let mut inactive = active("closed", 5);
    inactive.status = "inactive".to_string();

    let mine = |id: &str, day: u32| ApplicationRecord {
        id: id.to_string(),
        applicant_id: "sam".to_string(),
        submitted_at: Utc.with_ymd_and_hms(2026, 4, day, 12, 0, 0).single(),
        ..Default::default()
    };
    let mut theirs = mine("foreign", 9);
    theirs.applicant_id = "someone-else".to_string();

    let store = SampleStore::new(
        vec![active("old", 0), inactive, active("new", 10)],
        vec![mine("a-old", 1), theirs, mine("a-new", 20)],
    );

    // Postings: only active, newest first
    let postings = store.fetch_postings().await.expect("postings");
    let ids: Vec<&str> = postings.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "old"]);

    // Applications: only the requested user, newest first
    let applications = store.fetch_applications("sam").await.expect("applications");
    let ids: Vec<&str> = applications.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a-new", "a-old"]);
}
