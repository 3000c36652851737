//! Tests for the guaranteed-navigation sign-out contract

use std::time::{Duration, Instant};

use stint::app::App;
use stint::domain::Identity;
use stint::infrastructure::identity::StaticIdentity;
use stint::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
use stint::infrastructure::store::SampleStore;

fn test_app() -> App {
    App::new(Identity::new("sam", "Sam Park", "sam@example.edu"))
}

fn wait_for_signed_out(bridge: &RuntimeBridge, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if bridge
            .poll_events()
            .iter()
            .any(|event| matches!(event, RuntimeEvent::SignedOut))
        {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    false
}

#[test]
fn logout_navigates_immediately_and_exactly_once() {
    let mut app = test_app();
    assert!(!app.signed_out);

    app.request_logout();

    // Navigation happened before any sign-out outcome exists
    assert!(app.signed_out);
    assert!(app.should_quit);
    assert!(app.take_signout_request());

    // Repeated requests stay a no-op: one navigation, one sign-out send
    app.request_logout();
    assert!(!app.take_signout_request());
    assert!(app.signed_out);
}

#[test]
fn failed_sign_out_is_swallowed_and_navigation_stands() {
    let bridge = RuntimeBridge::new(
        Box::new(SampleStore::with_sample_data("sam")),
        Box::new(StaticIdentity::failing()),
        "sam".to_string(),
    )
    .expect("bridge");

    let mut app = test_app();
    app.request_logout();
    assert!(app.signed_out, "navigation precedes the sign-out call");

    assert!(app.take_signout_request());
    bridge.send(RuntimeCommand::SignOut).expect("send sign-out");

    // The worker reports completion even though the provider rejected the
    // call; the failure is logged, never surfaced.
    assert!(wait_for_signed_out(&bridge, Duration::from_secs(2)));
    assert!(app.signed_out);
    assert!(app.should_quit);
}

#[test]
fn successful_sign_out_behaves_identically_for_the_caller() {
    let bridge = RuntimeBridge::new(
        Box::new(SampleStore::with_sample_data("sam")),
        Box::new(StaticIdentity::new()),
        "sam".to_string(),
    )
    .expect("bridge");

    let mut app = test_app();
    app.request_logout();
    assert!(app.take_signout_request());
    bridge.send(RuntimeCommand::SignOut).expect("send sign-out");

    assert!(wait_for_signed_out(&bridge, Duration::from_secs(2)));
    assert!(app.signed_out);
}
