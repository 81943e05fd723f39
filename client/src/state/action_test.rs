use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use probes::{ApiMessage, Phase};

use super::*;

fn greeting() -> ApiMessage {
    ApiMessage { message: "API is working!".to_owned() }
}

fn recorder<T: Send + Sync + 'static>() -> (Arc<Mutex<Vec<T>>>, Callback<T>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, Callback::new(move |value: T| sink.lock().unwrap().push(value)))
}

// =============================================================
// Starting an invocation
// =============================================================

#[test]
fn dispatch_while_pending_skips_request() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(ActionState::<ApiMessage>::new());
    state.update(|s| {
        s.begin();
    });

    let called = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&called);
    dispatch(
        state,
        move || {
            flag.store(true, Ordering::SeqCst);
            async { Ok::<_, ProbeError>(greeting()) }
        },
        None,
        None,
    );

    assert!(!called.load(Ordering::SeqCst));
    assert_eq!(state.with(ActionState::phase), Phase::Pending);
}

#[test]
fn begin_from_settled_state_clears_previous_outcome() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(ActionState::<ApiMessage>::new());
    state.update(|s| {
        s.begin();
        s.fail("Failed to reach API");
    });

    assert!(begin(state));
    state.with(|s| {
        assert_eq!(s.phase(), Phase::Pending);
        assert!(s.result().is_none());
        assert!(s.error_message().is_none());
    });
}

#[test]
fn begin_refuses_second_start() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(ActionState::<ApiMessage>::new());
    assert!(begin(state));
    assert!(!begin(state));
}

// =============================================================
// Settlement and callbacks
// =============================================================

#[test]
fn success_stores_result_and_runs_on_success_only() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(ActionState::<ApiMessage>::new());
    let (successes, on_success) = recorder::<ApiMessage>();
    let (errors, on_error) = recorder::<String>();
    assert!(begin(state));

    settle(state, Ok(greeting()), Some(on_success), Some(on_error));

    assert_eq!(state.with(ActionState::phase), Phase::Success);
    assert_eq!(state.with(|s| s.result().cloned()), Some(greeting()));
    assert_eq!(*successes.lock().unwrap(), vec![greeting()]);
    assert!(errors.lock().unwrap().is_empty());
}

#[test]
fn failure_moves_to_error_and_runs_on_error_only() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(ActionState::<ApiMessage>::new());
    let (successes, on_success) = recorder::<ApiMessage>();
    let (errors, on_error) = recorder::<String>();
    assert!(begin(state));

    settle(state, Err(ProbeError::from_status(404, "")), Some(on_success), Some(on_error));

    state.with(|s| {
        assert_eq!(s.phase(), Phase::Error);
        assert!(!s.is_pending());
        assert_eq!(s.error_message(), Some("API endpoint not found"));
    });
    assert!(successes.lock().unwrap().is_empty());
    assert_eq!(*errors.lock().unwrap(), vec!["API endpoint not found".to_owned()]);
}

#[test]
fn settle_without_callbacks_still_updates_state() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(ActionState::<ApiMessage>::new());
    assert!(begin(state));

    settle(state, Err(ProbeError::transport("")), None, None);

    assert_eq!(state.with(|s| s.error_message().map(str::to_owned)), Some("Failed to reach API".to_owned()));
}

#[test]
fn disposed_state_drops_outcome_and_skips_callbacks() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(ActionState::<ApiMessage>::new());
    let (successes, on_success) = recorder::<ApiMessage>();
    assert!(begin(state));
    state.dispose();

    settle(state, Ok(greeting()), Some(on_success), None);

    assert!(successes.lock().unwrap().is_empty());
}
