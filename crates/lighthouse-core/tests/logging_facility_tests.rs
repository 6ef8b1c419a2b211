#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Logging facility tests
//!
//! All tests share one global capture and run in parallel, so each one keys
//! its assertions on content unique to it.

use lighthouse_core::logging_facility::test_capture::init_test_capture;
use lighthouse_core::{log_error, log_sp_error, Level, Registry, Sample, SpError};

fn chain(tag: &str) -> SpError {
    SpError::new(
        Sample::new(format!("{} root", tag))
            .with_message("en", format!("{} root message", tag))
            .with_level(Level::DeepDebug),
    )
    .unwrap()
    .wrap_new(
        Sample::new(format!("{} outer", tag))
            .with_message("en", format!("{} outer message", tag))
            .with_level(Level::HighDebug)
            .with_meta("user_id", 42),
    )
    .unwrap()
}

#[test]
fn test_log_sp_error_emits_disclosed_layer() {
    let capture = init_test_capture();
    let registry = Registry::new();
    let err = chain("log_unique_1");

    log_sp_error!(registry, err, Level::DeepDebug);

    let events: Vec<_> = capture
        .events_for("log_sp_error")
        .into_iter()
        .filter(|e| e.field("desc") == Some("log_unique_1 root"))
        .collect();
    assert_eq!(events.len(), 1, "Should have exactly one event");

    let event = &events[0];
    assert_eq!(event.level, tracing::Level::ERROR);
    assert_eq!(event.message.as_deref(), Some("log_unique_1 root message"));
    assert_eq!(event.field("level"), Some("255"));
    assert_eq!(event.field("meta"), Some("{}"));
    assert_eq!(
        event.component.as_deref(),
        Some(module_path!()),
        "component is the invoking module"
    );
    assert!(event.field("trace").unwrap().contains(" <- "));
}

#[test]
fn test_log_sp_error_respects_level() {
    let capture = init_test_capture();
    let registry = Registry::new();
    let err = chain("log_unique_2");

    log_sp_error!(&registry, &err, Level::HighDebug);

    capture.assert_event_exists("log_sp_error", "desc", "log_unique_2 outer");
    let root_events = capture.count_events(|e| e.field("desc") == Some("log_unique_2 root"));
    assert_eq!(root_events, 0);

    let outer = capture
        .events_for("log_sp_error")
        .into_iter()
        .find(|e| e.field("desc") == Some("log_unique_2 outer"))
        .unwrap();
    assert_eq!(outer.field("meta"), Some(r#"{"user_id":42}"#));
}

#[test]
fn test_log_sp_error_noop_emits_nothing() {
    let capture = init_test_capture();
    let registry = Registry::new();
    let err = chain("log_unique_3");

    log_sp_error!(registry, err, Level::Noop);

    let count = capture.count_events(|e| {
        e.field("desc")
            .is_some_and(|desc| desc.starts_with("log_unique_3"))
    });
    assert_eq!(count, 0);
}

#[test]
fn test_registry_logs_rejections() {
    let capture = init_test_capture();
    let registry = Registry::new();

    registry
        .reg(Some(Sample::new("log_unique_4 without english message")))
        .unwrap_err();

    let rejected = capture.count_events(|e| {
        e.op.as_deref() == Some("registry.reg")
            && e.level == tracing::Level::WARN
            && e.field("err_code") == Some("ERR_EMPTY_ERROR")
    });
    assert!(rejected >= 1);
}

#[test]
fn test_registry_logs_lookup_miss() {
    let capture = init_test_capture();
    let registry = Registry::new();
    let missing = lighthouse_core::Identity::from_hex("log_unique_5");

    registry.get(&missing).unwrap_err();

    capture.assert_event_exists("registry.get", "identity", "log_unique_5");
}

#[test]
fn test_log_sp_error_in_requested_language() {
    let capture = init_test_capture();
    let registry = Registry::new();
    let err = SpError::new(
        Sample::new("log_unique_6 root")
            .with_message("en", "log_unique_6 root message")
            .with_level(Level::DeepDebug),
    )
    .unwrap()
    .wrap_new(
        Sample::new("log_unique_6 outer")
            .with_message("en", "log_unique_6 outer message")
            .with_message("ru", "log_unique_6 сообщение")
            .with_level(Level::HighDebug),
    )
    .unwrap();

    log_sp_error!(registry, err, Level::HighDebug, lang = "ru");
    log_sp_error!(registry, err, Level::DeepDebug, lang = "ru");

    let outer = capture
        .events_for("log_sp_error")
        .into_iter()
        .find(|e| e.field("desc") == Some("log_unique_6 outer"))
        .unwrap();
    assert_eq!(outer.message.as_deref(), Some("log_unique_6 сообщение"));

    let root = capture
        .events_for("log_sp_error")
        .into_iter()
        .find(|e| e.field("desc") == Some("log_unique_6 root"))
        .unwrap();
    assert_eq!(
        root.message.as_deref(),
        Some("log_unique_6 root message"),
        "falls back to english"
    );
}

#[test]
fn test_registry_logs_duplicate_registration_once() {
    let capture = init_test_capture();
    let registry = Registry::new();
    let sample = || Sample::new("log_unique_7 dup").with_message("en", "log_unique_7 dup message");

    let first = registry.reg(Some(sample())).unwrap();
    let second = registry.reg(Some(sample())).unwrap();
    assert_eq!(first, second);

    let for_identity = |message: &str| {
        capture.count_events(|e| {
            e.op.as_deref() == Some("registry.reg")
                && e.field("identity") == Some(first.as_str())
                && e.message.as_deref() == Some(message)
        })
    };
    assert_eq!(for_identity("registered error"), 1);
    assert_eq!(
        for_identity("error already registered, keeping the stored entry"),
        1
    );
}

#[test]
fn test_log_error_wraps_foreign_error() {
    let capture = init_test_capture();
    let registry = Registry::new();
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "log_unique_8 io failure");

    log_error!(registry, io, Level::DeepDebug);

    let event = capture
        .events_for("log_sp_error")
        .into_iter()
        .find(|e| e.field("desc") == Some("log_unique_8 io failure"))
        .unwrap();
    assert_eq!(event.message.as_deref(), Some("Unknown error"));
    assert_eq!(event.field("level"), Some("32"));
}

#[test]
fn test_log_error_passes_sp_error_through() {
    let capture = init_test_capture();
    let registry = Registry::new();

    log_error!(registry, chain("log_unique_9"), Level::DeepDebug, lang = "en");

    capture.assert_event_exists("log_sp_error", "desc", "log_unique_9 root");
}
