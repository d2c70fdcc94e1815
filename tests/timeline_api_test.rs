//! End-to-end tests of the library against a mock timeline endpoint.

use httpmock::prelude::*;
use std::fs;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;
use timeline_cache::config::TimelineConfig;
use timeline_cache::{Credentials, ErrorKind, Record, Timeline};

const TWO_ENTRIES: &str = r#"[
  {"created_at": "2024-01-01T00:00:00Z", "text": "Hello: World", "id": 2},
  {"created_at": "2023-12-31T00:00:00Z", "text": "Older", "id": 1}
]"#;

fn config_for(server: &MockServer, temp: &TempDir, max_records: usize) -> TimelineConfig {
    TimelineConfig {
        endpoint: server.url("/statuses/user_timeline.json?screen_name="),
        expiration_secs: 3600,
        max_records,
        request_timeout_secs: 5,
        ..TimelineConfig::with_cache_dir(temp.path())
    }
}

#[test]
fn alice_first_fetch_returns_newest_record() {
    let server = MockServer::start();
    let temp = TempDir::new().unwrap();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/statuses/user_timeline.json")
            .query_param("screen_name", "alice");
        then.status(200)
            .header("content-type", "application/json")
            .body(TWO_ENTRIES);
    });

    let timeline = Timeline::new(config_for(&server, &temp, 1)).unwrap();
    let records = timeline.fetch_timeline("alice", None).unwrap();

    assert_eq!(
        records,
        vec![Record::new("2024-01-01T00:00:00Z", "Hello: World")]
    );
    mock.assert_calls(1);
    assert_eq!(
        fs::read_to_string(temp.path().join("alice.json")).unwrap(),
        TWO_ENTRIES
    );
}

#[test]
fn cached_timeline_is_not_refetched() {
    let server = MockServer::start();
    let temp = TempDir::new().unwrap();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/statuses/user_timeline.json");
        then.status(200).body(TWO_ENTRIES);
    });

    let timeline = Timeline::new(config_for(&server, &temp, 5)).unwrap();
    timeline.fetch_timeline("alice", None).unwrap();
    let second = timeline.fetch_timeline("alice", None).unwrap();

    assert_eq!(second.len(), 2);
    mock.assert_calls(1);
}

#[test]
fn bob_recent_cache_makes_no_request() {
    let server = MockServer::start();
    let temp = TempDir::new().unwrap();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/statuses/user_timeline.json");
        then.status(500);
    });

    let path = temp.path().join("bob.json");
    fs::write(&path, r#"[{"created_at":"c","text":"cached"}]"#).unwrap();
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(SystemTime::now() - Duration::from_secs(10))
        .unwrap();

    let timeline = Timeline::new(config_for(&server, &temp, 5)).unwrap();
    let records = timeline.fetch_timeline("bob", None).unwrap();

    assert_eq!(records, vec![Record::new("c", "cached")]);
    mock.assert_calls(0);
}

#[test]
fn protected_timeline_sends_basic_auth() {
    let server = MockServer::start();
    let temp = TempDir::new().unwrap();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/statuses/user_timeline.json")
            .header("Authorization", "Basic YWxpY2U6c2VjcmV0");
        then.status(200).body("[]");
    });

    let timeline = Timeline::new(config_for(&server, &temp, 5)).unwrap();
    let creds = Credentials::new("alice", "secret");
    let records = timeline.fetch_timeline("alice", Some(&creds)).unwrap();

    assert!(records.is_empty());
    mock.assert();
}

#[test]
fn unauthorized_keeps_prior_cache() {
    let server = MockServer::start();
    let temp = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method(GET).path("/statuses/user_timeline.json");
        then.status(401).body("Not authorized");
    });

    let config = TimelineConfig {
        expiration_secs: 0,
        ..config_for(&server, &temp, 5)
    };
    let prior = r#"[{"created_at":"p","text":"prior"}]"#;
    fs::write(temp.path().join("alice.json"), prior).unwrap();

    let timeline = Timeline::new(config).unwrap();
    let err = timeline.fetch_timeline("alice", None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(
        fs::read_to_string(temp.path().join("alice.json")).unwrap(),
        prior
    );
}

#[test]
fn remote_statuses_map_to_error_kinds() {
    let cases = [
        (404, ErrorKind::IdentityNotFound),
        (500, ErrorKind::RemoteUnavailable),
        (502, ErrorKind::RemoteUnavailable),
        (429, ErrorKind::RemoteUnavailable),
    ];

    for (status, kind) in cases {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        server.mock(|when, then| {
            when.method(GET).path("/statuses/user_timeline.json");
            then.status(status);
        });

        let timeline = Timeline::new(config_for(&server, &temp, 1)).unwrap();
        let err = timeline.fetch_timeline("alice", None).unwrap_err();

        assert_eq!(err.kind(), kind, "status {}", status);
        assert!(!temp.path().join("alice.json").exists());
    }
}

#[test]
fn malformed_body_is_corrupted() {
    let server = MockServer::start();
    let temp = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method(GET).path("/statuses/user_timeline.json");
        then.status(200).body("<statuses><status>");
    });

    let timeline = Timeline::new(config_for(&server, &temp, 1)).unwrap();
    let err = timeline.fetch_timeline("alice", None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CacheCorrupted);
}

#[test]
fn placeholder_endpoint_is_supported() {
    let server = MockServer::start();
    let temp = TempDir::new().unwrap();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/carol/timeline");
        then.status(200).body(TWO_ENTRIES);
    });

    let config = TimelineConfig {
        endpoint: server.url("/users/{identity}/timeline"),
        ..config_for(&server, &temp, 2)
    };
    let timeline = Timeline::new(config).unwrap();

    assert_eq!(timeline.fetch_timeline("carol", None).unwrap().len(), 2);
    mock.assert();
}
