#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gaugekit_client::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
flush:
  interval_msec: 5000 # typo should fail
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.flush.interval_ms, 10000);
    assert!(cfg.flush.isolate_panics);
    assert!(!cfg.flush.pretty);
    assert!(cfg.tags.is_empty());
}

#[test]
fn rejects_other_versions() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn interval_out_of_range() {
    let bad = "version: 1\nflush:\n  interval_ms: 10\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn tags_become_stream_tags() {
    let ok = r#"
version: 1
tags:
  - { category: "host", value: "web-1" }
  - { category: "role" }
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let tags = cfg.stream_tags();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].category, "host");
    assert_eq!(tags[1].value, "");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("/nonexistent/gaugekit.yaml").expect("defaults");
    assert_eq!(cfg.version, 1);
}
