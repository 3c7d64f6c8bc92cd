#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gaugekit_core::tags::encode_stream_tags;
use gaugekit_core::{metric_name_with_stream_tags, Tag};

#[test]
fn no_tags_keeps_name() {
    assert_eq!(metric_name_with_stream_tags("cpu.idle", &[]), "cpu.idle");
}

#[test]
fn tags_are_sorted_and_order_independent() {
    let a = vec![Tag::new("host", "web-1"), Tag::new("az", "b")];
    let b = vec![Tag::new("az", "b"), Tag::new("host", "web-1")];
    let key = metric_name_with_stream_tags("cpu.idle", &a);
    assert_eq!(key, "cpu.idle|ST[az:b,host:web-1]");
    assert_eq!(key, metric_name_with_stream_tags("cpu.idle", &b));
}

#[test]
fn duplicates_and_empty_categories_are_dropped() {
    let tags = vec![
        Tag::new(" host ", "a"),
        Tag::new("host", "a"),
        Tag::new("", "orphan"),
    ];
    assert_eq!(metric_name_with_stream_tags("m", &tags), "m|ST[host:a]");
    assert_eq!(metric_name_with_stream_tags("m", &[Tag::new(" ", "x")]), "m");
}

#[test]
fn already_tagged_name_is_left_alone() {
    let name = "m|ST[a:b]";
    assert_eq!(metric_name_with_stream_tags(name, &[Tag::new("c", "d")]), name);
}

#[test]
fn reserved_characters_are_base64_encoded() {
    let body = encode_stream_tags(&[Tag::new("path", "/a,b")]);
    assert_eq!(body, "path:b\"L2EsYg==\"");
}
