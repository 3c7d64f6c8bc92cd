#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use gaugekit_client::GaugeStore;
use gaugekit_core::{GaugeValue, NumericKind};

#[test]
fn set_then_get_preserves_kind() {
    let store = GaugeStore::new();
    let values: Vec<GaugeValue> = vec![
        (-1i8).into(),
        (-2i16).into(),
        (-3i32).into(),
        (-4i64).into(),
        (-5isize).into(),
        6u8.into(),
        7u16.into(),
        8u32.into(),
        9u64.into(),
        10usize.into(),
        1.5f32.into(),
        2.5f64.into(),
    ];
    for v in values {
        store.set("g", v.clone());
        let got = store.get("g").unwrap();
        assert_eq!(got, v);
        assert_eq!(got.kind(), v.kind());
    }
}

#[test]
fn set_overwrites_kind() {
    let store = GaugeStore::new();
    store.set("g", 1i32);
    store.set("g", 2.0f64);
    assert_eq!(store.get("g").unwrap(), GaugeValue::F64(2.0));
}

#[test]
fn add_on_absent_key_is_set() {
    let store = GaugeStore::new();
    store.add("g", 3u16).unwrap();
    assert_eq!(store.get("g").unwrap(), GaugeValue::U16(3));

    store.add("raw", "warming").unwrap();
    assert_eq!(store.get("raw").unwrap(), GaugeValue::Other("warming".into()));
}

#[test]
fn add_same_kind_sums() {
    let store = GaugeStore::new();
    store.add("i", 40i64).unwrap();
    store.add("i", 2i64).unwrap();
    assert_eq!(store.get("i").unwrap(), GaugeValue::I64(42));

    store.add("f", 0.25f64).unwrap();
    store.add("f", 0.5f64).unwrap();
    assert_eq!(store.get("f").unwrap(), GaugeValue::F64(0.75));

    store.add("u", 200u8).unwrap();
    store.add("u", 100u8).unwrap();
    assert_eq!(store.get("u").unwrap(), GaugeValue::U8(44));

    store.add("n", i16::MIN).unwrap();
    store.add("n", -1i16).unwrap();
    assert_eq!(store.get("n").unwrap(), GaugeValue::I16(i16::MAX));
}

#[test]
fn add_kind_mismatch_is_error_and_keeps_value() {
    let store = GaugeStore::new();
    store.set("g", 10i32);

    let err = store.add("g", 1i64).expect_err("must reject");
    assert_eq!(err.code().as_str(), "KIND_MISMATCH");
    assert!(err.to_string().contains("kind mismatch for metric `g`"));
    match err {
        gaugekit_core::GaugeError::KindMismatch { stored, incoming, .. } => {
            assert_eq!(stored, NumericKind::I32);
            assert_eq!(incoming, NumericKind::I64);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.get("g").unwrap(), GaugeValue::I32(10));
}

#[test]
fn add_numeric_onto_other_is_mismatch() {
    let store = GaugeStore::new();
    store.set("g", "idle");
    assert!(store.add("g", 1u32).is_err());
    assert_eq!(store.get("g").unwrap(), GaugeValue::Other("idle".into()));
}

#[test]
fn add_unsupported_kind_is_silent_noop() {
    let store = GaugeStore::new();
    store.set("g", 5u32);
    store.add("g", "ignored").unwrap();
    assert_eq!(store.get("g").unwrap(), GaugeValue::U32(5));
}

#[test]
fn remove_then_get_is_not_found() {
    let store = GaugeStore::new();
    store.set("g", 1i32);
    store.remove("g");
    let err = store.get("g").expect_err("must be gone");
    assert_eq!(err.code().as_str(), "NOT_FOUND");

    // missing key is fine
    store.remove("g");
    assert!(store.is_empty());
}

#[test]
fn concurrent_adds_lose_no_updates() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 1000;

    let store = Arc::new(GaugeStore::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    store.add("hits", 1i64).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(
        store.get("hits").unwrap(),
        GaugeValue::I64((THREADS * PER_THREAD) as i64)
    );
}

#[test]
fn snapshot_copies_all_entries() {
    let store = GaugeStore::new();
    store.set("a", 1i32);
    store.set("b", 2u64);
    let mut snap = store.snapshot();
    snap.sort_by(|x, y| x.0.cmp(&y.0));
    assert_eq!(
        snap,
        vec![
            ("a".to_string(), GaugeValue::I32(1)),
            ("b".to_string(), GaugeValue::U64(2)),
        ]
    );
    assert_eq!(store.len(), 2);
}
