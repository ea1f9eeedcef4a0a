/// Property-Based Roundtrip Tests for Binson
///
/// Uses the `proptest` crate to generate random value trees and verify that
/// `decode(encode(v)) == v` holds for all of them, along with the canonical
/// form properties that make the encoding deterministic.
///
/// Strategies generate:
/// - Every scalar variant, with doubles drawn from all bit patterns (NaN and
///   signed zero included; `Value` equality compares bits)
/// - Arbitrary Unicode keys, including empty and shared-prefix keys
/// - Nested objects and arrays (up to 4 levels deep)
use std::collections::BTreeMap;

use binson_core::{decode, decode_prefix, encode, encoded_len, Array, ErrorKind, Object, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating Binson values
// ============================================================================

/// Object key: any UTF-8 text, biased toward short ASCII so prefixes collide.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-c]{0,3}",
        1 => ".{0,12}",
    ]
}

/// Integers clustered around the 1/2/4/8-byte width boundaries.
fn arb_int() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        -200i64..200,
        (i16::MIN as i64 - 2)..(i16::MIN as i64 + 2),
        (i16::MAX as i64 - 2)..(i16::MAX as i64 + 2),
        (i32::MIN as i64 - 2)..(i32::MIN as i64 + 2),
        (i32::MAX as i64 - 2)..(i32::MAX as i64 + 2),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        arb_int().prop_map(Value::Int),
        any::<u64>().prop_map(|bits| Value::Double(f64::from_bits(bits))),
        any::<f64>().prop_map(Value::Double),
        ".{0,40}".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..300).prop_map(Value::Bytes),
    ]
}

/// Random tree with limited nesting.
fn arb_value_inner(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_scalar().boxed()
    } else {
        prop_oneof![
            4 => arb_scalar(),
            2 => prop::collection::vec((arb_key(), arb_value_inner(depth - 1)), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
            2 => prop::collection::vec(arb_value_inner(depth - 1), 0..6)
                .prop_map(|items| Value::Array(Array::from(items))),
        ]
        .boxed()
    }
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_inner(4)
}

// ============================================================================
// Helpers
// ============================================================================

/// An 8-byte integer element, the widest non-canonical form of `i`.
fn wide_int(i: i64) -> Vec<u8> {
    let mut out = vec![0x13];
    out.extend_from_slice(&i.to_le_bytes());
    out
}

/// An object whose two entries are written in descending key order.
fn swapped_pair_object(lo: &str, hi: &str, v: &Value) -> Vec<u8> {
    let mut out = vec![0x40];
    out.extend(encode(&Value::from(hi)));
    out.extend(encode(v));
    out.extend(encode(&Value::from(lo)));
    out.extend(encode(v));
    out.push(0x41);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Core property: decode(encode(v)) == v.
    #[test]
    fn roundtrip_preserves_value(value in arb_value()) {
        let bytes = encode(&value);
        let back = decode(&bytes).unwrap();
        prop_assert_eq!(back, value);
    }

    /// encoded_len predicts the exact output size.
    #[test]
    fn encoded_len_is_exact(value in arb_value()) {
        prop_assert_eq!(encoded_len(&value), encode(&value).len());
    }

    /// Canonical bytes re-encode to themselves.
    #[test]
    fn canonical_bytes_are_fixed_point(value in arb_value()) {
        let once = encode(&value);
        let twice = encode(&decode(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    /// Any integer written at 8 bytes decodes to itself and re-encodes minimally.
    #[test]
    fn wide_integers_normalize(i in arb_int()) {
        let value = decode(&wide_int(i)).unwrap();
        prop_assert_eq!(&value, &Value::Int(i));
        prop_assert_eq!(encode(&value), encode(&Value::Int(i)));
    }

    /// Insertion order never affects the encoding.
    #[test]
    fn insertion_order_is_irrelevant(
        entries in prop::collection::btree_map(arb_key(), arb_scalar(), 0..10)
    ) {
        let forward: Object = entries.clone().into_iter().collect();
        let backward: Object = entries.into_iter().rev().collect();
        prop_assert_eq!(
            encode(&Value::from(forward)),
            encode(&Value::from(backward))
        );
    }

    /// Keys written out of order on the wire are always rejected.
    #[test]
    fn descending_keys_are_rejected(a in arb_key(), b in arb_key(), v in arb_scalar()) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let err = decode(&swapped_pair_object(&lo, &hi, &v)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidFieldName);
    }

    /// Strict decode rejects any trailing bytes; decode_prefix reports the split.
    #[test]
    fn trailing_bytes_are_detected(
        value in arb_value(),
        junk in prop::collection::vec(any::<u8>(), 1..8)
    ) {
        let bytes = encode(&value);
        let mut padded = bytes.clone();
        padded.extend(&junk);
        prop_assert_eq!(decode(&padded).unwrap_err().kind(), ErrorKind::TrailingData);
        let (prefix, used) = decode_prefix(&padded).unwrap();
        prop_assert_eq!(used, bytes.len());
        prop_assert_eq!(prefix, value);
    }

    /// Arbitrary input never panics the decoder.
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode(&bytes);
    }

    /// Truncating canonical bytes anywhere always fails cleanly.
    #[test]
    fn truncation_is_an_error(value in arb_value(), cut in any::<prop::sample::Index>()) {
        let bytes = encode(&value);
        let cut = cut.index(bytes.len());
        prop_assert!(decode(&bytes[..cut]).is_err());
    }

    /// Struct-like maps survive the serde bridge.
    #[test]
    fn serde_map_roundtrip(map in prop::collection::btree_map(arb_key(), any::<i64>(), 0..10)) {
        let value = binson_core::to_value(&map).unwrap();
        let back: BTreeMap<String, i64> = binson_core::from_value(value).unwrap();
        prop_assert_eq!(back, map);
    }
}
