//! Scalar Codec Tests
//!
//! Timestamps leave with second precision and an explicit offset, flexible
//! numerics arrive bare or quoted and always leave bare.

use serde_json::json;
use softlayer_codec::datatypes::{Float64, ScalarError, Time, VirtualGuest};

#[test]
fn test_timestamp_encode_is_strict() {
    let t = Time::parse("2016-09-27T14:03:11.123456789+02:00").expect("valid rfc3339");
    let encoded = serde_json::to_string(&t).unwrap();

    assert_eq!(encoded, "\"2016-09-27T14:03:11+02:00\"");
    assert!(!encoded.contains('.'), "fractional seconds leaked: {}", encoded);

    println!("✅ Timestamp encoding verified");
}

#[test]
fn test_timestamp_round_trip_inside_struct() {
    let guest: VirtualGuest = serde_json::from_value(json!({
        "id": 5,
        "createDate": "2016-09-27T14:03:11-06:00",
        "modifyDate": "2016-09-28T00:00:00Z"
    }))
    .unwrap();

    let wire = serde_json::to_value(&guest).unwrap();
    assert_eq!(wire["createDate"], "2016-09-27T14:03:11-06:00");
    assert_eq!(wire["modifyDate"], "2016-09-28T00:00:00+00:00");

    let again: VirtualGuest = serde_json::from_value(wire).unwrap();
    assert_eq!(again, guest);
}

#[test]
fn test_flexible_numeric_tokens() {
    let cases = vec![
        ("42.5", Some(42.5)),
        ("\"42.5\"", Some(42.5)),
        ("-7", Some(-7.0)),
        ("\"1e3\"", Some(1000.0)),
        ("\"not-a-number\"", None),
        ("abc", None),
        ("\"NaN\"", None),
        ("inf", None),
    ];

    for (token, expected) in cases {
        match (Float64::from_json_token(token), expected) {
            (Ok(v), Some(want)) => assert_eq!(v.value(), want, "token {}", token),
            (Err(_), None) => {}
            (got, want) => panic!("token {}: got {:?}, want {:?}", token, got, want),
        }
    }
}

#[test]
fn test_flexible_numeric_error_kinds() {
    assert!(matches!(
        Float64::from_json_token("\"not-a-number\""),
        Err(ScalarError::Malformed { .. })
    ));
    assert!(matches!(
        Float64::from_json_token("abc"),
        Err(ScalarError::NotANumber { .. })
    ));
}

#[test]
fn test_flexible_numeric_in_struct_field() {
    let ip: softlayer_codec::datatypes::NetworkSubnetIpAddress =
        serde_json::from_value(json!({"ipAddress": "10.1.2.3", "score": "12.25"})).unwrap();
    assert_eq!(ip.score, Some(Float64(12.25)));
    assert_eq!(serde_json::to_value(&ip).unwrap()["score"], json!(12.25));

    let err = serde_json::from_value::<softlayer_codec::datatypes::NetworkSubnetIpAddress>(
        json!({"score": "high"}),
    )
    .unwrap_err();
    assert!(err.to_string().contains("high"), "error should name the token: {}", err);
}
