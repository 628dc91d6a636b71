//! Search Result Decoding Tests
//!
//! A search result is resolved to a concrete datatype by its resourceType.
//! Namespace violations always fail; unregistered types follow the policy.

use serde_json::json;
use softlayer_codec::datatypes::{
    ContainerSearchResult, Float64, ResourceKind, SearchDecodeError, SearchResource,
    SearchResultDecoder, UnknownResourcePolicy,
};

#[test]
fn test_every_registered_kind_resolves() {
    for kind in ResourceKind::ALL {
        let raw = json!({"resourceType": kind.discriminator(), "resource": {"id": 9}});
        let result = SearchResultDecoder::new(UnknownResourcePolicy::Strict)
            .decode_value(raw)
            .unwrap_or_else(|e| panic!("{} failed: {}", kind.discriminator(), e));
        assert_eq!(result.resource_kind(), Some(kind));
    }

    println!("✅ All {} registered kinds resolve", ResourceKind::ALL.len());
}

#[test]
fn test_known_type_from_bytes() {
    let bytes = br#"{
        "matchedTerms": ["example.com"],
        "relevanceScore": "3.5",
        "resourceType": "SoftLayer_Dns_Domain",
        "resource": {"id": 12, "name": "example.com", "updateDate": "2020-02-02T02:02:02-06:00"}
    }"#;

    let result = SearchResultDecoder::default().decode_slice(bytes).unwrap();
    assert_eq!(result.relevance_score, Some(Float64(3.5)));
    match result.resource {
        Some(SearchResource::DnsDomain(domain)) => {
            assert_eq!(domain.name.as_deref(), Some("example.com"));
            assert!(domain.update_date.is_some());
        }
        other => panic!("expected a dns domain, got {:?}", other),
    }
}

#[test]
fn test_bad_namespace_names_the_discriminator() {
    let err = SearchResultDecoder::default()
        .decode_slice(br#"{"resourceType": "Virtual_Guest", "resource": {}}"#)
        .unwrap_err();

    assert!(matches!(err, SearchDecodeError::Namespace(_)));
    assert!(err.to_string().contains("Virtual_Guest"));
}

#[test]
fn test_unregistered_type_policy() {
    let bytes = br#"{"resourceType": "SoftLayer_Network_Gateway", "resource": {"id": 1}}"#;

    let tolerant = SearchResultDecoder::new(UnknownResourcePolicy::Tolerant)
        .decode_slice(bytes)
        .unwrap();
    assert!(tolerant.resource.is_none());

    let strict = SearchResultDecoder::new(UnknownResourcePolicy::Strict).decode_slice(bytes);
    assert!(matches!(
        strict,
        Err(SearchDecodeError::UnknownResourceType(ref t)) if t == "SoftLayer_Network_Gateway"
    ));
}

#[test]
fn test_malformed_relevance_score_fails() {
    let err = SearchResultDecoder::default()
        .decode_slice(br#"{"resourceType": "SoftLayer_Ticket", "relevanceScore": "very"}"#)
        .unwrap_err();
    assert!(matches!(err, SearchDecodeError::Json(_)));
}

#[test]
fn test_plain_serde_entry_point() {
    let parsed: ContainerSearchResult = serde_json::from_str(
        r#"{"resourceType": "SoftLayer_Network_Vlan", "resource": {"vlanNumber": 1024}}"#,
    )
    .unwrap();
    match parsed.resource {
        Some(SearchResource::NetworkVlan(vlan)) => assert_eq!(vlan.vlan_number, Some(1024)),
        other => panic!("expected a vlan, got {:?}", other),
    }

    let err = serde_json::from_str::<ContainerSearchResult>(r#"{"resourceType": "Acme_Vlan"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("Acme_Vlan"));
}
