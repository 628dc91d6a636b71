//! Polymorphic decoding of `SoftLayer_Container_Search_Result`.
//!
//! A search result names the type of its `resource` in `resourceType`, so the
//! payload is decoded in two passes: the first reads the discriminator into a
//! detector while keeping `resource` as an untyped [`Value`], the second
//! decodes that already-parsed value into the registered concrete type.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use super::float::Float64;
use super::resource::{DnsDomain, Hardware, NetworkSubnetIpAddress, NetworkVlan, Ticket, VirtualGuest};
use super::{Datatype, NAMESPACE};
use crate::metrics;

#[derive(Error, Debug)]
pub enum SearchDecodeError {
    #[error("Invalid search result JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Search result has no resourceType")]
    MissingResourceType,
    #[error("Resource type {0:?} is not in the SoftLayer_ namespace")]
    Namespace(String),
    #[error("Resource type {0:?} has no registered datatype")]
    UnknownResourceType(String),
    #[error("Resource payload does not decode as {resource_type}: {source}")]
    Resource {
        resource_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// What to do with a namespaced `resourceType` the registry does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownResourcePolicy {
    /// Keep the result and leave `resource` empty.
    #[default]
    Tolerant,
    /// Fail the decode.
    Strict,
}

/// Closed set of resource types the search API may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Hardware,
    VirtualGuest,
    NetworkVlan,
    NetworkSubnetIpAddress,
    Ticket,
    DnsDomain,
}

static REGISTRY: Lazy<HashMap<&'static str, ResourceKind>> = Lazy::new(|| {
    ResourceKind::ALL
        .iter()
        .map(|kind| (kind.discriminator(), *kind))
        .collect()
});

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Hardware,
        ResourceKind::VirtualGuest,
        ResourceKind::NetworkVlan,
        ResourceKind::NetworkSubnetIpAddress,
        ResourceKind::Ticket,
        ResourceKind::DnsDomain,
    ];

    pub fn discriminator(self) -> &'static str {
        match self {
            ResourceKind::Hardware => Hardware::QUALIFIED_NAME,
            ResourceKind::VirtualGuest => VirtualGuest::QUALIFIED_NAME,
            ResourceKind::NetworkVlan => NetworkVlan::QUALIFIED_NAME,
            ResourceKind::NetworkSubnetIpAddress => NetworkSubnetIpAddress::QUALIFIED_NAME,
            ResourceKind::Ticket => Ticket::QUALIFIED_NAME,
            ResourceKind::DnsDomain => DnsDomain::QUALIFIED_NAME,
        }
    }

    pub fn from_discriminator(resource_type: &str) -> Option<Self> {
        REGISTRY.get(resource_type).copied()
    }

    fn decode(self, payload: Value) -> Result<SearchResource, serde_json::Error> {
        Ok(match self {
            ResourceKind::Hardware => SearchResource::Hardware(serde_json::from_value(payload)?),
            ResourceKind::VirtualGuest => {
                SearchResource::VirtualGuest(serde_json::from_value(payload)?)
            }
            ResourceKind::NetworkVlan => {
                SearchResource::NetworkVlan(serde_json::from_value(payload)?)
            }
            ResourceKind::NetworkSubnetIpAddress => {
                SearchResource::NetworkSubnetIpAddress(serde_json::from_value(payload)?)
            }
            ResourceKind::Ticket => SearchResource::Ticket(serde_json::from_value(payload)?),
            ResourceKind::DnsDomain => SearchResource::DnsDomain(serde_json::from_value(payload)?),
        })
    }
}

/// The typed resource carried by a search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResource {
    Hardware(Hardware),
    VirtualGuest(VirtualGuest),
    NetworkVlan(NetworkVlan),
    NetworkSubnetIpAddress(NetworkSubnetIpAddress),
    Ticket(Ticket),
    DnsDomain(DnsDomain),
}

impl SearchResource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            SearchResource::Hardware(_) => ResourceKind::Hardware,
            SearchResource::VirtualGuest(_) => ResourceKind::VirtualGuest,
            SearchResource::NetworkVlan(_) => ResourceKind::NetworkVlan,
            SearchResource::NetworkSubnetIpAddress(_) => ResourceKind::NetworkSubnetIpAddress,
            SearchResource::Ticket(_) => ResourceKind::Ticket,
            SearchResource::DnsDomain(_) => ResourceKind::DnsDomain,
        }
    }
}

/// One row returned by the `SoftLayer_Search` service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSearchResult {
    /// Terms that were matched in the resource object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_terms: Option<Vec<String>>,

    /// Relevance of the result to the search criteria.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<Float64>,

    /// `None` when `resource_type` is namespaced but unregistered and the
    /// decoder is tolerant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<SearchResource>,

    pub resource_type: String,
}

impl ContainerSearchResult {
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        self.resource.as_ref().map(SearchResource::kind)
    }
}

// First pass: everything but the resource is typed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultDetector {
    matched_terms: Option<Vec<String>>,
    relevance_score: Option<Float64>,
    resource: Option<Value>,
    resource_type: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResultDecoder {
    policy: UnknownResourcePolicy,
}

impl SearchResultDecoder {
    pub fn new(policy: UnknownResourcePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownResourcePolicy {
        self.policy
    }

    pub fn decode_slice(&self, bytes: &[u8]) -> Result<ContainerSearchResult, SearchDecodeError> {
        let raw: Value = serde_json::from_slice(bytes)?;
        self.decode_value(raw)
    }

    /// Decodes a response body holding an array of search results.
    pub fn decode_list_slice(
        &self,
        bytes: &[u8],
    ) -> Result<Vec<ContainerSearchResult>, SearchDecodeError> {
        let rows: Vec<Value> = serde_json::from_slice(bytes)?;
        rows.into_iter().map(|row| self.decode_value(row)).collect()
    }

    pub fn decode_value(&self, raw: Value) -> Result<ContainerSearchResult, SearchDecodeError> {
        let detector: SearchResultDetector = serde_json::from_value(raw)?;

        let resource_type = match detector.resource_type {
            Some(t) => t,
            None => {
                metrics::inc_rejected_envelopes();
                return Err(SearchDecodeError::MissingResourceType);
            }
        };

        if !resource_type.starts_with(NAMESPACE) {
            warn!(resource_type = %resource_type, "Search result outside the SoftLayer namespace");
            metrics::inc_rejected_envelopes();
            return Err(SearchDecodeError::Namespace(resource_type));
        }

        let resource = match ResourceKind::from_discriminator(&resource_type) {
            Some(kind) => {
                // An absent resource still materializes as an empty instance.
                let payload = detector
                    .resource
                    .unwrap_or_else(|| Value::Object(Map::new()));
                let resource = kind.decode(payload).map_err(|source| {
                    metrics::inc_rejected_envelopes();
                    SearchDecodeError::Resource {
                        resource_type: kind.discriminator(),
                        source,
                    }
                })?;
                debug!(resource_type = %resource_type, "Search result resolved");
                metrics::inc_search_results_decoded(kind.discriminator());
                Some(resource)
            }
            None => match self.policy {
                UnknownResourcePolicy::Strict => {
                    metrics::inc_rejected_envelopes();
                    return Err(SearchDecodeError::UnknownResourceType(resource_type));
                }
                UnknownResourcePolicy::Tolerant => {
                    warn!(resource_type = %resource_type, "No registered datatype, leaving resource empty");
                    metrics::inc_unresolved_resource_types();
                    None
                }
            },
        };

        Ok(ContainerSearchResult {
            matched_terms: detector.matched_terms,
            relevance_score: detector.relevance_score,
            resource,
            resource_type,
        })
    }
}

/// Decodes with the tolerant policy. Use [`SearchResultDecoder`] to choose.
impl<'de> Deserialize<'de> for ContainerSearchResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        SearchResultDecoder::default()
            .decode_value(raw)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_covers_every_kind() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_discriminator(kind.discriminator()), Some(kind));
            assert!(kind.discriminator().starts_with(NAMESPACE));
        }
        assert_eq!(REGISTRY.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_bare_type_name_is_not_registered() {
        assert_eq!(ResourceKind::from_discriminator("Virtual_Guest"), None);
    }

    #[test]
    fn test_known_type_decodes_into_concrete_struct() {
        let raw = json!({
            "matchedTerms": ["web01"],
            "relevanceScore": "2.75",
            "resourceType": "SoftLayer_Virtual_Guest",
            "resource": {
                "id": 1001,
                "hostname": "web01",
                "createDate": "2021-06-01T12:00:00-05:00"
            }
        });

        let result = SearchResultDecoder::default().decode_value(raw).unwrap();
        assert_eq!(result.matched_terms, Some(vec!["web01".to_string()]));
        assert_eq!(result.relevance_score, Some(Float64(2.75)));
        match result.resource {
            Some(SearchResource::VirtualGuest(guest)) => {
                assert_eq!(guest.id, Some(1001));
                assert_eq!(guest.hostname.as_deref(), Some("web01"));
                assert!(guest.create_date.is_some());
            }
            other => panic!("expected a virtual guest, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_resource_yields_empty_instance() {
        let raw = json!({"resourceType": "SoftLayer_Ticket"});
        let result = SearchResultDecoder::default().decode_value(raw).unwrap();
        assert_eq!(result.resource, Some(SearchResource::Ticket(Ticket::default())));
    }

    #[test]
    fn test_foreign_namespace_is_rejected() {
        let raw = json!({"resourceType": "Acme_Virtual_Guest", "resource": {}});
        let err = SearchResultDecoder::default().decode_value(raw).unwrap_err();
        assert!(matches!(err, SearchDecodeError::Namespace(ref t) if t == "Acme_Virtual_Guest"));
        assert!(err.to_string().contains("Acme_Virtual_Guest"));
    }

    #[test]
    fn test_missing_discriminator_is_rejected() {
        let raw = json!({"resource": {"id": 1}});
        let err = SearchResultDecoder::default().decode_value(raw).unwrap_err();
        assert!(matches!(err, SearchDecodeError::MissingResourceType));
    }

    #[test]
    fn test_unknown_type_tolerant_vs_strict() {
        let raw = json!({
            "resourceType": "SoftLayer_Brand_New_Thing",
            "resource": {"id": 5},
            "matchedTerms": ["thing"]
        });

        let tolerant = SearchResultDecoder::new(UnknownResourcePolicy::Tolerant)
            .decode_value(raw.clone())
            .unwrap();
        assert!(tolerant.resource.is_none());
        assert_eq!(tolerant.resource_type, "SoftLayer_Brand_New_Thing");
        assert_eq!(tolerant.matched_terms, Some(vec!["thing".to_string()]));

        let err = SearchResultDecoder::new(UnknownResourcePolicy::Strict)
            .decode_value(raw)
            .unwrap_err();
        assert!(matches!(err, SearchDecodeError::UnknownResourceType(ref t) if t == "SoftLayer_Brand_New_Thing"));
    }

    #[test]
    fn test_resource_payload_type_errors_are_reported() {
        let raw = json!({
            "resourceType": "SoftLayer_Network_Vlan",
            "resource": {"vlanNumber": "not a number"}
        });
        let err = SearchResultDecoder::default().decode_value(raw).unwrap_err();
        match err {
            SearchDecodeError::Resource { resource_type, .. } => {
                assert_eq!(resource_type, "SoftLayer_Network_Vlan")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_serialize_restores_wire_shape() {
        let raw = json!({
            "relevanceScore": 1.5,
            "resource": {"id": 3, "name": "example.com"},
            "resourceType": "SoftLayer_Dns_Domain"
        });
        let result: ContainerSearchResult = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), raw);
    }

    #[test]
    fn test_deserialize_impl_is_tolerant() {
        let rows: Vec<ContainerSearchResult> = serde_json::from_value(json!([
            {"resourceType": "SoftLayer_Hardware", "resource": {"id": 1}},
            {"resourceType": "SoftLayer_Unmapped", "resource": {"id": 2}}
        ]))
        .unwrap();

        assert_eq!(rows[0].resource_kind(), Some(ResourceKind::Hardware));
        assert_eq!(rows[1].resource_kind(), None);
    }
}
