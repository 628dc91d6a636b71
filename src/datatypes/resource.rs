use serde::{Deserialize, Serialize};

use super::datatype;
use super::float::Float64;
use super::time::Time;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_date: Option<Time>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Memory in MB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cpus: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkVlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSubnetIpAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_broadcast: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_gateway: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reserved: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Address score, which the search backend sends quoted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_edit_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDomain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_date: Option<Time>,
}

datatype!(Hardware, "Hardware");
datatype!(VirtualGuest, "Virtual_Guest");
datatype!(NetworkVlan, "Network_Vlan");
datatype!(NetworkSubnetIpAddress, "Network_Subnet_IpAddress");
datatype!(Ticket, "Ticket");
datatype!(DnsDomain, "Dns_Domain");
