use serde::{Deserialize, Serialize};

use super::datatype;
use super::float::Float64;
use super::resource::Hardware;
use super::time::Time;

/// Everything required to place an order through `SoftLayer_Product_Order::placeOrder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_order_item_id: Option<i64>,

    /// Hints to the API what kind of product order this is. Set by stamping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_short_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<Vec<Hardware>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_template_global_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_template_id: Option<i64>,

    /// Region keyname or datacenter id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Additional configurations placed in the same order. These are not stamped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_containers: Option<Vec<ContainerProductOrder>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_tax_recurring: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<ProductItemPrice>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_hourly_pricing: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_recurring_fee: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_fee: Option<Float64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderHardwareServer {
    #[serde(flatten)]
    pub base: ContainerProductOrder,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_category_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_destruction_disks: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_cloud_server_role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ContainerProductOrderProperty>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderVirtualGuest {
    #[serde(flatten)]
    pub server: ContainerProductOrderHardwareServer,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootable_disk_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_capacity_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderNetworkVlan {
    #[serde(flatten)]
    pub base: ContainerProductOrder,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname_datacenter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname_router: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_number: Option<i64>,
}

/// Response of `placeOrder`. Not an order itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_payment_checkout_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_payment_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_details: Option<ContainerProductOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_checkout_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_token: Option<String>,
}

datatype!(ContainerProductOrder, "Container_Product_Order");
datatype!(ContainerProductOrderHardwareServer, "Container_Product_Order_Hardware_Server");
datatype!(ContainerProductOrderVirtualGuest, "Container_Product_Order_Virtual_Guest");
datatype!(ContainerProductOrderNetworkVlan, "Container_Product_Order_Network_Vlan");
datatype!(ContainerProductOrderReceipt, "Container_Product_Order_Receipt");
datatype!(ProductItemPrice, "Product_Item_Price");
datatype!(ContainerProductOrderProperty, "Container_Product_Order_Property");
