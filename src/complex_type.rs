//! Complex type stamping for polymorphic order submissions.
//!
//! `placeOrder` and `verifyOrder` accept any `Container_Product_Order*`
//! variant. The API tells them apart by the `complexType` field, which must
//! hold the namespace-qualified type name of the variant being sent.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::datatypes::{
    ContainerProductOrder, ContainerProductOrderHardwareServer, ContainerProductOrderNetworkVlan,
    ContainerProductOrderVirtualGuest, Datatype, NAMESPACE,
};
use crate::metrics;

/// Every order variant's type name starts with this.
pub const ORDER_FAMILY_PREFIX: &str = "Container_Product_Order";

pub const COMPLEX_TYPE_FIELD: &str = "complexType";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StampError {
    #[error("did not pass a pointer: got a JSON {0}")]
    NotAnObject(&'static str),
    #[error("did not pass a pointer to a product order: {0}")]
    NotAProductOrder(String),
}

/// An order envelope that can carry a `complexType` discriminator.
pub trait ProductOrder: Serialize {
    /// Declared type name without the namespace.
    fn type_name(&self) -> &str;

    fn complex_type(&self) -> Option<&str>;

    fn set_complex_type(&mut self, complex_type: String);
}

/// An order whose `complexType` agrees with its type. Only [`stamp`] builds one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stamped<O>(O);

impl<O: ProductOrder> Stamped<O> {
    pub fn get(&self) -> &O {
        &self.0
    }

    pub fn into_inner(self) -> O {
        self.0
    }

    pub fn complex_type(&self) -> &str {
        self.0.complex_type().unwrap_or_default()
    }
}

/// Computes the discriminator for an order type name.
pub fn complex_type_for(type_name: &str) -> Result<String, StampError> {
    if !type_name.starts_with(ORDER_FAMILY_PREFIX) {
        return Err(StampError::NotAProductOrder(type_name.to_string()));
    }
    Ok(format!("{}{}", NAMESPACE, type_name))
}

/// Writes the discriminator into `order`. Leaves it untouched on error.
pub fn stamp_in_place<O: ProductOrder>(order: &mut O) -> Result<(), StampError> {
    let complex_type = complex_type_for(order.type_name()).inspect_err(|e| {
        warn!(error = %e, "Refusing to stamp order");
        metrics::inc_stamp_rejections();
    })?;
    debug!(complex_type = %complex_type, "Stamping order");
    order.set_complex_type(complex_type);
    metrics::inc_orders_stamped();
    Ok(())
}

pub fn stamp<O: ProductOrder>(mut order: O) -> Result<Stamped<O>, StampError> {
    stamp_in_place(&mut order)?;
    Ok(Stamped(order))
}

macro_rules! product_order {
    ($ty:ty, $($field:ident).+) => {
        impl ProductOrder for $ty {
            fn type_name(&self) -> &str {
                <$ty as Datatype>::TYPE_NAME
            }

            fn complex_type(&self) -> Option<&str> {
                self.$($field).+.as_deref()
            }

            fn set_complex_type(&mut self, complex_type: String) {
                self.$($field).+ = Some(complex_type);
            }
        }
    };
}

product_order!(ContainerProductOrder, complex_type);
product_order!(ContainerProductOrderHardwareServer, base.complex_type);
product_order!(ContainerProductOrderVirtualGuest, server.base.complex_type);
product_order!(ContainerProductOrderNetworkVlan, base.complex_type);

/// Closed set of order variants carried by this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrderData {
    Order(ContainerProductOrder),
    HardwareServer(ContainerProductOrderHardwareServer),
    VirtualGuest(ContainerProductOrderVirtualGuest),
    NetworkVlan(ContainerProductOrderNetworkVlan),
}

impl OrderData {
    /// Decodes `body` as the variant named by `type_name`, if it is one of ours.
    pub fn decode(type_name: &str, body: Value) -> Result<Option<Self>, serde_json::Error> {
        let order = match type_name {
            ContainerProductOrder::TYPE_NAME => OrderData::Order(serde_json::from_value(body)?),
            ContainerProductOrderHardwareServer::TYPE_NAME => {
                OrderData::HardwareServer(serde_json::from_value(body)?)
            }
            ContainerProductOrderVirtualGuest::TYPE_NAME => {
                OrderData::VirtualGuest(serde_json::from_value(body)?)
            }
            ContainerProductOrderNetworkVlan::TYPE_NAME => {
                OrderData::NetworkVlan(serde_json::from_value(body)?)
            }
            _ => return Ok(None),
        };
        Ok(Some(order))
    }
}

macro_rules! each_variant {
    ($value:expr, $order:ident => $body:expr) => {
        match $value {
            OrderData::Order($order) => $body,
            OrderData::HardwareServer($order) => $body,
            OrderData::VirtualGuest($order) => $body,
            OrderData::NetworkVlan($order) => $body,
        }
    };
}

impl ProductOrder for OrderData {
    fn type_name(&self) -> &str {
        each_variant!(self, o => o.type_name())
    }

    fn complex_type(&self) -> Option<&str> {
        each_variant!(self, o => o.complex_type())
    }

    fn set_complex_type(&mut self, complex_type: String) {
        each_variant!(self, o => o.set_complex_type(complex_type))
    }
}

macro_rules! order_data_from {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for OrderData {
                fn from(order: $ty) -> Self {
                    OrderData::$variant(order)
                }
            }
        )+
    };
}

order_data_from!(
    Order => ContainerProductOrder,
    HardwareServer => ContainerProductOrderHardwareServer,
    VirtualGuest => ContainerProductOrderVirtualGuest,
    NetworkVlan => ContainerProductOrderNetworkVlan,
);

/// An order body held as raw JSON, for variants outside the typed catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct UntypedOrder {
    type_name: String,
    body: Map<String, Value>,
}

impl UntypedOrder {
    pub fn new(type_name: impl Into<String>, body: Value) -> Result<Self, StampError> {
        match body {
            Value::Object(body) => Ok(Self {
                type_name: type_name.into(),
                body,
            }),
            other => {
                metrics::inc_stamp_rejections();
                Err(StampError::NotAnObject(json_kind(&other)))
            }
        }
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.body)
    }
}

impl ProductOrder for UntypedOrder {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn complex_type(&self) -> Option<&str> {
        self.body.get(COMPLEX_TYPE_FIELD).and_then(Value::as_str)
    }

    fn set_complex_type(&mut self, complex_type: String) {
        self.body
            .insert(COMPLEX_TYPE_FIELD.to_string(), Value::String(complex_type));
    }
}

impl Serialize for UntypedOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

/// Stamps a raw JSON order body in place.
pub fn stamp_value(type_name: &str, order: &mut Value) -> Result<(), StampError> {
    let obj = match order {
        Value::Object(obj) => obj,
        other => {
            metrics::inc_stamp_rejections();
            return Err(StampError::NotAnObject(json_kind(other)));
        }
    };
    let complex_type = complex_type_for(type_name).inspect_err(|e| {
        warn!(error = %e, "Refusing to stamp order");
        metrics::inc_stamp_rejections();
    })?;
    obj.insert(COMPLEX_TYPE_FIELD.to_string(), Value::String(complex_type));
    metrics::inc_orders_stamped();
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
