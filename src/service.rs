//! Request construction and response decoding for the services that depend
//! on the codec. Sending the request belongs to the caller's transport.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::complex_type::{stamp, ProductOrder, StampError, Stamped, UntypedOrder};
use crate::datatypes::{
    ContainerProductOrderReceipt, ContainerSearchResult, SearchDecodeError, SearchResultDecoder,
};

pub const PRODUCT_ORDER_SERVICE: &str = "SoftLayer_Product_Order";
pub const SEARCH_SERVICE: &str = "SoftLayer_Search";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Stamping error: {0}")]
    Stamp(#[from] StampError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Search decode error: {0}")]
    Search(#[from] SearchDecodeError),
}

/// A service call ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    #[serde(skip)]
    pub service: &'static str,
    #[serde(skip)]
    pub method: &'static str,
    pub parameters: Vec<Value>,
}

impl Request {
    fn new(service: &'static str, method: &'static str, parameters: Vec<Value>) -> Self {
        Self {
            service,
            method,
            parameters,
        }
    }

    /// REST path relative to the API endpoint, e.g. `SoftLayer_Search/search.json`.
    pub fn path(&self) -> String {
        format!("{}/{}.json", self.service, self.method)
    }

    pub fn body(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

pub struct ProductOrderService;

impl ProductOrderService {
    pub fn place_order<O: ProductOrder>(
        order: &Stamped<O>,
        save_as_quote: Option<bool>,
    ) -> Result<Request, ServiceError> {
        let order = serde_json::to_value(order)?;
        info!(complex_type = ?order.get("complexType"), "Building placeOrder request");
        Ok(Request::new(
            PRODUCT_ORDER_SERVICE,
            "placeOrder",
            vec![order, save_as_quote.map_or(Value::Null, Value::Bool)],
        ))
    }

    pub fn verify_order<O: ProductOrder>(order: &Stamped<O>) -> Result<Request, ServiceError> {
        let order = serde_json::to_value(order)?;
        Ok(Request::new(PRODUCT_ORDER_SERVICE, "verifyOrder", vec![order]))
    }

    /// Stamps a raw JSON order of the given type and builds its `placeOrder` request.
    pub fn place_untyped_order(
        type_name: &str,
        body: Value,
        save_as_quote: Option<bool>,
    ) -> Result<Request, ServiceError> {
        let order = stamp(UntypedOrder::new(type_name, body)?)?;
        Self::place_order(&order, save_as_quote)
    }

    pub fn decode_receipt(bytes: &[u8]) -> Result<ContainerProductOrderReceipt, ServiceError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

pub struct SearchService {
    decoder: SearchResultDecoder,
}

impl SearchService {
    pub fn new(decoder: SearchResultDecoder) -> Self {
        Self { decoder }
    }

    pub fn search(search_string: &str) -> Request {
        Request::new(
            SEARCH_SERVICE,
            "search",
            vec![Value::String(search_string.to_string())],
        )
    }

    pub fn advanced_search(search_string: &str) -> Request {
        Request::new(
            SEARCH_SERVICE,
            "advancedSearch",
            vec![Value::String(search_string.to_string())],
        )
    }

    /// Decodes the array returned by `search` and `advancedSearch`.
    pub fn decode_results(&self, bytes: &[u8]) -> Result<Vec<ContainerSearchResult>, ServiceError> {
        Ok(self.decoder.decode_list_slice(bytes)?)
    }
}
