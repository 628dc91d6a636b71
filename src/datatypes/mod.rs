//! Hand-written support layer for the generated SoftLayer datatypes.
//!
//! `time` and `float` hold the scalar codecs used by every generated struct,
//! `order` and `resource` carry the catalog types the codec operates on, and
//! `search` resolves polymorphic search results into those types.

pub mod float;
pub mod order;
pub mod resource;
pub mod search;
pub mod time;

pub use float::{Float64, ScalarError};
pub use order::{
    ContainerProductOrder, ContainerProductOrderHardwareServer, ContainerProductOrderNetworkVlan,
    ContainerProductOrderProperty, ContainerProductOrderReceipt, ContainerProductOrderVirtualGuest,
    ProductItemPrice,
};
pub use resource::{DnsDomain, Hardware, NetworkSubnetIpAddress, NetworkVlan, Ticket, VirtualGuest};
pub use search::{
    ContainerSearchResult, ResourceKind, SearchDecodeError, SearchResource, SearchResultDecoder,
    UnknownResourcePolicy,
};
pub use time::Time;

/// Prefix shared by every type name the remote API knows about.
pub const NAMESPACE: &str = "SoftLayer_";

/// A generated struct that maps onto a named SoftLayer type.
pub trait Datatype {
    /// Type name without the namespace, e.g. `Virtual_Guest`.
    const TYPE_NAME: &'static str;
    /// Namespace-qualified name, e.g. `SoftLayer_Virtual_Guest`.
    const QUALIFIED_NAME: &'static str;
}

/// Implements [`Datatype`] for a catalog struct from its bare SoftLayer name.
macro_rules! datatype {
    ($ty:ty, $name:literal) => {
        impl $crate::datatypes::Datatype for $ty {
            const TYPE_NAME: &'static str = $name;
            const QUALIFIED_NAME: &'static str = concat!("SoftLayer_", $name);
        }
    };
}

pub(crate) use datatype;
