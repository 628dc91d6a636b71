use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};

// --- Search Result Decoding ---

pub static SEARCH_RESULTS_DECODED: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "softlayer_codec_search_results_decoded_total",
        "Search results resolved to a registered datatype",
        &["resource_type"]
    )
    .expect("search_results_decoded counter")
});

pub static UNRESOLVED_RESOURCE_TYPES: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "softlayer_codec_unresolved_resource_types_total",
        "Search results kept without a resource because the type is unregistered"
    )
    .expect("unresolved_resource_types counter")
});

pub static REJECTED_ENVELOPES: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "softlayer_codec_rejected_envelopes_total",
        "Search results that failed to decode"
    )
    .expect("rejected_envelopes counter")
});

// --- Order Stamping ---

pub static ORDERS_STAMPED: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "softlayer_codec_orders_stamped_total",
        "Orders stamped with a complexType"
    )
    .expect("orders_stamped counter")
});

pub static STAMP_REJECTIONS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "softlayer_codec_stamp_rejections_total",
        "Values refused by the complexType stamper"
    )
    .expect("stamp_rejections counter")
});

// --- Scalars ---

pub static MALFORMED_SCALARS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "softlayer_codec_malformed_scalars_total",
        "Flexible numeric tokens that did not hold a number"
    )
    .expect("malformed_scalars counter")
});

pub fn inc_search_results_decoded(resource_type: &str) {
    SEARCH_RESULTS_DECODED
        .with_label_values(&[resource_type])
        .inc();
}

pub fn inc_unresolved_resource_types() {
    UNRESOLVED_RESOURCE_TYPES.inc();
}

pub fn inc_rejected_envelopes() {
    REJECTED_ENVELOPES.inc();
}

pub fn inc_orders_stamped() {
    ORDERS_STAMPED.inc();
}

pub fn inc_stamp_rejections() {
    STAMP_REJECTIONS.inc();
}

pub fn inc_malformed_scalars() {
    MALFORMED_SCALARS.inc();
}

/// Renders the default registry in the Prometheus text format.
pub fn render() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    if encoder.encode(&prometheus::gather(), &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
