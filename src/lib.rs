pub mod complex_type;
pub mod config;
pub mod datatypes;
pub mod metrics;
pub mod service;
