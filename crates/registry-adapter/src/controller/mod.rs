//! Inbound adapters - how requests reach the use case layer.

pub mod http;
