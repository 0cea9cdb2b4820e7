//! HTTP client layer: `PaystackHttp` and the response envelope.

pub mod client;
pub mod envelope;

pub use client::PaystackHttp;
pub use envelope::{Acknowledgement, Envelope, Meta, Paginated};
