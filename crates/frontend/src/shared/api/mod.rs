//! REST plumbing shared by every resource
//!
//! - `transport`: the `HttpTransport` seam and its gloo-net implementation
//! - `client`: generic `{base}/{resource}` client with mock fallback

pub mod client;
pub mod transport;

pub use client::{DataSource, FallbackProvider, Fetched, ResourceClient};
pub use transport::{ApiError, ApiRequest, GlooTransport, HttpTransport, Method};
