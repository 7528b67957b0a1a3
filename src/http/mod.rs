//! HTTP layer
//!
//! A thin wrapper over `reqwest` that joins paths onto the configured base
//! URL, classifies failures into the crate error taxonomy, and optionally
//! throttles outgoing requests. There is deliberately no retry logic here;
//! callers decide whether and how to retry.

mod client;
mod rate_limit;

pub use client::HttpClient;
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
