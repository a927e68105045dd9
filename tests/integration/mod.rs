//! Integration tests for the hardened-api service
//!
//! Every test builds the full router over a fresh seeded in-memory store.

pub mod health_test;
pub mod security_headers_test;
