//! # Integration Tests
//!
//! Flows that cross `ban-blocks` and `ban-crypto` with real keys.

pub mod flows;
