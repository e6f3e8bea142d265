//! # Banano Blocks Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (codec, signing)
//! └── src/integration/  # Cross-crate flows with the real signer
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ban-tests
//!
//! # Benchmarks
//! cargo bench -p ban-tests
//! ```

pub mod integration;
