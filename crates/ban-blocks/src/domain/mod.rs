//! # Domain Layer
//!
//! Pure encoding and arithmetic logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod address;
pub mod base32;
pub mod block;
pub mod checksum;
pub mod decimal;
pub mod entities;
pub mod errors;
pub mod units;
