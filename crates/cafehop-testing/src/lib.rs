//! Test utilities for Cafehop services.
//!
//! Provides `MockSession` for minting authenticated requests.
//! Import in `#[cfg(test)]` blocks and integration tests only.

pub mod session;
