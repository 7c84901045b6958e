//! Domain types shared across Cafehop crates.
//!
//! Pure types with no framework dependencies: customer roles and location
//! normalisation.

pub mod location;
pub mod role;
