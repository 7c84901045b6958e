pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
