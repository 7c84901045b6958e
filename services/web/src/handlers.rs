pub mod account;
pub mod cafe;
pub mod cart;
pub mod menu;
