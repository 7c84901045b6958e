//! sea-orm entities for the website schema.

pub mod cafe_customers;
pub mod cafe_menu_items;
pub mod cafes;
pub mod cart_items;
pub mod customers;
pub mod menu_items;
