#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Cafe, CartLine, Customer, MenuItem, NewCafe, NewCustomer, NewMenuItem, OrderEmail,
};
use crate::error::WebServiceError;

/// Repository for cafes.
pub trait CafeRepository: Send + Sync {
    /// All cafes, ordered by id.
    async fn list(&self) -> Result<Vec<Cafe>, WebServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Cafe>, WebServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Cafe>, WebServiceError>;
    /// Cafes whose location equals `location` exactly.
    async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>, WebServiceError>;
    /// One cafe picked uniformly at random, `None` when there are none.
    async fn random(&self) -> Result<Option<Cafe>, WebServiceError>;
    async fn create(&self, cafe: &NewCafe) -> Result<Cafe, WebServiceError>;
    /// Overwrite the coffee price. Returns `false` if no cafe has `id`.
    async fn update_coffee_price(&self, id: i32, price: &str) -> Result<bool, WebServiceError>;
}

/// Repository for the menu item catalog and cafe menus.
pub trait MenuRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, WebServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, WebServiceError>;
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, WebServiceError>;
    /// Items linked to a cafe, one entry per link row.
    async fn list_for_cafe(&self, cafe_id: i32) -> Result<Vec<MenuItem>, WebServiceError>;
    async fn is_linked(&self, cafe_id: i32, item_id: i32) -> Result<bool, WebServiceError>;
    /// Insert a new link row, even when the pair is already linked.
    async fn link(&self, cafe_id: i32, item_id: i32) -> Result<(), WebServiceError>;
    /// Delete one link row for the pair. Returns `true` if a row was deleted.
    async fn unlink(&self, cafe_id: i32, item_id: i32) -> Result<bool, WebServiceError>;
}

/// Repository for customer accounts.
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, WebServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, WebServiceError>;
    /// Insert an account. Deciding the role and inserting the row happen
    /// atomically, so only the first account on an empty table is `Admin`.
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, WebServiceError>;
}

/// Repository for cart rows.
pub trait CartRepository: Send + Sync {
    async fn add(&self, customer_id: i32, menu_item_id: i32) -> Result<(), WebServiceError>;
    /// Cart lines in insertion order.
    async fn list(&self, customer_id: i32) -> Result<Vec<CartLine>, WebServiceError>;
    /// Delete every cart row of the customer. Returns the number of rows deleted.
    async fn clear(&self, customer_id: i32) -> Result<u64, WebServiceError>;
}

/// Port for the outbound mail transport.
pub trait OrderMailer: Send + Sync {
    async fn send(&self, email: &OrderEmail) -> Result<(), WebServiceError>;
}
