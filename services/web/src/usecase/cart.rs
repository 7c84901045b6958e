use std::fmt::Write as _;

use crate::domain::repository::{CartRepository, CustomerRepository, MenuRepository, OrderMailer};
use crate::domain::types::{CartSummary, Customer, OrderEmail};
use crate::error::WebServiceError;

pub const ORDER_EMAIL_SUBJECT: &str = "Your Cafehop order confirmation";

/// Plain-text order confirmation: one line per cart row, then the total and
/// the delivery address.
pub fn compose_order_email(customer: &Customer, summary: &CartSummary) -> OrderEmail {
    let mut body = format!("Hi {},\n\nThank you for your order!\n\n", customer.name);
    for line in &summary.lines {
        let _ = writeln!(body, "- {}: ${}", line.menu_item.name, line.menu_item.price);
    }
    let _ = write!(
        body,
        "\nTotal: ${}\nDelivering to: {}\n",
        summary.total, customer.address
    );
    OrderEmail {
        to: customer.email.clone(),
        subject: ORDER_EMAIL_SUBJECT.to_owned(),
        body,
    }
}

// ── AddToCart ────────────────────────────────────────────────────────────────

pub struct AddToCartUseCase<M: MenuRepository, K: CartRepository> {
    pub menu: M,
    pub cart: K,
}

impl<M: MenuRepository, K: CartRepository> AddToCartUseCase<M, K> {
    /// Every call adds a row; there is no quantity or duplicate check.
    pub async fn execute(&self, customer_id: i32, item_id: i32) -> Result<(), WebServiceError> {
        if self.menu.find_by_id(item_id).await?.is_none() {
            return Err(WebServiceError::MenuItemNotFound);
        }
        self.cart.add(customer_id, item_id).await
    }
}

// ── Checkout ─────────────────────────────────────────────────────────────────

pub struct CheckoutUseCase<K: CartRepository> {
    pub cart: K,
}

impl<K: CartRepository> CheckoutUseCase<K> {
    pub async fn execute(&self, customer_id: i32) -> Result<CartSummary, WebServiceError> {
        let lines = self.cart.list(customer_id).await?;
        Ok(CartSummary::from_lines(lines))
    }
}

// ── ConfirmOrder ─────────────────────────────────────────────────────────────

pub struct ConfirmOrderUseCase<U, K, S>
where
    U: CustomerRepository,
    K: CartRepository,
    S: OrderMailer,
{
    pub customers: U,
    pub cart: K,
    pub mailer: S,
}

impl<U, K, S> ConfirmOrderUseCase<U, K, S>
where
    U: CustomerRepository,
    K: CartRepository,
    S: OrderMailer,
{
    /// Mail the order, then empty the cart. The two steps are not atomic: a
    /// mail failure keeps the cart, a clear failure after a sent mail is
    /// reported as an error.
    pub async fn execute(&self, customer_id: i32) -> Result<CartSummary, WebServiceError> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or(WebServiceError::CustomerNotFound)?;

        let summary = CartSummary::from_lines(self.cart.list(customer_id).await?);
        let email = compose_order_email(&customer, &summary);
        self.mailer.send(&email).await?;

        let cleared = self.cart.clear(customer_id).await?;
        tracing::info!(
            customer_id,
            lines = summary.lines.len(),
            total = summary.total,
            cleared,
            "order confirmed"
        );
        Ok(summary)
    }
}
