use chrono::{DateTime, Utc};

use cafehop_domain::role::CustomerRole;

/// A cafe listed on the website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cafe {
    pub id: i32,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

/// Fields of a cafe about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

/// A priced catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub img_url: String,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub img_url: String,
    pub price: i32,
}

/// A registered customer. `password_hash` is an argon2 PHC string.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub role: CustomerRole,
    pub created_at: DateTime<Utc>,
}

/// Account to insert. The role is assigned by the repository at insert time.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
}

/// One cart row joined with the menu item it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: i32,
    pub menu_item: MenuItem,
}

/// A customer's cart with its total price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: i64,
}

impl CartSummary {
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let total = lines.iter().map(|l| i64::from(l.menu_item.price)).sum();
        Self { lines, total }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Order confirmation email ready for the mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}
