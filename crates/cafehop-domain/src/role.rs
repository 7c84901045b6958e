//! Customer role types.

use serde::{Deserialize, Serialize};

/// Customer permission level.
///
/// Wire format: `u8` (0 = Customer, 1 = Admin). Stored as `SMALLINT` and carried
/// in the session token `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerRole {
    Customer = 0,
    Admin = 1,
}

impl CustomerRole {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Customer),
            1 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }

    /// Role granted to a newly registered account.
    ///
    /// The first account on an empty customer table becomes the admin.
    pub fn for_new_account(existing_customers: u64) -> Self {
        if existing_customers == 0 {
            Self::Admin
        } else {
            Self::Customer
        }
    }
}
