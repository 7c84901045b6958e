//! HTML form payloads and their validation rules.
//!
//! Text fields are trimmed on the way in and a missing field reads as empty,
//! so `length(min = 1)` doubles as the "required" rule. Passwords are kept
//! byte for byte and checked with `not_blank` instead.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use cafehop_core::serde::{checkbox, non_blank, trimmed};

use crate::domain::types::NewCafe;
use crate::usecase::account::{LoginInput, RegisterInput};
use crate::usecase::menu::AddMenuItemInput;

const INVALID_PRICE: &str = "Price must be a whole number.";
const REQUIRED: &str = "This field is required.";

/// Field name to messages, rendered next to each input.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Run the derive rules and flatten the failures into [`FieldErrors`].
pub fn check<T: Validate>(form: &T) -> Result<(), FieldErrors> {
    form.validate().map_err(|e| field_errors(&e))
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Required-field rule for values that must not be trimmed.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED)));
    }
    Ok(())
}

// ── search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct SearchForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub location: String,
}

// ── add-cafe ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct AddCafeForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, message = "This field is required."),
        url(message = "Invalid URL.")
    )]
    pub map_url: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, message = "This field is required."),
        url(message = "Invalid URL.")
    )]
    pub img_url: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub location: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub has_sockets: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub has_toilet: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub has_wifi: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub can_take_calls: bool,
    #[serde(default, deserialize_with = "trimmed")]
    pub seats: String,
    #[serde(default, deserialize_with = "trimmed")]
    pub coffee_price: String,
}

impl AddCafeForm {
    pub fn into_new_cafe(self) -> NewCafe {
        NewCafe {
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.location,
            has_sockets: self.has_sockets,
            has_toilet: self.has_toilet,
            has_wifi: self.has_wifi,
            can_take_calls: self.can_take_calls,
            seats: non_blank(self.seats),
            coffee_price: non_blank(self.coffee_price),
        }
    }
}

// ── update-price ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePriceForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub updated_price: String,
}

// ── register / login ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub address: String,
}

impl From<RegisterForm> for RegisterInput {
    fn from(form: RegisterForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            password: form.password,
            address: form.address,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

impl From<LoginForm> for LoginInput {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
        }
    }
}

// ── add-menu-item ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct AddMenuItemForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, message = "This field is required."),
        url(message = "Invalid URL.")
    )]
    pub img_url: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub price: String,
}

impl AddMenuItemForm {
    /// Validate the form and coerce `price` to an integer.
    pub fn into_input(self) -> Result<AddMenuItemInput, FieldErrors> {
        let mut errors = check(&self).err().unwrap_or_default();
        let price = self.price.parse::<i32>().ok();
        if price.is_none() && !self.price.is_empty() {
            errors
                .entry("price".to_owned())
                .or_default()
                .push(INVALID_PRICE.to_owned());
        }
        match price {
            Some(price) if errors.is_empty() => Ok(AddMenuItemInput {
                name: self.name,
                img_url: self.img_url,
                price,
            }),
            _ => Err(errors),
        }
    }
}

// ── manage-menu ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct ManageMenuForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "This field is required."))]
    pub item_name: String,
}
