use anyhow::anyhow;
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::domain::repository::CustomerRepository;
use crate::domain::types::{Customer, NewCustomer};
use crate::error::WebServiceError;

/// Hash a password into an argon2 PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, WebServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC string. Unparseable hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
}

pub struct RegisterUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: RegisterInput) -> Result<Customer, WebServiceError> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(WebServiceError::EmailAlreadyRegistered);
        }
        let customer = self
            .repo
            .create(&NewCustomer {
                name: input.name,
                email: input.email,
                password_hash: hash_password(&input.password)?,
                address: input.address,
            })
            .await?;
        tracing::info!(customer_id = customer.id, role = ?customer.role, "customer registered");
        Ok(customer)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> LoginUseCase<R> {
    /// Unknown email and wrong password both fail with `InvalidCredentials`.
    pub async fn execute(&self, input: LoginInput) -> Result<Customer, WebServiceError> {
        let customer = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(WebServiceError::InvalidCredentials)?;
        if !verify_password(&input.password, &customer.password_hash) {
            return Err(WebServiceError::InvalidCredentials);
        }
        Ok(customer)
    }
}
