use cafehop_domain::location::title_case;

use crate::domain::repository::CafeRepository;
use crate::domain::types::{Cafe, NewCafe};
use crate::error::WebServiceError;

// ── ListCafes ────────────────────────────────────────────────────────────────

pub struct ListCafesUseCase<R: CafeRepository> {
    pub repo: R,
}

impl<R: CafeRepository> ListCafesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Cafe>, WebServiceError> {
        self.repo.list().await
    }
}

// ── GetCafe ──────────────────────────────────────────────────────────────────

pub struct GetCafeUseCase<R: CafeRepository> {
    pub repo: R,
}

impl<R: CafeRepository> GetCafeUseCase<R> {
    pub async fn execute(&self, cafe_id: i32) -> Result<Cafe, WebServiceError> {
        self.repo
            .find_by_id(cafe_id)
            .await?
            .ok_or(WebServiceError::CafeNotFound)
    }
}

// ── SearchCafes ──────────────────────────────────────────────────────────────

pub struct SearchCafesUseCase<R: CafeRepository> {
    pub repo: R,
}

impl<R: CafeRepository> SearchCafesUseCase<R> {
    /// Cafes at `location`, matched after title-casing the query.
    pub async fn execute(&self, location: &str) -> Result<Vec<Cafe>, WebServiceError> {
        let normalized = title_case(location.trim());
        self.repo.find_by_location(&normalized).await
    }
}

// ── RandomCafe ───────────────────────────────────────────────────────────────

pub struct RandomCafeUseCase<R: CafeRepository> {
    pub repo: R,
}

impl<R: CafeRepository> RandomCafeUseCase<R> {
    pub async fn execute(&self) -> Result<Cafe, WebServiceError> {
        self.repo
            .random()
            .await?
            .ok_or(WebServiceError::CafeNotFound)
    }
}

// ── AddCafe ──────────────────────────────────────────────────────────────────

pub struct AddCafeUseCase<R: CafeRepository> {
    pub repo: R,
}

impl<R: CafeRepository> AddCafeUseCase<R> {
    pub async fn execute(&self, input: NewCafe) -> Result<Cafe, WebServiceError> {
        if self.repo.find_by_name(&input.name).await?.is_some() {
            return Err(WebServiceError::CafeAlreadyExists);
        }
        let cafe = self.repo.create(&input).await?;
        tracing::info!(cafe_id = cafe.id, name = %cafe.name, "cafe added");
        Ok(cafe)
    }
}

// ── UpdateCoffeePrice ────────────────────────────────────────────────────────

pub struct UpdateCoffeePriceUseCase<R: CafeRepository> {
    pub repo: R,
}

impl<R: CafeRepository> UpdateCoffeePriceUseCase<R> {
    pub async fn execute(&self, cafe_id: i32, price: &str) -> Result<(), WebServiceError> {
        if !self.repo.update_coffee_price(cafe_id, price).await? {
            return Err(WebServiceError::CafeNotFound);
        }
        Ok(())
    }
}
