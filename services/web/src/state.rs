use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::guard::SessionKeys;
use crate::infra::db::{
    DbCafeRepository, DbCartRepository, DbCustomerRepository, DbMenuRepository,
};
use crate::infra::mail::SesMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub session: SessionKeys,
    pub mailer: SesMailer,
}

impl AppState {
    pub fn cafe_repo(&self) -> DbCafeRepository {
        DbCafeRepository {
            db: self.db.clone(),
        }
    }

    pub fn menu_repo(&self) -> DbMenuRepository {
        DbMenuRepository {
            db: self.db.clone(),
        }
    }

    pub fn customer_repo(&self) -> DbCustomerRepository {
        DbCustomerRepository {
            db: self.db.clone(),
        }
    }

    pub fn cart_repo(&self) -> DbCartRepository {
        DbCartRepository {
            db: self.db.clone(),
        }
    }

    pub fn mailer(&self) -> SesMailer {
        self.mailer.clone()
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}
