use cafehop_domain::location::title_case;

use crate::domain::repository::{CafeRepository, MenuRepository};
use crate::domain::types::{Cafe, MenuItem, NewMenuItem};
use crate::error::WebServiceError;

// ── AddMenuItem ──────────────────────────────────────────────────────────────

pub struct AddMenuItemInput {
    pub name: String,
    pub img_url: String,
    pub price: i32,
}

#[derive(Debug)]
pub struct AddMenuItemOutput {
    pub item: MenuItem,
    /// An item with the same name existed before the insert.
    pub duplicate: bool,
}

pub struct AddMenuItemUseCase<M: MenuRepository> {
    pub menu: M,
}

impl<M: MenuRepository> AddMenuItemUseCase<M> {
    /// Inserts the item even when the name is taken; the duplicate is only
    /// reported. The catalog's unique name constraint then decides the outcome.
    pub async fn execute(
        &self,
        input: AddMenuItemInput,
    ) -> Result<AddMenuItemOutput, WebServiceError> {
        let name = title_case(&input.name);
        let duplicate = self.menu.find_by_name(&name).await?.is_some();
        if duplicate {
            tracing::warn!(name = %name, "menu item already in catalog, inserting anyway");
        }
        let item = self
            .menu
            .create(&NewMenuItem {
                name,
                img_url: input.img_url,
                price: input.price,
            })
            .await?;
        Ok(AddMenuItemOutput { item, duplicate })
    }
}

// ── CafeMenu ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CafeMenu {
    pub cafe: Cafe,
    pub items: Vec<MenuItem>,
}

pub struct GetCafeMenuUseCase<C: CafeRepository, M: MenuRepository> {
    pub cafes: C,
    pub menu: M,
}

impl<C: CafeRepository, M: MenuRepository> GetCafeMenuUseCase<C, M> {
    pub async fn execute(&self, cafe_id: i32) -> Result<CafeMenu, WebServiceError> {
        let cafe = self
            .cafes
            .find_by_id(cafe_id)
            .await?
            .ok_or(WebServiceError::CafeNotFound)?;
        let items = self.menu.list_for_cafe(cafe_id).await?;
        Ok(CafeMenu { cafe, items })
    }
}

// ── LinkMenuItem ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct LinkMenuItemOutput {
    pub item: MenuItem,
    /// The pair was linked before this call.
    pub already_linked: bool,
}

pub struct LinkMenuItemUseCase<C: CafeRepository, M: MenuRepository> {
    pub cafes: C,
    pub menu: M,
}

impl<C: CafeRepository, M: MenuRepository> LinkMenuItemUseCase<C, M> {
    /// Looks the item up by title-cased name and adds a link row. An existing
    /// link is reported but a new row is still inserted.
    pub async fn execute(
        &self,
        cafe_id: i32,
        item_name: &str,
    ) -> Result<LinkMenuItemOutput, WebServiceError> {
        if self.cafes.find_by_id(cafe_id).await?.is_none() {
            return Err(WebServiceError::CafeNotFound);
        }
        let item = self
            .menu
            .find_by_name(&title_case(item_name))
            .await?
            .ok_or(WebServiceError::MenuItemNotFound)?;
        let already_linked = self.menu.is_linked(cafe_id, item.id).await?;
        if already_linked {
            tracing::warn!(cafe_id, item_id = item.id, "menu item already at cafe, linking anyway");
        }
        self.menu.link(cafe_id, item.id).await?;
        Ok(LinkMenuItemOutput {
            item,
            already_linked,
        })
    }
}

// ── UnlinkMenuItem ───────────────────────────────────────────────────────────

pub struct UnlinkMenuItemUseCase<M: MenuRepository> {
    pub menu: M,
}

impl<M: MenuRepository> UnlinkMenuItemUseCase<M> {
    /// Returns `true` if a link row was removed; a missing link is a no-op.
    pub async fn execute(&self, cafe_id: i32, item_id: i32) -> Result<bool, WebServiceError> {
        let removed = self.menu.unlink(cafe_id, item_id).await?;
        if removed {
            tracing::info!(cafe_id, item_id, "menu item removed from cafe");
        }
        Ok(removed)
    }
}
