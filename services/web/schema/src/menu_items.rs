use sea_orm::entity::prelude::*;

/// A priced catalog item. Names are stored title-cased.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub img_url: String,
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cafe_menu_items::Entity")]
    CafeMenuItems,
    #[sea_orm(has_many = "super::cart_items::Entity")]
    CartItems,
}

impl Related<super::cafe_menu_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CafeMenuItems.def()
    }
}

impl Related<super::cart_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItems.def()
    }
}

impl Related<super::cafes::Entity> for Entity {
    fn to() -> RelationDef {
        super::cafe_menu_items::Relation::Cafe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cafe_menu_items::Relation::MenuItem.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
