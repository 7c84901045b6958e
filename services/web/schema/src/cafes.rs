use sea_orm::entity::prelude::*;

/// A cafe listed on the website.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cafes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cafe_menu_items::Entity")]
    CafeMenuItems,
    #[sea_orm(has_many = "super::cafe_customers::Entity")]
    CafeCustomers,
}

impl Related<super::cafe_menu_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CafeMenuItems.def()
    }
}

impl Related<super::menu_items::Entity> for Entity {
    fn to() -> RelationDef {
        super::cafe_menu_items::Relation::MenuItem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cafe_menu_items::Relation::Cafe.def().rev())
    }
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        super::cafe_customers::Relation::Customer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cafe_customers::Relation::Cafe.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
