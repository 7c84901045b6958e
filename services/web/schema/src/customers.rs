use sea_orm::entity::prelude::*;

/// Registered customer. `password` holds an argon2 PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub address: String,
    pub role: i16,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cart_items::Entity")]
    CartItems,
    #[sea_orm(has_many = "super::cafe_customers::Entity")]
    CafeCustomers,
}

impl Related<super::cart_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItems.def()
    }
}

impl Related<super::cafes::Entity> for Entity {
    fn to() -> RelationDef {
        super::cafe_customers::Relation::Cafe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cafe_customers::Relation::Customer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
