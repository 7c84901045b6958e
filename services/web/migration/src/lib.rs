use sea_orm_migration::prelude::*;

mod m20250601_000001_create_cafes;
mod m20250601_000002_create_menu_items;
mod m20250601_000003_create_customers;
mod m20250601_000004_create_cafe_menu_items;
mod m20250601_000005_create_cafe_customers;
mod m20250601_000006_create_cart_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_cafes::Migration),
            Box::new(m20250601_000002_create_menu_items::Migration),
            Box::new(m20250601_000003_create_customers::Migration),
            Box::new(m20250601_000004_create_cafe_menu_items::Migration),
            Box::new(m20250601_000005_create_cafe_customers::Migration),
            Box::new(m20250601_000006_create_cart_items::Migration),
        ]
    }
}
