use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CafeMenuItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CafeMenuItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CafeMenuItems::CafeId).integer().not_null())
                    .col(
                        ColumnDef::new(CafeMenuItems::MenuItemId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CafeMenuItems::Table, CafeMenuItems::CafeId)
                            .to(Cafes::Table, Cafes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CafeMenuItems::Table, CafeMenuItems::MenuItemId)
                            .to(MenuItems::Table, MenuItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(CafeMenuItems::Table)
                    .col(CafeMenuItems::CafeId)
                    .col(CafeMenuItems::MenuItemId)
                    .name("idx_cafe_menu_items_cafe_id_menu_item_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CafeMenuItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CafeMenuItems {
    Table,
    Id,
    CafeId,
    MenuItemId,
}

#[derive(Iden)]
enum Cafes {
    Table,
    Id,
}

#[derive(Iden)]
enum MenuItems {
    Table,
    Id,
}
