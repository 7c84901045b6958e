use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CafeCustomers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CafeCustomers::CafeId).integer().not_null())
                    .col(
                        ColumnDef::new(CafeCustomers::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CafeCustomers::CafeId)
                            .col(CafeCustomers::CustomerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CafeCustomers::Table, CafeCustomers::CafeId)
                            .to(Cafes::Table, Cafes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CafeCustomers::Table, CafeCustomers::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CafeCustomers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CafeCustomers {
    Table,
    CafeId,
    CustomerId,
}

#[derive(Iden)]
enum Cafes {
    Table,
    Id,
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
}
