use sea_orm_migration::prelude::*;

use cafehop_web_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
