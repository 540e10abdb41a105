use sqlx_postgres::migrations::MigrationManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let manager = MigrationManager::new().await?;
    manager.migrate().await
}
