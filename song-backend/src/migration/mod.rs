use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub async fn run(database_url: &str) -> Result<(), Error> {
    let database_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || -> Result<(), Error> {
        let mut async_wrapper =
            AsyncConnectionWrapper::<AsyncPgConnection>::establish(&database_url)
                .map_err(color_eyre::Report::from)?;

        for migration in
            async_wrapper.pending_migrations(MIGRATIONS).map_err(color_eyre::Report::msg)?
        {
            tracing::info!(pending_migration =% migration.name());
            async_wrapper.run_migration(&migration).map_err(color_eyre::Report::msg)?;
        }
        tracing::info!("migration done");
        Ok(())
    })
    .await
    .map_err(color_eyre::Report::from)?
}
