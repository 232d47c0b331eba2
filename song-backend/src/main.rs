use axum::serve::ListenerExt;
use song_api::constant;
use song_backend::{build, config, init_tracing, migration};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let config = config::Config::new()?;
    init_tracing(&config.log)?;
    tracing::info!(server_version =% constant::SERVER_VERSION);
    tracing::info!("{config:#?}");

    migration::run(&config.database.url).await?;

    let listener = tokio::net::TcpListener::bind(config.server.to_socket_addr()).await?;
    tracing::info!(address =% listener.local_addr()?, "listening");
    let listener = listener.tap_io(|tcp| {
        if let Err(error) = tcp.set_nodelay(true) {
            tracing::warn!(?error, "could not set TCP_NODELAY");
        }
    });
    axum::serve(listener, build(&config)?).await?;
    Ok(())
}
