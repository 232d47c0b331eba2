pub mod config;
mod database;
mod error;
pub mod migration;
mod orm;
mod route;
mod schema;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use config::log::Format;
pub use error::Error;
use tower_http::trace::TraceLayer;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[cfg(test)]
mod test;

pub fn init_tracing(config: &config::Log) -> Result<(), Error> {
    color_eyre::install()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        const_format::concatcp!(env!("CARGO_CRATE_NAME"), "=info,tower_http=info").into()
    });
    let fmt = tracing_subscriber::fmt::layer();
    let fmt = match (config.format, config.time) {
        (Format::Plain, true) => fmt.boxed(),
        (Format::Plain, false) => fmt.without_time().boxed(),
        (Format::Json, true) => fmt.json().boxed(),
        (Format::Json, false) => fmt.json().without_time().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt)
        .with(filter)
        .with(tracing_error::ErrorLayer::default())
        .try_init()
        .map_err(color_eyre::Report::from)?;
    Ok(())
}

pub fn build(config: &config::Config) -> Result<Router, Error> {
    let database = database::Database::new(&config.database)?;
    Ok(Router::new()
        .merge(route::song::router())
        .with_state(database)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request", method = %request.method(), uri = %request.uri()
            )
        })))
}
