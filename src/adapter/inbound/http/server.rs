//! Route table and HTTP server lifecycle.

use actix_web::{web, App, HttpServer};
use tracing::info;

use super::error::HttpError;
use super::handler;
use super::middleware::RequestTracing;
use crate::error::Result;
use crate::infrastructure::config::server::ServerConfig;
use crate::port::TodoStore;

/// Register every todo route for store type `S`.
///
/// The store itself must be registered separately as `web::Data<S>`.
/// Extractor failures render the same HTML error pages as handler errors.
pub fn routes<S: TodoStore>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| HttpError::Form(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|_err, req| HttpError::Path(req.path().to_string()).into()),
    )
    .route("/", web::get().to(handler::index::<S>))
    .route("/", web::post().to(handler::create::<S>))
    .route("/delete/{id}", web::get().to(handler::delete::<S>))
    .route("/update/{id}", web::get().to(handler::edit::<S>))
    .route("/update/{id}", web::post().to(handler::update::<S>))
    .route("/health", web::get().to(handler::health));
}

/// Serve the application until the server is stopped (Ctrl-C included).
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve<S: TodoStore>(config: &ServerConfig, store: S) -> Result<()> {
    let store = web::Data::new(store);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(RequestTracing)
            .configure(routes::<S>)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind(config.bind_address())?.run();
    info!(host = %config.host, port = config.port, "listening on http://{}:{}", config.host, config.port);

    server.await?;
    info!("server stopped");
    Ok(())
}
