use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use pawsafety_app::Application;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};

pub mod contact;
pub mod error;
pub mod health;
pub mod startup;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn router(app: Arc<Application>) -> Router {
    let routes = Router::new()
        .route("/contact", post(contact::submit_contact))
        .route("/health", get(health::get_health))
        .with_state(AppState { app });
    with_layers(routes)
}

/// Unknown routes and methods answer 404, panics answer 500, any origin may call.
fn with_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::not_found)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(cors)
}

pub async fn run(
    app: Arc<Application>,
    addr: SocketAddr,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app, shutdown_signal).await
}

pub async fn serve(
    listener: TcpListener,
    app: Arc<Application>,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    info!(
        "Backend server running at http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}
