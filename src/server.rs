//! Local demo backend serving a fixed user collection.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{Result, UsersError};
use crate::output;
use crate::types::User;

pub const USERS_PATH: &str = "/api/v1/usuarios";

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<Vec<User>>,
}

pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Juan Pérez", 25, "Ciudad de México"),
        User::new(2, "Ana Gómez", 30, "Buenos Aires"),
        User::new(3, "Carlos López", 22, "Madrid"),
    ]
}

pub fn router(users: Vec<User>) -> Router {
    let state = AppState {
        users: Arc::new(users),
    };

    Router::new()
        .route("/mundo", get(hello))
        .route(USERS_PATH, get(list_users))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hola, Mundo!"
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.as_ref().clone())
}

pub async fn run(host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| UsersError::Bind {
            addr: addr.clone(),
            source: e,
        })?;

    let local = listener.local_addr()?;
    tracing::info!(%local, "demo backend listening");
    output::print_message(&format!("Serving users on http://{local}{USERS_PATH}"));

    axum::serve(listener, router(seed_users()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("demo backend stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
    }
}
