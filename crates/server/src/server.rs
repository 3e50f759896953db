use axum::{
    Router,
    routing::{delete, get},
};

use std::sync::Arc;

use crate::{categories, expenses, salary, summary};
use engine::{AggregationOptions, Engine};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub options: AggregationOptions,
}

impl ServerState {
    pub fn new(engine: Engine, options: AggregationOptions) -> Self {
        Self {
            engine: Arc::new(engine),
            options,
        }
    }
}

pub fn router(state: ServerState) -> Router {
    let api = Router::new()
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route(
            "/expenses/{id}",
            get(expenses::get)
                .put(expenses::update)
                .delete(expenses::remove),
        )
        .route("/salary", get(salary::list).post(salary::set))
        .route("/salary/{id}", delete(salary::remove))
        .route("/categories", get(categories::list))
        .route("/summary", get(summary::get));

    Router::new().nest("/api", api).with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(state, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
