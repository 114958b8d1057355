pub mod health;
pub mod metrics;
mod search;
mod tools;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::db::QueryExecutor;
use crate::search::PhysicianSearch;

/// Shared handler state
pub struct AppState<E> {
    pub search: Arc<PhysicianSearch<E>>,
}

impl<E> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            search: Arc::clone(&self.search),
        }
    }
}

/// Build the search API routes
pub fn api_routes<E: QueryExecutor + 'static>() -> Router<AppState<E>> {
    Router::new()
        .route("/search", post(search::search::<E>))
        .route("/tools", get(tools::list))
}
