use coll_ws::AppState;

use axum::Router;

/// Build the application router. Every path and method goes to the
/// WebSocket handler; there is no routing by path.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(coll_ws::handler)
        .with_state(state)
}
