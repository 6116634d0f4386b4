use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::{docs_auth_middleware, jwt_auth_middleware};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health))
        .merge(store_time_routes())
        .merge(store_overwrite_routes())
        .merge(auth_routes(state.clone()))
        .merge(docs_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn store_time_routes() -> Router<AppState> {
    use handlers::store_times;

    Router::new()
        .route(
            "/store-times",
            get(store_times::list).post(store_times::create),
        )
        .route(
            "/store-times/:id",
            get(store_times::get)
                .put(store_times::update)
                .delete(store_times::delete),
        )
        .route("/store-times/day/:day_of_week", get(store_times::by_day))
}

fn store_overwrite_routes() -> Router<AppState> {
    use handlers::store_overwrites;

    Router::new()
        .route(
            "/store-overwrites",
            get(store_overwrites::list).post(store_overwrites::create),
        )
        .route(
            "/store-overwrites/:id",
            get(store_overwrites::get)
                .put(store_overwrites::update)
                .delete(store_overwrites::delete),
        )
        .route(
            "/store-overwrites/date/:month/:day",
            get(store_overwrites::by_date),
        )
}

fn auth_routes(state: AppState) -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/auth", post(auth::login))
        .route(
            "/auth/verify",
            get(auth::verify).route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware)),
        )
}

fn docs_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/docs", get(handlers::root::docs))
        .route_layer(middleware::from_fn_with_state(state, docs_auth_middleware))
}
