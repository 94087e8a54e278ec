use super::handlers;
use super::state::AppState;
use crate::monitoring::domain::CatalogueCollection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;

/// Builds the full HTTP router over `state`
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .merge(monitor_routes())
        .merge(component_routes())
        .merge(data_routes())
        .with_state(state)
}

fn monitor_routes() -> Router<AppState> {
    Router::new()
        .route("/monitor/options", get(handlers::monitor_options))
        .route(
            "/monitor/options/{monitor_type}/{monitor_name}",
            get(handlers::monitor_options_selected),
        )
        .route(
            "/monitor/components/{scope_kind}",
            get(handlers::monitor_components),
        )
        .route(
            "/monitor/components/{scope_kind}/",
            get(handlers::monitor_components),
        )
        .route(
            "/monitor/components/{scope_kind}/{scope_id}",
            get(handlers::monitor_components_scoped),
        )
        .route(
            "/monitor/components/{scope_kind}/{scope_id}/",
            get(handlers::monitor_components_scoped),
        )
        .route("/monitor/queue", post(handlers::monitor_queue))
        .route("/monitor/queue/{stream_key}", post(handlers::publish_event))
}

fn component_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/components/queue/{component_name}/{environment_name}",
            get(handlers::component_queue),
        )
        // A catch-all never matches an empty segment
        .route(
            "/components/queue/{component_name}/{environment_name}/",
            get(handlers::component_queue),
        )
        .route(
            "/components/queue/{component_name}/{environment_name}/{*cursors}",
            get(handlers::component_queue_with_cursors),
        )
}

fn data_routes() -> Router<AppState> {
    CatalogueCollection::ALL.into_iter().fold(Router::new(), |router, collection| {
        router.route(
            &format!("/{}/data", collection.as_str()),
            get(move |State(state): State<AppState>| handlers::catalogue_data(state, collection)),
        )
    })
}
