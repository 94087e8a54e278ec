use super::error::ApiError;
use super::state::AppState;
use crate::application::dto::{ComponentQueueRequest, HealthReport, MonitorOptions, StreamsRequest};
use crate::monitoring::domain::{
    CatalogueCollection, CatalogueEntry, FlatEnvironmentRecord, MonitorScope, StreamMessages,
};
use crate::shared::error::MonitorError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::collections::BTreeMap;

type ApiResult<T> = Result<T, ApiError>;

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| MonitorError::validation(rejection.body_text()).into())
}

// ========== System ==========

pub(super) async fn ping() -> &'static str {
    "pong"
}

pub(super) async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = state.check_health.execute().await;
    let status = if report.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}

pub(super) async fn metrics(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let body = state.metrics.render()?;
    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body))
}

// ========== Monitor ==========

pub(super) async fn monitor_components(
    State(state): State<AppState>,
    Path(scope_kind): Path<String>,
) -> ApiResult<Json<Vec<FlatEnvironmentRecord>>> {
    resolve(state, &scope_kind, None).await
}

pub(super) async fn monitor_components_scoped(
    State(state): State<AppState>,
    Path((scope_kind, scope_id)): Path<(String, String)>,
) -> ApiResult<Json<Vec<FlatEnvironmentRecord>>> {
    resolve(state, &scope_kind, Some(&scope_id)).await
}

async fn resolve(
    state: AppState,
    scope_kind: &str,
    scope_id: Option<&str>,
) -> ApiResult<Json<Vec<FlatEnvironmentRecord>>> {
    let scope = MonitorScope::parse(scope_kind, scope_id)?;
    let records = state.resolve_scope.execute(&scope).await?;
    Ok(Json(records))
}

pub(super) async fn monitor_queue(
    State(state): State<AppState>,
    payload: Result<Json<StreamsRequest>, JsonRejection>,
) -> ApiResult<Json<StreamMessages>> {
    let request = json_body(payload)?;
    let messages = state.read_queue.read_streams(request).await?;
    Ok(Json(messages))
}

pub(super) async fn publish_event(
    State(state): State<AppState>,
    Path(stream_key): Path<String>,
    payload: Result<Json<BTreeMap<String, String>>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let fields = json_body(payload)?;
    let id = state.publish_event.execute(&stream_key, fields).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id.to_string() }))))
}

pub(super) async fn monitor_options(
    State(state): State<AppState>,
) -> ApiResult<Json<MonitorOptions>> {
    Ok(Json(state.monitor_options.execute(None, None).await?))
}

pub(super) async fn monitor_options_selected(
    State(state): State<AppState>,
    Path((monitor_type, monitor_name)): Path<(String, String)>,
) -> ApiResult<Json<MonitorOptions>> {
    let options = state
        .monitor_options
        .execute(Some(&monitor_type), Some(&monitor_name))
        .await?;
    Ok(Json(options))
}

// ========== Components ==========

/// Cursors given as a query string: `/components/queue/<c>/<e>?h:<e>=<id>`
pub(super) async fn component_queue(
    State(state): State<AppState>,
    Path((component_name, environment_name)): Path<(String, String)>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<StreamMessages>> {
    read_component_queue(
        state,
        &component_name,
        &environment_name,
        query.as_deref().unwrap_or_default(),
    )
    .await
}

/// Cursors given as a trailing path segment: `/components/queue/<c>/<e>/h:<e>=<id>&...`
pub(super) async fn component_queue_with_cursors(
    State(state): State<AppState>,
    Path((component_name, environment_name, cursors)): Path<(String, String, String)>,
) -> ApiResult<Json<StreamMessages>> {
    read_component_queue(
        state,
        &component_name,
        &environment_name,
        cursors.trim_start_matches('/'),
    )
    .await
}

async fn read_component_queue(
    state: AppState,
    component_name: &str,
    environment_name: &str,
    cursor_token: &str,
) -> ApiResult<Json<StreamMessages>> {
    let request = ComponentQueueRequest::parse(component_name, environment_name, cursor_token)?;
    let messages = state.read_queue.read_component_queue(request).await?;
    Ok(Json(messages))
}

pub(super) async fn catalogue_data(
    state: AppState,
    collection: CatalogueCollection,
) -> ApiResult<Json<Vec<CatalogueEntry>>> {
    Ok(Json(state.list_catalogue.execute(collection).await?))
}
