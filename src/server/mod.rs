//! JSON API the landing page calls.
//!
//! The API key stays on the server; the browser only ever sees the parsed
//! results or a one-line error message.

pub mod error;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::assistant::Assistant;
use crate::catalog::{self, MenuItem};
use crate::entity::{
    CorporateEnquiry, MealPlan, MealPlanRequest, PlanName, Projection, ProjectionForm,
};
use crate::error::{Result, TaazaError};
use crate::links;
use error::ApiError;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

pub struct AppState {
    pub assistant: Assistant,
}

type SharedState = Arc<AppState>;
type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

fn body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> std::result::Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError(TaazaError::InvalidInput(rejection.body_text())))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub ai_available: bool,
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub answer: String,
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderLinkQuery {
    pub dish: String,
}

#[derive(Debug, Deserialize)]
pub struct PlanLinkQuery {
    pub plan: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub url: String,
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn health(State(state): State<SharedState>) -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        ai_available: state.assistant.is_available(),
    })
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn menu(Query(query): Query<MenuQuery>) -> Json<Vec<&'static MenuItem>> {
    let items = catalog::filter_menu(query.tag.as_deref());
    debug!(tag = ?query.tag, items = items.len(), "menu listed");
    Json(items)
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn meal_plan(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<MealPlanRequest>, JsonRejection>,
) -> ApiResult<MealPlan> {
    let request = body(payload)?;
    Ok(Json(state.assistant.meal_plan(&request).await?))
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn projection(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<ProjectionForm>, JsonRejection>,
) -> ApiResult<Projection> {
    let input = body(payload)?.into_input()?;
    Ok(Json(state.assistant.projection(&input).await?))
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn search(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<SearchResponse> {
    let request = body(payload)?;
    let answer = state.assistant.search(&request.query).await?;
    Ok(Json(SearchResponse {
        html: answer.to_html(),
        answer: answer.text,
    }))
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn order_link(Query(query): Query<OrderLinkQuery>) -> ApiResult<LinkResponse> {
    let dish = catalog::find_dish(&query.dish).ok_or_else(|| {
        ApiError(TaazaError::InvalidInput(format!("Unknown dish: {}", query.dish)))
    })?;
    debug!(dish = dish.name, "order link built");
    Ok(Json(LinkResponse {
        url: links::order_link(dish.name),
    }))
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn plan_link(Query(query): Query<PlanLinkQuery>) -> ApiResult<LinkResponse> {
    let plan: PlanName = query
        .plan
        .parse()
        .map_err(|e: String| ApiError(TaazaError::InvalidInput(e)))?;
    debug!(%plan, "plan link built");
    Ok(Json(LinkResponse {
        url: links::plan_link(plan),
    }))
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn corporate_link(
    payload: std::result::Result<Json<CorporateEnquiry>, JsonRejection>,
) -> ApiResult<LinkResponse> {
    let enquiry = body(payload)?;
    let url = links::corporate_link(&enquiry)?;
    debug!(employees = enquiry.employees, meal_type = %enquiry.meal_type, "corporate link built");
    Ok(Json(LinkResponse { url }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/menu", get(menu))
        .route("/api/meal-plan", post(meal_plan))
        .route("/api/projection", post(projection))
        .route("/api/search", post(search))
        .route("/api/links/order", get(order_link))
        .route("/api/links/plan", get(plan_link))
        .route("/api/links/corporate", post(corporate_link))
        .with_state(Arc::new(state))
}

/// Serve until `shutdown` is cancelled.
pub async fn serve(state: AppState, addr: SocketAddr, shutdown: CancellationToken) -> Result<()> {
    let ai_available = state.assistant.is_available();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, ai_available, "landing page API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("server stopped");
    Ok(())
}
