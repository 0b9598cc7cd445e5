use crate::error::{Error, Result};
use crate::state::AppState;
use crate::views::{self, ViewState};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Html,
    routing::get,
};
use common::{CompanySummary, Job, SearchCriterion, company_summaries, filter_jobs};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

/// Query parameters of the listings page.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub kind: Option<String>,
    pub q: Option<String>,
    pub selected: Option<String>,
}

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub kind: Option<String>,
    pub q: Option<String>,
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub kind: Option<String>,
    pub query: String,
    pub total_results: usize,
    pub results: Vec<Job>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/jobs", get(search_handler))
        .route("/api/jobs/{id}", get(job_handler))
        .route("/api/companies", get(companies_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for GET /?kind=<kind>&q=<text>&selected=<job id>
async fn page_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let view = ViewState::new(params.kind, params.q, params.selected);
    let session = state.session().await;
    Html(views::render_page(&session, &view))
}

/// Handler for GET /api/jobs?kind=<kind>&q=<text>
async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let jobs = state.jobs().await?;
    let criterion = SearchCriterion::from_input(params.kind.as_deref(), params.q.as_deref());

    let results: Vec<Job> = filter_jobs(&jobs, &criterion).into_iter().cloned().collect();

    Ok(Json(SearchResponse {
        kind: criterion.kind.map(|kind| kind.to_string()),
        query: criterion.value,
        total_results: results.len(),
        results,
    }))
}

/// Handler for GET /api/jobs/{id}
async fn job_handler(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Job>> {
    let jobs = state.jobs().await?;
    jobs.iter()
        .find(|job| job.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("job {}", id)))
}

/// Handler for GET /api/companies
async fn companies_handler(State(state): State<AppState>) -> Result<Json<Vec<CompanySummary>>> {
    let jobs = state.jobs().await?;
    Ok(Json(company_summaries(&jobs)))
}
