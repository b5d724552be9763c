use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::analytics::{compute_overview, OverviewReport};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct OverviewQuery {
    #[serde(deserialize_with = "crate::routes::params::org_id")]
    pub org_id: String,
    /// Defaults to today (UTC).
    pub as_of: Option<NaiveDate>,
}

/// GET /api/v1/analytics/overview
pub async fn handle_overview(
    State(state): State<AppState>,
    Query(params): Query<OverviewQuery>,
) -> Result<Json<OverviewReport>, AppError> {
    let (resources, projects) = tokio::try_join!(
        state.records.list_resources(&params.org_id),
        state.records.list_projects(&params.org_id),
    )?;
    let as_of = params.as_of.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(compute_overview(&resources, &projects, as_of)))
}
