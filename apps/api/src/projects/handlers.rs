use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::models::Project;
use crate::routes::params::{ListQuery, ListResponse};
use crate::search::filter_records;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse<Project>>, AppError> {
    let projects = state.records.list_projects(&params.org_id).await?;
    let records: Vec<Project> = filter_records(&projects, &params.search())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ListResponse {
        total: projects.len(),
        matched: records.len(),
        records,
    }))
}
