use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::{NewResource, Resource};
use crate::resources::intake::prepare_submission;
use crate::routes::params::{ListQuery, ListResponse, OrgQuery};
use crate::search::filter_records;
use crate::state::AppState;

/// GET /api/v1/resources
pub async fn handle_list_resources(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse<Resource>>, AppError> {
    let resources = state.records.list_resources(&params.org_id).await?;
    let query = params.search();
    let records: Vec<Resource> = filter_records(&resources, &query)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ListResponse {
        total: resources.len(),
        matched: records.len(),
        records,
    }))
}

/// POST /api/v1/resources
pub async fn handle_create_resource(
    State(state): State<AppState>,
    Query(params): Query<OrgQuery>,
    Json(form): Json<NewResource>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let submission = prepare_submission(&params.org_id, form)
        .map_err(|errors| AppError::Validation(errors.join("; ")))?;

    let created = state
        .records
        .create_resource(&params.org_id, &submission)
        .await?;
    info!("Resource '{}' added for org {}", submission.name, params.org_id);

    Ok((StatusCode::CREATED, Json(created)))
}
