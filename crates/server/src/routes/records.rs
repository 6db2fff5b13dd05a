use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::info;

use models::record::{Record, RecordMap, RecordPatch};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Name of the data to get.
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddDataQuery {
    pub data_id: String,
}

/// Every field is optional; empty strings and zero are ignored.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateQuery {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
}

impl From<UpdateQuery> for RecordPatch {
    fn from(q: UpdateQuery) -> Self {
        RecordPatch { name: q.name, price: q.price, description: q.description }
    }
}

#[utoipa::path(
    get, path = "/get-data/{data_id}", tag = "records",
    params(("data_id" = String, Path, description = "Id of the data to get.")),
    responses((status = 200, description = "Record, or null when the id is unknown", body = crate::openapi::RecordDoc))
)]
pub async fn get_data(State(state): State<ServerState>, Path(data_id): Path<String>) -> Json<Option<Record>> {
    Json(state.records.get(&data_id).await)
}

#[utoipa::path(
    get, path = "/query-data", tag = "records",
    params(NameQuery),
    responses(
        (status = 200, description = "First record with that name", body = crate::openapi::RecordDoc),
        (status = 404, description = "Data not found!", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn query_data(
    State(state): State<ServerState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<Record>, JsonApiError> {
    let Query(q) = query?;
    let rec = state.records.find_by_name(q.name.as_deref()).await?;
    Ok(Json(rec))
}

#[utoipa::path(
    post, path = "/add-data", tag = "records",
    params(AddDataQuery),
    request_body = crate::openapi::RecordDoc,
    responses(
        (status = 200, description = "Whole store keyed by id"),
        (status = 422, description = "Provide all function headers.", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add_data(
    State(state): State<ServerState>,
    query: Result<Query<AddDataQuery>, QueryRejection>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<Json<RecordMap>, JsonApiError> {
    let Query(q) = query?;
    let Json(record) = body?;
    let all = state.records.create(q.data_id.clone(), record).await?;
    info!(data_id = %q.data_id, count = all.len(), "add_data");
    Ok(Json(all))
}

#[utoipa::path(
    put, path = "/update/{data_id}", tag = "records",
    params(("data_id" = String, Path, description = "Id of the data to update."), UpdateQuery),
    responses(
        (status = 200, description = "Updated record", body = crate::openapi::RecordDoc),
        (status = 404, description = "Data is not present!", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_data(
    State(state): State<ServerState>,
    Path(data_id): Path<String>,
    query: Result<Query<UpdateQuery>, QueryRejection>,
) -> Result<Json<Record>, JsonApiError> {
    let Query(q) = query?;
    let rec = state.records.update(&data_id, q.into()).await?;
    info!(%data_id, "update_data");
    Ok(Json(rec))
}

#[utoipa::path(
    delete, path = "/delete/{data_id}", tag = "records",
    params(("data_id" = String, Path, description = "Id of the data to delete.")),
    responses(
        (status = 200, description = "Record as it was before removal", body = crate::openapi::RecordDoc),
        (status = 404, description = "Data not present!", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_data(
    State(state): State<ServerState>,
    Path(data_id): Path<String>,
) -> Result<Json<Record>, JsonApiError> {
    let rec = state.records.delete(&data_id).await?;
    info!(%data_id, "delete_data");
    Ok(Json(rec))
}
