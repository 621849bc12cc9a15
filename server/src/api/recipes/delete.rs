use crate::api::ErrorResponse;
use crate::error::{parse_id, ApiError};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = uuid::Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted successfully"),
        (status = 400, description = "Malformed recipe ID", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    store.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
