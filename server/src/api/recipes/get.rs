use crate::api::ErrorResponse;
use crate::error::{parse_id, ApiError};
use crate::models::Recipe;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = uuid::Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 400, description = "Malformed recipe ID", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(store.get(id).await?))
}
