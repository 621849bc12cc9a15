use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::{Recipe, RecipeDraft};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /recipes`. Both fields are required; they are optional here
/// so a missing field becomes a validation error rather than a parse error.
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = Recipe),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    payload: Result<Json<CreateRecipeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let Json(request) = payload?;
    let draft = RecipeDraft::new(request.name, request.ingredients)?;

    let recipe = store.create(draft).await;

    Ok((StatusCode::CREATED, Json(recipe)))
}
