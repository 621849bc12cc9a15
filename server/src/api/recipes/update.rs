use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::{Recipe, RecipeDraft};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of `PUT /recipes/{id}`: a full replacement. `id` must repeat the path id.
///
/// `id` is taken as raw JSON so that a wrong value is reported as a mismatch
/// after the other fields are checked, not as an unreadable body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    #[schema(value_type = Option<String>)]
    pub id: Option<Value>,
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = uuid::Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated successfully", body = Recipe),
        (status = 400, description = "Missing field or mismatched ID", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(path_id): Path<String>,
    payload: Result<Json<UpdateRecipeRequest>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let Json(request) = payload?;
    let draft = RecipeDraft::new(request.name, request.ingredients)?;

    let id = matching_id(&path_id, request.id.as_ref()).ok_or_else(|| ApiError::IdMismatch {
        path: path_id.clone(),
        body: request.id.as_ref().map(|id| match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }),
    })?;

    Ok(Json(store.update(id, draft).await?))
}

/// The recipe id named by both the path and the body, if they agree.
/// A path that is not a UUID can never equal the body id.
fn matching_id(path_id: &str, body_id: Option<&Value>) -> Option<Uuid> {
    let path = Uuid::parse_str(path_id).ok()?;
    let body = Uuid::parse_str(body_id?.as_str()?).ok()?;
    (path == body).then_some(path)
}
