use crate::models::Recipe;
use crate::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Every recipe, in insertion order", body = [Recipe])
    )
)]
pub async fn list_recipes(State(store): State<AppState>) -> Json<Vec<Recipe>> {
    Json(store.list().await)
}
