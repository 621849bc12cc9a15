pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /recipes endpoints (mounted at /recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        crate::models::Recipe,
        create::CreateRecipeRequest,
        update::UpdateRecipeRequest,
    ))
)]
pub struct ApiDoc;
