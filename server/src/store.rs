//! In-memory recipe collection.
//!
//! The store owns every [`Recipe`] and hands out clones. All access goes
//! through a single async read/write lock, so each operation observes and
//! leaves the collection in a consistent state.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{seed_drafts, Recipe, RecipeDraft};

/// Ordered, in-memory collection of recipes.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given drafts, in order.
    pub fn with_recipes(drafts: impl IntoIterator<Item = RecipeDraft>) -> Self {
        let mut recipes: Vec<Recipe> = Vec::new();
        for draft in drafts {
            let id = fresh_id(&recipes);
            recipes.push(draft.into_recipe(id));
        }

        Self {
            recipes: RwLock::new(recipes),
        }
    }

    /// Create a store holding the default sample recipes.
    pub fn seeded() -> Self {
        Self::with_recipes(seed_drafts())
    }

    pub async fn list(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }

    pub async fn get(&self, id: Uuid) -> Result<Recipe, ApiError> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }

    /// Append a new recipe with a freshly allocated id.
    pub async fn create(&self, draft: RecipeDraft) -> Recipe {
        let mut recipes = self.recipes.write().await;
        let recipe = draft.into_recipe(fresh_id(&recipes));
        recipes.push(recipe.clone());

        tracing::info!(recipe_id = %recipe.id, "created recipe");
        recipe
    }

    /// Replace the name and ingredients of an existing recipe, keeping its id
    /// and position.
    pub async fn update(&self, id: Uuid, draft: RecipeDraft) -> Result<Recipe, ApiError> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::NotFound(id))?;

        draft.apply_to(recipe);

        tracing::info!(recipe_id = %id, "updated recipe");
        Ok(recipe.clone())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let mut recipes = self.recipes.write().await;
        let index = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or(ApiError::NotFound(id))?;

        recipes.remove(index);

        tracing::info!(recipe_id = %id, "deleted recipe");
        Ok(())
    }
}

fn fresh_id(existing: &[Recipe]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if existing.iter().all(|r| r.id != id) {
            return id;
        }
    }
}
