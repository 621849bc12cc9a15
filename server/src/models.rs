use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;

/// A recipe as stored in the collection and returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// The mutable part of a recipe, validated and ready to be stored.
///
/// Drafts can only be built through [`RecipeDraft::new`], so holding one means
/// both fields were present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    name: String,
    ingredients: Vec<String>,
}

impl RecipeDraft {
    /// Validate raw request fields. Values are kept exactly as supplied.
    pub fn new(name: Option<String>, ingredients: Option<Vec<String>>) -> Result<Self, ApiError> {
        let name = name.ok_or(ApiError::MissingField("name"))?;
        let ingredients = ingredients.ok_or(ApiError::MissingField("ingredients"))?;

        if name.trim().is_empty() {
            return Err(ApiError::Validation("Name cannot be empty".to_string()));
        }

        if ingredients.is_empty() {
            return Err(ApiError::Validation(
                "Ingredients must contain at least one entry".to_string(),
            ));
        }

        if let Some(index) = ingredients.iter().position(|i| i.trim().is_empty()) {
            return Err(ApiError::Validation(format!(
                "Ingredient {} cannot be empty",
                index
            )));
        }

        Ok(Self { name, ingredients })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub(crate) fn into_recipe(self, id: Uuid) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }

    pub(crate) fn apply_to(self, recipe: &mut Recipe) {
        recipe.name = self.name;
        recipe.ingredients = self.ingredients;
    }
}

/// Recipes loaded into a fresh store when seeding is enabled.
pub fn seed_drafts() -> Vec<RecipeDraft> {
    let seed = |name: &str, ingredients: &[&str]| RecipeDraft {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
    };

    vec![
        seed(
            "boiled white rice",
            &["1 cup white rice", "2 cups water", "pinch of salt"],
        ),
        seed(
            "milkshake",
            &["2 tbsp cocoa", "2 cups vanilla ice cream", "1 cup milk"],
        ),
    ]
}
