//! Thin HTTP client for the recipe server.

use anyhow::{anyhow, bail, Context, Result};
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RecipeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    name: &'a str,
    ingredients: &'a [String],
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(server: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: server.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Recipe>> {
        let response = self.http.get(self.url("/recipes")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Recipe> {
        let response = self
            .http
            .get(self.url(&format!("/recipes/{}", id)))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn create(&self, name: &str, ingredients: &[String]) -> Result<Recipe> {
        let response = self
            .http
            .post(self.url("/recipes"))
            .json(&RecipeBody {
                id: None,
                name,
                ingredients,
            })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn update(&self, id: Uuid, name: &str, ingredients: &[String]) -> Result<Recipe> {
        let response = self
            .http
            .put(self.url(&format!("/recipes/{}", id)))
            .json(&RecipeBody {
                id: Some(id),
                name,
                ingredients,
            })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/recipes/{}", id)))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into an error carrying the server's message.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read error body from {}", url))?;

    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => Err(anyhow!("{} ({})", err.error, describe(status))),
        Err(_) if body.is_empty() => bail!("Request to {} failed ({})", url, describe(status)),
        Err(_) => bail!("Request to {} failed ({}): {}", url, describe(status), body),
    }
}

fn describe(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// One-line summary used by `list`.
pub fn summary(recipe: &Recipe) -> String {
    format!(
        "{}  {}: {}",
        recipe.id,
        recipe.name,
        recipe.ingredients.join(", ")
    )
}
