//! REST Bindings
//!
//! Frontend bindings to the menu backend's `/foods` collection resource.

use crate::models::{Food, FoodDraft};

/// Backend base URL; override at build time via `PLATEBOARD_API_URL`
fn base_url() -> &'static str {
    option_env!("PLATEBOARD_API_URL").unwrap_or("http://localhost:3333")
}

/// Fetch the full plate collection, in backend order
pub async fn list_foods() -> Result<Vec<Food>, String> {
    let response = reqwest::get(format!("{}/foods", base_url()))
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    response.json::<Vec<Food>>().await.map_err(|e| e.to_string())
}

/// Create a plate; the backend assigns `id` and the default availability
pub async fn create_food(draft: &FoodDraft) -> Result<Food, String> {
    let response = reqwest::Client::new()
        .post(format!("{}/foods", base_url()))
        .json(draft)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    response.json::<Food>().await.map_err(|e| e.to_string())
}

/// Replace a plate wholesale, returning the backend's record
pub async fn update_food(id: u64, food: &Food) -> Result<Food, String> {
    let response = reqwest::Client::new()
        .put(format!("{}/foods/{}", base_url(), id))
        .json(food)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    response.json::<Food>().await.map_err(|e| e.to_string())
}

/// Delete a plate; success is indicated by status alone
pub async fn delete_food(id: u64) -> Result<(), String> {
    reqwest::Client::new()
        .delete(format!("{}/foods/{}", base_url(), id))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    Ok(())
}
