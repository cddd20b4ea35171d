//! Item Calls
//!
//! Bindings for the expense item collection resource.

use super::{api_url, client};
use crate::models::{CreateItemArgs, Item};

/// Fetch the full item collection. No filtering, no pagination.
pub async fn get_items() -> Result<Vec<Item>, String> {
    let response = client()
        .get(api_url("/items"))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    response.json::<Vec<Item>>().await.map_err(|e| e.to_string())
}

/// Create one item; returns the stored item with its assigned id.
pub async fn create_item(args: &CreateItemArgs<'_>) -> Result<Item, String> {
    let response = client()
        .post(api_url("/items"))
        .json(args)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    response.json::<Item>().await.map_err(|e| e.to_string())
}
