use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use service::domain::Item;
use service::storage::Record;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

/// List all items.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.find_all().await)
}

/// Item detail.
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<u64>,
) -> Result<Json<Item>, JsonApiError> {
    state
        .items
        .find_by_id(item_id)
        .await
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(Item::ENTITY, item_id))
}

/// Register an item from form fields `itemName`, `price`, `quantity`.
///
/// Redirects to the detail page so a browser refresh does not re-submit.
pub async fn add_item(State(state): State<AppState>, Form(item): Form<Item>) -> Redirect {
    let saved = state.items.save(item).await;
    let id = saved.id().unwrap_or_default();
    info!(item_id = id, item_name = %saved.item_name, "item added");
    Redirect::to(&format!("/basic/items/{id}"))
}

/// Overwrite an existing item with the submitted form fields.
pub async fn edit_item(
    State(state): State<AppState>,
    Path(item_id): Path<u64>,
    Form(item): Form<Item>,
) -> Result<Redirect, JsonApiError> {
    let updated = state.items.update(item_id, item).await?;
    info!(item_id, item_name = %updated.item_name, "item updated");
    Ok(Redirect::to(&format!("/basic/items/{item_id}")))
}
