use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use catalog_core::ItemId;
use catalog_items::Item;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.items().get_item(id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(dto::ItemDto::from_item(&item))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListItemsQuery>,
) -> axum::response::Response {
    let items = match services.items().get_items().await {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };

    let items = items
        .iter()
        .filter(|item| match query.name.as_deref() {
            Some(needle) => item.name_contains(needle),
            None => true,
        })
        .map(dto::ItemDto::from_item)
        .collect::<Vec<_>>();

    tracing::info!(count = items.len(), "retrieved items");

    (StatusCode::OK, Json(items)).into_response()
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    let item = Item::create(body.name, body.description, body.price);

    if let Err(e) = services.items().create_item(item.clone()).await {
        return errors::store_error_to_response(e);
    }

    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/items/{}", item.id()))],
        Json(dto::ItemDto::from_item(&item)),
    )
        .into_response()
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateItemRequest>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let existing = match services.items().get_item(id).await {
        Ok(Some(item)) => item,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    let replacement = existing.updated(body.name, body.description, body.price);
    if let Err(e) = services.items().update_item(replacement).await {
        return errors::store_error_to_response(e);
    }

    StatusCode::NO_CONTENT.into_response()
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.items().get_item(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => return errors::store_error_to_response(e),
    }

    if let Err(e) = services.items().delete_item(id).await {
        return errors::store_error_to_response(e);
    }

    StatusCode::NO_CONTENT.into_response()
}
