use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::http::{header, StatusCode};
use axum::Json;
use chrono::Utc;

use catalog_api::app::dto::{CreateItemRequest, ItemDto, ListItemsQuery, UpdateItemRequest};
use catalog_api::app::routes::items;
use catalog_api::app::services::AppServices;
use catalog_core::ItemId;
use catalog_infra::{MockItemRepository, StoreError};
use catalog_items::Item;

fn services_with(repo: MockItemRepository) -> Extension<Arc<AppServices>> {
    Extension(Arc::new(AppServices::new(Arc::new(repo))))
}

fn existing_item() -> Item {
    Item::new(
        ItemId::new(),
        "Potion",
        Some("Restores a small amount of HP".to_string()),
        500,
        Utc::now(),
    )
}

fn named_item(name: &str) -> Item {
    Item::new(ItemId::new(), name, None, 100, Utc::now())
}

async fn response_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_item_with_unknown_item_returns_not_found() {
    let mut repo = MockItemRepository::new();
    repo.expect_get_item().returning(|_| Ok(None));

    let response = items::get_item(services_with(repo), Path(ItemId::new().to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_item_with_existing_item_returns_expected_item() {
    let expected = existing_item();
    let mut repo = MockItemRepository::new();
    let ret = expected.clone();
    repo.expect_get_item().returning(move |_| Ok(Some(ret.clone())));

    let response = items::get_item(services_with(repo), Path(expected.id().to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: ItemDto = response_json(response).await;
    assert_eq!(body, ItemDto::from_item(&expected));
}

#[tokio::test]
async fn get_item_with_malformed_id_returns_bad_request() {
    // No expectations set: any repository call would panic the test.
    let repo = MockItemRepository::new();

    let response = items::get_item(services_with(repo), Path("not-a-uuid".to_string())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_items_with_existing_items_returns_all_items() {
    let all = vec![named_item("Potion"), named_item("Antidote"), named_item("Hi-Potion")];
    let mut repo = MockItemRepository::new();
    let ret = all.clone();
    repo.expect_get_items().returning(move || Ok(ret.clone()));

    let response = items::list_items(services_with(repo), Query(ListItemsQuery { name: None })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<ItemDto> = response_json(response).await;
    let expected = all.iter().map(ItemDto::from_item).collect::<Vec<_>>();
    assert_eq!(body, expected, "expected the full set in repository order");
}

#[tokio::test]
async fn list_items_with_matching_names_returns_matching_items() {
    let all = vec![named_item("Potion"), named_item("Antidote"), named_item("Hi-Potion")];
    let mut repo = MockItemRepository::new();
    let ret = all.clone();
    repo.expect_get_items().returning(move || Ok(ret.clone()));

    let query = ListItemsQuery {
        name: Some("potion".to_string()),
    };
    let response = items::list_items(services_with(repo), Query(query)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<ItemDto> = response_json(response).await;
    let names = body.iter().map(|i| i.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Potion", "Hi-Potion"]);
}

#[tokio::test]
async fn list_items_surfaces_store_failure_as_internal_error() {
    let mut repo = MockItemRepository::new();
    repo.expect_get_items()
        .returning(|| Err(StoreError::Backend("backend offline".to_string())));

    let response = items::list_items(services_with(repo), Query(ListItemsQuery { name: None })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn create_item_returns_created_item_with_location() {
    let mut repo = MockItemRepository::new();
    repo.expect_create_item().times(1).returning(|_| Ok(()));

    let body = CreateItemRequest {
        name: "Elixir".to_string(),
        description: Some("Fully restores HP and MP".to_string()),
        price: 50_000,
    };
    let response = items::create_item(services_with(repo), Json(body.clone())).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("created response carries a location header")
        .to_str()
        .unwrap()
        .to_string();

    let created: ItemDto = response_json(response).await;
    assert_eq!(created.name, body.name);
    assert_eq!(created.description, body.description);
    assert_eq!(created.price, body.price);
    assert!(!created.id.is_nil());
    assert_eq!(location, format!("/items/{}", created.id));

    let age = (Utc::now() - created.created_date).num_milliseconds();
    assert!((0..1000).contains(&age), "created_date not close to now: {age}ms");
}

#[tokio::test]
async fn create_item_assigns_a_fresh_id_per_call() {
    let mut repo = MockItemRepository::new();
    repo.expect_create_item().times(2).returning(|_| Ok(()));
    let services = services_with(repo);

    let body = CreateItemRequest {
        name: "Phoenix Down".to_string(),
        description: None,
        price: 750,
    };
    let first = items::create_item(services.clone(), Json(body.clone())).await;
    let second = items::create_item(services, Json(body)).await;

    let first: ItemDto = response_json(first).await;
    let second: ItemDto = response_json(second).await;
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn update_item_with_existing_item_returns_no_content() {
    let existing = existing_item();
    let mut repo = MockItemRepository::new();

    let ret = existing.clone();
    repo.expect_get_item().returning(move |_| Ok(Some(ret.clone())));

    let original = existing.clone();
    repo.expect_update_item()
        .withf(move |replacement| {
            replacement.id() == original.id()
                && replacement.created_date() == original.created_date()
                && replacement.name() == "Mega Potion"
                && replacement.description() == Some("Restores a lot of HP")
                && replacement.price() == original.price() + 3
        })
        .times(1)
        .returning(|_| Ok(()));

    let body = UpdateItemRequest {
        name: "Mega Potion".to_string(),
        description: Some("Restores a lot of HP".to_string()),
        price: existing.price() + 3,
    };
    let response =
        items::update_item(services_with(repo), Path(existing.id().to_string()), Json(body)).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn update_item_with_unknown_item_returns_not_found() {
    let mut repo = MockItemRepository::new();
    repo.expect_get_item().returning(|_| Ok(None));
    repo.expect_update_item().times(0);

    let body = UpdateItemRequest {
        name: "Mega Potion".to_string(),
        description: None,
        price: 900,
    };
    let response =
        items::update_item(services_with(repo), Path(ItemId::new().to_string()), Json(body)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_item_with_existing_item_returns_no_content() {
    let existing = existing_item();
    let id = existing.id();
    let mut repo = MockItemRepository::new();

    repo.expect_get_item().returning(move |_| Ok(Some(existing.clone())));
    repo.expect_delete_item()
        .withf(move |got| *got == id)
        .times(1)
        .returning(|_| Ok(()));

    let response = items::delete_item(services_with(repo), Path(id.to_string())).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_item_with_unknown_item_returns_not_found() {
    let mut repo = MockItemRepository::new();
    repo.expect_get_item().returning(|_| Ok(None));
    repo.expect_delete_item().times(0);

    let response = items::delete_item(services_with(repo), Path(ItemId::new().to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
