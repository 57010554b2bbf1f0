//! Product CRUD, validation and listing behavior
//! Run: cargo test -p catalog-server --test products

use std::collections::HashSet;
use std::time::Duration;

use catalog_server::AppError;
use catalog_server::core::config::{AssetStoreConfig, CategoryDeleteScope};
use catalog_server::db::DbService;
use catalog_server::db::models::{ProductCreate, ProductUpdate};
use catalog_server::services::{AssetStoreService, CatalogService};
use shared::{ProductListParams, SortOrder};

async fn setup() -> (CatalogService, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db = DbService::new(&tmp.path().join("catalog.db"))
        .await
        .unwrap()
        .db;
    // Points at nothing; tests never reach the CDN
    let assets = AssetStoreService::new(AssetStoreConfig {
        upload_url: "http://127.0.0.1:1/upload".into(),
        api_url: "http://127.0.0.1:1".into(),
        private_key: String::new(),
        folder: "test".into(),
    });
    let catalog = CatalogService::new(db, assets, CategoryDeleteScope::Affected);
    (catalog, tmp)
}

fn payload(name: &str, category: &str, price: f64) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        category: category.to_string(),
        price,
        discount_percentage: None,
        description: format!("{name} description"),
        in_stock: None,
        image_url: format!("https://cdn.example.com/{name}.jpg"),
        image_file_id: None,
    }
}

#[tokio::test]
async fn create_then_fetch_returns_same_record() {
    let (catalog, _tmp) = setup().await;

    let created = catalog
        .create_product(payload("Headphones", "Audio", 59.9), None)
        .await
        .unwrap();

    assert!(created.id.starts_with("product:"));
    assert!(created.created_at > 0);
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.discount_percentage, 0.0);
    assert!(created.in_stock);

    let fetched = catalog.get_product(&created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Headphones");
    assert_eq!(fetched.category, "Audio");
    assert_eq!(fetched.price, 59.9);
    assert_eq!(fetched.description, "Headphones description");
    assert_eq!(fetched.image_url, "https://cdn.example.com/Headphones.jpg");
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let (catalog, _tmp) = setup().await;

    let mut missing_name = payload("x", "Audio", 10.0);
    missing_name.name = "  ".to_string();
    let err = catalog.create_product(missing_name, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = catalog
        .create_product(payload("Zero", "Audio", 0.0), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let mut bad_discount = payload("Disc", "Audio", 10.0);
    bad_discount.discount_percentage = Some(150.0);
    let err = catalog.create_product(bad_discount, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let mut no_image = payload("NoImage", "Audio", 10.0);
    no_image.image_url = String::new();
    let err = catalog.create_product(no_image, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn pagination_covers_every_product_exactly_once() {
    let (catalog, _tmp) = setup().await;

    for i in 0..25 {
        catalog
            .create_product(payload(&format!("Item{i:02}"), "Misc", 1.0 + i as f64), None)
            .await
            .unwrap();
    }

    let mut seen = HashSet::new();
    let mut pages_meta = Vec::new();
    for page_no in 1..=3u32 {
        let params = ProductListParams {
            page: Some(page_no),
            limit: Some(10),
            ..Default::default()
        };
        let page = catalog.list_products(&params).await.unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.pages, 3);
        pages_meta.push(page.items.len());
        for item in page.items {
            assert!(seen.insert(item.id), "duplicate product across pages");
        }
    }

    assert_eq!(pages_meta, vec![10, 10, 5]);
    assert_eq!(seen.len(), 25);
}

#[tokio::test]
async fn sort_orders_by_creation_time() {
    let (catalog, _tmp) = setup().await;

    for name in ["First", "Second", "Third"] {
        catalog
            .create_product(payload(name, "Misc", 5.0), None)
            .await
            .unwrap();
        // Creation timestamps have millisecond precision
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let newest = catalog
        .list_products(&ProductListParams {
            sort: Some(SortOrder::Newest),
            ..Default::default()
        })
        .await
        .unwrap();
    let names: Vec<_> = newest.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);

    let oldest = catalog
        .list_products(&ProductListParams {
            sort: Some(SortOrder::Oldest),
            ..Default::default()
        })
        .await
        .unwrap();
    let names: Vec<_> = oldest.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn search_is_case_insensitive_across_fields() {
    let (catalog, _tmp) = setup().await;

    catalog
        .create_product(payload("Wireless Mouse", "Peripherals", 25.0), None)
        .await
        .unwrap();
    let mut by_description = payload("Keyboard", "Peripherals", 45.0);
    by_description.description = "A mechanical typing device".to_string();
    catalog.create_product(by_description, None).await.unwrap();
    catalog
        .create_product(payload("Desk Lamp", "Lighting", 15.0), None)
        .await
        .unwrap();

    // Matches name
    let page = catalog
        .list_products(&ProductListParams {
            search: Some("MOUSE".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Wireless Mouse");

    // Matches description
    let page = catalog
        .list_products(&ProductListParams {
            search: Some("mechanical".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Keyboard");

    // Matches category name
    let page = catalog
        .list_products(&ProductListParams {
            search: Some("peripheral".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn category_filter_honors_all_sentinel() {
    let (catalog, _tmp) = setup().await;

    catalog
        .create_product(payload("Speaker", "Audio", 30.0), None)
        .await
        .unwrap();
    catalog
        .create_product(payload("Monitor", "Displays", 120.0), None)
        .await
        .unwrap();

    let filtered = catalog
        .list_products(&ProductListParams {
            category: Some("Audio".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(filtered.total, 1);
    assert_eq!(filtered.items[0].name, "Speaker");

    let unfiltered = catalog
        .list_products(&ProductListParams {
            category: Some("all".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(unfiltered.total, 2);
}

#[tokio::test]
async fn products_by_category_groups_and_caps_strips() {
    let (catalog, _tmp) = setup().await;

    for i in 0..10 {
        catalog
            .create_product(payload(&format!("Audio{i}"), "Audio", 9.0), None)
            .await
            .unwrap();
    }
    catalog
        .create_product(payload("Other", "Misc", 9.0), None)
        .await
        .unwrap();

    let grouped = catalog.products_by_category().await.unwrap();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["Audio"].len(), 8);
    assert!(grouped["Audio"].iter().all(|p| p.category == "Audio"));
    assert_eq!(grouped["Misc"].len(), 1);
}

#[tokio::test]
async fn update_changes_only_provided_fields() {
    let (catalog, _tmp) = setup().await;

    let created = catalog
        .create_product(payload("Tablet", "Computing", 199.0), None)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let update = ProductUpdate {
        price: Some(149.0),
        in_stock: Some(false),
        ..Default::default()
    };
    let updated = catalog
        .update_product(&created.id, update, None)
        .await
        .unwrap();

    assert_eq!(updated.name, "Tablet");
    assert_eq!(updated.category, "Computing");
    assert_eq!(updated.price, 149.0);
    assert!(!updated.in_stock);
    assert!(updated.updated_at > created.created_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_rejects_invalid_fields() {
    let (catalog, _tmp) = setup().await;

    let created = catalog
        .create_product(payload("Camera", "Photo", 300.0), None)
        .await
        .unwrap();

    let err = catalog
        .update_product(
            &created.id,
            ProductUpdate {
                price: Some(-5.0),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let (catalog, _tmp) = setup().await;

    let created = catalog
        .create_product(payload("Gone", "Misc", 5.0), None)
        .await
        .unwrap();

    let deleted = catalog.delete_product(&created.id).await.unwrap();
    assert_eq!(deleted.id, created.id);

    let err = catalog.get_product(&created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = catalog.delete_product(&created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
