//! Category CRUD and the rename/delete cascades
//! Run: cargo test -p catalog-server --test categories

use catalog_server::AppError;
use catalog_server::core::config::{AssetStoreConfig, CategoryDeleteScope};
use catalog_server::db::DbService;
use catalog_server::db::models::{CategoryCreate, CategoryUpdate, ProductCreate};
use catalog_server::services::{AssetStoreService, CatalogService, UNCATEGORIZED};
use shared::ProductListParams;

async fn setup(scope: CategoryDeleteScope) -> (CatalogService, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db = DbService::new(&tmp.path().join("catalog.db"))
        .await
        .unwrap()
        .db;
    let assets = AssetStoreService::new(AssetStoreConfig {
        upload_url: "http://127.0.0.1:1/upload".into(),
        api_url: "http://127.0.0.1:1".into(),
        private_key: String::new(),
        folder: "test".into(),
    });
    let catalog = CatalogService::new(db, assets, scope);
    (catalog, tmp)
}

fn product(name: &str, category: &str) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        category: category.to_string(),
        price: 10.0,
        discount_percentage: None,
        description: format!("{name} description"),
        in_stock: None,
        image_url: format!("https://cdn.example.com/{name}.jpg"),
        image_file_id: None,
    }
}

async fn category_names(catalog: &CatalogService, category: &str) -> Vec<String> {
    let page = catalog
        .list_products(&ProductListParams {
            category: Some(category.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    page.items.into_iter().map(|p| p.name).collect()
}

#[tokio::test]
async fn create_and_list_categories() {
    let (catalog, _tmp) = setup(CategoryDeleteScope::Affected).await;

    let audio = catalog
        .create_category(CategoryCreate {
            name: "Audio".to_string(),
        })
        .await
        .unwrap();
    assert!(audio.id.starts_with("category:"));
    assert!(audio.created_at > 0);

    catalog
        .create_category(CategoryCreate {
            name: "Displays".to_string(),
        })
        .await
        .unwrap();

    let all = catalog.list_categories().await.unwrap();
    assert_eq!(all.len(), 2);

    let fetched = catalog.get_category(&audio.id).await.unwrap();
    assert_eq!(fetched.name, "Audio");

    let err = catalog
        .create_category(CategoryCreate {
            name: "  ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn rename_cascades_into_products_only_for_old_name() {
    let (catalog, _tmp) = setup(CategoryDeleteScope::Affected).await;

    let skincare = catalog
        .create_category(CategoryCreate {
            name: "Skincare".to_string(),
        })
        .await
        .unwrap();
    catalog
        .create_product(product("Cleanser", "Skincare"), None)
        .await
        .unwrap();
    catalog
        .create_product(product("Serum", "Skincare"), None)
        .await
        .unwrap();
    catalog
        .create_product(product("Shampoo", "Haircare"), None)
        .await
        .unwrap();

    let rename = catalog
        .rename_category(
            &skincare.id,
            CategoryUpdate {
                name: "Beauty".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(rename.before.name, "Skincare");
    assert_eq!(rename.after.name, "Beauty");
    assert_eq!(rename.before.id, rename.after.id);

    assert!(category_names(&catalog, "Skincare").await.is_empty());
    let mut beauty = category_names(&catalog, "Beauty").await;
    beauty.sort();
    assert_eq!(beauty, vec!["Cleanser", "Serum"]);

    // Unrelated products keep their category
    assert_eq!(category_names(&catalog, "Haircare").await, vec!["Shampoo"]);
}

#[tokio::test]
async fn delete_reassigns_only_affected_products() {
    let (catalog, _tmp) = setup(CategoryDeleteScope::Affected).await;

    let audio = catalog
        .create_category(CategoryCreate {
            name: "Audio".to_string(),
        })
        .await
        .unwrap();
    catalog
        .create_product(product("Speaker", "Audio"), None)
        .await
        .unwrap();
    catalog
        .create_product(product("Headset", "Audio"), None)
        .await
        .unwrap();
    catalog
        .create_product(product("Monitor", "Displays"), None)
        .await
        .unwrap();

    let deleted = catalog.delete_category(&audio.id).await.unwrap();
    assert_eq!(deleted.name, "Audio");

    assert!(category_names(&catalog, "Audio").await.is_empty());
    let mut moved = category_names(&catalog, UNCATEGORIZED).await;
    moved.sort();
    assert_eq!(moved, vec!["Headset", "Speaker"]);

    // Products in other categories stay put
    assert_eq!(category_names(&catalog, "Displays").await, vec!["Monitor"]);
}

#[tokio::test]
async fn delete_with_all_scope_rewrites_every_product() {
    let (catalog, _tmp) = setup(CategoryDeleteScope::All).await;

    let audio = catalog
        .create_category(CategoryCreate {
            name: "Audio".to_string(),
        })
        .await
        .unwrap();
    catalog
        .create_product(product("Speaker", "Audio"), None)
        .await
        .unwrap();
    catalog
        .create_product(product("Monitor", "Displays"), None)
        .await
        .unwrap();

    catalog.delete_category(&audio.id).await.unwrap();

    let mut moved = category_names(&catalog, UNCATEGORIZED).await;
    moved.sort();
    assert_eq!(moved, vec!["Monitor", "Speaker"]);
    assert!(category_names(&catalog, "Displays").await.is_empty());
}

#[tokio::test]
async fn missing_category_operations_return_not_found() {
    let (catalog, _tmp) = setup(CategoryDeleteScope::Affected).await;

    let err = catalog.get_category("category:missing").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = catalog
        .rename_category(
            "category:missing",
            CategoryUpdate {
                name: "Anything".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = catalog.delete_category("category:missing").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
