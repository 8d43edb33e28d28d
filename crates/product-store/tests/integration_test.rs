use product_store::config::StoreConfig;
use product_store::lifecycle::ProductSystem;
use product_store::model::{Product, ProductCreate, ProductId, ProductUpdate};
use product_store::product_actor::ProductError;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn store() -> (TempDir, PathBuf, ProductSystem) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("products.json");
    let system = ProductSystem::open(&StoreConfig::new(&path));
    (temp_dir, path, system)
}

fn candidate(title: &str, code: &str) -> ProductCreate {
    ProductCreate::new(title, "d", 10.0, "t", code, 3.0)
}

fn read_file(path: &Path) -> Value {
    let bytes = std::fs::read(path).expect("Failed to read backing file");
    serde_json::from_slice(&bytes).expect("Backing file is not JSON")
}

#[tokio::test]
async fn test_canonical_scenario() {
    let (_dir, path, system) = store();
    let products = &system.product_client;

    assert!(products.list_products().await.unwrap().is_empty());
    assert!(!path.exists());

    let created = products.add_product(candidate("A", "C1")).await.unwrap();
    assert_eq!(created.id, ProductId(1));

    let duplicate = products.add_product(candidate("B", "C1")).await;
    assert_eq!(duplicate, Err(ProductError::DuplicateCode("C1".to_string())));
    assert_eq!(products.list_products().await.unwrap().len(), 1);

    let updated = products
        .update_product(
            ProductId(1),
            ProductUpdate {
                price: Some(12.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 12.0);
    assert_eq!(updated.id, ProductId(1));

    products.delete_product(ProductId(1)).await.unwrap();
    assert!(products.list_products().await.unwrap().is_empty());
    assert_eq!(read_file(&path), json!([]));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ids_are_one_plus_current_max() {
    let (_dir, _path, system) = store();
    let products = &system.product_client;

    for (expected, code) in [(1, "C1"), (2, "C2"), (3, "C3")] {
        let created = products.add_product(candidate("A", code)).await.unwrap();
        assert_eq!(created.id, ProductId(expected));
    }

    // Deleting a middle record leaves a gap that is never refilled
    products.delete_product(ProductId(2)).await.unwrap();
    let next = products.add_product(candidate("A", "C4")).await.unwrap();
    assert_eq!(next.id, ProductId(4));

    // Deleting the max record makes its id available again
    products.delete_product(ProductId(4)).await.unwrap();
    let reused = products.add_product(candidate("A", "C5")).await.unwrap();
    assert_eq!(reused.id, ProductId(4));
}

#[tokio::test]
async fn test_get_product_by_id() {
    let (_dir, _path, system) = store();
    let products = &system.product_client;

    let created = products.add_product(candidate("A", "C1")).await.unwrap();
    assert_eq!(
        created,
        Product::new(ProductId(1), candidate("A", "C1"))
    );
    assert_eq!(products.get_product_by_id(ProductId(1)).await, Ok(created));
    assert_eq!(
        products.get_product_by_id(ProductId(7)).await,
        Err(ProductError::NotFound("7".to_string()))
    );
}

#[tokio::test]
async fn test_invalid_insert_leaves_file_untouched() {
    let (_dir, path, system) = store();
    let products = &system.product_client;

    products.add_product(candidate("A", "C1")).await.unwrap();
    let before = std::fs::read(&path).unwrap();

    let empty_title = products.add_product(candidate("", "C2")).await;
    assert!(matches!(empty_title, Err(ProductError::Validation(msg)) if msg.contains("title")));

    let missing_stock = ProductCreate::try_from(json!({
        "title": "B", "description": "d", "price": 1.5, "thumbnail": "t", "code": "C2"
    }));
    assert!(matches!(missing_stock, Err(ProductError::Validation(_))));

    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(products.list_products().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let (_dir, _path, system) = store();
    let products = &system.product_client;

    let first = products.add_product(candidate("A", "C1")).await.unwrap();
    let second = products.add_product(candidate("B", "C2")).await.unwrap();
    let third = products.add_product(candidate("C", "C3")).await.unwrap();

    // An id inside the input never reaches the record
    let update = ProductUpdate::try_from(json!({ "id": 99, "stock": 5 })).unwrap();
    let updated = products.update_product(second.id, update).await.unwrap();

    let mut expected = second.clone();
    expected.stock = 5.0;
    assert_eq!(updated, expected);
    assert_eq!(
        products.list_products().await.unwrap(),
        vec![first, expected, third]
    );
}

#[tokio::test]
async fn test_update_rejections_persist_nothing() {
    let (_dir, path, system) = store();
    let products = &system.product_client;

    products.add_product(candidate("A", "C1")).await.unwrap();
    products.add_product(candidate("B", "C2")).await.unwrap();
    let before = std::fs::read(&path).unwrap();

    let clash = products
        .update_product(
            ProductId(2),
            ProductUpdate {
                code: Some("C1".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(clash, Err(ProductError::DuplicateCode("C1".to_string())));

    let missing = products
        .update_product(
            ProductId(42),
            ProductUpdate {
                stock: Some(1.0),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(missing, Err(ProductError::NotFound("42".to_string())));

    let emptied = products
        .update_product(
            ProductId(1),
            ProductUpdate {
                thumbnail: Some(String::new()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(emptied, Err(ProductError::Validation(_))));

    assert_eq!(std::fs::read(&path).unwrap(), before);

    // Re-submitting a record's own code is not a collision
    let same_code = products
        .update_product(
            ProductId(2),
            ProductUpdate {
                code: Some("C2".to_string()),
                stock: Some(0.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same_code.stock, 0.0);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let (_dir, _path, system) = store();
    let products = &system.product_client;

    let first = products.add_product(candidate("A", "C1")).await.unwrap();
    let second = products.add_product(candidate("B", "C2")).await.unwrap();
    let third = products.add_product(candidate("C", "C3")).await.unwrap();

    assert_eq!(
        products.delete_product(ProductId(9)).await,
        Err(ProductError::NotFound("9".to_string()))
    );

    products.delete_product(second.id).await.unwrap();
    assert_eq!(
        products.get_product_by_id(second.id).await,
        Err(ProductError::NotFound("2".to_string()))
    );
    assert_eq!(products.list_products().await.unwrap(), vec![first, third]);
}

#[tokio::test]
async fn test_file_holds_exactly_the_record_fields() {
    let (_dir, path, system) = store();

    system
        .product_client
        .add_product(ProductCreate::new("A", "d", 10.5, "t", "C1", 2.5))
        .await
        .unwrap();

    assert_eq!(
        read_file(&path),
        json!([{
            "id": 1,
            "title": "A",
            "description": "d",
            "price": 10.5,
            "thumbnail": "t",
            "code": "C1",
            "stock": 2.5
        }])
    );
}

#[tokio::test]
async fn test_existing_file_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("products.json");
    std::fs::write(
        &path,
        r#"[{"id":5,"title":"A","description":"d","price":1,"thumbnail":"t","code":"C1","stock":0}]"#,
    )
    .unwrap();

    let system = ProductSystem::open(&StoreConfig::new(&path));
    let products = &system.product_client;

    assert_eq!(products.get_product_by_id(ProductId(5)).await.unwrap().price, 1.0);
    let next = products.add_product(candidate("B", "C2")).await.unwrap();
    assert_eq!(next.id, ProductId(6));
}

#[tokio::test]
async fn test_any_numeric_stock_is_loaded_and_kept() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("products.json");
    std::fs::write(
        &path,
        concat!(
            r#"[{"id":1,"title":"A","description":"d","price":1,"thumbnail":"t","code":"C1","stock":2.5},"#,
            r#"{"id":2,"title":"B","description":"d","price":1,"thumbnail":"t","code":"C2","stock":-1}]"#
        ),
    )
    .unwrap();

    let system = ProductSystem::open(&StoreConfig::new(&path));
    let products = &system.product_client;

    let stocks: Vec<f64> = products
        .list_products()
        .await
        .unwrap()
        .iter()
        .map(|p| p.stock)
        .collect();
    assert_eq!(stocks, vec![2.5, -1.0]);

    let negative = ProductCreate::try_from(json!({
        "title": "C", "description": "d", "price": 3, "thumbnail": "t", "code": "C3", "stock": -4
    }))
    .unwrap();
    let created = products.add_product(negative).await.unwrap();
    assert_eq!(created.stock, -4.0);

    products.delete_product(ProductId(1)).await.unwrap();
    assert_eq!(
        read_file(&path)[0]["stock"],
        json!(-1.0)
    );
}

#[tokio::test]
async fn test_exhausted_ids_reject_insert_without_stopping_the_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("products.json");
    std::fs::write(
        &path,
        r#"[{"id":4294967295,"title":"A","description":"d","price":1,"thumbnail":"t","code":"C1","stock":1}]"#,
    )
    .unwrap();

    let system = ProductSystem::open(&StoreConfig::new(&path));
    let products = &system.product_client;

    assert_eq!(
        products.add_product(candidate("B", "C2")).await,
        Err(ProductError::IdsExhausted(ProductId(u32::MAX)))
    );

    let remaining = products.list_products().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, ProductId(u32::MAX));

    // The store keeps serving the other operations
    products.delete_product(ProductId(u32::MAX)).await.unwrap();
    let fresh = products.add_product(candidate("B", "C2")).await.unwrap();
    assert_eq!(fresh.id, ProductId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_file_is_reported_as_io() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("products.json");
    std::fs::write(&path, "{ not json").unwrap();

    let system = ProductSystem::open(&StoreConfig::new(&path));
    let products = &system.product_client;

    assert!(matches!(products.list_products().await, Err(ProductError::Io(_))));
    assert!(matches!(
        products.add_product(candidate("A", "C1")).await,
        Err(ProductError::Io(_))
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[tokio::test]
async fn test_concurrent_inserts_lose_nothing() {
    let (_dir, path, system) = store();

    let mut handles = vec![];
    for i in 0..25 {
        let client = system.product_client.clone();
        handles.push(tokio::spawn(async move {
            client.add_product(candidate("A", &format!("C{i}"))).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id.0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=25).collect::<Vec<_>>());

    system.shutdown().await.unwrap();
    assert_eq!(read_file(&path).as_array().unwrap().len(), 25);
}
