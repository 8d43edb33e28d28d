//! # Product Store
//!
//! Runs the canonical scenario against the file named by `PRODUCT_STORE_PATH`
//! (default `products.json`):
//!
//! 1. Insert a product and read back its assigned id.
//! 2. Insert a second product with the same `code` and observe the rejection.
//! 3. Update the price and fetch the record by id.
//! 4. Delete it and list what is left.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin product-store
//! ```

use collection_actor::tracing::setup_tracing;
use product_store::config::StoreConfig;
use product_store::lifecycle::ProductSystem;
use product_store::model::{ProductCreate, ProductUpdate};
use product_store::product_actor::ProductError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StoreConfig::from_env()?;
    info!(path = %config.path.display(), "Starting product store");

    let system = ProductSystem::open(&config);
    let products = &system.product_client;

    let existing = products.list_products().await?;
    info!(count = existing.len(), "Loaded collection");

    let created = products
        .add_product(ProductCreate::new(
            "Demo Widget",
            "A widget created by the demo run",
            10.0,
            "img/widget.png",
            "DEMO-WIDGET",
            3.0,
        ))
        .await?;
    info!(id = %created.id, code = %created.code, "Product created");

    let span = tracing::info_span!("duplicate_insert", code = %created.code);
    let duplicate = async {
        products
            .add_product(ProductCreate::new(
                "Another Widget",
                "Same business key",
                5.0,
                "img/widget.png",
                created.code.clone(),
                1.0,
            ))
            .await
    }
    .instrument(span)
    .await;

    match duplicate {
        Err(ProductError::DuplicateCode(code)) => info!(%code, "Duplicate code rejected"),
        Err(e) => return Err(e.into()),
        Ok(product) => warn!(id = %product.id, "Duplicate code was accepted"),
    }

    let update = ProductUpdate {
        price: Some(12.0),
        ..Default::default()
    };
    let updated = products.update_product(created.id, update).await?;
    info!(id = %updated.id, price = updated.price, "Product updated");

    let fetched = products.get_product_by_id(created.id).await?;
    info!(id = %fetched.id, stock = fetched.stock, "Product fetched");

    products.delete_product(created.id).await?;
    let remaining = products.list_products().await?;
    info!(count = remaining.len(), "Product deleted");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
