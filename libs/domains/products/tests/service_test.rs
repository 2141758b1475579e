//! Service behaviour against a real (in-memory) store.

use async_trait::async_trait;
use domain_products::error::messages;
use domain_products::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use test_utils::TestDataBuilder;
use tokio::sync::Barrier;

fn service_with(products: Vec<Product>) -> ProductService<InMemoryProductRepository> {
    ProductService::new(InMemoryProductRepository::with_products(products).unwrap())
}

fn stored(id: &str, price: f64) -> Product {
    Product::new(ProductDto::new(format!("item {id}"), "stored", price).with_id(id)).unwrap()
}

#[tokio::test]
async fn test_save_then_find_returns_equal_entity() {
    let builder = TestDataBuilder::from_test_name("save_then_find");
    let service = service_with(vec![]);

    let dto = ProductDto::new(builder.name("product", "a"), "Round trip", builder.price())
        .with_id(builder.product_id());
    let saved = service.save(dto).await.unwrap();
    let found = service.find_by_id(saved.id()).await.unwrap();

    assert_eq!(found, saved);
}

#[tokio::test]
async fn test_second_save_with_same_id_conflicts() {
    let service = service_with(vec![]);
    let dto = ProductDto::new("Lamp", "Desk lamp", 10.0).with_id("dup");

    service.save(dto.clone()).await.unwrap();
    let err = service.save(dto).await.unwrap_err();

    assert_eq!(err, ProductError::Conflict(messages::DUPLICATE_PRODUCT.into()));
}

/// Holds each `find_by_id` until two lookups are in flight, so concurrent
/// saves both pass the existence check and race at `create`.
struct LockstepRepository {
    inner: InMemoryProductRepository,
    lookups: Barrier,
    creates: Arc<AtomicUsize>,
}

#[async_trait]
impl ProductRepository for LockstepRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let found = self.inner.find_by_id(id).await?;
        self.lookups.wait().await;
        Ok(found)
    }

    async fn create(&self, product: Product) -> ProductResult<Option<Product>> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(product).await
    }

    async fn update_by_id(&self, product: Product) -> ProductResult<Option<Product>> {
        self.inner.update_by_id(product).await
    }

    async fn delete_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        self.inner.delete_by_id(id).await
    }
}

#[tokio::test]
async fn test_racing_saves_are_settled_by_the_store() {
    let creates = Arc::new(AtomicUsize::new(0));
    let service = ProductService::new(LockstepRepository {
        inner: InMemoryProductRepository::new(),
        lookups: Barrier::new(2),
        creates: creates.clone(),
    });
    let dto = ProductDto::new("Lamp", "Desk lamp", 10.0).with_id("race");

    let (a, b) = tokio::join!(service.save(dto.clone()), service.save(dto));

    assert_eq!(creates.load(Ordering::SeqCst), 2);
    assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
    let err = a.err().or(b.err()).unwrap();
    assert_eq!(err, ProductError::Conflict(messages::DUPLICATE_PRODUCT.into()));
    assert_eq!(service.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_all_on_empty_store() {
    assert!(service_with(vec![]).find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_ids_are_rejected() {
    let service = service_with(vec![stored("a", 10.0)]);

    assert!(matches!(
        service.find_by_id("").await,
        Err(ProductError::InvalidArgument(_))
    ));
    assert!(matches!(
        service.update_by_id(ProductDto::new("n", "d", 1.0).with_id("")).await,
        Err(ProductError::InvalidArgument(_))
    ));
    assert!(matches!(
        service.delete_by_id("").await,
        Err(ProductError::InvalidArgument(_))
    ));

    assert_eq!(service.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_scenario() {
    let service = service_with(vec![stored("a", 10.0), stored("b", 20.0)]);

    let deleted = service.delete_by_id("a").await.unwrap();
    assert_eq!(deleted.id(), "a");
    assert_eq!(deleted.price(), 10.0);

    let remaining = service.find_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id(), "b");

    assert_eq!(
        service.delete_by_id("c").await,
        Err(ProductError::NotFound(messages::NOT_FOUND.into()))
    );
}

#[tokio::test]
async fn test_update_scenario_replaces_every_field() {
    let original = Product::new(
        ProductDto::new("Old", "Old desc", 10.0)
            .with_id("a")
            .with_image("old.png")
            .with_quantity(4.0),
    )
    .unwrap();
    let service = service_with(vec![original]);

    let updated = service
        .update_by_id(ProductDto::new("New", "D", 5.0).with_id("a"))
        .await
        .unwrap();

    assert_eq!(updated.id(), "a");
    assert_eq!(updated.name(), "New");
    assert_eq!(updated.description(), "D");
    assert_eq!(updated.price(), 5.0);
    assert_eq!(updated.quantity(), None);
    assert_ne!(updated.image(), "old.png");

    assert_eq!(service.find_by_id("a").await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let service = service_with(vec![]);
    let err = service
        .update_by_id(ProductDto::new("New", "D", 5.0).with_id("ghost"))
        .await
        .unwrap_err();

    assert_eq!(err, ProductError::NotFound(messages::NOT_FOUND.into()));
}
