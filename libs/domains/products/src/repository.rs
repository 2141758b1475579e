use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Storage port used by [`crate::ProductService`].
///
/// Lookups and mutations report "no such document" as `Ok(None)`; `Err` is
/// reserved for store faults and for an id the store refuses as a duplicate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in store order.
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Inserts `product` and returns it as stored.
    async fn create(&self, product: Product) -> ProductResult<Option<Product>>;

    /// Replaces the whole document whose id equals `product.id()`.
    async fn update_by_id(&self, product: Product) -> ProductResult<Option<Product>>;

    /// Removes the product and returns its last state.
    async fn delete_by_id(&self, id: &str) -> ProductResult<Option<Product>>;
}
