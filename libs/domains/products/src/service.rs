//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{ProductError, ProductResult, messages};
use crate::models::{Product, ProductDto, present_ref};
use crate::repository::ProductRepository;

/// Turns repository outcomes into caller-meaningful errors.
///
/// Mutations first read the target so that a missing product is always
/// reported as `NotFound`, and an empty store answer to a write as
/// `Unavailable`.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Creates a product, rejecting an id that is already stored.
    #[instrument(skip(self, dto), fields(product_id = ?dto.id))]
    pub async fn save(&self, dto: ProductDto) -> ProductResult<Product> {
        if let Some(id) = present_ref(&dto.id) {
            if self.repository.find_by_id(id).await?.is_some() {
                warn!("Product id already exists");
                return Err(ProductError::conflict(messages::DUPLICATE_PRODUCT));
            }
        }

        let product = Product::new(dto)?;

        let created = self
            .repository
            .create(product)
            .await?
            .ok_or_else(|| ProductError::unavailable(messages::SAVE_FAILED))?;

        info!(product_id = %created.id(), "Product created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> ProductResult<Product> {
        if id.is_empty() {
            return Err(ProductError::invalid_argument(messages::ID_REQUIRED));
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::not_found(messages::NOT_FOUND))
    }

    /// Replaces every field of an existing product with the values in `dto`.
    #[instrument(skip(self, dto), fields(product_id = ?dto.id))]
    pub async fn update_by_id(&self, dto: ProductDto) -> ProductResult<Product> {
        let Some(id) = present_ref(&dto.id) else {
            return Err(ProductError::invalid_argument(messages::UPDATE_ID_REQUIRED));
        };

        self.find_by_id(id).await?;

        let product = Product::new(dto)?;

        let updated = self
            .repository
            .update_by_id(product)
            .await?
            .ok_or_else(|| ProductError::unavailable(messages::UPDATE_FAILED))?;

        info!(product_id = %updated.id(), "Product updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> ProductResult<Product> {
        self.find_by_id(id).await?;

        let deleted = self
            .repository
            .delete_by_id(id)
            .await?
            .ok_or_else(|| ProductError::unavailable(messages::DELETE_FAILED))?;

        info!(product_id = %deleted.id(), "Product deleted");
        Ok(deleted)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
