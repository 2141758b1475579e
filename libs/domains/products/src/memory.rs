//! In-process ProductRepository keeping documents in insertion order.
//!
//! Goes through the same document mapping as the MongoDB adapter and
//! enforces `_id` uniqueness, so services behave the same against either.

use async_trait::async_trait;
use mongodb::bson::Document;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::document::{PRIMARY_KEY, from_document, to_document};
use crate::error::{ProductError, ProductResult, messages};
use crate::models::Product;
use crate::repository::ProductRepository;

#[derive(Default)]
pub struct InMemoryProductRepository {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store; later duplicates of an id are dropped.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> ProductResult<Self> {
        let mut documents: Vec<Document> = Vec::new();
        for product in products {
            if position(&documents, product.id()).is_none() {
                documents.push(to_document(&product)?);
            }
        }
        Ok(Self {
            documents: RwLock::new(documents),
        })
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

fn position(documents: &[Document], id: &str) -> Option<usize> {
    documents
        .iter()
        .position(|doc| doc.get_str(PRIMARY_KEY).is_ok_and(|stored| stored == id))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let documents = self.documents.read().await;
        documents.iter().cloned().map(from_document).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let documents = self.documents.read().await;
        position(&documents, id)
            .map(|i| from_document(documents[i].clone()))
            .transpose()
    }

    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn create(&self, product: Product) -> ProductResult<Option<Product>> {
        let document = to_document(&product)?;
        let mut documents = self.documents.write().await;

        if position(&documents, product.id()).is_some() {
            return Err(ProductError::conflict(messages::DUPLICATE_PRODUCT));
        }

        documents.push(document.clone());
        from_document(document).map(Some)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn update_by_id(&self, product: Product) -> ProductResult<Option<Product>> {
        let document = to_document(&product)?;
        let mut documents = self.documents.write().await;

        match position(&documents, product.id()) {
            Some(i) => {
                documents[i] = document.clone();
                from_document(document).map(Some)
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let mut documents = self.documents.write().await;
        position(&documents, id)
            .map(|i| from_document(documents.remove(i)))
            .transpose()
    }
}
