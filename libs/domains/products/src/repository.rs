use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductPage, ProductStats, UpdateProduct};
use crate::query::{self, ListCriteria};

/// Attempts at drawing an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

/// Repository trait for Product persistence
///
/// Every method is one atomic step against the collection: implementations
/// must not let a lookup and the mutation that depends on it interleave with
/// another request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Filter, search and paginate
    async fn list(&self, criteria: ListCriteria) -> ProductResult<ProductPage>;

    /// Aggregate counts over the whole collection
    async fn stats(&self) -> ProductResult<ProductStats>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Create a new product under a freshly generated id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Merge the supplied fields onto an existing product.
    /// Returns `None` when no product has this id.
    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Remove every product with this id. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}

/// Source of product identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic decimal ids, handy for deterministic tests.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// In-memory collection held for the lifetime of the process.
///
/// Insertion order is preserved; listings and pagination follow it.
#[derive(Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            ids: Arc::new(UuidIdGenerator),
        }
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryProductRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryProductRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, criteria: ListCriteria) -> ProductResult<ProductPage> {
        let products = self.products.read().await;
        Ok(query::list(&products, &criteria))
    }

    async fn stats(&self) -> ProductResult<ProductStats> {
        let products = self.products.read().await;
        Ok(query::stats(&products))
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| self.ids.next_id())
            .find(|candidate| !products.iter().any(|p| &p.id == candidate))
            .ok_or_else(|| ProductError::Internal("could not allocate a unique product id".into()))?;

        let product = Product::new(id, input);
        products.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.apply_update(input);

        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        let before = products.len();
        products.retain(|p| p.id != id);
        let removed = products.len() != before;

        if removed {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_products;

    fn input(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: "desc".to_string(),
            price,
            category: "misc".to_string(),
            in_stock: None,
        }
    }

    /// Hands out the same id forever.
    struct Stuck(&'static str);

    impl IdGenerator for Stuck {
        fn next_id(&self) -> String {
            self.0.to_string()
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(input("Kettle", 25.0)).await.unwrap();
        assert!(product.in_stock);
        assert!(Uuid::parse_str(&product.id).is_ok());

        let fetched = repo.get_by_id(&product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_create_appends_in_order() {
        let repo = InMemoryProductRepository::with_products(seed_products())
            .with_id_generator(SequentialIdGenerator::starting_at(100));

        repo.create(input("Kettle", 25.0)).await.unwrap();
        let page = repo.list(ListCriteria::default()).await.unwrap();

        let ids: Vec<_> = page.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "100"]);
    }

    #[tokio::test]
    async fn test_create_skips_taken_ids() {
        let repo = InMemoryProductRepository::with_products(seed_products())
            .with_id_generator(SequentialIdGenerator::starting_at(2));

        let product = repo.create(input("Kettle", 25.0)).await.unwrap();
        assert_eq!(product.id, "4");
    }

    #[tokio::test]
    async fn test_create_gives_up_when_ids_collide() {
        let repo =
            InMemoryProductRepository::with_products(seed_products()).with_id_generator(Stuck("1"));

        let result = repo.create(input("Kettle", 25.0)).await;
        assert!(matches!(result, Err(ProductError::Internal(_))));
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_id() {
        let repo = InMemoryProductRepository::with_products(seed_products());

        let update = UpdateProduct {
            price: Some(999.0),
            ..Default::default()
        };
        let updated = repo.update("1", update).await.unwrap().unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(updated.price, 999.0);
        assert_eq!(updated.name, "Laptop");
        assert_eq!(repo.get_by_id("1").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryProductRepository::with_products(seed_products());
        let result = repo.update("42", UpdateProduct::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryProductRepository::with_products(seed_products());

        assert!(repo.delete("2").await.unwrap());
        assert!(!repo.delete("2").await.unwrap());
        assert!(repo.get_by_id("2").await.unwrap().is_none());
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = InMemoryProductRepository::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(input(&format!("P{i}"), 1.0)).await })
            })
            .collect();

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().unwrap().id);
        }
        assert_eq!(ids.len(), 32);
        assert_eq!(repo.len().await, 32);
    }
}
