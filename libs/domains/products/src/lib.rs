//! Products Domain
//!
//! An in-memory product catalog: CRUD over a process-lifetime collection,
//! plus filtering, search, pagination and statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, guard pipelines on writes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Collection access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Query    │  ← Filter, search, paginate, aggregate
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::ApiKeyGuard;
//! use domain_products::{
//!     handlers,
//!     models::seed_products,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! let repository = InMemoryProductRepository::with_products(seed_products());
//! let service = ProductService::new(repository);
//!
//! // Mount under /api/products
//! let router = handlers::router(service, ApiKeyGuard::new(Some("secret".into())));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    seed_products, CreateProduct, Product, ProductPage, ProductQuery, ProductStats,
    UpdateProduct,
};
pub use query::{ListCriteria, Pagination};
pub use repository::{
    IdGenerator, InMemoryProductRepository, ProductRepository, SequentialIdGenerator,
    UuidIdGenerator,
};
pub use service::ProductService;
pub use validation::{ProductValidationGuard, ValidationMode};
