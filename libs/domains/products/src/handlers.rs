//! HTTP handlers for Products API

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_helpers::{
    errors::{
        handlers::not_found,
        responses::{
            BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
            UnauthorizedResponse,
        },
    },
    guard_middleware, ApiKeyGuard, GuardPipeline, PathParam, QueryPairs, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, Product, ProductPage, ProductQuery, ProductStats, UpdateProduct,
};
use crate::query::ListCriteria;
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::ProductValidationGuard;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        product_stats,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, ProductPage, ProductStats),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints.
///
/// Writes sit behind guard pipelines: create and update run the API key
/// guard then the body validation guard; delete runs the API key guard only.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    api_key: ApiKeyGuard,
) -> Router {
    let shared_service = Arc::new(service);

    let create_guards = GuardPipeline::new()
        .guard(api_key.clone())
        .guard(ProductValidationGuard::full());
    let update_guards = GuardPipeline::new()
        .guard(api_key.clone())
        .guard(ProductValidationGuard::partial());
    let delete_guards = GuardPipeline::new().guard(api_key);

    Router::new()
        .route("/", get(list_products))
        .route(
            "/",
            post(create_product).route_layer(middleware::from_fn_with_state(
                Arc::new(create_guards),
                guard_middleware,
            )),
        )
        .route("/stats", get(product_stats))
        .route("/{id}", get(get_product))
        .route(
            "/{id}",
            put(update_product).route_layer(middleware::from_fn_with_state(
                Arc::new(update_guards),
                guard_middleware,
            )),
        )
        .route(
            "/{id}",
            delete(delete_product).route_layer(middleware::from_fn_with_state(
                Arc::new(delete_guards),
                guard_middleware,
            )),
        )
        .method_not_allowed_fallback(not_found)
        .with_state(shared_service)
}

/// List products with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of matching products", body = ProductPage),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    query: QueryPairs,
) -> ProductResult<Json<ProductPage>> {
    let criteria = ListCriteria::from(ProductQuery::from(&query));
    let page = service.list_products(criteria).await?;
    Ok(Json(page))
}

/// Product counts overall and per category
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Catalog statistics", body = ProductStats),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn product_stats<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductStats>> {
    let stats = service.product_stats().await?;
    Ok(Json(stats))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Create a new product
///
/// Requires the `x-api-key` header.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product
///
/// Only supplied fields change; the id is taken from the path. Requires the
/// `x-api-key` header.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<String>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
///
/// Requires the `x-api-key` header.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<String>,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
