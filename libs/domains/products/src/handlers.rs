//! HTTP handlers for the product resource

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{DeleteProduct, Product, ProductDto};
use crate::repository::ProductRepository;
use crate::service::ProductService;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductDto, DeleteProduct),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            ServiceUnavailableResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Route table for the product resource, relative to where it is nested.
///
/// | Method | Path       | Operation                         |
/// |--------|------------|-----------------------------------|
/// | GET    | `/`        | list                              |
/// | GET    | `/id/{id}` | fetch one                         |
/// | POST   | `/`        | create                            |
/// | PUT    | `/`        | replace, id taken from the body   |
/// | DELETE | `/`        | delete, id taken from the body    |
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_products)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
        .route("/id/{id}", get(get_product))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.find_all().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/id/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.find_by_id(&id).await?;
    Ok(Json(product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(dto): JsonBody<ProductDto>,
) -> ProductResult<impl IntoResponse> {
    let product = service.save(dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product; the body must carry its `id`
#[utoipa::path(
    put,
    path = "",
    tag = "Products",
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(dto): JsonBody<ProductDto>,
) -> ProductResult<Json<Product>> {
    let product = service.update_by_id(dto).await?;
    Ok(Json(product))
}

/// Delete a product and return its last state
#[utoipa::path(
    delete,
    path = "",
    tag = "Products",
    request_body = DeleteProduct,
    responses(
        (status = 200, description = "Product deleted", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(body): JsonBody<DeleteProduct>,
) -> ProductResult<Json<Product>> {
    let id = body.id.unwrap_or_default();
    let product = service.delete_by_id(&id).await?;
    Ok(Json(product))
}
