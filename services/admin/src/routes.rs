//! Admin service routes

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::{
        IdentitySync, NewCategory, NewProduct, NewReview, UpdateCategory, UpdateProduct,
        UpdateReview, UpdateUser,
    },
    repositories::{CategoryRepository, ProductRepository, ReviewRepository, UserRepository},
};
use common::database::ensure_pool;
use common::error::StoreError;

/// Create the router for the admin service
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/admin/categories", post(create_category))
        .route("/admin/categories", get(get_categories))
        .route("/admin/categories/:id", get(get_category))
        .route("/admin/categories/:id", put(update_category))
        .route("/admin/categories/:id", delete(delete_category))
        .route("/admin/products", post(create_product))
        .route("/admin/products", get(get_products))
        .route("/admin/products/:id", get(get_product))
        .route("/admin/products/:id", put(update_product))
        .route("/admin/products/:id", delete(delete_product))
        .route("/admin/reviews", post(create_review))
        .route("/admin/reviews", get(get_reviews))
        .route("/admin/reviews/:id", get(get_review))
        .route("/admin/reviews/:id", put(update_review))
        .route("/admin/reviews/:id", delete(delete_review))
        .route("/admin/users", get(get_users))
        .route("/admin/users/:id", get(get_user))
        .route("/admin/users/:id", put(update_user))
        .route("/admin/users/:id", delete(delete_user))
        .route("/webhooks/identity", post(identity_webhook))
}

/// Health check endpoint reporting database reachability
pub async fn health_check() -> impl IntoResponse {
    let database = match ensure_pool().await {
        Ok(pool) => common::database::health_check(pool).await.unwrap_or(false),
        Err(_) => false,
    };

    Json(json!({
        "status": "ok",
        "service": "admin-service",
        "database": database,
    }))
}

/// Create a new category
pub async fn create_category(
    Json(payload): Json<NewCategory>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let category = CategoryRepository::new(pool.clone()).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Get all categories
pub async fn get_categories() -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let categories = CategoryRepository::new(pool.clone()).get_all().await?;

    Ok(Json(categories))
}

/// Get a category by ID
pub async fn get_category(Path(id): Path<Uuid>) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let category = CategoryRepository::new(pool.clone())
        .find_by_id(id)
        .await?
        .ok_or(StoreError::NotFound {
            resource: "category",
        })?;

    Ok(Json(category))
}

/// Update a category
pub async fn update_category(
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategory>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let category = CategoryRepository::new(pool.clone())
        .update(id, &payload)
        .await?;

    Ok(Json(category))
}

/// Delete a category
pub async fn delete_category(Path(id): Path<Uuid>) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    CategoryRepository::new(pool.clone()).delete(id).await?;

    Ok(Json(json!({"message": "Category deleted successfully"})))
}

/// Create a new product
pub async fn create_product(
    Json(payload): Json<NewProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let product = ProductRepository::new(pool.clone()).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Get all products
pub async fn get_products() -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let products = ProductRepository::new(pool.clone()).get_all().await?;

    Ok(Json(products))
}

/// Get a product by ID
pub async fn get_product(Path(id): Path<Uuid>) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let product = ProductRepository::new(pool.clone())
        .find_by_id(id)
        .await?
        .ok_or(StoreError::NotFound {
            resource: "product",
        })?;

    Ok(Json(product))
}

/// Update a product
pub async fn update_product(
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let product = ProductRepository::new(pool.clone())
        .update(id, &payload)
        .await?;

    Ok(Json(product))
}

/// Delete a product
pub async fn delete_product(Path(id): Path<Uuid>) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    ProductRepository::new(pool.clone()).delete(id).await?;

    Ok(Json(json!({"message": "Product deleted successfully"})))
}

/// Create a new review
pub async fn create_review(Json(payload): Json<NewReview>) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let review = ReviewRepository::new(pool.clone()).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// Get all reviews
pub async fn get_reviews() -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let reviews = ReviewRepository::new(pool.clone()).get_all().await?;

    Ok(Json(reviews))
}

/// Get a review by ID
pub async fn get_review(Path(id): Path<Uuid>) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let review = ReviewRepository::new(pool.clone())
        .find_by_id(id)
        .await?
        .ok_or(StoreError::NotFound { resource: "review" })?;

    Ok(Json(review))
}

/// Update a review
pub async fn update_review(
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReview>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let review = ReviewRepository::new(pool.clone())
        .update(id, &payload)
        .await?;

    Ok(Json(review))
}

/// Delete a review
pub async fn delete_review(Path(id): Path<Uuid>) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    ReviewRepository::new(pool.clone()).delete(id).await?;

    Ok(Json(json!({"message": "Review deleted successfully"})))
}

/// Get all users
pub async fn get_users() -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let users = UserRepository::new(pool.clone()).get_all().await?;

    Ok(Json(users))
}

/// Get a user by ID
pub async fn get_user(Path(id): Path<Uuid>) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let user = UserRepository::new(pool.clone())
        .find_by_id(id)
        .await?
        .ok_or(StoreError::NotFound { resource: "user" })?;

    Ok(Json(user))
}

/// Update a user; the identity reference itself cannot be changed
pub async fn update_user(
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUser>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let user = UserRepository::new(pool.clone()).update(id, &payload).await?;

    Ok(Json(user))
}

/// Delete a user
pub async fn delete_user(Path(id): Path<Uuid>) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    UserRepository::new(pool.clone()).delete(id).await?;

    Ok(Json(json!({"message": "User deleted successfully"})))
}

/// Consume an identity-provider sync event and upsert the user record.
/// Delivery is at-least-once; the upsert makes repeats converge.
pub async fn identity_webhook(
    Json(payload): Json<IdentitySync>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = ensure_pool().await?;
    let user = UserRepository::new(pool.clone())
        .sync_from_identity(&payload)
        .await?;

    Ok(Json(user))
}
