//! API service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{LoginRequest, SignupRequest, UserResponse},
    models::recipe::{CreateRecipeRequest, RecipeEnvelope, RecipeListResponse},
    state::AppState,
    validation,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/recipes", post(create_recipe).get(list_recipes))
        .route("/api/recipes/:id", get(get_recipe).delete(delete_recipe))
        .route("/api/recipes/:id/like", post(like_recipe))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/users", get(list_users))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "recipe-api"
    }))
}

/// Post a new recipe
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecipeRequest>,
) -> ApiResult<impl IntoResponse> {
    let new_recipe = validation::validate_create_recipe(payload)
        .map_err(|details| ApiError::Validation { details })?;

    let recipe = state
        .recipe_repository
        .insert(&new_recipe)
        .await
        .map_err(|e| {
            error!("Failed to post recipe: {}", e);
            ApiError::store("Failed to post recipe", e)
        })?;

    info!("New recipe posted: \"{}\" by {}", recipe.title, recipe.author);

    Ok((
        StatusCode::CREATED,
        Json(RecipeEnvelope {
            success: true,
            message: Some("Recipe posted successfully!".to_string()),
            recipe,
        }),
    ))
}

/// Get all recipes, newest first
pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let recipes = state.recipe_repository.list_all().await.map_err(|e| {
        error!("Failed to fetch recipes: {}", e);
        ApiError::store("Failed to fetch recipes", e)
    })?;

    Ok(Json(RecipeListResponse {
        success: true,
        count: recipes.len(),
        recipes,
    }))
}

/// Get a single recipe by id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let recipe = state
        .recipe_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            error!("Failed to fetch recipe: {}", e);
            ApiError::store("Failed to fetch recipe", e)
        })?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    Ok(Json(RecipeEnvelope {
        success: true,
        message: None,
        recipe,
    }))
}

/// Delete a recipe by id
///
/// Deletes unconditionally when the id exists: the server performs no
/// ownership check, matching the observed system where only the client
/// hides the delete affordance from non-owners.
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state.recipe_repository.delete_by_id(id).await.map_err(|e| {
        error!("Failed to delete recipe: {}", e);
        ApiError::store("Failed to delete recipe", e)
    })?;

    if deleted {
        info!("Recipe deleted: {}", id);
        Ok(Json(json!({
            "success": true,
            "message": "Recipe deleted successfully!"
        })))
    } else {
        Err(ApiError::NotFound("Recipe not found".to_string()))
    }
}

/// Like a recipe, returning the new likes count
pub async fn like_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let likes = state
        .recipe_repository
        .increment_likes(id)
        .await
        .map_err(|e| {
            error!("Failed to like recipe: {}", e);
            ApiError::store("Failed to like recipe", e)
        })?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "message": "Recipe liked!",
        "likes": likes
    })))
}

/// User signup endpoint
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> impl IntoResponse {
    info!("Signup attempt for user: {}", payload.username);

    if let Err(message) = validation::validate_username(&payload.username)
        .and_then(|_| validation::validate_email(&payload.email))
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": message})),
        );
    }

    match state
        .user_repository
        .username_or_email_exists(&payload.username, &payload.email)
        .await
    {
        Ok(true) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": "Username or email already exists"
                })),
            );
        }
        Ok(false) => {}
        Err(e) => {
            error!("Signup error: {}", e);
            return internal_error();
        }
    }

    match state.user_repository.create(&payload).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": "User created successfully",
                "user": UserResponse::from(user)
            })),
        ),
        Err(e) => {
            error!("Signup error: {}", e);
            internal_error()
        }
    }
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("Login attempt for user: {}", payload.username);

    let user = match state.user_repository.find_by_username(&payload.username).await {
        Ok(Some(user)) => user,
        Ok(None) => return invalid_credentials(),
        Err(e) => {
            error!("Login error: {}", e);
            return internal_error();
        }
    };

    match state.user_repository.verify_password(&user, &payload.password).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Login successful",
                "user": UserResponse::from(user)
            })),
        ),
        Ok(false) => invalid_credentials(),
        Err(e) => {
            error!("Login error: {}", e);
            internal_error()
        }
    }
}

/// Get all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.user_repository.get_all().await.map_err(|e| {
        error!("Failed to get users: {}", e);
        ApiError::store("Failed to get users", e)
    })?;

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(users))
}

fn invalid_credentials() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "success": false,
            "message": "Invalid username or password"
        })),
    )
}

fn internal_error() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": "Internal server error"
        })),
    )
}
