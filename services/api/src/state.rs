//! Application state shared across handlers

use sqlx::PgPool;

use crate::repositories::{UserRepository, recipe::RecipeRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub recipe_repository: RecipeRepository,
    pub user_repository: UserRepository,
}
