//! Recipe repository for database operations
//!
//! The store assigns `id`, `created_at`, `updated_at`, and the `likes`
//! counter on insertion; callers never supply them. Ownership is not
//! checked at this layer.

use anyhow::Result;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::models::recipe::{NewRecipe, Recipe};

const RECIPE_COLUMNS: &str = "id, title, description, ingredients, instructions, \
     cooking_time, difficulty, category, author, author_email, likes, created_at, updated_at";

/// Recipe repository for database operations
#[derive(Clone)]
pub struct RecipeRepository {
    pool: PgPool,
}

impl RecipeRepository {
    /// Create a new recipe repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new recipe and return the stored record with its assigned
    /// id, timestamps, and zeroed likes counter
    pub async fn insert(&self, new_recipe: &NewRecipe) -> Result<Recipe> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO recipes
                (title, description, ingredients, instructions, cooking_time,
                 difficulty, category, author, author_email)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {RECIPE_COLUMNS}
            "#
        ))
        .bind(&new_recipe.title)
        .bind(&new_recipe.description)
        .bind(serde_json::to_value(&new_recipe.ingredients)?)
        .bind(serde_json::to_value(&new_recipe.instructions)?)
        .bind(new_recipe.cooking_time)
        .bind(new_recipe.difficulty.as_str())
        .bind(&new_recipe.category)
        .bind(&new_recipe.author)
        .bind(&new_recipe.author_email)
        .fetch_one(&self.pool)
        .await?;

        recipe_from_row(&row)
    }

    /// Get all recipes ordered newest-first
    ///
    /// `seq` breaks timestamp ties deterministically: within a tie the
    /// later insert sorts first.
    pub async fn list_all(&self) -> Result<Vec<Recipe>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {RECIPE_COLUMNS}
            FROM recipes
            ORDER BY created_at DESC, seq DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(recipe_from_row).collect()
    }

    /// Find a recipe by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {RECIPE_COLUMNS}
            FROM recipes
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(recipe_from_row).transpose()
    }

    /// Delete a recipe by id, returning whether a record was removed
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Atomically increment the likes counter, returning the new count or
    /// `None` if the id does not exist
    ///
    /// A single conditional UPDATE, never read-then-write, so concurrent
    /// likes on the same recipe are never lost. `updated_at` is left
    /// untouched by likes.
    pub async fn increment_likes(&self, id: Uuid) -> Result<Option<i32>> {
        let row = sqlx::query(
            r#"
            UPDATE recipes
            SET likes = likes + 1
            WHERE id = $1
            RETURNING likes
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| row.get("likes")))
    }
}

fn recipe_from_row(row: &PgRow) -> Result<Recipe> {
    let difficulty: String = row.get("difficulty");
    let ingredients: serde_json::Value = row.get("ingredients");
    let instructions: serde_json::Value = row.get("instructions");

    Ok(Recipe {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        ingredients: serde_json::from_value(ingredients)?,
        instructions: serde_json::from_value(instructions)?,
        cooking_time: row.get("cooking_time"),
        difficulty: difficulty
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?,
        category: row.get("category"),
        author: row.get("author"),
        author_email: row.get("author_email"),
        likes: row.get("likes"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
