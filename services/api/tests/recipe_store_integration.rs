//! Integration tests for the recipe store
//!
//! These tests run against a live PostgreSQL instance configured through
//! `DATABASE_URL` and verify the store-level contract: assigned fields,
//! newest-first ordering, atomic like counting, and delete semantics.

use api::models::recipe::{Difficulty, NewRecipe};
use api::repositories::recipe::RecipeRepository;
use common::database::{DatabaseConfig, ensure_schema, init_pool};
use uuid::Uuid;

fn sample_recipe(title: &str, marker: &str) -> NewRecipe {
    NewRecipe {
        title: title.to_string(),
        description: "Integration test recipe".to_string(),
        ingredients: vec![],
        instructions: vec![],
        cooking_time: 25,
        difficulty: Difficulty::Easy,
        category: marker.to_string(),
        author: "Test Author".to_string(),
        author_email: "author@example.com".to_string(),
    }
}

async fn test_repository() -> Result<RecipeRepository, Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_pool(&config).await?;
    ensure_schema(&pool).await?;
    Ok(RecipeRepository::new(pool))
}

#[tokio::test]
async fn test_insert_assigns_stable_id_and_created_at() -> Result<(), Box<dyn std::error::Error>> {
    let repo = test_repository().await?;
    let marker = format!("it-{}", Uuid::new_v4());

    let created = repo.insert(&sample_recipe("Stable fields", &marker)).await?;
    assert_eq!(created.likes, 0);

    let fetched = repo
        .find_by_id(created.id)
        .await?
        .expect("created recipe should be retrievable");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.created_at, created.created_at);

    // createdAt survives a mutation of the record
    repo.increment_likes(created.id).await?;
    let refetched = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(refetched.created_at, created.created_at);

    repo.delete_by_id(created.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_schema_rejects_unknown_difficulty() -> Result<(), Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_pool(&config).await?;
    ensure_schema(&pool).await?;

    // The CHECK constraint must reject an out-of-enumeration difficulty
    // even when the typed repository layer is bypassed.
    let result = sqlx::query(
        r#"
        INSERT INTO recipes
            (title, description, cooking_time, difficulty, category, author, author_email)
        VALUES ('Bad', 'Bad', 10, 'Extreme', 'it-check', 'a', 'a@x.com')
        "#,
    )
    .execute(&pool)
    .await;

    assert!(result.is_err(), "difficulty CHECK constraint not enforced");
    Ok(())
}

#[tokio::test]
async fn test_list_all_orders_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let repo = test_repository().await?;
    let marker = format!("it-{}", Uuid::new_v4());

    let first = repo.insert(&sample_recipe("First", &marker)).await?;
    let second = repo.insert(&sample_recipe("Second", &marker)).await?;
    let third = repo.insert(&sample_recipe("Third", &marker)).await?;

    let listed: Vec<_> = repo
        .list_all()
        .await?
        .into_iter()
        .filter(|r| r.category == marker)
        .collect();

    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].id, third.id);
    assert_eq!(listed[1].id, second.id);
    assert_eq!(listed[2].id, first.id);

    for recipe in listed {
        repo.delete_by_id(recipe.id).await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_concurrent_likes_are_not_lost() -> Result<(), Box<dyn std::error::Error>> {
    let repo = test_repository().await?;
    let marker = format!("it-{}", Uuid::new_v4());
    let created = repo.insert(&sample_recipe("Liked", &marker)).await?;

    const LIKERS: usize = 20;
    let mut handles = Vec::with_capacity(LIKERS);
    for _ in 0..LIKERS {
        let repo = repo.clone();
        let id = created.id;
        handles.push(tokio::spawn(async move { repo.increment_likes(id).await }));
    }

    for handle in handles {
        handle.await??;
    }

    let liked = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(liked.likes, LIKERS as i32);

    repo.delete_by_id(created.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_delete_semantics() -> Result<(), Box<dyn std::error::Error>> {
    let repo = test_repository().await?;
    let marker = format!("it-{}", Uuid::new_v4());

    let keep = repo.insert(&sample_recipe("Keep", &marker)).await?;
    let remove = repo.insert(&sample_recipe("Remove", &marker)).await?;

    // Unknown id: not-found result, store unchanged
    assert!(!repo.delete_by_id(Uuid::new_v4()).await?);
    let count = repo
        .list_all()
        .await?
        .into_iter()
        .filter(|r| r.category == marker)
        .count();
    assert_eq!(count, 2);

    // Existing id: exactly that record goes away
    assert!(repo.delete_by_id(remove.id).await?);
    assert!(repo.find_by_id(remove.id).await?.is_none());
    assert!(repo.find_by_id(keep.id).await?.is_some());

    repo.delete_by_id(keep.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_like_on_unknown_id_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let repo = test_repository().await?;
    assert!(repo.increment_likes(Uuid::new_v4()).await?.is_none());
    Ok(())
}
