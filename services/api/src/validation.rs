//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

use crate::models::recipe::{CreateRecipeRequest, Difficulty, NewRecipe};

/// Validate a create-recipe payload into an insertable record
///
/// Collects every problem instead of stopping at the first, so the client
/// gets the full list of missing/invalid fields in one response.
pub fn validate_create_recipe(payload: CreateRecipeRequest) -> Result<NewRecipe, Vec<String>> {
    let mut details = Vec::new();

    let title = required_text("title", payload.title, &mut details);
    let description = required_text("description", payload.description, &mut details);
    let category = required_text("category", payload.category, &mut details);
    let author = required_text("author", payload.author, &mut details);
    let author_email = required_text("authorEmail", payload.author_email, &mut details);

    let cooking_time = match payload.cooking_time {
        Some(minutes) if minutes > 0 => minutes,
        Some(minutes) => {
            details.push(format!(
                "cookingTime must be a positive number of minutes (got {})",
                minutes
            ));
            0
        }
        None => {
            details.push("cookingTime is required".to_string());
            0
        }
    };

    // Absent difficulty defaults to Easy; a present but unknown value is
    // rejected rather than coerced.
    let difficulty = match payload.difficulty.as_deref() {
        None => Difficulty::Easy,
        Some(raw) => match raw.parse::<Difficulty>() {
            Ok(difficulty) => difficulty,
            Err(e) => {
                details.push(e);
                Difficulty::Easy
            }
        },
    };

    if !details.is_empty() {
        return Err(details);
    }

    Ok(NewRecipe {
        title,
        description,
        ingredients: payload.ingredients.unwrap_or_default(),
        instructions: payload.instructions.unwrap_or_default(),
        cooking_time,
        difficulty,
        category,
        author,
        author_email,
    })
}

fn required_text(field: &str, value: Option<String>, details: &mut Vec<String>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            details.push(format!("{} is required", field));
            String::new()
        }
    }
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required".to_string());
    }

    if username.len() < 3 {
        return Err("Username must be at least 3 characters long".to_string());
    }

    if username.len() > 32 {
        return Err("Username must be at most 32 characters long".to_string());
    }

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to compile username regex"));

    if !regex.is_match(username) {
        return Err("Username can only contain letters, numbers, and underscores".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: Some("Pancakes".to_string()),
            description: Some("Fluffy breakfast pancakes".to_string()),
            ingredients: None,
            instructions: None,
            cooking_time: Some(20),
            difficulty: None,
            category: Some("Breakfast".to_string()),
            author: Some("Alice".to_string()),
            author_email: Some("alice@example.com".to_string()),
        }
    }

    #[test]
    fn test_valid_payload_defaults() {
        let recipe = validate_create_recipe(full_payload()).unwrap();
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let payload = CreateRecipeRequest::default();
        let details = validate_create_recipe(payload).unwrap_err();
        assert!(details.iter().any(|d| d.contains("title")));
        assert!(details.iter().any(|d| d.contains("description")));
        assert!(details.iter().any(|d| d.contains("cookingTime")));
        assert!(details.iter().any(|d| d.contains("category")));
        assert!(details.iter().any(|d| d.contains("author is required")));
        assert!(details.iter().any(|d| d.contains("authorEmail")));
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut payload = full_payload();
        payload.title = Some("   ".to_string());
        let details = validate_create_recipe(payload).unwrap_err();
        assert_eq!(details, vec!["title is required".to_string()]);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let mut payload = full_payload();
        payload.difficulty = Some("Extreme".to_string());
        let details = validate_create_recipe(payload).unwrap_err();
        assert_eq!(details.len(), 1);
        assert!(details[0].contains("Extreme"));
    }

    #[test]
    fn test_explicit_difficulty_kept() {
        let mut payload = full_payload();
        payload.difficulty = Some("Hard".to_string());
        let recipe = validate_create_recipe(payload).unwrap();
        assert_eq!(recipe.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_non_positive_cooking_time_rejected() {
        let mut payload = full_payload();
        payload.cooking_time = Some(0);
        assert!(validate_create_recipe(payload).is_err());

        let mut payload = full_payload();
        payload.cooking_time = Some(-5);
        assert!(validate_create_recipe(payload).is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice_01").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has spaces").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
    }
}
