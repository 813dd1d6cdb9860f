//! Recipe models for the API service
//!
//! Wire fields are camelCase (`cookingTime`, `authorEmail`, `createdAt`),
//! matching the contract the mobile client consumes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recipe difficulty enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "difficulty must be one of Easy, Medium, Hard (got \"{}\")",
                other
            )),
        }
    }
}

/// Structured ingredient entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
}

/// Numbered instruction step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstructionStep {
    #[serde(default)]
    pub step: i32,
    #[serde(default)]
    pub description: String,
}

/// Recipe document as stored and served
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    pub cooking_time: i32,
    pub difficulty: Difficulty,
    pub category: String,
    pub author: String,
    pub author_email: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming create payload; every field optional so validation can report
/// all missing fields in one envelope instead of a deserializer rejection
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<Vec<InstructionStep>>,
    pub cooking_time: Option<i32>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
}

/// Validated create payload ready for insertion; `id`, timestamps, and
/// `likes` are assigned by the store
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    pub cooking_time: i32,
    pub difficulty: Difficulty,
    pub category: String,
    pub author: String,
    pub author_email: String,
}

/// Envelope for single-recipe responses
#[derive(Debug, Serialize)]
pub struct RecipeEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub recipe: Recipe,
}

/// Envelope for the feed listing
#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub success: bool,
    pub count: usize,
    pub recipes: Vec<Recipe>,
}
