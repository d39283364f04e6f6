//! Denormalised view assembly.
//!
//! Related records for a whole page are fetched with the Sea-ORM loader in a
//! fixed number of queries regardless of page length, never one query per
//! recipe.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, LoaderTrait};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{
    classification, course, meal, preparation, recipe, recipe_course, recipe_meal,
    recipe_preparation, source,
};

/// A recipe joined with the human-readable names of its classification,
/// source, and related-entity sets, ready for presentation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeView {
    pub id: Uuid,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub notes: Option<String>,
    pub servings: i32,
    pub calories: Option<f64>,
    pub fat: Option<f64>,
    pub cholesterol: Option<f64>,
    pub sodium: Option<f64>,
    pub protein: Option<f64>,
    pub date_added: DateTime<Utc>,
    pub marked: bool,
    pub classification: Option<String>,
    pub source: Option<String>,
    pub meals: Vec<String>,
    pub preparations: Vec<String>,
    pub courses: Vec<String>,
}

fn sorted_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort();
    names
}

/// Join a page of recipes with their related entities.
///
/// Five batched lookups cover the whole page (classification, source, meals,
/// preparations, courses); output order matches input order exactly.
///
/// # Errors
///
/// Returns a `DbErr` when any of the batched lookups fails.
pub async fn assemble_recipe_views(
    db: &DatabaseConnection,
    recipes: Vec<recipe::Model>,
) -> Result<Vec<RecipeView>, DbErr> {
    if recipes.is_empty() {
        return Ok(Vec::new());
    }

    let classifications = recipes.load_one(classification::Entity, db).await?;
    let sources = recipes.load_one(source::Entity, db).await?;
    let meals = recipes
        .load_many_to_many(meal::Entity, recipe_meal::Entity, db)
        .await?;
    let preparations = recipes
        .load_many_to_many(preparation::Entity, recipe_preparation::Entity, db)
        .await?;
    let courses = recipes
        .load_many_to_many(course::Entity, recipe_course::Entity, db)
        .await?;

    let views = recipes
        .into_iter()
        .zip(classifications)
        .zip(sources)
        .zip(meals)
        .zip(preparations)
        .zip(courses)
        .map(
            |(((((recipe, classification), source), meals), preparations), courses)| RecipeView {
                id: recipe.id,
                name: recipe.name,
                ingredients: recipe.ingredients,
                instructions: recipe.instructions,
                notes: recipe.notes,
                servings: recipe.servings,
                calories: recipe.calories,
                fat: recipe.fat,
                cholesterol: recipe.cholesterol,
                sodium: recipe.sodium,
                protein: recipe.protein,
                date_added: recipe.date_added,
                marked: recipe.marked,
                classification: classification.map(|c| c.name),
                source: source.map(|s| s.name),
                meals: sorted_names(meals.into_iter().map(|m| m.name)),
                preparations: sorted_names(preparations.into_iter().map(|p| p.name)),
                courses: sorted_names(courses.into_iter().map(|c| c.name)),
            },
        )
        .collect();
    Ok(views)
}

/// Fetch one recipe as a view. `Ok(None)` when the id has no record.
///
/// # Errors
///
/// Returns a `DbErr` when the entity store fails.
pub async fn get_recipe(db: &DatabaseConnection, id: Uuid) -> Result<Option<RecipeView>, DbErr> {
    let Some(model) = recipe::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut views = assemble_recipe_views(db, vec![model]).await?;
    Ok(views.pop())
}
