//! Cookbook browsing.
//!
//! Recipes inside a cookbook carry a fixed ordering contract: classification
//! name first, recipe name second, identifier last, all ascending. The
//! policy lives here as a standalone function over the assembled views so it
//! stays independent of any entity-bound behaviour and of user-supplied sort
//! parameters.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, ModelTrait, Order, QueryOrder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{cookbook, recipe};
use crate::views::{self, RecipeView};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CookbookSummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CookbookDetail {
    pub id: Uuid,
    pub name: String,
    /// Recipes in the fixed (classification, name, id) ordering.
    pub recipes: Vec<RecipeView>,
}

/// Sort cookbook recipes by (classification name, recipe name, identifier),
/// all ascending. Unclassified recipes sort before classified ones.
pub fn order_cookbook_recipes(recipes: &mut [RecipeView]) {
    recipes.sort_by(|a, b| {
        (a.classification.as_deref(), a.name.as_str(), a.id)
            .cmp(&(b.classification.as_deref(), b.name.as_str(), b.id))
    });
}

/// All cookbooks, name ascending with identifier tie-break.
///
/// # Errors
///
/// Returns a `DbErr` when the entity store fails.
pub async fn list_cookbooks(db: &DatabaseConnection) -> Result<Vec<CookbookSummary>, DbErr> {
    let cookbooks = cookbook::Entity::find()
        .order_by(cookbook::Column::Name, Order::Asc)
        .order_by(cookbook::Column::Id, Order::Asc)
        .all(db)
        .await?;
    Ok(cookbooks
        .into_iter()
        .map(|c| CookbookSummary { id: c.id, name: c.name })
        .collect())
}

/// One cookbook with its recipes in the fixed ordering. `Ok(None)` when the
/// id has no record.
///
/// # Errors
///
/// Returns a `DbErr` when the entity store fails.
pub async fn get_cookbook(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<CookbookDetail>, DbErr> {
    let Some(model) = cookbook::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let recipes = model.find_related(recipe::Entity).all(db).await?;
    let mut recipes = views::assemble_recipe_views(db, recipes).await?;
    order_cookbook_recipes(&mut recipes);

    Ok(Some(CookbookDetail {
        id: model.id,
        name: model.name,
        recipes,
    }))
}
