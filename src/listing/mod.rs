//! The recipe listing pipeline.
//!
//! Raw parameters are normalised into an immutable [`ListingQuery`]
//! descriptor, which drives one filtered, ordered, sliced select plus a
//! count over the same condition. The matching page is then joined with its
//! related entities by the view assembler.

pub mod pagination;
pub mod params;
pub mod search;
pub mod sort;

pub use params::{ListingParams, ListingQuery, PageSize, SortField, SortOrder};

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::recipe;
use crate::views::{self, RecipeView};

/// One page of matching recipes plus what the presentation layer needs to
/// render pagination and the current sort/filter state.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipePage {
    pub items: Vec<RecipeView>,
    /// Total number of matches across all pages.
    pub total: u64,
    /// The normalised descriptor this page was produced from.
    pub query: ListingQuery,
}

/// Run the full listing pipeline for one request.
///
/// # Errors
///
/// Returns a `DbErr` when the entity store fails; empty result sets and
/// pages past the end are normal outcomes, not errors.
pub async fn list_recipes(
    db: &DatabaseConnection,
    params: &ListingParams,
) -> Result<RecipePage, DbErr> {
    let query = ListingQuery::from_params(params);

    let mut condition = Condition::all();
    if let Some(matches) = search::search_condition(&query.search) {
        condition = condition.add(matches);
    }
    if query.marked {
        condition = condition.add(recipe::Column::Marked.eq(true));
    }

    let filtered = recipe::Entity::find().filter(condition);
    let total = filtered.clone().count(db).await?;

    let page = sort::apply_paging(sort::apply_ordering(filtered, &query), &query);
    let recipes = page.all(db).await?;
    tracing::debug!(total, returned = recipes.len(), "recipe listing resolved");

    let items = views::assemble_recipe_views(db, recipes).await?;
    Ok(RecipePage { items, total, query })
}
