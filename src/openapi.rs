use utoipa::OpenApi;

use crate::cookbooks::{CookbookDetail, CookbookSummary};
use crate::listing::{ListingQuery, RecipePage, SortField, SortOrder};
use crate::views::RecipeView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "recipe-api",
        description = "Read-only recipe and cookbook listing API"
    ),
    paths(
        crate::routes::list_recipes_handler,
        crate::routes::get_recipe_handler,
        crate::routes::list_cookbooks_handler,
        crate::routes::get_cookbook_handler,
    ),
    components(schemas(
        RecipeView,
        RecipePage,
        ListingQuery,
        SortField,
        SortOrder,
        CookbookSummary,
        CookbookDetail,
    ))
)]
pub struct ApiDoc;
