//! Sea-ORM entities for the recipe domain.
//!
//! Rows are created and maintained by an external administrative process;
//! this service only reads them.

pub mod classification;
pub mod cookbook;
pub mod cookbook_recipe;
pub mod course;
pub mod meal;
pub mod preparation;
pub mod recipe;
pub mod recipe_course;
pub mod recipe_meal;
pub mod recipe_preparation;
pub mod source;
