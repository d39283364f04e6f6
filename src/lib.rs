//! Read-only recipe and cookbook listing API.
//!
//! The core is the listing pipeline in [`listing`]: raw request parameters
//! are normalised into an immutable descriptor, translated into one
//! filtered, ordered, sliced query, and the resulting page is joined with
//! its related entities in a fixed number of lookups by [`views`].
//! [`cookbooks`] adds the fixed cookbook recipe ordering. Entities are
//! created and maintained externally; nothing here writes.

pub mod config;
pub mod cookbooks;
pub mod errors;
pub mod listing;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod views;

pub use errors::ApiError;
