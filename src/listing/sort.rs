use sea_orm::{Order, QueryOrder, QuerySelect, Select};

use super::params::{ListingQuery, SortField, SortOrder};
use crate::models::recipe;

/// Resolve the ORDER BY column and direction for a listing query.
#[must_use]
pub fn order_by(query: &ListingQuery) -> (recipe::Column, Order) {
    let column = match query.sort_field {
        SortField::Name => recipe::Column::Name,
        SortField::DateAdded => recipe::Column::DateAdded,
    };
    let direction = match query.sort_order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };
    (column, direction)
}

/// Order by the chosen column, then by identifier ascending so equal sort
/// values always come back in the same order.
#[must_use]
pub fn apply_ordering(
    select: Select<recipe::Entity>,
    query: &ListingQuery,
) -> Select<recipe::Entity> {
    let (column, direction) = order_by(query);
    select
        .order_by(column, direction)
        .order_by(recipe::Column::Id, Order::Asc)
}

/// Slice the ordered set to the requested page. `displayCount=all` returns
/// the whole set; a page past the end comes back empty from the store, which
/// is a normal outcome.
#[must_use]
pub fn apply_paging(
    select: Select<recipe::Entity>,
    query: &ListingQuery,
) -> Select<recipe::Entity> {
    match query.page_slice() {
        Some((offset, limit)) => select.offset(offset).limit(limit),
        None => select,
    }
}
