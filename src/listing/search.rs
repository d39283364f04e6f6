use sea_orm::Condition;
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};

use crate::models::recipe;

/// Escape LIKE wildcards so user terms match literally.
/// Escapes: % (match any) and _ (match single char)
fn escape_like_wildcards(input: &str) -> String {
    input
        .replace('\\', "\\\\") // Escape backslash first
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Predicate matching recipes whose name OR ingredients contain `term` as a
/// case-insensitive substring. `None` when the term is empty: everything
/// matches and no condition is needed.
///
/// Matching is advisory only: it partitions recipes into included/excluded
/// without ranking them.
#[must_use]
pub fn search_condition(term: &str) -> Option<Condition> {
    if term.is_empty() {
        return None;
    }

    // UPPER(column) LIKE UPPER-cased pattern, with wildcards escaped so the
    // term matches literally on every backend.
    let pattern = format!("%{}%", escape_like_wildcards(term).to_uppercase());
    let name_like = Func::upper(Expr::col(recipe::Column::Name))
        .like(LikeExpr::new(pattern.clone()).escape('\\'));
    let ingredients_like = Func::upper(Expr::col(recipe::Column::Ingredients))
        .like(LikeExpr::new(pattern).escape('\\'));

    Some(Condition::any().add(name_like).add(ingredients_like))
}
