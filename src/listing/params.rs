use serde::{Deserialize, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};

// Anything past this many characters cannot usefully narrow a recipe search.
const MAX_SEARCH_LEN: usize = 200;

const DEFAULT_PAGE_SIZE: u64 = 30;
const ALLOWED_PAGE_SIZES: [u64; 2] = [20, 30];

/// Raw listing parameters as they arrive on the query string.
///
/// Every field is an optional string so that malformed input is normalised
/// away by [`ListingQuery::from_params`] instead of failing extraction.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListingParams {
    /// Field to sort by: `name` or `date_added`.
    #[param(example = "name")]
    pub sort_field: Option<String>,
    /// Sort direction: `asc` or `desc`.
    #[param(example = "asc")]
    pub sort_order: Option<String>,
    /// Page size: `20`, `30` or `all`.
    #[param(example = "30")]
    pub display_count: Option<String>,
    /// Case-insensitive substring matched against recipe name and ingredients.
    #[param(example = "basil")]
    pub search: Option<String>,
    /// 1-based page number.
    #[param(example = "1")]
    pub page: Option<String>,
    /// When `true` or `1`, only marked recipes are listed.
    #[param(example = "false")]
    pub marked: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    DateAdded,
}

impl SortField {
    fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Self::Name,
            _ => Self::DateAdded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }
}

/// Page size, either a fixed slice or the whole match set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Limited(u64),
    All,
}

impl PageSize {
    fn from_str_lossy(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        match s.parse::<u64>() {
            Ok(n) if ALLOWED_PAGE_SIZES.contains(&n) => Self::Limited(n),
            _ => Self::Limited(DEFAULT_PAGE_SIZE),
        }
    }
}

// Echoed back to clients in the same shape it arrives: "20", "30" or "all".
impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Limited(n) => serializer.collect_str(n),
        }
    }
}

/// Normalised, immutable description of one listing request.
///
/// Construction is pure: unknown or malformed raw values fall back to the
/// documented defaults (`date_added` descending, 30 per page, page 1, no
/// search, no marked filter) and never fail the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    #[schema(value_type = String, example = "30")]
    pub display_count: PageSize,
    pub search: String,
    pub page: u64,
    pub marked: bool,
}

impl ListingQuery {
    #[must_use]
    pub fn from_params(params: &ListingParams) -> Self {
        let search: String = params
            .search
            .as_deref()
            .unwrap_or_default()
            .trim()
            .chars()
            .take(MAX_SEARCH_LEN)
            .collect();
        let page = params
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<u64>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);
        let marked = params
            .marked
            .as_deref()
            .is_some_and(|m| matches!(m.trim(), "1" | "true"));

        Self {
            sort_field: params
                .sort_field
                .as_deref()
                .map_or(SortField::DateAdded, SortField::from_str_lossy),
            sort_order: params
                .sort_order
                .as_deref()
                .map_or(SortOrder::Desc, SortOrder::from_str_lossy),
            display_count: params
                .display_count
                .as_deref()
                .map_or(PageSize::Limited(DEFAULT_PAGE_SIZE), PageSize::from_str_lossy),
            search,
            page,
            marked,
        }
    }

    /// Offset and limit for the current page, or `None` when the whole match
    /// set is one page.
    #[must_use]
    pub fn page_slice(&self) -> Option<(u64, u64)> {
        match self.display_count {
            PageSize::All => None,
            PageSize::Limited(size) => {
                Some((self.page.saturating_sub(1).saturating_mul(size), size))
            }
        }
    }
}
