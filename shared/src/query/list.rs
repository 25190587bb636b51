//! Sorting and pagination for the sales list

use serde::{Deserialize, Serialize};

use super::filter::{SalesFilter, SalesQuery, Strictness, parse_int, present};
use crate::error::{AppError, AppResult};

/// Default page size when `pageSize` is absent
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Whitelisted sort columns
///
/// Only these column names are ever interpolated into `ORDER BY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Date,
    Quantity,
    CustomerName,
}

impl SortField {
    /// Unknown or missing values fall back to [`SortField::Date`]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("quantity") => Self::Quantity,
            Some("customer_name") => Self::CustomerName,
            _ => Self::Date,
        }
    }

    /// Column name
    pub fn column(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Quantity => "quantity",
            Self::CustomerName => "customer_name",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than a case-insensitive `asc` is [`SortOrder::Desc`]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number, bounded only by `i64::MAX`
    pub page: u64,
    /// Rows per page, `1..=MAX_PAGE_SIZE`
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Absent values take their defaults; a present value must parse and be
    /// in range, otherwise the request is rejected.
    pub fn parse(page: &Option<String>, page_size: &Option<String>) -> AppResult<Self> {
        let page = match page {
            None => 1,
            Some(raw) => parse_int(raw)
                .filter(|p| *p >= 1)
                .and_then(|p| u64::try_from(p).ok())
                .ok_or_else(|| {
                    AppError::out_of_range("Invalid page number").with_detail("page", raw.as_str())
                })?,
        };

        let page_size = match page_size {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => parse_int(raw)
                .filter(|s| (1..=MAX_PAGE_SIZE as i64).contains(s))
                .map(|s| s as u32)
                .ok_or_else(|| {
                    AppError::out_of_range(format!(
                        "Invalid page size (must be between 1 and {MAX_PAGE_SIZE})"
                    ))
                    .with_detail("pageSize", raw.as_str())
                })?,
        };

        Ok(Self { page, page_size })
    }

    /// Rows to skip
    ///
    /// Saturates instead of overflowing for very large page numbers.
    pub fn offset(&self) -> i64 {
        let skip = (self.page - 1).saturating_mul(self.page_size as u64);
        i64::try_from(skip).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

/// Fully validated `GET /api/sales` request
#[derive(Debug, Clone, PartialEq)]
pub struct SalesListRequest {
    pub filter: SalesFilter,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub page: PageRequest,
}

impl SalesListRequest {
    /// Strict validation: filters first, then pagination
    pub fn parse(query: &SalesQuery) -> AppResult<Self> {
        let filter = SalesFilter::parse(query, Strictness::Strict)?;
        let page = PageRequest::parse(&query.page, &query.page_size)?;

        Ok(Self {
            filter,
            sort_by: SortField::parse(present(&query.sort_by)),
            sort_order: SortOrder::parse(query.sort_order.as_deref()),
            page,
        })
    }
}

/// Pagination envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: PageRequest, total: u64) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            total,
            total_pages: total.div_ceil(page.page_size as u64),
        }
    }
}

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Rows of the requested page
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: PageRequest, total: u64) -> Self {
        Self {
            data,
            pagination: Pagination::new(page, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_sort_field_whitelist() {
        assert_eq!(SortField::parse(None), SortField::Date);
        assert_eq!(SortField::parse(Some("quantity")), SortField::Quantity);
        assert_eq!(
            SortField::parse(Some("customer_name")),
            SortField::CustomerName
        );
        assert_eq!(
            SortField::parse(Some("date; DROP TABLE sales")),
            SortField::Date
        );
        assert_eq!(SortField::CustomerName.column(), "customer_name");
    }

    #[test]
    fn test_sort_order_coerces_to_desc() {
        assert_eq!(SortOrder::parse(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("ASC")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("sideways")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(None), SortOrder::Desc);
    }

    #[test]
    fn test_page_defaults() {
        let page = PageRequest::parse(&None, &None).unwrap();
        assert_eq!(page, PageRequest::default());
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(PageRequest::parse(&None, &some("0")).is_err());
        assert!(PageRequest::parse(&None, &some("101")).is_err());
        assert_eq!(
            PageRequest::parse(&None, &some("100")).unwrap().page_size,
            100
        );

        let err = PageRequest::parse(&None, &some("abc")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.message, "Invalid page size (must be between 1 and 100)");
    }

    #[test]
    fn test_invalid_page_number() {
        for raw in ["0", "-2", "", "x"] {
            let err = PageRequest::parse(&some(raw), &None).unwrap_err();
            assert_eq!(err.message, "Invalid page number");
        }
    }

    #[test]
    fn test_page_beyond_u32() {
        let page = PageRequest::parse(&some("5000000000"), &some("100")).unwrap();
        assert_eq!(page.page, 5_000_000_000);
        assert_eq!(page.offset(), 499_999_999_900);

        let page = PageRequest::parse(&some(&i64::MAX.to_string()), &some("100")).unwrap();
        assert_eq!(page.offset(), i64::MAX);
    }

    #[test]
    fn test_offset() {
        let page = PageRequest::parse(&some("3"), &some("20")).unwrap();
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = PageRequest::default();
        assert_eq!(Pagination::new(page, 0).total_pages, 0);
        assert_eq!(Pagination::new(page, 10).total_pages, 1);
        assert_eq!(Pagination::new(page, 11).total_pages, 2);
    }

    #[test]
    fn test_filter_errors_precede_page_errors() {
        let query = SalesQuery {
            date_to: some("nope"),
            page_size: some("0"),
            ..SalesQuery::default()
        };
        let err = SalesListRequest::parse(&query).unwrap_err();
        assert_eq!(err.message, "Invalid date format for dateTo");
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let json = serde_json::to_value(Pagination::new(PageRequest::default(), 25)).unwrap();
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalPages"], 3);
    }
}
