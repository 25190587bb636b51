//! Sales query parameters
//!
//! Parsing and validation of the query string shared by the list and summary
//! endpoints, plus the sort/page types and the pagination envelope.

pub mod filter;
pub mod list;

pub use filter::{DateBound, SalesFilter, SalesQuery, Strictness, parse_date, parse_int, split_list};
pub use list::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PaginatedResponse, Pagination,
    SalesListRequest, SortField, SortOrder,
};
