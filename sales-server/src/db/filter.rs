//! Sales predicate
//!
//! Translates a validated [`SalesFilter`] into a WHERE clause plus ordered
//! bindings. The list, summary and count queries all go through here so the
//! three endpoints cannot drift apart.

use shared::query::SalesFilter;

use super::query_builder::QueryBuilder;

/// Columns matched by the free-text search
const SEARCH_COLUMNS: &[&str] = &["customer_name", "phone_number"];

/// Build the predicate for a filter set
///
/// Clauses are ANDed in a fixed order; absent filters contribute nothing, so
/// an empty filter yields an empty WHERE clause.
pub fn sales_predicate(filter: &SalesFilter) -> QueryBuilder {
    let mut qb = QueryBuilder::new();

    if let Some(search) = &filter.search {
        qb.add_search_condition(SEARCH_COLUMNS, search);
    }

    qb.add_in_condition("customer_region", &filter.regions);
    qb.add_in_condition("gender", &filter.genders);

    if let Some(min) = filter.age_min {
        qb.add_condition("age >= ?").bind_i64(min);
    }
    if let Some(max) = filter.age_max {
        qb.add_condition("age <= ?").bind_i64(max);
    }

    qb.add_in_condition("product_category", &filter.categories);
    qb.add_any_like_condition("tags", &filter.tags);
    qb.add_in_condition("payment_method", &filter.payment_methods);

    if let Some(from) = &filter.date_from {
        qb.add_condition("date >= ?").bind_text(from.raw.as_str());
    }
    if let Some(to) = &filter.date_to {
        qb.add_condition("date <= ?").bind_text(to.raw.as_str());
    }

    qb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::query_builder::QueryValue;
    use shared::query::{SalesQuery, Strictness};

    fn build(query: SalesQuery) -> QueryBuilder {
        let filter = SalesFilter::parse(&query, Strictness::Strict).unwrap();
        sales_predicate(&filter)
    }

    fn placeholders(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn test_no_filters_no_where() {
        let qb = build(SalesQuery::default());
        assert_eq!(qb.build_where_clause(), "");
        assert!(qb.bindings().is_empty());
    }

    #[test]
    fn test_region_in_clause() {
        let qb = build(SalesQuery {
            regions: Some("North,South".into()),
            ..Default::default()
        });
        assert_eq!(qb.build_where_clause(), " WHERE customer_region IN (?, ?)");
        assert_eq!(
            qb.bindings(),
            &[
                QueryValue::Text("North".into()),
                QueryValue::Text("South".into())
            ]
        );
    }

    #[test]
    fn test_empty_region_param_is_no_restriction() {
        let qb = build(SalesQuery {
            regions: Some("".into()),
            genders: Some(",".into()),
            ..Default::default()
        });
        assert_eq!(qb.build_where_clause(), "");
    }

    #[test]
    fn test_full_filter_set_order() {
        let qb = build(SalesQuery {
            search: Some("ali".into()),
            regions: Some("North".into()),
            genders: Some("Female,Male".into()),
            age_min: Some("18".into()),
            age_max: Some("60".into()),
            categories: Some("Beauty".into()),
            tags: Some("organic,fashion".into()),
            payment_methods: Some("UPI".into()),
            date_from: Some("2023-01-01".into()),
            date_to: Some("2023-12-31".into()),
            ..Default::default()
        });

        assert_eq!(
            qb.build_where_clause(),
            " WHERE (customer_name LIKE ? OR phone_number LIKE ?) \
             AND customer_region IN (?) \
             AND gender IN (?, ?) \
             AND age >= ? AND age <= ? \
             AND product_category IN (?) \
             AND (tags LIKE ? OR tags LIKE ?) \
             AND payment_method IN (?) \
             AND date >= ? AND date <= ?"
        );
        assert_eq!(qb.bindings()[5], QueryValue::Integer(18));
        assert_eq!(
            qb.bindings().last(),
            Some(&QueryValue::Text("2023-12-31".into()))
        );
    }

    #[test]
    fn test_binding_count_matches_placeholders() {
        let queries = [
            SalesQuery::default(),
            SalesQuery {
                search: Some("98".into()),
                ..Default::default()
            },
            SalesQuery {
                tags: Some("a,b,c,,d".into()),
                categories: Some("x,y".into()),
                age_max: Some("40".into()),
                ..Default::default()
            },
            SalesQuery {
                payment_methods: Some("Cash,Card,UPI,Wallet".into()),
                date_to: Some("2024-01-01T00:00:00Z".into()),
                age_min: Some("nope".into()),
                ..Default::default()
            },
        ];

        for query in queries {
            let qb = build(query);
            assert_eq!(
                placeholders(&qb.build_where_clause()),
                qb.bindings().len()
            );
        }
    }

    #[test]
    fn test_user_values_never_reach_sql_text() {
        let hostile = "x') OR 1=1 --";
        let qb = build(SalesQuery {
            search: Some(hostile.into()),
            regions: Some(hostile.into()),
            tags: Some(hostile.into()),
            ..Default::default()
        });
        assert!(!qb.build_where_clause().contains(hostile));
    }
}
