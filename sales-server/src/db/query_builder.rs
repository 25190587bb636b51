use sqlx::Sqlite;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::sqlite::SqliteArguments;

/// Query builder for constructing SQL queries with dynamic WHERE conditions
///
/// Only column names and operators passed in by the caller end up in the SQL
/// text; every value goes through a `?` placeholder.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    conditions: Vec<String>,
    bindings: Vec<QueryValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition with bindings
    pub fn add_condition(&mut self, condition: &str) -> &mut Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// Add a text binding
    pub fn bind_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.bindings.push(QueryValue::Text(value.into()));
        self
    }

    /// Add an integer binding
    pub fn bind_i64(&mut self, value: i64) -> &mut Self {
        self.bindings.push(QueryValue::Integer(value));
        self
    }

    /// Add LIKE search condition for multiple fields
    ///
    /// Every field is bound to the same `%search%` pattern.
    pub fn add_search_condition(&mut self, fields: &[&str], search: &str) -> &mut Self {
        let field_conditions: Vec<String> = fields
            .iter()
            .map(|field| format!("{} LIKE ?", field))
            .collect();

        let condition = format!("({})", field_conditions.join(" OR "));
        self.conditions.push(condition);

        let search_pattern = format!("%{}%", search);
        for _ in fields {
            self.bindings.push(QueryValue::Text(search_pattern.clone()));
        }

        self
    }

    /// Add IN condition; an empty value list adds nothing
    pub fn add_in_condition<S: AsRef<str>>(&mut self, field: &str, values: &[S]) -> &mut Self {
        if values.is_empty() {
            return self;
        }

        let placeholders: Vec<&str> = values.iter().map(|_| "?").collect();
        let condition = format!("{} IN ({})", field, placeholders.join(", "));
        self.conditions.push(condition);

        for val in values {
            self.bindings.push(QueryValue::Text(val.as_ref().to_string()));
        }

        self
    }

    /// Add an OR of substring matches of one field; an empty list adds nothing
    pub fn add_any_like_condition<S: AsRef<str>>(&mut self, field: &str, needles: &[S]) -> &mut Self {
        if needles.is_empty() {
            return self;
        }

        let likes: Vec<String> = needles.iter().map(|_| format!("{} LIKE ?", field)).collect();
        self.conditions.push(format!("({})", likes.join(" OR ")));

        for needle in needles {
            self.bindings
                .push(QueryValue::Text(format!("%{}%", needle.as_ref())));
        }

        self
    }

    /// Build WHERE clause (empty if no conditions)
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn bindings(&self) -> &[QueryValue] {
        &self.bindings
    }

    /// Apply bindings to a SQLx query_as
    pub fn apply_bindings_as<'q, O>(
        &self,
        mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>>
    where
        O: Send + Unpin,
    {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s.clone()),
                QueryValue::Integer(i) => query.bind(*i),
            };
        }
        query
    }

    /// Apply bindings to a SQLx query_scalar
    pub fn apply_bindings_scalar<'q, O>(
        &self,
        mut query: QueryScalar<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> QueryScalar<'q, Sqlite, O, SqliteArguments<'q>>
    where
        O: Send + Unpin,
    {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s.clone()),
                QueryValue::Integer(i) => query.bind(*i),
            };
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_where_clause() {
        let builder = QueryBuilder::new();
        assert_eq!(builder.build_where_clause(), "");
        assert!(builder.bindings().is_empty());
    }

    #[test]
    fn test_multiple_conditions() {
        let mut builder = QueryBuilder::new();
        builder
            .add_condition("age >= ?")
            .bind_i64(18)
            .add_condition("customer_region = ?")
            .bind_text("North");
        assert_eq!(
            builder.build_where_clause(),
            " WHERE age >= ? AND customer_region = ?"
        );
        assert_eq!(
            builder.bindings(),
            &[QueryValue::Integer(18), QueryValue::Text("North".into())]
        );
    }

    #[test]
    fn test_search_condition() {
        let mut builder = QueryBuilder::new();
        builder.add_search_condition(&["customer_name", "phone_number"], "ali");
        assert_eq!(
            builder.build_where_clause(),
            " WHERE (customer_name LIKE ? OR phone_number LIKE ?)"
        );
        assert_eq!(
            builder.bindings(),
            &[
                QueryValue::Text("%ali%".into()),
                QueryValue::Text("%ali%".into())
            ]
        );
    }

    #[test]
    fn test_in_condition() {
        let mut builder = QueryBuilder::new();
        builder.add_in_condition("customer_region", &["North", "South"]);
        assert_eq!(
            builder.build_where_clause(),
            " WHERE customer_region IN (?, ?)"
        );
    }

    #[test]
    fn test_empty_lists_add_nothing() {
        let mut builder = QueryBuilder::new();
        let none: [&str; 0] = [];
        builder
            .add_in_condition("gender", &none)
            .add_any_like_condition("tags", &none);
        assert_eq!(builder.build_where_clause(), "");
        assert!(builder.bindings().is_empty());
    }

    #[test]
    fn test_any_like_condition() {
        let mut builder = QueryBuilder::new();
        builder.add_any_like_condition("tags", &["organic", "fashion"]);
        assert_eq!(
            builder.build_where_clause(),
            " WHERE (tags LIKE ? OR tags LIKE ?)"
        );
        assert_eq!(
            builder.bindings(),
            &[
                QueryValue::Text("%organic%".into()),
                QueryValue::Text("%fashion%".into())
            ]
        );
    }
}
