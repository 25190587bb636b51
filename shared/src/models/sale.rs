//! Sales Transaction Model

use serde::{Deserialize, Serialize};

/// One row of the `sales` table
///
/// Serialized with the column names as keys, which is what the dashboard
/// table renders. Every column except the key is nullable in the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SaleRecord {
    pub transaction_id: i64,
    pub date: Option<String>,

    // Customer
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub customer_region: Option<String>,
    pub customer_type: Option<String>,

    // Product
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub product_category: Option<String>,
    /// Comma-separated tag list, e.g. `"organic,eco-friendly"`
    pub tags: Option<String>,

    // Amounts
    pub quantity: Option<i64>,
    pub price_per_unit: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub total_amount: Option<f64>,
    pub final_amount: Option<f64>,

    // Order metadata
    pub payment_method: Option<String>,
    pub order_status: Option<String>,
    pub delivery_type: Option<String>,
    pub store_id: Option<String>,
    pub store_location: Option<String>,
    pub salesperson_id: Option<String>,
    pub employee_name: Option<String>,
}

/// Split a comma-joined tags column into trimmed, non-empty tokens
pub fn split_tags(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Full-table listing used to populate the filter widgets
///
/// Always reflects the entire table, never the currently filtered view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub payment_methods: Vec<String>,
    /// Flattened, deduplicated, sorted tag tokens
    pub tags: Vec<String>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

/// Aggregates over the filtered set
///
/// Every field is zero (never null) when the filtered set is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// `SUM(quantity)`
    pub total_units: i64,
    /// `SUM(final_amount)`
    pub total_amount: f64,
    /// `SUM(total_amount - final_amount)`
    pub total_discount: f64,
    /// `COUNT(*)`
    pub total_records: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SaleRecord {
        SaleRecord {
            transaction_id: 1,
            date: Some("2023-03-15".into()),
            customer_id: None,
            customer_name: Some("Alice".into()),
            phone_number: None,
            gender: None,
            age: Some(30),
            customer_region: None,
            customer_type: None,
            product_id: None,
            product_name: None,
            brand: None,
            product_category: None,
            tags: Some(" organic, ,eco-friendly ".into()),
            quantity: Some(2),
            price_per_unit: Some(50.0),
            discount_percentage: Some(10.0),
            total_amount: Some(100.0),
            final_amount: Some(90.0),
            payment_method: None,
            order_status: None,
            delivery_type: None,
            store_id: None,
            store_location: None,
            salesperson_id: None,
            employee_name: None,
        }
    }

    #[test]
    fn test_split_tags_drops_empty_tokens() {
        assert_eq!(
            split_tags(record().tags.as_deref().unwrap()),
            vec!["organic", "eco-friendly"]
        );
        assert!(split_tags(" , ,").is_empty());
    }

    #[test]
    fn test_record_serializes_column_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["transaction_id"], 1);
        assert_eq!(json["customer_name"], "Alice");
        assert!(json["phone_number"].is_null());
    }

    #[test]
    fn test_payloads_are_camel_case() {
        let json = serde_json::to_value(SalesSummary::default()).unwrap();
        assert_eq!(json["totalUnits"], 0);
        assert_eq!(json["totalAmount"], 0.0);
        assert_eq!(json["totalDiscount"], 0.0);
        assert_eq!(json["totalRecords"], 0);

        let json = serde_json::to_value(FilterOptions::default()).unwrap();
        assert!(json["paymentMethods"].is_array());
        assert!(json["minAge"].is_null());
        assert!(json["maxDate"].is_null());
    }
}
