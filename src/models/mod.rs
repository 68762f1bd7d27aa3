use serde::{Deserialize, Serialize};

pub mod key;
pub mod personalization;

pub use key::{distinct_sorted, Key};
pub use personalization::{PersonalizationTable, PersonalizedPick};

/// Market-basket association rule: buying `antecedents` suggests `consequents`
///
/// Rule files usually carry support and confidence too; only the columns
/// shown on the dashboard are read. Numeric cells may be blank in pipeline
/// exports and load as `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssociationRule {
    pub antecedents: Key,
    pub consequents: String,
    pub lift: Option<f64>,
}

/// One row of the item-to-item table
///
/// Rows for a product appear in descending relevance, so the head of the
/// candidate set is the top-K.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarItem {
    pub product_id: Key,
    pub product_name: String,
    pub price: Option<f64>,
    pub recommended_product_name: String,
    pub recommended_category: String,
    pub recommended_price: Option<f64>,
}

/// Past purchase of a profile, from the optional history file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRecord {
    pub profile_id: Key,
    pub purchased_product_ids: String,
    // Column name as written by the export pipeline
    #[serde(rename = "purchased_product_catgeories")]
    pub purchased_product_categories: String,
    pub purchased_product_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_record_reads_pipeline_column_name() {
        let json = r#"{
            "profile_id": "U001",
            "purchased_product_ids": "12|15",
            "purchased_product_catgeories": "Dairy|Bakery",
            "purchased_product_title": "Milk|Bread"
        }"#;
        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.profile_id, Key::from("U001"));
        assert_eq!(record.purchased_product_categories, "Dairy|Bakery");
    }

    #[test]
    fn test_rule_key_serializes_as_plain_string() {
        let rule = AssociationRule {
            antecedents: Key::from("milk"),
            consequents: "bread".to_string(),
            lift: Some(1.8),
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["antecedents"], "milk");
    }
}
