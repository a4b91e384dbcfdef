use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    // Hint for utoipa on how to render this type in OpenAPI
    #[schema(value_type = String, format = Date)]
    pub date_joined: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Model {
        Model {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            address: "42 Main St".to_string(),
            phone_number: Some("5551234567".to_string()),
            date_joined: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn serde_round_trip_preserves_all_fields() {
        let account = sample();
        let json = serde_json::to_string(&account).unwrap();
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn date_joined_serializes_as_iso_date() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date_joined"], "2024-03-15");
    }

    #[test]
    fn missing_phone_number_serializes_as_null() {
        let mut account = sample();
        account.phone_number = None;
        let json = serde_json::to_value(&account).unwrap();
        assert!(json["phone_number"].is_null());
    }
}
