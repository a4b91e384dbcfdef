use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

/// Payload for creating an account.
/// `date_joined` falls back to today (UTC) when omitted.
#[derive(Debug, Deserialize, ToSchema, Clone)]
pub struct CreateAccountDto {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub date_joined: Option<NaiveDate>,
}

/// Payload for replacing an account's mutable fields.
/// `id` and `date_joined` are never taken from the client.
#[derive(Debug, Deserialize, ToSchema, Clone)]
pub struct UpdateAccountDto {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
}
