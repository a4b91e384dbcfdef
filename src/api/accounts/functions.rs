//! Data access layer for accounts. Handlers stay thin; every
//! database operation and field check goes through here.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};

use crate::api::validation::{require_email, require_non_empty};
use crate::database::models::accounts;
use crate::errors::AppError;

use super::structures::{CreateAccountDto, UpdateAccountDto};

fn validate_required(name: &str, email: &str, address: &str) -> Result<(), AppError> {
    require_non_empty("name", name)?;
    require_non_empty("email", email)?;
    require_email(email)?;
    require_non_empty("address", address)?;
    Ok(())
}

/// Persist a new account. The store assigns the id.
pub async fn create(
    db: &DatabaseConnection,
    dto: CreateAccountDto,
) -> Result<accounts::Model, AppError> {
    validate_required(&dto.name, &dto.email, &dto.address)?;

    let account = accounts::ActiveModel {
        name: Set(dto.name),
        email: Set(dto.email),
        address: Set(dto.address),
        phone_number: Set(dto.phone_number),
        date_joined: Set(dto.date_joined.unwrap_or_else(|| Utc::now().date_naive())),
        ..Default::default()
    };

    Ok(account.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<accounts::Model, AppError> {
    accounts::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account with id {} not found", id)))
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<accounts::Model>, AppError> {
    Ok(accounts::Entity::find().all(db).await?)
}

/// Replace the mutable fields of an existing account.
/// `id` and `date_joined` are preserved.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    dto: UpdateAccountDto,
) -> Result<accounts::Model, AppError> {
    validate_required(&dto.name, &dto.email, &dto.address)?;

    let existing = find_by_id(db, id).await?;
    let mut active = existing.into_active_model();
    active.name = Set(dto.name);
    active.email = Set(dto.email);
    active.address = Set(dto.address);
    active.phone_number = Set(dto.phone_number);

    Ok(active.update(db).await?)
}

/// Remove an account if present. Absent ids are not an error.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    accounts::Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_required_rejects_empty_fields() {
        assert!(validate_required("", "john@example.com", "42 Main St").is_err());
        assert!(validate_required("John", "", "42 Main St").is_err());
        assert!(validate_required("John", "john@example.com", "").is_err());
    }

    #[test]
    fn validate_required_accepts_complete_data() {
        assert!(validate_required("John", "john@example.com", "42 Main St").is_ok());
    }
}
