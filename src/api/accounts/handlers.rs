use actix_web::{HttpResponse, delete, get, http::header, post, put, web};

use crate::{app_state::AppState, database::models::accounts, errors::AppError};

use super::functions;
use super::structures::{CreateAccountDto, UpdateAccountDto};

#[utoipa::path(
    post,
    path = "/accounts",
    tag = "Accounts",
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Account created", body = accounts::Model,
            headers(("Location" = String, description = "URL of the created account"))),
        (status = 400, description = "Missing or invalid fields"),
        (status = 415, description = "Content-Type is not application/json")
    )
)]
#[post("")]
pub async fn create_account(
    data: web::Data<AppState>,
    dto: web::Json<CreateAccountDto>,
) -> Result<HttpResponse, AppError> {
    let created = functions::create(&data.db, dto.into_inner()).await?;
    log::info!("Created account {}", created.id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/accounts/{}", created.id)))
        .json(created))
}

#[utoipa::path(
    get,
    path = "/accounts",
    tag = "Accounts",
    responses(
        (status = 200, description = "List all accounts", body = [accounts::Model])
    )
)]
#[get("")]
pub async fn list_accounts(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let accounts = functions::find_all(&data.db).await?;
    Ok(HttpResponse::Ok().json(accounts))
}

#[utoipa::path(
    get,
    path = "/accounts/{id}",
    tag = "Accounts",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account found", body = accounts::Model),
        (status = 404, description = "Account not found")
    )
)]
#[get("/{id}")]
pub async fn get_account(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let account = functions::find_by_id(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(account))
}

#[utoipa::path(
    put,
    path = "/accounts/{id}",
    tag = "Accounts",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account updated", body = accounts::Model),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Account not found")
    )
)]
#[put("/{id}")]
pub async fn update_account(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    dto: web::Json<UpdateAccountDto>,
) -> Result<HttpResponse, AppError> {
    let updated = functions::update(&data.db, path.into_inner(), dto.into_inner()).await?;
    log::info!("Updated account {}", updated.id);
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    tag = "Accounts",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 204, description = "Account deleted (idempotent)")
    )
)]
#[delete("/{id}")]
pub async fn delete_account(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    functions::delete(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounts")
            .service(create_account)
            .service(list_accounts)
            .service(get_account)
            .service(update_account)
            .service(delete_account),
    );
}
