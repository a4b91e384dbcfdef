use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use account_service::api::{accounts, middleware::RequestId, system};
use account_service::app_state::AppState;
use account_service::config::Config;
use account_service::database::{self, models::accounts as account_models};
use account_service::errors;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {}", e)))?;
    let db = database::connect().await?;
    database::init_schema(&db)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to initialize schema: {}", e)))?;

    #[derive(OpenApi)]
    #[openapi(
        paths(
            // Service
            system::index,
            system::health,
            // Accounts
            accounts::create_account,
            accounts::list_accounts,
            accounts::get_account,
            accounts::update_account,
            accounts::delete_account,
        ),
        components(
            schemas(
                account_models::Model,
                accounts::CreateAccountDto,
                accounts::UpdateAccountDto,
                system::ServiceInfo,
                system::HealthStatus,
            )
        ),
        tags(
            (name = "Service", description = "Service identification and health endpoints"),
            (name = "Accounts", description = "Account management endpoints")
        )
    )]
    struct ApiDoc;

    let host = config.host.clone();
    let port = config.port;
    let body_limit = config.effective_max_body_bytes();

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(RequestId)
            .app_data(web::Data::new(AppState {
                db: db.clone(),
                config: config.clone(),
            }))
            .app_data(
                web::JsonConfig::default()
                    .limit(body_limit)
                    .error_handler(errors::json_error_handler),
            )
            .app_data(web::PathConfig::default().error_handler(errors::path_error_handler))
            .configure(system::init_routes)
            .configure(accounts::init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
