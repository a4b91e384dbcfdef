use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub accounts_url: &'static str,
    pub docs_url: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses(
        (status = 200, description = "Service identification", body = ServiceInfo)
    )
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfo {
        name: "Account REST API Service",
        version: env!("CARGO_PKG_VERSION"),
        accounts_url: "/accounts",
        docs_url: "/swagger-ui/",
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Service",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    )
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus { status: "OK" })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(health);
}
