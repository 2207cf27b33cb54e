use actix_web::{web, HttpResponse};
use crate::{
    database::Store,
    models::{CheckUserRequest, CheckUserResponse, ProjectResponse},
    services::user_service,
    utils::error::AppError,
};

#[utoipa::path(
    post,
    path = "/check-user",
    tag = "Users",
    request_body = CheckUserRequest,
    responses(
        (status = 200, description = "Lookup result; `success` is false when the address is unknown", body = CheckUserResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Database error")
    )
)]
pub async fn check_user(
    body: web::Json<CheckUserRequest>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 POST /check-user - address: {}", body.ethereum_address);

    let response = user_service::check_user(store.get_ref(), &body.ethereum_address).await?;
    if !response.success {
        log::info!("ℹ️  Address {} not registered", body.ethereum_address);
    }

    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    get,
    path = "/projects/by-user/{ethereum_address}",
    tag = "Projects",
    params(
        ("ethereum_address" = String, Path, description = "Ethereum address of the user")
    ),
    responses(
        (status = 200, description = "Projects referenced by the user (possibly empty)", body = Vec<ProjectResponse>),
        (status = 404, description = "User not found"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_user_projects(
    path: web::Path<String>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    let ethereum_address = path.into_inner();
    log::info!("📂 GET /projects/by-user/{}", ethereum_address);

    let projects = user_service::get_user_projects(store.get_ref(), &ethereum_address).await?;
    log::info!("✅ Found {} projects for {}", projects.len(), ethereum_address);

    Ok(HttpResponse::Ok().json(projects))
}
