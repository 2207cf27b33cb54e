use actix_web::{web, HttpResponse};
use serde::Deserialize;
use crate::{
    database::Store,
    models::{CreateProjectRequest, ProjectResponse},
    services::project_service,
    utils::error::AppError,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// The project category
    pub category: String,
}

// GET /getProjects?category=Tech
#[utoipa::path(
    get,
    path = "/getProjects",
    tag = "Projects",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Up to 100 projects in the category", body = Vec<ProjectResponse>),
        (status = 422, description = "Missing category parameter"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_projects(
    query: web::Query<CategoryQuery>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    log::info!("📂 GET /getProjects - category: {}", query.category);

    let projects = project_service::list_by_category(store.get_ref(), &query.category).await?;
    log::info!("✅ Found {} projects", projects.len());

    Ok(HttpResponse::Ok().json(projects))
}

#[utoipa::path(
    post,
    path = "/postProjects",
    tag = "Projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Invalid project payload"),
        (status = 500, description = "Insertion failed")
    )
)]
pub async fn post_project(
    body: web::Json<CreateProjectRequest>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /postProjects - {}", body.project_name);

    let project = project_service::create_project(store.get_ref(), body.into_inner()).await?;
    log::info!("✅ Project created: {}", project.id);

    Ok(HttpResponse::Created().json(project))
}

#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "Projects",
    params(
        ("id" = String, Path, description = "Project identifier (24 hex characters)")
    ),
    responses(
        (status = 200, description = "The project", body = ProjectResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    path: web::Path<String>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🔎 GET /projects/{}", id);

    let project = project_service::get_project(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(project))
}
