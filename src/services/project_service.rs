use crate::{
    database::{Store, PROJECTS_BY_CATEGORY_LIMIT},
    models::{CreateProjectRequest, DocumentId, ProjectResponse},
    utils::error::AppError,
};

pub async fn list_by_category(store: &dyn Store, category: &str) -> Result<Vec<ProjectResponse>, AppError> {
    let projects = store
        .find_projects_by_category(category, PROJECTS_BY_CATEGORY_LIMIT)
        .await?;
    Ok(projects.into_iter().map(ProjectResponse::from).collect())
}

pub async fn create_project(store: &dyn Store, request: CreateProjectRequest) -> Result<ProjectResponse, AppError> {
    let mut project = request.into_project();
    let id = store.insert_project(&project).await?;
    project.id = Some(id.as_object_id());
    Ok(ProjectResponse::from(project))
}

/// `id` comes straight from the caller and is validated before querying.
pub async fn get_project(store: &dyn Store, id: &str) -> Result<ProjectResponse, AppError> {
    let id = DocumentId::parse(id)?;
    store
        .find_project_by_id(id)
        .await?
        .map(ProjectResponse::from)
        .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))
}
