use crate::{
    database::Store,
    models::{CheckUserResponse, DocumentId, ProjectResponse},
    utils::error::AppError,
};

/// Looks up a user by Ethereum address. Absence is not an error: it is
/// reported inside the response envelope.
pub async fn check_user(store: &dyn Store, ethereum_address: &str) -> Result<CheckUserResponse, AppError> {
    match store.find_user_by_address(ethereum_address).await? {
        Some(user) => Ok(CheckUserResponse::found(user)),
        None => Ok(CheckUserResponse::not_found()),
    }
}

/// Resolves the user's project references into project documents.
///
/// References that are not valid identifiers, or that point at projects that
/// no longer exist, are skipped.
pub async fn get_user_projects(store: &dyn Store, ethereum_address: &str) -> Result<Vec<ProjectResponse>, AppError> {
    let user = store
        .find_user_by_address(ethereum_address)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {}", ethereum_address)))?;

    let ids = parse_references(&user.projects);
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let projects = store.find_projects_by_ids(&ids).await?;
    Ok(projects.into_iter().map(ProjectResponse::from).collect())
}

fn parse_references(references: &[String]) -> Vec<DocumentId> {
    references
        .iter()
        .filter_map(|reference| match DocumentId::parse(reference) {
            Ok(id) => Some(id),
            Err(_) => {
                log::warn!("⚠️  Skipping malformed project reference '{}'", reference);
                None
            }
        })
        .collect()
}
