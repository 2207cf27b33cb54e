use super::{MongoDB, EVENTS, PROJECTS, USERS};
use crate::models::{DocumentId, Event, Project, User};
use crate::utils::error::AppError;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

/// Maximum number of projects returned by a category lookup.
pub const PROJECTS_BY_CATEGORY_LIMIT: i64 = 100;

/// Data access over the `users`, `projects` and `events` collections.
///
/// Handlers receive this as `web::Data<dyn Store>`.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_address(&self, ethereum_address: &str) -> Result<Option<User>, AppError>;

    async fn find_projects_by_category(&self, category: &str, limit: i64) -> Result<Vec<Project>, AppError>;

    /// Projects whose `_id` is in `ids`. Unknown ids are silently absent from the result.
    async fn find_projects_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<Project>, AppError>;

    async fn find_project_by_id(&self, id: DocumentId) -> Result<Option<Project>, AppError>;

    /// Inserts `project` (its `id` is ignored) and returns the store-assigned identifier.
    async fn insert_project(&self, project: &Project) -> Result<DocumentId, AppError>;

    async fn find_events_by_category(&self, category: &str) -> Result<Vec<Event>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

#[async_trait]
impl Store for MongoDB {
    async fn find_user_by_address(&self, ethereum_address: &str) -> Result<Option<User>, AppError> {
        let users = self.collection::<User>(USERS);
        self.timed("users.find_one", users.find_one(doc! { "ethereumAddress": ethereum_address }))
            .await
    }

    async fn find_projects_by_category(&self, category: &str, limit: i64) -> Result<Vec<Project>, AppError> {
        let projects = self.collection::<Project>(PROJECTS);
        self.timed("projects.find", async {
            let cursor = projects.find(doc! { "Category": category }).limit(limit).await?;
            cursor.try_collect::<Vec<Project>>().await
        })
        .await
    }

    async fn find_projects_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<Project>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let oids: Vec<ObjectId> = ids.iter().map(DocumentId::as_object_id).collect();
        let projects = self.collection::<Project>(PROJECTS);
        self.timed("projects.find", async {
            let cursor = projects.find(doc! { "_id": { "$in": oids } }).await?;
            cursor.try_collect::<Vec<Project>>().await
        })
        .await
    }

    async fn find_project_by_id(&self, id: DocumentId) -> Result<Option<Project>, AppError> {
        let projects = self.collection::<Project>(PROJECTS);
        self.timed("projects.find_one", projects.find_one(doc! { "_id": id.as_object_id() }))
            .await
    }

    async fn insert_project(&self, project: &Project) -> Result<DocumentId, AppError> {
        let projects = self.collection::<Project>(PROJECTS);
        let mut document = project.clone();
        document.id = None;

        let result = self.timed("projects.insert_one", projects.insert_one(&document)).await?;
        result
            .inserted_id
            .as_object_id()
            .map(DocumentId::from)
            .ok_or_else(|| AppError::DatabaseError("Inserted project has no ObjectId".to_string()))
    }

    async fn find_events_by_category(&self, category: &str) -> Result<Vec<Event>, AppError> {
        let events = self.collection::<Event>(EVENTS);
        self.timed("events.find", async {
            let cursor = events.find(doc! { "category": category }).await?;
            cursor.try_collect::<Vec<Event>>().await
        })
        .await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.timed("ping", self.database().run_command(doc! { "ping": 1 }))
            .await
            .map(|_| ())
    }
}
