//! In-memory `Store` used by handler tests.

use super::Store;
use crate::models::{DocumentId, Event, Project, User};
use crate::utils::error::AppError;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    projects: Mutex<Vec<Project>>,
    events: Mutex<Vec<Event>>,
    /// When set every call fails with a database error.
    pub fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn add_user(&self, mut user: User) -> User {
        user.id.get_or_insert_with(ObjectId::new);
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn add_project(&self, mut project: Project) -> Project {
        project.id.get_or_insert_with(ObjectId::new);
        self.projects.lock().unwrap().push(project.clone());
        project
    }

    pub fn add_event(&self, mut event: Event) -> Event {
        event.id.get_or_insert_with(ObjectId::new);
        self.events.lock().unwrap().push(event.clone());
        event
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_address(&self, ethereum_address: &str) -> Result<Option<User>, AppError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.ethereum_address == ethereum_address).cloned())
    }

    async fn find_projects_by_category(&self, category: &str, limit: i64) -> Result<Vec<Project>, AppError> {
        self.check()?;
        let projects = self.projects.lock().unwrap();
        Ok(projects
            .iter()
            .filter(|p| p.category == category)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn find_projects_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<Project>, AppError> {
        self.check()?;
        let projects = self.projects.lock().unwrap();
        Ok(projects
            .iter()
            .filter(|p| p.id.map_or(false, |oid| ids.contains(&DocumentId::from(oid))))
            .cloned()
            .collect())
    }

    async fn find_project_by_id(&self, id: DocumentId) -> Result<Option<Project>, AppError> {
        self.check()?;
        let projects = self.projects.lock().unwrap();
        Ok(projects.iter().find(|p| p.id == Some(id.as_object_id())).cloned())
    }

    async fn insert_project(&self, project: &Project) -> Result<DocumentId, AppError> {
        self.check()?;
        let id = DocumentId::generate();
        let mut stored = project.clone();
        stored.id = Some(id.as_object_id());
        self.projects.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn find_events_by_category(&self, category: &str) -> Result<Vec<Event>, AppError> {
        self.check()?;
        let events = self.events.lock().unwrap();
        Ok(events.iter().filter(|e| e.category == category).cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}
