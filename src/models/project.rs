use crate::models::{id::wire_id, number::integer};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Projeto de financiamento armazenado na coleção `projects`.
/// Os nomes dos campos no MongoDB seguem PascalCase (`Category`, `DaysLeft`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub category: String,
    pub city: String,
    pub industry: String,
    pub image_url: String,
    #[serde(deserialize_with = "integer")]
    pub days_left: i64,
    pub project_name: String,
    #[serde(deserialize_with = "integer")]
    pub raised: i64,
    #[serde(deserialize_with = "integer")]
    pub investors: i64,
    #[serde(deserialize_with = "integer")]
    pub votes: i64,
    #[serde(deserialize_with = "integer")]
    pub min_investment: i64,
    pub slogan: String,
}

/// Body for `POST /postProjects`. Every field is required; the identifier
/// is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProjectRequest {
    pub category: String,
    pub city: String,
    pub industry: String,
    pub image_url: String,
    pub days_left: i64,
    pub project_name: String,
    pub raised: i64,
    pub investors: i64,
    pub votes: i64,
    pub min_investment: i64,
    pub slogan: String,
}

impl CreateProjectRequest {
    pub fn into_project(self) -> Project {
        Project {
            id: None,
            category: self.category,
            city: self.city,
            industry: self.industry,
            image_url: self.image_url,
            days_left: self.days_left,
            project_name: self.project_name,
            raised: self.raised,
            investors: self.investors,
            votes: self.votes,
            min_investment: self.min_investment,
            slogan: self.slogan,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectResponse {
    #[serde(rename = "id")]
    pub id: String,
    pub category: String,
    pub city: String,
    pub industry: String,
    pub image_url: String,
    pub days_left: i64,
    pub project_name: String,
    pub raised: i64,
    pub investors: i64,
    pub votes: i64,
    pub min_investment: i64,
    pub slogan: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        ProjectResponse {
            id: wire_id(p.id),
            category: p.category,
            city: p.city,
            industry: p.industry,
            image_url: p.image_url,
            days_left: p.days_left,
            project_name: p.project_name,
            raised: p.raised,
            investors: p.investors,
            votes: p.votes,
            min_investment: p.min_investment,
            slogan: p.slogan,
        }
    }
}
