use crate::models::id::wire_id;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Usuário armazenado na coleção `users` (criado fora desta API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub surname: String,
    pub ethereum_address: String,

    /// Referências (hex ids) para documentos de `projects`. Não há integridade referencial.
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub watchlist: Vec<String>,
}

/// Request body for `POST /check-user`
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckUserRequest {
    pub ethereum_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub ethereum_address: String,
    pub projects: Vec<String>,
    pub events: Vec<String>,
    pub watchlist: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: wire_id(u.id),
            name: u.name,
            surname: u.surname,
            ethereum_address: u.ethereum_address,
            projects: u.projects,
            events: u.events,
            watchlist: u.watchlist,
        }
    }
}

/// Envelope returned by `POST /check-user`. Always sent with HTTP 200;
/// `success` and `status_code` tell whether the address is registered.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CheckUserResponse {
    pub success: bool,
    pub status_code: u16,
    pub data: Option<UserResponse>,
}

impl CheckUserResponse {
    pub fn found(user: User) -> Self {
        Self { success: true, status_code: 200, data: Some(user.into()) }
    }

    pub fn not_found() -> Self {
        Self { success: false, status_code: 404, data: None }
    }
}
