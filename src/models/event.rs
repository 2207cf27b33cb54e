use crate::models::{id::wire_id, number::integer};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Evento da comunidade (coleção `events`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub event_name: String,
    pub event_description: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub img: String,
    pub main_speaker: String,
    pub rules: String,
    #[serde(deserialize_with = "integer")]
    pub votes: i64,
    #[serde(deserialize_with = "integer")]
    pub needed_votes: i64,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub event_name: String,
    pub event_description: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub img: String,
    pub main_speaker: String,
    pub rules: String,
    pub votes: i64,
    pub needed_votes: i64,
    pub category: String,
}

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        EventResponse {
            id: wire_id(e.id),
            event_name: e.event_name,
            event_description: e.event_description,
            start_date: e.start_date,
            end_date: e.end_date,
            location: e.location,
            img: e.img,
            main_speaker: e.main_speaker,
            rules: e.rules,
            votes: e.votes,
            needed_votes: e.needed_votes,
            category: e.category,
        }
    }
}
