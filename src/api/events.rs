use actix_web::{web, HttpResponse};
use serde::Deserialize;
use crate::{database::Store, models::EventResponse, services::event_service, utils::error::AppError};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventCategoryQuery {
    /// The event category
    #[serde(rename = "eventCategory")]
    pub event_category: String,
}

// GET /events?eventCategory=Workshop
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    params(EventCategoryQuery),
    responses(
        (status = 200, description = "All events in the category", body = Vec<EventResponse>),
        (status = 400, description = "Missing eventCategory parameter"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_events(
    query: web::Query<EventCategoryQuery>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    log::info!("📅 GET /events - category: {}", query.event_category);

    let events = event_service::list_by_category(store.get_ref(), &query.event_category).await?;
    log::info!("✅ Found {} events", events.len());

    Ok(HttpResponse::Ok().json(events))
}
