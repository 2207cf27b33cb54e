use crate::{database::Store, models::EventResponse, utils::error::AppError};

pub async fn list_by_category(store: &dyn Store, category: &str) -> Result<Vec<EventResponse>, AppError> {
    let events = store.find_events_by_category(category).await?;
    Ok(events.into_iter().map(EventResponse::from).collect())
}
