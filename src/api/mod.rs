pub mod health;
pub mod metrics;
pub mod swagger;
pub mod validation;
pub mod users;
pub mod projects;
pub mod events;


use actix_web::{http::StatusCode, web};

/// Registers every API route. Shared by `main` and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::get_metrics))
        .route("/check-user", web::post().to(users::check_user))
        .service(
            web::resource("/getProjects")
                .app_data(validation::required_query(StatusCode::UNPROCESSABLE_ENTITY))
                .route(web::get().to(projects::get_projects)),
        )
        .route("/postProjects", web::post().to(projects::post_project))
        .route("/projects/by-user/{ethereum_address}", web::get().to(users::get_user_projects))
        .route("/projects/{id}", web::get().to(projects::get_project))
        .service(
            web::resource("/events")
                .app_data(validation::required_query(StatusCode::BAD_REQUEST))
                .route(web::get().to(events::get_events)),
        );
}
