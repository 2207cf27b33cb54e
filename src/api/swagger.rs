use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "YouthChain API",
        version = "1.0.0",
        description = "Users, funding projects and community events for the YouthChain platform.\n\n**Errors:** non-2xx responses carry `{\"success\": false, \"error\": \"...\"}`."
    ),
    paths(
        // Users
        crate::api::users::check_user,

        // Projects
        crate::api::projects::get_projects,
        crate::api::projects::post_project,
        crate::api::projects::get_project,
        crate::api::users::get_user_projects,

        // Events
        crate::api::events::get_events,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::CheckUserRequest,
            crate::models::CheckUserResponse,
            crate::models::UserResponse,
            crate::models::CreateProjectRequest,
            crate::models::ProjectResponse,
            crate::models::EventResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Look up platform users by Ethereum address."),
        (name = "Projects", description = "Funding projects: list by category, create, and resolve a user's projects."),
        (name = "Events", description = "Community events by category."),
        (name = "Health", description = "Health check and request metrics."),
    )
)]
pub struct ApiDoc;
