use actix_web::HttpResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Store Service API",
        version = "1.0.0",
        description = "List, fetch, create, update and remove schema-free user documents stored in MongoDB.\n\nEvery user carries a unique string `id`; all other fields are passed through untouched."
    ),
    paths(
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::remove_user,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::ResponseMessage,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User document CRUD. Errors answer 400 with a {message, status} envelope."),
        (name = "Health", description = "Liveness and database connectivity."),
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
