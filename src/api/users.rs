use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{get, post, put, web, HttpResponse};

use crate::api::response::{format_list, format_single, format_success};
use crate::models::ResponseMessage;
use crate::services::user_service::UserStore;
use crate::utils::AppError;

/// Register the user routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(remove_user);
}

fn json_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(body)
}

/// GET /users - Every user, one pretty JSON object per block
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Newline separated user documents"),
        (status = 400, description = "Database empty", body = ResponseMessage)
    )
)]
#[get("/users")]
pub async fn list_users(store: web::Data<dyn UserStore>) -> Result<HttpResponse, AppError> {
    let users = store.list_all().await?;
    Ok(json_response(StatusCode::OK, format_list(&users)?))
}

/// GET /users/{id} - One user; 404 is not an error here
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User document"),
        (status = 404, description = "No user with that id", body = ResponseMessage)
    )
)]
#[get("/users/{id}")]
pub async fn get_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let user = store.get_by_id(&id).await?;

    let (body, status) = format_single(user.as_ref(), &id)?;
    Ok(json_response(status, body))
}

/// PUT /create - Insert the user in the body
#[utoipa::path(
    put,
    path = "/create",
    tag = "Users",
    request_body(content = String, description = "User JSON with a unique id", content_type = "application/json"),
    responses(
        (status = 200, description = "User created", body = ResponseMessage),
        (status = 400, description = "Duplicate id or malformed JSON", body = ResponseMessage)
    )
)]
#[put("/create")]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    body: String,
) -> Result<HttpResponse, AppError> {
    store.create(&body).await?;
    log::info!("✅ [CREATE] User created!");

    Ok(json_response(StatusCode::OK, format_success("User created!!")?))
}

/// PUT /update - Replace the user whose id is in the body
#[utoipa::path(
    put,
    path = "/update",
    tag = "Users",
    request_body(content = String, description = "User JSON with an existing id", content_type = "application/json"),
    responses(
        (status = 200, description = "User updated", body = ResponseMessage),
        (status = 400, description = "User not found or malformed JSON", body = ResponseMessage)
    )
)]
#[put("/update")]
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    body: String,
) -> Result<HttpResponse, AppError> {
    store.update(&body).await?;
    log::info!("✅ [UPDATE] User updated!");

    Ok(json_response(StatusCode::OK, format_success("User updated!!")?))
}

/// POST /remove/{id} - Delete one user
#[utoipa::path(
    post,
    path = "/remove/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User removed", body = ResponseMessage),
        (status = 400, description = "User not found", body = ResponseMessage)
    )
)]
#[post("/remove/{id}")]
pub async fn remove_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    store.remove(&id).await?;
    log::info!("✅ [REMOVE] User {} removed", id);

    Ok(json_response(
        StatusCode::OK,
        format_success(&format!("User {} removed!!", id))?,
    ))
}
