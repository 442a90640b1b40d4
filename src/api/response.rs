use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};

use crate::models::{ResponseMessage, UserRecord};
use crate::utils::{pretty_print, AppError};

/// Every user as its own pretty JSON object, joined by a newline.
///
/// An empty list is an error, not an empty body.
pub fn format_list(users: &[UserRecord]) -> Result<String, AppError> {
    if users.is_empty() {
        log::warn!("⚠️ [GET] No users exist");
        return Err(AppError::EmptyResult);
    }

    log::info!("✅ [GET] Found {} users", users.len());
    let rendered = users
        .iter()
        .map(pretty_print)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rendered.join("\n"))
}

/// The user, or a 404 envelope naming the id that was looked up
pub fn format_single(
    user: Option<&UserRecord>,
    id: &str,
) -> Result<(String, StatusCode), AppError> {
    match user {
        Some(user) => {
            log::info!("✅ [GET] Found user with id {}", id);
            Ok((pretty_print(user)?, StatusCode::OK))
        }
        None => {
            log::warn!("⚠️ [GET] No user with id {}", id);
            let envelope = ResponseMessage::new(
                format!("No user with id {} found", id),
                StatusCode::NOT_FOUND.as_u16(),
            );
            Ok((pretty_print(&envelope)?, StatusCode::NOT_FOUND))
        }
    }
}

pub fn format_success(message: &str) -> Result<String, AppError> {
    pretty_print(&ResponseMessage::new(message, StatusCode::OK.as_u16()))
}

/// 400 envelope for any error.
///
/// Falls back to plain text when the envelope itself cannot be rendered.
pub fn format_error(error: &AppError) -> (String, StatusCode) {
    let status = StatusCode::BAD_REQUEST;
    let envelope = ResponseMessage::new(error.to_string(), status.as_u16());

    match pretty_print(&envelope) {
        Ok(body) => (body, status),
        Err(render_error) => {
            log::error!("❌ Failed to render error envelope: {}", render_error);
            (format!("{}\n{}", render_error, error), status)
        }
    }
}

/// Global error handler: every error a route returns becomes a 400 envelope
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("⚠️ {}", self);
        let (body, status) = format_error(self);

        HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(body)
    }
}
