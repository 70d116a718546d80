use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// JSON body extractor that rejects with a JSON error instead of plain text
pub struct AppJson<T>(pub T);

/// Query string extractor with the same error shape as [`AppJson`]
pub struct AppQuery<T>(pub T);

fn error_response(status: StatusCode, message: String) -> Response {
    tracing::warn!("{}", message);
    (
        status,
        Json(json!({
            "message": message,
            "status": status.as_u16()
        })),
    )
        .into_response()
}

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: serde::de::DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(JsonRejection::MissingJsonContentType(rejection)) => Err(error_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                rejection.body_text(),
            )),
            Err(rejection) => Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to parse JSON request body: {}", rejection.body_text()),
            )),
        }
    }
}

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: serde::de::DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| AppQuery(value))
            .map_err(|rejection: QueryRejection| {
                error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid query string: {}", rejection.body_text()),
                )
            })
    }
}
