use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not find the requested resource")]
    NotFound,
    #[error(transparent)]
    ExtractRequestBody(#[from] JsonRejection),

    #[error("Could not checkout a connection from connection pool")]
    CheckoutConnectionPool,

    #[error(transparent)]
    Internal(#[from] color_eyre::Report),
}

impl From<diesel::result::Error> for Error {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => Self::NotFound,
            _ => Self::Internal(value.into()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::NotFound => StatusCode::NOT_FOUND.into_response(),
            Error::ExtractRequestBody(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
            }
            Error::CheckoutConnectionPool | Error::Internal(_) => {
                tracing::error!(error = ?self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
