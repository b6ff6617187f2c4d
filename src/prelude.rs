use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(&'static str),

    #[error("User not found")]
    NotFound,

    #[error("Incorrect Password")]
    Unauthorized,

    /// A server-side failure carrying the message shown to the client.
    #[error("{public}: {detail}")]
    Internal { public: &'static str, detail: String },

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

const DEFAULT_INTERNAL: &str = "Internal Server Error";

impl Error {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::NotFound | Error::Unauthorized
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub trait ResultExt<T> {
    /// Replaces the client-facing message of server-side failures.
    fn or_internal(self, public: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_internal(self, public: &'static str) -> Result<T> {
        self.map_err(|e| match e {
            e if e.is_client_error() => e,
            Error::Internal { detail, .. } => Error::Internal { public, detail },
            e => Error::Internal {
                public,
                detail: e.to_string(),
            },
        })
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Error::Validation(msg) => {
                tracing::warn!("rejected request: {}", msg);
                (status, Json(json!({ "error": msg }))).into_response()
            }
            Error::NotFound | Error::Unauthorized => {
                tracing::warn!("sign-in refused: {}", &self);
                (status, self.to_string()).into_response()
            }
            Error::Internal { public, detail } => {
                tracing::error!("{}: {}", public, detail);
                (status, Json(json!({ "error": public }))).into_response()
            }
            e => {
                tracing::error!("unhandled error: {:?}", e);
                (status, Json(json!({ "error": DEFAULT_INTERNAL }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{StatusCode, header::CONTENT_TYPE},
        response::IntoResponse,
    };
    use http_body_util::BodyExt;

    use super::{Error, Result, ResultExt};

    async fn body_of(err: Error) -> (StatusCode, String, String) {
        let res = err.into_response();
        let status = res.status();
        let ctype = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, ctype, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_is_plain_text() {
        let (status, ctype, body) = body_of(Error::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(ctype.starts_with("text/plain"));
        assert_eq!(body, "User not found");
    }

    #[tokio::test]
    async fn test_unauthorized_is_plain_text() {
        let (status, ctype, body) = body_of(Error::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(ctype.starts_with("text/plain"));
        assert_eq!(body, "Incorrect Password");
    }

    #[tokio::test]
    async fn test_validation_is_json() {
        let (status, ctype, body) = body_of(Error::Validation("Missing required fields")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(ctype.starts_with("application/json"));
        assert_eq!(body, r#"{"error":"Missing required fields"}"#);
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let res: Result<()> = Err(Error::Database(sqlx::Error::PoolTimedOut));
        let err = res.or_internal("An error occurred while adding the job offer").unwrap_err();
        let (status, _, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"An error occurred while adding the job offer"}"#);
    }

    #[tokio::test]
    async fn test_bare_internal_uses_default_message() {
        let (status, _, body) = body_of(Error::Database(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Internal Server Error"}"#);
    }

    #[test]
    fn test_or_internal_keeps_client_errors() {
        let res: Result<()> = Err(Error::NotFound);
        assert!(matches!(res.or_internal("x"), Err(Error::NotFound)));
    }
}
