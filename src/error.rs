use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("a movie titled {0:?} is already in the list")]
    DuplicateTitle(String),

    #[error("no movie with id {0}")]
    NotFound(i32),

    #[error("film lookup unavailable: {0}")]
    LookupUnavailable(#[from] reqwest::Error),

    #[error("film lookup returned an incomplete record: missing {0}")]
    MalformedResponse(&'static str),

    #[error("release date {0:?} has no usable year")]
    MalformedDate(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::DuplicateTitle(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::LookupUnavailable(_)
            | AppError::MalformedResponse(_)
            | AppError::MalformedDate(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = crate::templates::error_page(self.to_string());
        (self.status(), Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
