use crate::database::DbErrorKind;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("Serviço indisponível: pool de conexões falhou.")]
    Unavailable,

    #[error("Erro ao consultar o banco de dados: {0}")]
    Query(DbErrorKind),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<&sqlx::Error> for ApiError {
    fn from(err: &sqlx::Error) -> Self {
        ApiError::Query(DbErrorKind::classify(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
