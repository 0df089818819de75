// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

// endregion: --- Imports

/// 클라이언트에 노출되는 고정 오류 메시지
pub const SERVER_ERROR_BODY: &str = "Server error";

/// 서비스 오류
/// HTTP 경계에서는 종류와 관계없이 500 + 고정 메시지로 응답한다.
#[derive(Debug, Error)]
pub enum Error {
    #[error("데이터베이스 오류: {0}")]
    Database(#[from] sqlx::Error),

    #[error("잘못된 사용자 id: {0:?}")]
    InvalidUserId(String),

    #[error("설정 오류: {0}")]
    Config(#[from] clap::Error),

    #[error("페이지 렌더링 오류")]
    Render(#[from] std::fmt::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("{:<12} --> 요청 처리 실패: {}", "Handler", self);
        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
    }
}
