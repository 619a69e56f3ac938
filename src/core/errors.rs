//! # Application Error Handling System
//!
//! 유스케이스 경계 밖으로 전파되는 "예상하지 못한" 실패를 표현하는 에러 시스템입니다.
//! 예상 가능한 실패(검증 실패, 리소스 없음, 중복 등)는 [`Outcome`](crate::core::outcome::Outcome)
//! 으로 반환되고, 이 모듈의 [`AppError`]는 다음 두 경우에만 사용됩니다.
//!
//! - 저장소/서명/해싱 등 백엔드가 예상 밖으로 실패한 경우 (치명적, 500)
//! - 핸들러가 `Failure`를 HTTP 응답으로 변환하는 경우 (`From<Failure>`)
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `NotAcceptable` | 406 Not Acceptable |
//! | `ConflictError` | 409 Conflict |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! 5xx 응답 본문에는 내부 정보를 싣지 않습니다. 상세 내용은 서버 로그에만 남깁니다.

use thiserror::Error;
use crate::core::outcome::{Failure, FailureKind};

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`만으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    ///
    /// 연결 실패, 쿼리 실행 실패, BSON 변환 실패 등 저장소가 예상 밖으로 실패한 경우입니다.
    /// 중복 키 위반은 여기에 해당하지 않고 `Conflict` 실패 결과로 반환됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 형식이 허용되지 않는 요청 (406)
    ///
    /// 잘못된 ObjectId 형식 등 조회 키 자체를 해석할 수 없는 경우입니다.
    #[error("Not acceptable: {0}")]
    NotAcceptable(String),

    /// 충돌/중복 에러 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500)
    ///
    /// 예상하지 못한 모든 실패가 최종적으로 수렴하는 단일 에러 종류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 서버 측 오류(5xx)인지 여부
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따르며,
    /// 5xx 에러는 원인을 로그로만 남기고 클라이언트에는 일반 메시지를 반환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = if self.is_internal() {
            log::error!("요청 처리 중 내부 오류 발생: {}", self);
            "Something went wrong".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(AppError::status_code(self))
            .json(serde_json::json!({
                "error": message
            }))
    }
}

impl From<Failure> for AppError {
    /// 유스케이스의 실패 결과를 전송 계층 에러로 변환합니다.
    fn from(failure: Failure) -> Self {
        let message = failure.message().to_string();
        match failure.kind() {
            FailureKind::Validation => AppError::ValidationError(message),
            FailureKind::NotFound => AppError::NotFound(message),
            FailureKind::Conflict => AppError::ConflictError(message),
            FailureKind::Unauthorized => AppError::AuthenticationError(message),
            FailureKind::NotAcceptable => AppError::NotAcceptable(message),
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let matched = bcrypt::verify(plain, &hash)
///     .context("저장된 비밀번호 해시 검증 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
