//! # Outcome
//!
//! 예상 가능한 실패를 예외 대신 값으로 전달하기 위한 성공/실패 래퍼입니다.
//!
//! 유스케이스와 저장소 포트는 `AppResult<Outcome<T>>`를 반환합니다.
//!
//! - 바깥 `Err(AppError)`: 예상하지 못한 치명적 실패 (500으로 수렴)
//! - 안쪽 `Outcome` 실패: 검증 실패, 리소스 없음, 중복, 인증 실패 등 호출자가 처리할 실패
//!
//! 생성 경로는 [`Outcome::ok`]와 [`Outcome::fail`] 두 가지뿐이며, 내부 표현은 비공개입니다.
//! 반대편 값(실패의 값, 성공의 에러)에 접근하면 조용히 기본값을 돌려주지 않고
//! `AppError::InternalError`를 반환합니다.
//!
//! ```rust,ignore
//! let outcome = users.get_one_user_by_id(&id).await?;
//! match outcome.into_result() {
//!     Ok(user) => HttpResponse::Ok().json(user),
//!     Err(failure) => return Err(failure.into()),
//! }
//! ```

use std::fmt;
use actix_web::http::StatusCode;
use crate::core::errors::{AppError, AppResult};

/// 예상 가능한 실패의 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 잘못된 입력 (엔티티 생성 실패, 비밀번호 확인 불일치 등)
    Validation,
    /// 조회 대상 없음
    NotFound,
    /// 유니크 제약 위반
    Conflict,
    /// 자격 증명 불일치
    Unauthorized,
    /// 조회 키 형식 오류
    NotAcceptable,
}

impl FailureKind {
    /// HTTP 상태 코드와 유사한 분류 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            FailureKind::Validation => StatusCode::BAD_REQUEST,
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::Conflict => StatusCode::CONFLICT,
            FailureKind::Unauthorized => StatusCode::UNAUTHORIZED,
            FailureKind::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Validation => "validation",
            FailureKind::NotFound => "not_found",
            FailureKind::Conflict => "conflict",
            FailureKind::Unauthorized => "unauthorized",
            FailureKind::NotAcceptable => "not_acceptable",
        }
    }
}

/// 실패 결과의 본문: 사람이 읽을 수 있는 메시지와 분류
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    message: String,
    kind: FailureKind,
}

impl Failure {
    pub fn new(message: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Inner<T> {
    Success(T),
    Failure(Failure),
}

/// 성공 값 또는 분류된 실패를 담는 결과 값
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T>(Inner<T>);

impl<T> Outcome<T> {
    /// 성공 결과 생성
    pub fn ok(value: T) -> Self {
        Outcome(Inner::Success(value))
    }

    /// 실패 결과 생성
    pub fn fail(message: impl Into<String>, kind: FailureKind) -> Self {
        Outcome(Inner::Failure(Failure::new(message, kind)))
    }

    /// 이미 만들어진 실패를 그대로 전달합니다.
    pub fn from_failure(failure: Failure) -> Self {
        Outcome(Inner::Failure(failure))
    }

    pub fn is_success(&self) -> bool {
        matches!(self.0, Inner::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// 실패 분류 (성공이면 `None`)
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match &self.0 {
            Inner::Success(_) => None,
            Inner::Failure(failure) => Some(failure.kind),
        }
    }

    /// 성공 값을 참조합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 실패 결과의 값을 읽으려 한 경우 (프로그래밍 오류)
    pub fn value(&self) -> AppResult<&T> {
        match &self.0 {
            Inner::Success(value) => Ok(value),
            Inner::Failure(failure) => Err(AppError::InternalError(format!(
                "Can't get the value of a failed result: {}",
                failure
            ))),
        }
    }

    /// 성공 값을 꺼냅니다. 실패였다면 `AppError::InternalError`.
    pub fn into_value(self) -> AppResult<T> {
        match self.0 {
            Inner::Success(value) => Ok(value),
            Inner::Failure(failure) => Err(AppError::InternalError(format!(
                "Can't get the value of a failed result: {}",
                failure
            ))),
        }
    }

    /// 실패 본문을 참조합니다. 성공 결과라면 `AppError::InternalError`.
    pub fn error(&self) -> AppResult<&Failure> {
        match &self.0 {
            Inner::Success(_) => Err(AppError::InternalError(
                "Can't get the error of a successful result".to_string(),
            )),
            Inner::Failure(failure) => Ok(failure),
        }
    }

    /// 패턴 매칭을 위해 표준 `Result`로 변환합니다.
    pub fn into_result(self) -> Result<T, Failure> {
        match self.0 {
            Inner::Success(value) => Ok(value),
            Inner::Failure(failure) => Err(failure),
        }
    }

    /// 성공 값을 변환합니다. 실패는 그대로 전달됩니다.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.0 {
            Inner::Success(value) => Outcome::ok(f(value)),
            Inner::Failure(failure) => Outcome::from_failure(failure),
        }
    }

    /// 성공 값으로 다음 단계를 이어갑니다.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.0 {
            Inner::Success(value) => f(value),
            Inner::Failure(failure) => Outcome::from_failure(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_exposes_value() {
        let outcome = Outcome::ok(42);

        assert!(outcome.is_success());
        assert_eq!(*outcome.value().unwrap(), 42);
        assert_eq!(outcome.failure_kind(), None);
    }

    #[test]
    fn test_value_of_failure_is_loud() {
        let outcome: Outcome<u32> = Outcome::fail("No such user exists", FailureKind::NotFound);

        assert!(outcome.is_failure());
        assert!(matches!(outcome.value(), Err(AppError::InternalError(_))));
        assert!(matches!(outcome.into_value(), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_error_of_success_is_loud() {
        let outcome = Outcome::ok("value");

        assert!(matches!(outcome.error(), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_failure_keeps_message_and_kind() {
        let outcome: Outcome<()> = Outcome::fail("duplicate", FailureKind::Conflict);
        let failure = outcome.error().unwrap();

        assert_eq!(failure.message(), "duplicate");
        assert_eq!(failure.kind(), FailureKind::Conflict);
        assert_eq!(failure.kind().status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_map_and_then_short_circuit_failures() {
        let doubled = Outcome::ok(2).map(|v| v * 2);
        assert_eq!(doubled.into_result(), Ok(4));

        let failed: Outcome<i32> = Outcome::fail("bad", FailureKind::Validation);
        let chained = failed.and_then(|v| Outcome::ok(v + 1));
        assert_eq!(chained.failure_kind(), Some(FailureKind::Validation));
    }
}
