//! # Core Framework Module
//!
//! 계층 전반에서 공유하는 핵심 기반 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 예상하지 못한 실패와 전송 계층 에러를 표현
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 에러를 컨텍스트와 함께 변환
//!
//! ### [`outcome`] - 성공/실패 결과 값
//! - **Outcome**: 예상 가능한 실패를 값으로 전달하는 태그드 결과
//! - **FailureKind**: Validation / NotFound / Conflict / Unauthorized / NotAcceptable
//!
//! ### [`registry`] - 서비스 로케이터
//! - **ServiceLocator**: 프로세스 수명의 싱글톤 보관소
//!
//! ## 실패 전파 규칙
//!
//! ```text
//! 저장소 포트 ── AppResult<Outcome<T>> ──▶ 유스케이스 ── AppResult<Outcome<T>> ──▶ 핸들러
//!     │                                       │                                  │
//!     │ 중복/없음 → Outcome 실패              │ 예상 실패 → Outcome 실패          │ Failure → AppError
//!     └ 백엔드 오류 → Err(DatabaseError)       └ 그 외 → Err(InternalError)        └ ResponseError
//! ```

pub mod errors;
pub mod outcome;
pub mod registry;

pub use errors::{AppError, AppResult, ErrorContext};
pub use outcome::{Failure, FailureKind, Outcome};
pub use registry::ServiceLocator;
