//! # 사용자 관련 응답 DTO 모듈
//!
//! - **데이터 은닉**: 비밀번호 해시는 `UserView::with_password`로 명시적으로 요청한 경우에만 포함
//! - **일관성**: 모든 응답 필드는 camelCase

pub mod user_response;

pub use user_response::{UserResponse, UserView, UsersPage};
