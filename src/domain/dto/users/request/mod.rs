//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 유스케이스가 받는 입력 구조를 정의합니다.
//! 쿼리 값은 원시 문자열로 받아 유스케이스에서 관대하게 해석합니다.

pub mod create_user;
pub mod get_users_query;

pub use create_user::CreateUserDto;
pub use get_users_query::GetUsersQuery;
