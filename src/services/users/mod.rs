//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성, 목록 조회, 단건 조회 유스케이스를 제공합니다.
//! 비밀번호 해싱은 호출자(인증 유스케이스)의 책임이며, 여기서는 해시된 값만 다룹니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UsersUseCases;
//!
//! let users = ServiceLocator::get::<UsersUseCases>()?;
//! let page = users.get_users(Some(query)).await?;
//! ```

pub mod users_use_cases;

pub use users_use_cases::UsersUseCases;
