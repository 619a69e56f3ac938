//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::{UserEntity, UserProps};
//!
//! let props = UserProps::new_member("user@example.com", hashed_password, None, None);
//! let user = UserEntity::create(props).into_value()?;
//! assert!(!user.is_verified());
//! ```

pub mod user;
