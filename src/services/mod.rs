//! 비즈니스 로직을 담당하는 유스케이스 계층 모듈
//!
//! 각 유스케이스는 [`DataServices`](crate::domain::abstracts::DataServices) 포트에만 의존하며,
//! 애플리케이션 시작 시 한 번 생성되어 [`ServiceLocator`](crate::core::registry::ServiceLocator)에
//! 등록됩니다.
//!
//! # Features
//!
//! - 사용자 생성과 조회, 목록 페이지네이션
//! - 회원 가입, 로그인, JWT 액세스/리프레시 토큰 발급
//! - 카테고리/상품 카탈로그
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthsUseCases, users::UsersUseCases};
//!
//! let users = Arc::new(UsersUseCases::new(data_services.clone()));
//! ServiceLocator::set(users.clone());
//!
//! let auths = ServiceLocator::get::<AuthsUseCases>()?;
//! let outcome = auths.validate_user(login).await?;
//! ```

pub mod users;
pub mod auth;
pub mod categories;
pub mod products;

use std::sync::Arc;
use crate::core::registry::ServiceLocator;
use crate::domain::abstracts::DataServices;
use crate::services::auth::{AuthsUseCases, PasswordHasher, TokenService};
use crate::services::categories::CategoriesUseCases;
use crate::services::products::ProductsUseCases;
use crate::services::users::UsersUseCases;

/// 선택된 저장소 어댑터로 모든 유스케이스를 만들어 등록합니다.
pub fn register_use_cases(
    data_services: Arc<dyn DataServices>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<TokenService>,
) {
    let users = Arc::new(UsersUseCases::new(data_services.clone()));

    ServiceLocator::set(Arc::new(AuthsUseCases::new(users.clone(), hasher, tokens)));
    ServiceLocator::set(users);
    ServiceLocator::set(Arc::new(CategoriesUseCases::new(data_services.clone())));
    ServiceLocator::set(Arc::new(ProductsUseCases::new(data_services)));
}
