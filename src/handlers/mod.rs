//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 유스케이스 호출로 옮기는 얇은 계층입니다.
//!
//! ```text
//! Client ──▶ Handlers (이 모듈) ──▶ Use-cases ──▶ DataServices
//!   ▲            │
//!   └────────────┘ Outcome 실패 → AppError → {"error": "..."}
//! ```
//!
//! ## 처리 규칙
//!
//! 1. 요청 DTO는 `validator`로 검증합니다. 실패하면 400
//! 2. 유스케이스는 [`ServiceLocator`](crate::core::registry::ServiceLocator)에서 꺼냅니다
//! 3. `Outcome` 실패는 `?`로 [`AppError`](crate::core::errors::AppError)가 되어 상태 코드로 바뀝니다
//!
//! | 실패 분류 | HTTP Status |
//! |-----------|-------------|
//! | Validation | 400 |
//! | Unauthorized | 401 |
//! | NotFound | 404 |
//! | NotAcceptable | 406 |
//! | Conflict | 409 |
//!
//! ## 모듈 구성
//!
//! - **`auth`**: `POST /auth/register`, `POST /auth/login`, `POST /auth/refresh`
//! - **`users`**: `GET /users`, `GET /users/{id}`
//! - **`categories`**: `POST /categories`, `GET /categories`, `GET /categories/{id}`
//! - **`products`**: `POST /products`, `GET /products`, `GET /products/{id}`

pub mod auth;
pub mod users;
pub mod categories;
pub mod products;
