//! 커머스 백엔드
//!
//! 사용자, 인증, 카탈로그(카테고리/상품)를 다루는 Rust 기반 REST 서비스입니다.
//! 유스케이스는 저장소 포트([`DataServices`](domain::abstracts::DataServices))에만 의존하고,
//! MongoDB 또는 메모리 어댑터가 시작 시점에 연결됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 목록 페이지네이션, 식별자/이메일 조회
//! - **JWT 인증**: 액세스/리프레시 토큰, 종류별 비밀키 분리
//! - **카탈로그**: 카테고리와 상품 등록 및 조회
//! - **Outcome**: 예상 가능한 실패는 값으로, 예상하지 못한 실패는 `AppError`로
//! - **MongoDB**: 유니크 인덱스로 중복 방지
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, Outcome → HTTP 상태
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 유스케이스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DataServices   │ ← 저장소 포트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | Memory│ ← 어댑터
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use commerce_backend::repositories::memory::InMemoryDataServices;
//! use commerce_backend::services::users::UsersUseCases;
//!
//! let users = UsersUseCases::new(Arc::new(InMemoryDataServices::new()));
//! let page = users.get_users(None).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
