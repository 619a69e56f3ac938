//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 규칙과 저장소 포트를 담당합니다.
//! 헥사고날(ports and adapters) 구조에서 안쪽 원에 해당하며,
//! 구체 저장소나 HTTP 프레임워크에 의존하지 않습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Handlers (actix-web)
//!      │
//!      ▼
//! Use-cases (services)  ──── Outcome<T> ────▶ Handlers
//!      │
//!      ├── Entities      - 검증된 도메인 객체 (Entity<P>)
//!      ├── Mappers       - 엔티티 ↔ 영속성 모델
//!      ├── DTOs          - 요청/응답 계약
//!      └── Abstracts     - DataServices 포트
//!                              │
//!                              ▼
//!                 Adapters (repositories: mongo, memory)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! Handler → UseCase → Entity::create → Mapper::to_model_data
//!         → DataServices create/find → Mapper::to_domain
//!         → 응답 DTO → Outcome → HTTP 응답
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//! 팩토리에서 검증을 통과한 상태로만 존재하는 불변 객체들입니다.
//!
//! ### [`models`] - 영속성 모델
//! MongoDB 문서 형태 (camelCase, `_id` ObjectId).
//!
//! ### [`mappers`] - 변환 계약
//! 상태 없는 순수 함수 쌍. 손상된 문서는 `InternalError`로 드러냅니다.
//!
//! ### [`abstracts`] - 저장소 포트
//! 어댑터가 구현하는 `DataServices` / `GenericRepository` trait.
//!
//! ### [`dto`] - 데이터 전송 객체
//! `validator`로 검증되는 요청과 비밀번호를 노출하지 않는 응답.

pub mod entities;
pub mod models;
pub mod mappers;
pub mod abstracts;
pub mod dto;
