//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! 모든 엔티티는 [`Entity<P>`]로 감싸진 검증된 속성(props)과 선택적 식별자로 구성됩니다.
//! 엔티티는 팩토리([`Entity::create`], [`Entity::restore`])를 통해서만 만들어지며,
//! 팩토리는 검증 실패를 패닉 대신 `Validation` 실패 결과로 돌려줍니다.
//! 존재하는 엔티티는 언제나 자기 검증을 통과한 상태입니다.
//!
//! ## 엔티티 설계 원칙
//!
//! ### 1. 생성 시 검증, 이후 불변
//! 속성은 공유 참조로만 노출되고, 변경은 `with_*` 메서드나 [`Entity::update`]로
//! 새 엔티티를 만들며 이때 검증이 다시 실행됩니다.
//!
//! ### 2. 영속성 분리
//! 엔티티는 MongoDB 문서 형태를 모릅니다. 문서 변환은
//! [`mappers`](crate::domain::mappers)가 담당합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs          ← Entity<P>, EntityProps
//! ├── users/          ← UserEntity, Role
//! ├── products/       ← ProductEntity
//! └── categories/     ← CategoryEntity
//! ```

use std::fmt::Debug;
use crate::core::outcome::{FailureKind, Outcome};

pub mod users;
pub mod products;
pub mod categories;

pub use users::user::{Role, UserEntity, UserProps};
pub use products::product::{ProductEntity, ProductProps, MAX_STORABLE_AMOUNT};
pub use categories::category::{CategoryEntity, CategoryProps};

/// 엔티티 속성 집합이 구현하는 검증 계약
pub trait EntityProps: Clone + Debug + PartialEq + Send + Sync {
    /// 에러 메시지에 쓰이는 엔티티 이름
    const ENTITY_NAME: &'static str;

    /// 검증 전에 적용되는 정규화 (공백 제거 등)
    fn normalize(self) -> Self {
        self
    }

    /// 도메인 불변식 검증. 위반 시 사람이 읽을 수 있는 메시지를 반환합니다.
    fn validate(&self) -> Result<(), String>;
}

/// 검증된 속성과 선택적 식별자를 가진 도메인 엔티티
///
/// 식별자는 영속화 이후에만 존재합니다 (`create`로 만든 엔티티는 `None`).
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<P> {
    id: Option<String>,
    props: P,
}

impl<P: EntityProps> Entity<P> {
    /// 새 엔티티를 생성합니다. 식별자는 아직 없습니다.
    pub fn create(props: P) -> Outcome<Self> {
        Self::build(None, props)
    }

    /// 영속화된 데이터로부터 엔티티를 복원합니다. 생성과 같은 검증을 거칩니다.
    pub fn restore(id: impl Into<String>, props: P) -> Outcome<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Outcome::fail(
                format!("{} id must not be empty", P::ENTITY_NAME),
                FailureKind::Validation,
            );
        }
        Self::build(Some(id), props)
    }

    fn build(id: Option<String>, props: P) -> Outcome<Self> {
        let props = props.normalize();
        match props.validate() {
            Ok(()) => Outcome::ok(Self { id, props }),
            Err(message) => Outcome::fail(message, FailureKind::Validation),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn into_props(self) -> P {
        self.props
    }

    /// 속성을 수정한 새 엔티티를 만듭니다. 수정 결과는 다시 검증됩니다.
    pub fn update<F>(self, f: F) -> Outcome<Self>
    where
        F: FnOnce(&mut P),
    {
        let Entity { id, mut props } = self;
        f(&mut props);
        Self::build(id, props)
    }
}

/// 공백을 제거한 뒤 비어 있지 않은지 확인합니다.
pub(crate) fn require_non_empty(value: &str, entity: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} {} must not be empty", entity, field));
    }
    Ok(())
}
