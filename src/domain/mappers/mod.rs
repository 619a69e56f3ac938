//! # Domain Mappers
//!
//! 도메인 엔티티와 영속성 모델 사이의 양방향 변환을 담당합니다.
//!
//! 매퍼는 상태가 없는 순수 함수 쌍입니다.
//!
//! - `to_model_data`: 엔티티 → 문서. 식별자가 없는 엔티티라면 새 ObjectId와 타임스탬프를 부여합니다.
//! - `to_domain`: 문서 → 엔티티. [`Entity::restore`](crate::domain::entities::Entity::restore)로
//!   같은 검증을 다시 거치며, 검증에 실패한 문서는 데이터 무결성 오류(`AppError::InternalError`)입니다.
//!
//! `to_domain(to_model_data(e))`는 영속성 전용 필드(`_id`, `createdAt`, `updatedAt`)를 제외한
//! `e`의 모든 관찰 가능한 필드를 그대로 재현합니다.

use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Entity, EntityProps};
use crate::domain::models::BaseDocument;

pub mod user_mapper;
pub mod product_mapper;
pub mod category_mapper;

pub use user_mapper::UserMapper;
pub use product_mapper::ProductMapper;
pub use category_mapper::CategoryMapper;

/// 엔티티 ↔ 영속성 모델 변환 계약
pub trait Mapper: Send + Sync + 'static {
    type Entity: Clone + Send + Sync + 'static;
    type Model: BaseDocument;

    fn to_model_data(entity: &Self::Entity) -> Self::Model;

    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장된 문서가 엔티티 검증을 통과하지 못한 경우
    fn to_domain(model: Self::Model) -> AppResult<Self::Entity>;
}

/// 엔티티 식별자를 ObjectId로 변환합니다. 식별자가 없으면 새로 발급합니다.
pub(crate) fn object_id_for<P>(entity: &Entity<P>) -> ObjectId
where
    P: EntityProps,
{
    match entity.id() {
        Some(id) => ObjectId::parse_str(id).unwrap_or_else(|e| {
            log::warn!("{} 식별자 형식 오류 ({}), 새 ObjectId 발급: {}", P::ENTITY_NAME, e, id);
            ObjectId::new()
        }),
        None => ObjectId::new(),
    }
}

/// 저장된 문서로 엔티티를 복원합니다. 실패는 데이터 무결성 오류입니다.
pub(crate) fn restore_entity<P>(id: ObjectId, props: P) -> AppResult<Entity<P>>
where
    P: EntityProps,
{
    Entity::restore(id.to_hex(), props)
        .into_result()
        .map_err(|failure| {
            log::error!("저장된 {} 문서가 손상되었습니다 ({}): {}", P::ENTITY_NAME, id, failure);
            AppError::InternalError(format!(
                "Stored {} record {} is invalid: {}",
                P::ENTITY_NAME,
                id,
                failure.message()
            ))
        })
}
