//! # Persistence Models
//!
//! MongoDB 컬렉션에 저장되는 문서 형태를 정의합니다.
//! 도메인 엔티티와 문서 사이의 변환은 [`mappers`](crate::domain::mappers)가 담당하며,
//! 저장소 어댑터는 이 모듈의 타입만 읽고 씁니다.
//!
//! ## 직렬화 규칙
//!
//! - 필드 이름은 camelCase (`isVerified`, `categoryId`, `createdAt` ...)
//! - 식별자는 `_id` 필드의 BSON ObjectId
//! - 타임스탬프는 BSON DateTime
//!
//! ## 컬렉션
//!
//! | 모델 | 컬렉션 | 유니크 필드 |
//! |------|--------|-------------|
//! | [`UserModel`] | `users` | `email` |
//! | [`ProductModel`] | `products` | - |
//! | [`CategoryModel`] | `categories` | `name` |

use mongodb::bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Serialize};

pub mod user_model;
pub mod product_model;
pub mod category_model;
pub mod token;

pub use user_model::UserModel;
pub use product_model::ProductModel;
pub use category_model::CategoryModel;
pub use token::token::{TokenClaims, TokenKind, TokenPair};

/// 컬렉션에 저장되는 모든 문서가 구현하는 공통 계약
///
/// 저장소 어댑터는 이 trait만으로 컬렉션 이름, 유니크 인덱스, 식별자를 알아냅니다.
pub trait BaseDocument:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    /// 문서가 저장되는 컬렉션 이름
    const COLLECTION: &'static str;

    /// 유니크 인덱스가 걸리는 필드 (직렬화된 이름 기준)
    const UNIQUE_FIELDS: &'static [&'static str];

    fn id(&self) -> ObjectId;
}
