//! Product Document

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::BaseDocument;

/// `products` 컬렉션 문서
///
/// `categoryId`는 카테고리 문서 `_id`의 16진수 문자열입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductModel {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub brand_image: String,
    pub price: u64,
    pub quantity: u64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<u32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl BaseDocument for ProductModel {
    const COLLECTION: &'static str = "products";
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> ObjectId {
        self.id
    }
}
