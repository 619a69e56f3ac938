//! Category Document

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::BaseDocument;

/// `categories` 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryModel {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 카테고리 이름 (unique)
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl BaseDocument for CategoryModel {
    const COLLECTION: &'static str = "categories";
    const UNIQUE_FIELDS: &'static [&'static str] = &["name"];

    fn id(&self) -> ObjectId {
        self.id
    }
}
