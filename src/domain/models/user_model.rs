//! User Document

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::BaseDocument;

/// `users` 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    /// 역할 이름 목록 (`user`, `admin`)
    pub roles: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl BaseDocument for UserModel {
    const COLLECTION: &'static str = "users";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email"];

    fn id(&self) -> ObjectId {
        self.id
    }
}
