//! # Category Data Transfer Objects

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::pagination::PageMeta;
use crate::domain::entities::CategoryEntity;

/// 카테고리 등록 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "카테고리 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// `GET /api/v1/categories` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoriesQuery {
    pub limit: Option<String>,
    pub current_page: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&CategoryEntity> for CategoryResponse {
    fn from(category: &CategoryEntity) -> Self {
        Self {
            id: category.id().unwrap_or_default().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
        }
    }
}

/// 카테고리 목록 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoriesPage {
    pub categories: Vec<CategoryResponse>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
