//! # Product Data Transfer Objects
//!
//! 상품 이름은 단어별 첫 글자 대문자, 설명은 연속 공백 정리를 유스케이스가 적용합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::dto::pagination::PageMeta;
use crate::domain::entities::{ProductEntity, MAX_STORABLE_AMOUNT};

/// 상품 등록 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "상품 이름을 입력해주세요"))]
    pub name: String,

    #[validate(length(min = 1, message = "상품 설명을 입력해주세요"))]
    pub description: String,

    #[validate(length(min = 1, message = "카테고리를 지정해주세요"))]
    pub category_id: String,

    #[validate(length(min = 1, message = "브랜드 이미지를 지정해주세요"))]
    pub brand_image: String,

    #[validate(custom(function = "validate_storable_amount"))]
    pub price: u64,

    #[validate(custom(function = "validate_storable_amount"))]
    pub quantity: u64,

    #[serde(default)]
    pub images: Option<Vec<String>>,

    #[serde(default)]
    #[validate(custom(function = "validate_sizes"))]
    pub sizes: Option<Vec<u32>>,
}

/// 사이즈 목록은 지정한 경우 비어 있지 않고 중복이 없어야 합니다.
fn validate_sizes(sizes: &[u32]) -> Result<(), ValidationError> {
    if sizes.is_empty() {
        return Err(ValidationError::new("empty_sizes")
            .with_message("사이즈 목록이 비어 있습니다".into()));
    }

    for (index, size) in sizes.iter().enumerate() {
        if sizes[..index].contains(size) {
            return Err(ValidationError::new("duplicate_size")
                .with_message("사이즈가 중복되었습니다".into()));
        }
    }

    Ok(())
}

fn validate_storable_amount(amount: u64) -> Result<(), ValidationError> {
    if amount > MAX_STORABLE_AMOUNT {
        return Err(ValidationError::new("amount_out_of_range")
            .with_message("허용 범위를 벗어난 값입니다".into()));
    }

    Ok(())
}

/// `GET /api/v1/products` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProductsQuery {
    pub limit: Option<String>,
    pub current_page: Option<String>,
    pub category_id: Option<String>,
}

/// 상품 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub brand_image: String,
    pub price: u64,
    pub quantity: u64,
    pub images: Vec<String>,
    pub sizes: Vec<u32>,
}

impl From<&ProductEntity> for ProductResponse {
    fn from(product: &ProductEntity) -> Self {
        Self {
            id: product.id().unwrap_or_default().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            category_id: product.category_id().to_string(),
            brand_image: product.brand_image().to_string(),
            price: product.price(),
            quantity: product.quantity(),
            images: product.images().to_vec(),
            sizes: product.sizes().to_vec(),
        }
    }
}

/// 상품 목록 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsPage {
    pub products: Vec<ProductResponse>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
