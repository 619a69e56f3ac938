//! Product Entity Implementation

use crate::core::outcome::Outcome;
use crate::domain::entities::{require_non_empty, Entity, EntityProps};

/// BSON 정수(i64)로 저장할 수 있는 가격/재고의 최댓값
pub const MAX_STORABLE_AMOUNT: u64 = i64::MAX as u64;

/// 상품 엔티티 속성
///
/// 가격과 재고는 부호 없는 정수라 음수가 될 수 없고, [`MAX_STORABLE_AMOUNT`]를 넘을 수 없습니다.
/// `sizes`는 중복이 없는 순서 있는 목록입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductProps {
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub brand_image: String,
    pub price: u64,
    pub quantity: u64,
    pub images: Vec<String>,
    pub sizes: Vec<u32>,
}

impl EntityProps for ProductProps {
    const ENTITY_NAME: &'static str = "Product";

    fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category_id: self.category_id.trim().to_string(),
            brand_image: self.brand_image.trim().to_string(),
            images: self
                .images
                .into_iter()
                .map(|image| image.trim().to_string())
                .filter(|image| !image.is_empty())
                .collect(),
            ..self
        }
    }

    fn validate(&self) -> Result<(), String> {
        require_non_empty(&self.name, Self::ENTITY_NAME, "name")?;
        require_non_empty(&self.description, Self::ENTITY_NAME, "description")?;
        require_non_empty(&self.category_id, Self::ENTITY_NAME, "categoryId")?;
        require_non_empty(&self.brand_image, Self::ENTITY_NAME, "brandImage")?;

        if self.price > MAX_STORABLE_AMOUNT {
            return Err(format!("Product price exceeds {}", MAX_STORABLE_AMOUNT));
        }
        if self.quantity > MAX_STORABLE_AMOUNT {
            return Err(format!("Product quantity exceeds {}", MAX_STORABLE_AMOUNT));
        }

        for (index, size) in self.sizes.iter().enumerate() {
            if self.sizes[..index].contains(size) {
                return Err(format!("Product size is duplicated: {}", size));
            }
        }

        Ok(())
    }
}

/// 상품 엔티티
pub type ProductEntity = Entity<ProductProps>;

impl Entity<ProductProps> {
    pub fn name(&self) -> &str {
        &self.props().name
    }

    pub fn description(&self) -> &str {
        &self.props().description
    }

    pub fn category_id(&self) -> &str {
        &self.props().category_id
    }

    pub fn brand_image(&self) -> &str {
        &self.props().brand_image
    }

    pub fn price(&self) -> u64 {
        self.props().price
    }

    pub fn quantity(&self) -> u64 {
        self.props().quantity
    }

    pub fn images(&self) -> &[String] {
        &self.props().images
    }

    pub fn sizes(&self) -> &[u32] {
        &self.props().sizes
    }

    pub fn in_stock(&self) -> bool {
        self.props().quantity > 0
    }

    pub fn with_price(self, price: u64) -> Outcome<Self> {
        self.update(|props| props.price = price)
    }

    pub fn with_quantity(self, quantity: u64) -> Outcome<Self> {
        self.update(|props| props.quantity = quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::FailureKind;

    fn sneaker() -> ProductProps {
        ProductProps {
            name: " Air Runner ".to_string(),
            description: "Lightweight running shoe".to_string(),
            category_id: "64b7f0c2a1b2c3d4e5f60718".to_string(),
            brand_image: "https://cdn.example.com/brand.png".to_string(),
            price: 12_900,
            quantity: 3,
            images: vec!["a.png".to_string(), "  ".to_string()],
            sizes: vec![260, 270],
        }
    }

    #[test]
    fn test_create_product() {
        let product = ProductEntity::create(sneaker()).into_value().unwrap();

        assert_eq!(product.name(), "Air Runner");
        assert_eq!(product.images(), &["a.png".to_string()]);
        assert!(product.in_stock());
    }

    #[test]
    fn test_duplicate_sizes_are_rejected() {
        let mut props = sneaker();
        props.sizes = vec![260, 260];

        let outcome = ProductEntity::create(props);
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Validation));
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let mut props = sneaker();
        props.category_id = " ".to_string();

        assert!(ProductEntity::create(props).is_failure());
    }

    #[test]
    fn test_amounts_above_bson_range_are_rejected() {
        let mut props = sneaker();
        props.price = u64::MAX;
        assert_eq!(
            ProductEntity::create(props).failure_kind(),
            Some(FailureKind::Validation)
        );

        let mut props = sneaker();
        props.price = MAX_STORABLE_AMOUNT;
        props.quantity = MAX_STORABLE_AMOUNT;
        let product = ProductEntity::create(props).into_value().unwrap();

        let over = product.with_quantity(MAX_STORABLE_AMOUNT + 1);
        assert_eq!(over.failure_kind(), Some(FailureKind::Validation));
    }

    #[test]
    fn test_with_quantity() {
        let product = ProductEntity::create(sneaker()).into_value().unwrap();
        let sold_out = product.with_quantity(0).into_value().unwrap();

        assert!(!sold_out.in_stock());
    }
}
