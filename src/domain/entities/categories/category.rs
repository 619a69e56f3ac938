//! Category Entity Implementation

use crate::domain::entities::{require_non_empty, Entity, EntityProps};

/// 카테고리 엔티티 속성
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProps {
    /// 카테고리 이름 (unique)
    pub name: String,
    pub description: Option<String>,
}

impl EntityProps for CategoryProps {
    const ENTITY_NAME: &'static str = "Category";

    fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self
                .description
                .map(|description| description.trim().to_string())
                .filter(|description| !description.is_empty()),
        }
    }

    fn validate(&self) -> Result<(), String> {
        require_non_empty(&self.name, Self::ENTITY_NAME, "name")
    }
}

/// 카테고리 엔티티
pub type CategoryEntity = Entity<CategoryProps>;

impl Entity<CategoryProps> {
    pub fn name(&self) -> &str {
        &self.props().name
    }

    pub fn description(&self) -> Option<&str> {
        self.props().description.as_deref()
    }
}
