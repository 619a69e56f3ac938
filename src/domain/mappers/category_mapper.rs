//! Category Mapper

use mongodb::bson::DateTime;
use crate::core::errors::AppResult;
use crate::domain::entities::{CategoryEntity, CategoryProps};
use crate::domain::mappers::{object_id_for, restore_entity, Mapper};
use crate::domain::models::CategoryModel;

/// [`CategoryEntity`] ↔ [`CategoryModel`]
pub struct CategoryMapper;

impl Mapper for CategoryMapper {
    type Entity = CategoryEntity;
    type Model = CategoryModel;

    fn to_model_data(entity: &CategoryEntity) -> CategoryModel {
        let now = DateTime::now();

        CategoryModel {
            id: object_id_for(entity),
            name: entity.name().to_string(),
            description: entity.description().map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    fn to_domain(model: CategoryModel) -> AppResult<CategoryEntity> {
        let props = CategoryProps {
            name: model.name,
            description: model.description,
        };

        restore_entity(model.id, props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keeps_observable_fields() {
        let category = CategoryEntity::create(CategoryProps {
            name: "Shoes".to_string(),
            description: Some("Footwear".to_string()),
        })
        .into_value()
        .unwrap();

        let restored = CategoryMapper::to_domain(CategoryMapper::to_model_data(&category)).unwrap();

        assert_eq!(restored.props(), category.props());
        assert!(restored.id().is_some());
    }
}
