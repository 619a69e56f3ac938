//! Product Mapper

use mongodb::bson::DateTime;
use crate::core::errors::AppResult;
use crate::domain::entities::{ProductEntity, ProductProps};
use crate::domain::mappers::{object_id_for, restore_entity, Mapper};
use crate::domain::models::ProductModel;

/// [`ProductEntity`] ↔ [`ProductModel`]
pub struct ProductMapper;

impl Mapper for ProductMapper {
    type Entity = ProductEntity;
    type Model = ProductModel;

    fn to_model_data(entity: &ProductEntity) -> ProductModel {
        let now = DateTime::now();
        let props = entity.props();

        ProductModel {
            id: object_id_for(entity),
            name: props.name.clone(),
            description: props.description.clone(),
            category_id: props.category_id.clone(),
            brand_image: props.brand_image.clone(),
            price: props.price,
            quantity: props.quantity,
            images: props.images.clone(),
            sizes: props.sizes.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn to_domain(model: ProductModel) -> AppResult<ProductEntity> {
        let props = ProductProps {
            name: model.name,
            description: model.description,
            category_id: model.category_id,
            brand_image: model.brand_image,
            price: model.price,
            quantity: model.quantity,
            images: model.images,
            sizes: model.sizes,
        };

        restore_entity(model.id, props)
    }
}
