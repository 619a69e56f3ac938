//! User Mapper

use mongodb::bson::DateTime;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Role, UserEntity, UserProps};
use crate::domain::mappers::{object_id_for, restore_entity, Mapper};
use crate::domain::models::UserModel;

/// [`UserEntity`] ↔ [`UserModel`]
pub struct UserMapper;

impl Mapper for UserMapper {
    type Entity = UserEntity;
    type Model = UserModel;

    fn to_model_data(entity: &UserEntity) -> UserModel {
        let now = DateTime::now();

        UserModel {
            id: object_id_for(entity),
            email: entity.email().to_string(),
            password: entity.password().to_string(),
            firstname: entity.firstname().map(str::to_string),
            lastname: entity.lastname().map(str::to_string),
            is_verified: entity.is_verified(),
            roles: entity.roles().iter().map(|role| role.as_str().to_string()).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    fn to_domain(model: UserModel) -> AppResult<UserEntity> {
        let roles = model
            .roles
            .iter()
            .map(|name| {
                name.parse::<Role>().map_err(|_| {
                    AppError::InternalError(format!(
                        "Stored User record {} has unknown role: {}",
                        model.id, name
                    ))
                })
            })
            .collect::<AppResult<Vec<Role>>>()?;

        let props = UserProps {
            email: model.email,
            password: model.password,
            firstname: model.firstname,
            lastname: model.lastname,
            is_verified: model.is_verified,
            roles,
        };

        restore_entity(model.id, props)
    }
}
