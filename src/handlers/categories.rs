use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::categories::{CreateCategoryDto, GetCategoriesQuery};
use crate::services::categories::CategoriesUseCases;

#[post("")]
pub async fn create_category(
    payload: web::Json<CreateCategoryDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let categories = ServiceLocator::get::<CategoriesUseCases>()?;
    let category = categories.create_category(payload.into_inner()).await?.into_result()?;

    Ok(HttpResponse::Created().json(category))
}

#[get("")]
pub async fn get_categories(
    query: web::Query<GetCategoriesQuery>,
) -> Result<HttpResponse, AppError> {
    let categories = ServiceLocator::get::<CategoriesUseCases>()?;
    let page = categories.get_categories(Some(query.into_inner())).await?.into_result()?;

    Ok(HttpResponse::Ok().json(page))
}

#[get("/{category_id}")]
pub async fn get_category(
    category_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let categories = ServiceLocator::get::<CategoriesUseCases>()?;
    let category = categories.get_category_by_id(&category_id).await?.into_result()?;

    Ok(HttpResponse::Ok().json(category))
}
