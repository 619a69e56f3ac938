use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::products::{CreateProductDto, GetProductsQuery};
use crate::services::products::ProductsUseCases;

#[post("")]
pub async fn create_product(
    payload: web::Json<CreateProductDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let products = ServiceLocator::get::<ProductsUseCases>()?;
    let product = products.create_product(payload.into_inner()).await?.into_result()?;

    Ok(HttpResponse::Created().json(product))
}

/// 상품 목록 (`?limit=&currentPage=&categoryId=`)
#[get("")]
pub async fn get_products(
    query: web::Query<GetProductsQuery>,
) -> Result<HttpResponse, AppError> {
    let products = ServiceLocator::get::<ProductsUseCases>()?;
    let page = products.get_products(Some(query.into_inner())).await?.into_result()?;

    Ok(HttpResponse::Ok().json(page))
}

#[get("/{product_id}")]
pub async fn get_product(
    product_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let products = ServiceLocator::get::<ProductsUseCases>()?;
    let product = products.get_product_by_id(&product_id).await?.into_result()?;

    Ok(HttpResponse::Ok().json(product))
}
