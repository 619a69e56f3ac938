use actix_web::{get, web, HttpResponse};
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::users::GetUsersQuery;
use crate::services::users::UsersUseCases;

/// 사용자 목록 (`?limit=&currentPage=&firstname=&lastname=&email=`)
#[get("")]
pub async fn get_users(
    query: web::Query<GetUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let users = ServiceLocator::get::<UsersUseCases>()?;
    let page = users.get_users(Some(query.into_inner())).await?.into_result()?;

    Ok(HttpResponse::Ok().json(page))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let users = ServiceLocator::get::<UsersUseCases>()?;
    let user = users.get_one_user_by_id(&user_id).await?.into_result()?;

    Ok(HttpResponse::Ok().json(user))
}
