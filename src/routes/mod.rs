//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 `/api/v1` 아래에 등록합니다.
//!
//! # Routes
//!
//! - `GET /health`
//! - `/api/v1/auth` - 가입, 로그인, 토큰 갱신
//! - `/api/v1/users` - 사용자 목록/단건 조회
//! - `/api/v1/categories` - 카테고리 생성/조회
//! - `/api/v1/products` - 상품 생성/조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use crate::config::DataServiceBackend;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(configure_auth_routes)
            .configure(configure_user_routes)
            .configure(configure_catalog_routes),
    );
}

/// 인증 관련 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"SecurePass123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh_tokens),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::get_users)
            .service(handlers::users::get_user),
    );
}

fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .service(handlers::categories::create_category)
            .service(handlers::categories::get_categories)
            .service(handlers::categories::get_category),
    );
    cfg.service(
        web::scope("/products")
            .service(handlers::products::create_product)
            .service(handlers::products::get_products)
            .service(handlers::products::get_product),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "commerce_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "dataService": "mongo"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "dataService": DataServiceBackend::current().as_str()
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Once};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use super::*;
    use crate::repositories::memory::InMemoryDataServices;
    use crate::services::auth::{BcryptPasswordHasher, TokenService, TokenSettings};
    use crate::services::register_use_cases;

    static INIT: Once = Once::new();

    fn init_services() {
        INIT.call_once(|| {
            let tokens = TokenService::new(TokenSettings {
                access_secret: "route-access-secret".to_string(),
                refresh_secret: "route-refresh-secret".to_string(),
                access_ttl_secs: 1800,
                refresh_ttl_secs: 259_200,
            })
            .unwrap();

            register_use_cases(
                Arc::new(InMemoryDataServices::new()),
                Arc::new(BcryptPasswordHasher::new(4)),
                Arc::new(tokens),
            );
        });
    }

    fn registration(email: &str) -> Value {
        json!({
            "email": email,
            "password": "SecurePass123",
            "confirmPassword": "SecurePass123",
            "firstname": "Jane"
        })
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_register_login_and_duplicate() {
        init_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(registration("route-jane@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("password").is_none());
        assert!(body["accessToken"].is_string());
        assert_eq!(body["roles"], json!(["user"]));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(registration("route-jane@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "route-jane@example.com", "password": "WrongPass123"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "route-jane@example.com", "password": "SecurePass123"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .set_json(json!({"refreshToken": body["refreshToken"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_invalid_registration_is_bad_request() {
        init_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "email": "not-an-email",
                "password": "SecurePass123",
                "confirmPassword": "SecurePass123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "email": "route-mismatch@example.com",
                "password": "SecurePass123",
                "confirmPassword": "OtherPass123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_user_is_not_found() {
        init_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/users/not-an-object-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("No such user exists"));
    }

    #[actix_web::test]
    async fn test_catalog_flow() {
        init_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/categories")
            .set_json(json!({"name": "route trail"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let category: Value = test::read_body_json(resp).await;
        assert_eq!(category["name"], "Route Trail");

        let product = json!({
            "name": "trail blazer",
            "description": "grippy",
            "categoryId": category["id"],
            "brandImage": "brand.png",
            "price": 15000,
            "quantity": 2
        });
        let req = test::TestRequest::post()
            .uri("/api/v1/products")
            .set_json(&product)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let mut orphan = product.clone();
        orphan["categoryId"] = json!("64b7f0c2a1b2c3d4e5f60718");
        let req = test::TestRequest::post()
            .uri("/api/v1/products")
            .set_json(&orphan)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let uri = format!(
            "/api/v1/products?limit=10&currentPage=1&categoryId={}",
            category["id"].as_str().unwrap()
        );
        let req = test::TestRequest::get().uri(&uri).to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["itemCount"], 1);
        assert_eq!(page["products"][0]["name"], "Trail Blazer");
        assert_eq!(page["nextPage"], Value::Null);
    }
}
