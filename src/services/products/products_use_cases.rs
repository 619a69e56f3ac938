use std::sync::Arc;
use crate::core::errors::AppResult;
use crate::core::outcome::{FailureKind, Outcome};
use crate::domain::abstracts::{filter_of, DataServices, Filter};
use crate::domain::dto::pagination::PageRequest;
use crate::domain::dto::products::{CreateProductDto, GetProductsQuery, ProductResponse, ProductsPage};
use crate::domain::entities::{ProductEntity, ProductProps};
use crate::domain::mappers::{Mapper, ProductMapper};
use crate::services::categories::categories_use_cases::NO_SUCH_CATEGORY;
use crate::utils::string_utils::{clean_optional_string, collapse_whitespace, title_case_words};

pub const NO_SUCH_PRODUCT: &str = "No such product exists";

/// 상품 유스케이스
pub struct ProductsUseCases {
    data_services: Arc<dyn DataServices>,
}

impl ProductsUseCases {
    pub fn new(data_services: Arc<dyn DataServices>) -> Self {
        Self { data_services }
    }

    /// 상품을 등록합니다.
    ///
    /// 이름은 단어마다 첫 글자를 대문자로, 설명은 연속 공백을 하나로 정리합니다.
    ///
    /// # Returns
    ///
    /// * `Outcome` 실패 `NotFound` - 카테고리가 없거나 식별자 형식이 잘못된 경우
    /// * `Outcome` 실패 `Validation` - 엔티티 검증 실패
    pub async fn create_product(&self, dto: CreateProductDto) -> AppResult<Outcome<ProductResponse>> {
        let category_id = dto.category_id.trim().to_string();

        let category = self.data_services.categories().find_by_id(&category_id).await?;
        if let Some(kind) = category.failure_kind() {
            return Ok(match kind {
                FailureKind::NotFound | FailureKind::NotAcceptable => {
                    Outcome::fail(NO_SUCH_CATEGORY, FailureKind::NotFound)
                }
                _ => Outcome::from_failure(category.error()?.clone()),
            });
        }

        let props = ProductProps {
            name: title_case_words(&dto.name),
            description: collapse_whitespace(&dto.description),
            category_id,
            brand_image: dto.brand_image,
            price: dto.price,
            quantity: dto.quantity,
            images: dto.images.unwrap_or_default(),
            sizes: dto.sizes.unwrap_or_default(),
        };

        let product = match ProductEntity::create(props).into_result() {
            Ok(product) => product,
            Err(failure) => return Ok(Outcome::from_failure(failure)),
        };

        let created = self
            .data_services
            .products()
            .create(ProductMapper::to_model_data(&product))
            .await?;

        Ok(created.map(|stored| ProductResponse::from(&stored)))
    }

    pub async fn get_products(&self, query: Option<GetProductsQuery>) -> AppResult<Outcome<ProductsPage>> {
        let query = query.unwrap_or_default();
        let page_request = PageRequest::parse(query.limit.as_deref(), query.current_page.as_deref());

        let filter = match clean_optional_string(query.category_id.as_deref()) {
            Some(category_id) => filter_of("categoryId", category_id),
            None => Filter::new(),
        };

        let products = self.data_services.products();

        let item_count = match products.get_count(filter.clone()).await?.into_result() {
            Ok(count) => count,
            Err(failure) => return Ok(Outcome::from_failure(failure)),
        };
        let window = page_request.window(item_count);

        Ok(products
            .find_all(filter, None, window.options)
            .await?
            .map(|found| ProductsPage {
                products: found.iter().map(ProductResponse::from).collect(),
                meta: page_request.meta(item_count, window.page_count),
            }))
    }

    pub async fn get_product_by_id(&self, id: &str) -> AppResult<Outcome<ProductResponse>> {
        let found = self.data_services.products().find_by_id(id).await?;

        Ok(match found.into_result() {
            Ok(product) => Outcome::ok(ProductResponse::from(&product)),
            Err(failure) => match failure.kind() {
                FailureKind::NotFound | FailureKind::NotAcceptable => {
                    Outcome::fail(NO_SUCH_PRODUCT, FailureKind::NotFound)
                }
                _ => Outcome::from_failure(failure),
            },
        })
    }
}
