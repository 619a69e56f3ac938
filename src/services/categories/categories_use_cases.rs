use std::sync::Arc;
use crate::core::errors::AppResult;
use crate::core::outcome::{FailureKind, Outcome};
use crate::domain::abstracts::{DataServices, Filter};
use crate::domain::dto::categories::{CategoriesPage, CategoryResponse, CreateCategoryDto, GetCategoriesQuery};
use crate::domain::dto::pagination::PageRequest;
use crate::domain::entities::{CategoryEntity, CategoryProps};
use crate::domain::mappers::{CategoryMapper, Mapper};
use crate::utils::string_utils::{clean_optional_string, title_case_words};

pub const NO_SUCH_CATEGORY: &str = "No such category exists";

/// 카테고리 유스케이스
pub struct CategoriesUseCases {
    data_services: Arc<dyn DataServices>,
}

impl CategoriesUseCases {
    pub fn new(data_services: Arc<dyn DataServices>) -> Self {
        Self { data_services }
    }

    /// 카테고리를 만듭니다. 같은 이름이 이미 있으면 `Conflict`.
    pub async fn create_category(&self, dto: CreateCategoryDto) -> AppResult<Outcome<CategoryResponse>> {
        let props = CategoryProps {
            name: title_case_words(&dto.name),
            description: dto.description,
        };

        let category = match CategoryEntity::create(props).into_result() {
            Ok(category) => category,
            Err(failure) => return Ok(Outcome::from_failure(failure)),
        };

        let created = self
            .data_services
            .categories()
            .create(CategoryMapper::to_model_data(&category))
            .await?;

        Ok(created.map(|stored| {
            log::info!("카테고리 생성 완료: {}", stored.name());
            CategoryResponse::from(&stored)
        }))
    }

    /// 카테고리 목록을 페이지 단위로 조회합니다. 이름 필터는 저장 형식과 같게 정규화합니다.
    pub async fn get_categories(
        &self,
        query: Option<GetCategoriesQuery>,
    ) -> AppResult<Outcome<CategoriesPage>> {
        let query = query.unwrap_or_default();
        let page_request = PageRequest::parse(query.limit.as_deref(), query.current_page.as_deref());

        let mut filter = Filter::new();
        if let Some(name) = clean_optional_string(query.name.as_deref()) {
            filter.insert("name".to_string(), title_case_words(&name).into());
        }

        let categories = self.data_services.categories();

        let item_count = match categories.get_count(filter.clone()).await?.into_result() {
            Ok(count) => count,
            Err(failure) => return Ok(Outcome::from_failure(failure)),
        };
        let window = page_request.window(item_count);

        Ok(categories
            .find_all(filter, None, window.options)
            .await?
            .map(|found| CategoriesPage {
                categories: found.iter().map(CategoryResponse::from).collect(),
                meta: page_request.meta(item_count, window.page_count),
            }))
    }

    pub async fn get_category_by_id(&self, id: &str) -> AppResult<Outcome<CategoryResponse>> {
        let found = self.data_services.categories().find_by_id(id).await?;

        Ok(match found.into_result() {
            Ok(category) => Outcome::ok(CategoryResponse::from(&category)),
            Err(failure) => match failure.kind() {
                FailureKind::NotFound | FailureKind::NotAcceptable => {
                    Outcome::fail(NO_SUCH_CATEGORY, FailureKind::NotFound)
                }
                _ => Outcome::from_failure(failure),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryDataServices;

    fn use_cases() -> CategoriesUseCases {
        CategoriesUseCases::new(Arc::new(InMemoryDataServices::new()))
    }

    fn category(name: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
            description: Some("  ".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_create_category_title_cases_the_name() {
        let created = use_cases()
            .create_category(category("  running   shoes "))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert_eq!(created.name, "Running Shoes");
        assert_eq!(created.description, None);
    }

    #[actix_web::test]
    async fn test_duplicate_category_is_conflict() {
        let use_cases = use_cases();
        use_cases.create_category(category("Running")).await.unwrap();

        let second = use_cases.create_category(category("running")).await.unwrap();

        assert_eq!(second.failure_kind(), Some(FailureKind::Conflict));
    }

    #[actix_web::test]
    async fn test_blank_name_is_validation_failure() {
        let created = use_cases().create_category(category("   ")).await.unwrap();

        assert_eq!(created.failure_kind(), Some(FailureKind::Validation));
    }

    #[actix_web::test]
    async fn test_get_categories_clamps_and_filters() {
        let use_cases = use_cases();
        for name in ["Running", "Tennis", "Hiking"] {
            use_cases.create_category(category(name)).await.unwrap();
        }

        let page = use_cases
            .get_categories(Some(GetCategoriesQuery {
                limit: Some("2".to_string()),
                current_page: Some("7".to_string()),
                name: None,
            }))
            .await
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(page.meta.page_count, Some(2));
        assert_eq!(page.categories.len(), 1);
        assert_eq!(page.categories[0].name, "Hiking");

        let filtered = use_cases
            .get_categories(Some(GetCategoriesQuery {
                name: Some("tennis".to_string()),
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(filtered.categories.len(), 1);
        assert_eq!(filtered.meta.item_count, 1);
    }

    #[actix_web::test]
    async fn test_get_category_by_id() {
        let use_cases = use_cases();
        let created = use_cases
            .create_category(category("Running"))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        let found = use_cases.get_category_by_id(&created.id).await.unwrap();
        assert_eq!(found.into_value().unwrap(), created);

        let missing = use_cases.get_category_by_id("bogus").await.unwrap();
        assert_eq!(missing.error().unwrap().message(), NO_SUCH_CATEGORY);
    }
}
