//! # MongoDB 제네릭 리포지토리
//!
//! 매퍼 하나로 컬렉션 하나를 담당하는 [`GenericRepository`] 구현입니다.
//!
//! ## 에러 처리
//!
//! - **중복 키 (11000)**: `Conflict` 실패 결과
//! - **잘못된 ObjectId 형식**: `NotAcceptable` 실패 결과
//! - **그 외 드라이버/BSON 오류**: `AppError::DatabaseError`

use std::marker::PhantomData;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOptions as MongoFindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use crate::core::errors::{AppError, AppResult};
use crate::core::outcome::{FailureKind, Outcome};
use crate::domain::abstracts::{Filter, FindOptions, GenericRepository, Projection};
use crate::domain::mappers::Mapper;
use crate::domain::models::BaseDocument;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 매퍼 `Mp`가 정의하는 컬렉션에 대한 MongoDB 리포지토리
pub struct MongoGenericRepository<Mp: Mapper> {
    collection: Collection<Mp::Model>,
    _mapper: PhantomData<fn() -> Mp>,
}

impl<Mp: Mapper> MongoGenericRepository<Mp> {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Mp::Model>(<Mp::Model as BaseDocument>::COLLECTION),
            _mapper: PhantomData,
        }
    }

    /// 모델의 유니크 필드마다 유니크 인덱스를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 인덱스 생성 실패 (기존 데이터에 중복이 있는 경우 등)
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let unique_fields = <Mp::Model as BaseDocument>::UNIQUE_FIELDS;
        if unique_fields.is_empty() {
            return Ok(());
        }

        let indexes = unique_fields.iter().map(|field| {
            let mut keys = Document::new();
            keys.insert(*field, 1);

            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder()
                    .unique(true)
                    .name(format!("{}_unique", field))
                    .build())
                .build()
        });

        self.collection
            .create_indexes(indexes)
            .await?;

        log::info!(
            "🗂️  유니크 인덱스 확인: {} ({})",
            <Mp::Model as BaseDocument>::COLLECTION,
            unique_fields.join(", ")
        );
        Ok(())
    }

    fn filter_document(filter: &Filter) -> AppResult<Document> {
        mongodb::bson::to_document(filter).map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    fn projection_document(projection: &Projection) -> Document {
        let mut document = doc! { "_id": 1 };
        for field in projection {
            document.insert(field.as_str(), 1);
        }
        document
    }

    fn into_entities(models: Vec<Mp::Model>) -> AppResult<Vec<Mp::Entity>> {
        models.into_iter().map(Mp::to_domain).collect()
    }
}

/// 유니크 제약 위반(중복 키) 여부
pub(crate) fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

pub(crate) fn duplicate_message<M: BaseDocument>() -> String {
    if M::UNIQUE_FIELDS.is_empty() {
        format!("Duplicate {} record", M::COLLECTION)
    } else {
        format!(
            "A {} record with the same {} already exists",
            M::COLLECTION,
            M::UNIQUE_FIELDS.join(", ")
        )
    }
}

#[async_trait]
impl<Mp: Mapper> GenericRepository<Mp::Entity, Mp::Model> for MongoGenericRepository<Mp> {
    async fn create(&self, model: Mp::Model) -> AppResult<Outcome<Mp::Entity>> {
        match self.collection.insert_one(&model).await {
            Ok(_) => Ok(Outcome::ok(Mp::to_domain(model)?)),
            Err(e) if is_duplicate_key(&e) => {
                log::debug!("중복 키로 저장 거부: {}", e);
                Ok(Outcome::fail(duplicate_message::<Mp::Model>(), FailureKind::Conflict))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Outcome<Mp::Entity>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(Outcome::fail(
                format!("Invalid id format: {}", id),
                FailureKind::NotAcceptable,
            ));
        };

        let found = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await?;

        match found {
            Some(model) => Ok(Outcome::ok(Mp::to_domain(model)?)),
            None => Ok(Outcome::fail(
                format!("No {} record with id {}", <Mp::Model as BaseDocument>::COLLECTION, id),
                FailureKind::NotFound,
            )),
        }
    }

    async fn find_by_values(&self, filter: Filter) -> AppResult<Outcome<Mp::Entity>> {
        let found = self
            .collection
            .find_one(Self::filter_document(&filter)?)
            .await?;

        match found {
            Some(model) => Ok(Outcome::ok(Mp::to_domain(model)?)),
            None => Ok(Outcome::fail(
                format!("No {} record matches the given values", <Mp::Model as BaseDocument>::COLLECTION),
                FailureKind::NotFound,
            )),
        }
    }

    async fn find_all(
        &self,
        filter: Filter,
        projection: Option<Projection>,
        options: FindOptions,
    ) -> AppResult<Outcome<Vec<Mp::Entity>>> {
        let find_options = MongoFindOptions::builder()
            .limit(options.limit.map(|limit| i64::try_from(limit).unwrap_or(i64::MAX)))
            .skip(options.skip)
            .projection(projection.as_ref().map(Self::projection_document))
            .sort(doc! { "_id": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::filter_document(&filter)?)
            .with_options(find_options)
            .await?;

        let models: Vec<Mp::Model> = cursor
            .try_collect()
            .await?;

        Ok(Outcome::ok(Self::into_entities(models)?))
    }

    async fn get_count(&self, filter: Filter) -> AppResult<Outcome<u64>> {
        let count = self
            .collection
            .count_documents(Self::filter_document(&filter)?)
            .await?;

        Ok(Outcome::ok(count))
    }
}
