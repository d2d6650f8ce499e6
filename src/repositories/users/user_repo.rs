//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `korisnici` 컬렉션을 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **데이터 무결성**: 이메일 유니크 제약 조건 및 인덱스 관리
//! - **원자적 집합 연산**: 즐겨찾기/좋아요 집합은 조건부 `$push`/`$pull`로
//!   변경되어 동시 요청에서도 중복 원소가 생기지 않음
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>` 타입을 반환하며,
//! 다음과 같은 에러 상황을 처리합니다:
//!
//! - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
//! - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
//! - **ConflictError**: 이메일 중복 등 비즈니스 규칙 위반
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let repo = UserRepository::instance();
//!
//! let created = repo.create(User::new(name, email, hash)).await?;
//! let found = repo.find_by_email("ana@example.com").await?;
//!
//! // 즐겨찾기 집합에 원자적으로 추가 (이미 있으면 false)
//! let added = repo.add_favorite(&user_id, &recipe_id).await?;
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use futures_util::stream::TryStreamExt;

use crate::core::errors::AppError;
use crate::core::registry::{Repository, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::utils::string_utils::parse_object_id;

/// `korisnici` 컬렉션 이름
const COLLECTION_NAME: &str = "korisnici";

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산과 즐겨찾기/좋아요 집합 연산을 담당합니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 등록된 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// `korisnici` 컬렉션 핸들
    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID 문자열로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;
        self.find_by_oid(&object_id).await
    }

    /// ObjectId로 사용자 조회
    pub async fn find_by_oid(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 여러 ObjectId로 사용자 일괄 조회
    ///
    /// 댓글 작성자 이름 조인 등에서 사용됩니다. 존재하지 않는 ID는
    /// 결과에서 빠지며 에러가 아닙니다.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 이메일 중복 여부를 사전에 검증하고 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 중복 확인 (유니크 인덱스가 최종 방어선)
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = Some(result.inserted_id.as_object_id().unwrap());

        Ok(user)
    }

    /// 사용자 프로필 부분 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 교체하고 최신 문서를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 업데이트된 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn update_profile(
        &self,
        id: &ObjectId,
        update_doc: Document,
    ) -> Result<Option<User>, AppError> {
        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 즐겨찾기 집합에 레시피를 원자적으로 추가
    ///
    /// `favorite_recipe_ids`에 해당 ID가 없는 경우에만 `$push`가 일어나도록
    /// 필터 조건에 `$ne`를 포함합니다. 동시 요청이 겹쳐도 중복 원소는
    /// 생기지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 집합에 새로 추가됨
    /// * `Ok(false)` - 이미 존재했거나 사용자가 없음 (호출자가 구분)
    pub async fn add_favorite(
        &self,
        user_id: &ObjectId,
        recipe_id: &ObjectId,
    ) -> Result<bool, AppError> {
        let result = self
            .collection()
            .update_one(
                doc! { "_id": user_id, "favorite_recipe_ids": { "$ne": recipe_id } },
                doc! { "$push": { "favorite_recipe_ids": recipe_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 즐겨찾기 집합에서 레시피를 원자적으로 제거
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 집합에서 제거됨
    /// * `Ok(false)` - 집합에 없었거나 사용자가 없음
    pub async fn remove_favorite(
        &self,
        user_id: &ObjectId,
        recipe_id: &ObjectId,
    ) -> Result<bool, AppError> {
        let result = self
            .collection()
            .update_one(
                doc! { "_id": user_id },
                doc! { "$pull": { "favorite_recipe_ids": recipe_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 좋아요 집합에 레시피를 원자적으로 추가 (중복이면 no-op)
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 집합에 새로 추가됨 (like_count 증가 필요)
    /// * `Ok(false)` - 이미 존재했음
    pub async fn add_like(
        &self,
        user_id: &ObjectId,
        recipe_id: &ObjectId,
    ) -> Result<bool, AppError> {
        let result = self
            .collection()
            .update_one(
                doc! { "_id": user_id, "liked_recipe_ids": { "$ne": recipe_id } },
                doc! { "$push": { "liked_recipe_ids": recipe_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 좋아요 집합에서 레시피를 원자적으로 제거
    pub async fn remove_like(
        &self,
        user_id: &ObjectId,
        recipe_id: &ObjectId,
    ) -> Result<bool, AppError> {
        let result = self
            .collection()
            .update_one(
                doc! { "_id": user_id },
                doc! { "$pull": { "liked_recipe_ids": recipe_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스**: 중복 이메일 방지 및 로그인 조회 최적화
    /// 2. **생성일 인덱스**: 최근 가입자 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}
