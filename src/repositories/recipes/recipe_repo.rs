//! # 레시피 리포지토리 구현
//!
//! 레시피 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `recepti` 컬렉션을 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **이름 부분 일치 필터**: 대소문자를 무시하는 정규식 필터
//! - **원자적 배열 연산**: 댓글 추가/삭제는 `$push`/`$pull`,
//!   좋아요 수는 `$inc`로 변경되어 읽기-수정-쓰기 경쟁이 없음
//! - **얕은 병합 업데이트**: `$set` 기반의 필드 교체, 깊은 병합 없음
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::repositories::recipes::recipe_repo::RecipeRepository;
//!
//! let repo = RecipeRepository::instance();
//!
//! // 이름에 "torta"가 들어가는 레시피 (대소문자 무시)
//! let found = repo.find_all(Some("torta")).await?;
//!
//! // 댓글을 작성자 일치 조건으로 원자적으로 제거
//! let pulled = repo.pull_comment(&recipe_id, &comment_id, &author_id).await?;
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use futures_util::stream::TryStreamExt;

use crate::core::errors::AppError;
use crate::core::registry::{Repository, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::recipes::recipe::{Comment, Recipe};

/// `recepti` 컬렉션 이름
const COLLECTION_NAME: &str = "recepti";

/// 레시피 데이터 액세스 리포지토리
pub struct RecipeRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl RecipeRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 등록된 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// `recepti` 컬렉션 핸들
    fn collection(&self) -> Collection<Recipe> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 이름 부분 일치 필터 도큐먼트 생성
    ///
    /// 필터가 없거나 공백뿐이면 전체 조회 필터(빈 도큐먼트)를 반환합니다.
    /// 부분 일치는 대소문자를 무시하는 정규식으로 수행됩니다.
    pub fn build_name_filter(name_contains: Option<&str>) -> Document {
        match name_contains {
            Some(query) if !query.trim().is_empty() => {
                doc! { "name": { "$regex": query.trim(), "$options": "i" } }
            }
            _ => doc! {},
        }
    }

    /// 레시피 목록 조회 (선택적 이름 필터)
    ///
    /// 저장소 자연 순서(삽입 순서)대로 반환합니다.
    pub async fn find_all(&self, name_contains: Option<&str>) -> Result<Vec<Recipe>, AppError> {
        let filter = Self::build_name_filter(name_contains);

        let cursor = self
            .collection()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ObjectId로 레시피 조회
    pub async fn find_by_oid(&self, id: &ObjectId) -> Result<Option<Recipe>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자 기준 레시피 조회
    pub async fn find_by_owner(&self, owner_id: &ObjectId) -> Result<Vec<Recipe>, AppError> {
        let cursor = self
            .collection()
            .find(doc! { "owner_id": owner_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 여러 ObjectId로 레시피 일괄 조회
    ///
    /// 즐겨찾기/좋아요 집합을 전체 레시피 문서로 확장할 때 사용됩니다.
    /// 존재하지 않는 ID는 결과에서 빠지며 에러가 아닙니다.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Recipe>, AppError> {
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

    /// 새 레시피 저장
    pub async fn insert(&self, mut recipe: Recipe) -> Result<Recipe, AppError> {
        let result = self
            .collection()
            .insert_one(&recipe)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        recipe.id = Some(result.inserted_id.as_object_id().unwrap());

        Ok(recipe)
    }

    /// 레시피 필드 부분 업데이트 (얕은 병합)
    ///
    /// `$set` 연산자로 지정된 필드만 교체하고 최신 문서를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Recipe))` - 업데이트된 레시피
    /// * `Ok(None)` - 해당 ID의 레시피가 존재하지 않음
    pub async fn update_fields(
        &self,
        id: &ObjectId,
        update_doc: Document,
    ) -> Result<Option<Recipe>, AppError> {
        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 레시피 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 레시피가 존재하지 않음
    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 좋아요 수를 원자적으로 증감
    ///
    /// 좋아요 집합 변경이 실제로 일어난 경우에만 호출되어
    /// `like_count >= 0` 불변식이 유지됩니다.
    pub async fn inc_like_count(&self, id: &ObjectId, delta: i64) -> Result<(), AppError> {
        self.collection()
            .update_one(doc! { "_id": id }, doc! { "$inc": { "like_count": delta } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 댓글을 원자적으로 추가
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 댓글이 추가됨
    /// * `Ok(false)` - 해당 ID의 레시피가 존재하지 않음
    pub async fn push_comment(
        &self,
        recipe_id: &ObjectId,
        comment: &Comment,
    ) -> Result<bool, AppError> {
        let comment_doc = bson::to_bson(comment)
            .map_err(|e| AppError::InternalError(format!("댓글 직렬화 실패: {}", e)))?;

        let result = self
            .collection()
            .update_one(
                doc! { "_id": recipe_id },
                doc! { "$push": { "comments": comment_doc } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    /// 댓글을 작성자 일치 조건으로 원자적으로 제거
    ///
    /// 댓글 ID와 작성자 ID가 동시에 일치하는 배열 요소만 `$pull`합니다.
    /// 존재하지 않는 댓글과 작성자 불일치는 동일하게 `false`로 관찰되어,
    /// 호출자는 이 둘을 구분하지 않는 단일 신호로 처리합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 댓글이 제거됨
    /// * `Ok(false)` - 일치하는 댓글 없음 (없는 ID이거나 작성자가 아님)
    pub async fn pull_comment(
        &self,
        recipe_id: &ObjectId,
        comment_id: &ObjectId,
        author_id: &ObjectId,
    ) -> Result<bool, AppError> {
        let result = self
            .collection()
            .update_one(
                doc! { "_id": recipe_id },
                doc! { "$pull": { "comments": { "id": comment_id, "author_id": author_id } } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **소유자 인덱스**: 내 레시피 조회 최적화
    /// 2. **이름 인덱스**: 이름 기준 조회/정렬 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("owner_id_asc".to_string())
                    .build(),
            )
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .name("name_asc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([owner_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for RecipeRepository {
    fn name(&self) -> &str {
        "recipe"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_filter_is_case_insensitive_regex() {
        let filter = RecipeRepository::build_name_filter(Some("Torta"));
        let name = filter.get_document("name").unwrap();

        assert_eq!(name.get_str("$regex").unwrap(), "Torta");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_name_filter_trims_query() {
        let filter = RecipeRepository::build_name_filter(Some("  pita  "));
        let name = filter.get_document("name").unwrap();

        assert_eq!(name.get_str("$regex").unwrap(), "pita");
    }

    #[test]
    fn test_missing_or_blank_query_selects_everything() {
        assert!(RecipeRepository::build_name_filter(None).is_empty());
        assert!(RecipeRepository::build_name_filter(Some("   ")).is_empty());
    }
}
