//! # 쇼핑 리스트 리포지토리 구현
//!
//! 사용자별 쇼핑 리스트의 데이터 액세스 계층입니다.
//! MongoDB `shoppingLista` 컬렉션을 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **자동 생성**: 첫 항목 추가 시 upsert로 리스트 도큐먼트 생성
//! - **원자적 항목 연산**: 항목 추가는 `$push`, 완료 토글은 위치 연산자
//!   `items.$.completed`, 제거는 `$pull`로 수행되어 읽기-수정-쓰기
//!   경쟁이 없음
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::repositories::shopping::shopping_list_repo::ShoppingListRepository;
//!
//! let repo = ShoppingListRepository::instance();
//!
//! repo.push_item(&owner_id, &item).await?;                    // 리스트 자동 생성
//! repo.set_item_completed(&owner_id, &item.id, true).await?;  // 완료 처리
//! repo.pull_completed(&owner_id).await?;                      // 완료 항목 일괄 제거
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    options::{IndexOptions, UpdateOptions},
    Collection, IndexModel,
};
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::core::registry::{Repository, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::shopping::shopping_list::{ShoppingItem, ShoppingList};

/// `shoppingLista` 컬렉션 이름
const COLLECTION_NAME: &str = "shoppingLista";

/// 쇼핑 리스트 데이터 액세스 리포지토리
pub struct ShoppingListRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl ShoppingListRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 등록된 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// `shoppingLista` 컬렉션 핸들
    fn collection(&self) -> Collection<ShoppingList> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 소유자의 쇼핑 리스트 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(ShoppingList))` - 리스트가 존재하는 경우
    /// * `Ok(None)` - 아직 리스트가 생성되지 않은 경우 (에러 아님)
    pub async fn find_by_owner(
        &self,
        owner_id: &ObjectId,
    ) -> Result<Option<ShoppingList>, AppError> {
        self.collection()
            .find_one(doc! { "owner_id": owner_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 항목을 원자적으로 추가 (리스트가 없으면 upsert로 생성)
    pub async fn push_item(
        &self,
        owner_id: &ObjectId,
        item: &ShoppingItem,
    ) -> Result<(), AppError> {
        let item_doc = bson::to_bson(item)
            .map_err(|e| AppError::InternalError(format!("항목 직렬화 실패: {}", e)))?;

        let options = UpdateOptions::builder().upsert(true).build();

        self.collection()
            .update_one(
                doc! { "owner_id": owner_id },
                doc! { "$push": { "items": item_doc } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 항목의 완료 플래그를 위치 연산자로 교체
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 항목이 갱신됨
    /// * `Ok(false)` - 리스트가 없거나 해당 ID의 항목이 없음
    pub async fn set_item_completed(
        &self,
        owner_id: &ObjectId,
        item_id: &Uuid,
        completed: bool,
    ) -> Result<bool, AppError> {
        let item_id_bson = bson::to_bson(item_id)
            .map_err(|e| AppError::InternalError(format!("항목 ID 직렬화 실패: {}", e)))?;

        let result = self
            .collection()
            .update_one(
                doc! { "owner_id": owner_id, "items.id": item_id_bson },
                doc! { "$set": { "items.$.completed": completed } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    /// 항목을 ID 기준으로 원자적으로 제거
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 항목이 제거됨
    /// * `Ok(false)` - 리스트가 없거나 해당 ID의 항목이 없음
    pub async fn pull_item(&self, owner_id: &ObjectId, item_id: &Uuid) -> Result<bool, AppError> {
        let item_id_bson = bson::to_bson(item_id)
            .map_err(|e| AppError::InternalError(format!("항목 ID 직렬화 실패: {}", e)))?;

        let result = self
            .collection()
            .update_one(
                doc! { "owner_id": owner_id },
                doc! { "$pull": { "items": { "id": item_id_bson } } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 완료된 항목을 일괄 제거
    ///
    /// 완료 항목이 하나도 없어도 리스트가 존재하면 성공(no-op)입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 리스트가 존재함 (제거된 항목 수와 무관)
    /// * `Ok(false)` - 리스트가 존재하지 않음
    pub async fn pull_completed(&self, owner_id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection()
            .update_one(
                doc! { "owner_id": owner_id },
                doc! { "$pull": { "items": { "completed": true } } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 소유자당 하나의 리스트만 존재하도록 유니크 인덱스를 만듭니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("owner_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([owner_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for ShoppingListRepository {
    fn name(&self) -> &str {
        "shopping_list"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}
