//! # 쇼핑 리스트 서비스 구현
//!
//! 사용자별 쇼핑 리스트에 대한 비즈니스 규칙을 구현합니다.
//!
//! 리스트는 별도의 생성 연산 없이 첫 항목 추가 시점에 자동 생성됩니다.
//! 리스트가 아직 없는 사용자의 조회는 에러가 아니라 빈 배열입니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceLocator};
use crate::domain::dto::shopping::request::AddItemRequest;
use crate::domain::entities::shopping::shopping_list::ShoppingItem;
use crate::repositories::shopping::shopping_list_repo::ShoppingListRepository;
use crate::utils::string_utils::validate_required_string;

/// 쇼핑 리스트 비즈니스 로직 서비스
pub struct ShoppingListService {
    /// 쇼핑 리스트 데이터 액세스 리포지토리
    shopping_list_repo: Arc<ShoppingListRepository>,
}

impl ShoppingListService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new(shopping_list_repo: Arc<ShoppingListRepository>) -> Self {
        Self { shopping_list_repo }
    }

    /// 등록된 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 호출자의 쇼핑 항목 목록 조회
    ///
    /// 아직 리스트가 생성되지 않은 사용자는 빈 배열을 받습니다 (에러 아님).
    pub async fn get_items(&self, owner_id: &ObjectId) -> Result<Vec<ShoppingItem>, AppError> {
        let list = self.shopping_list_repo.find_by_owner(owner_id).await?;

        Ok(list.map(|list| list.items).unwrap_or_default())
    }

    /// 쇼핑 항목 추가
    ///
    /// 첫 항목 추가 시 리스트가 upsert로 자동 생성됩니다.
    /// 이름 검증(공백 거부)은 경계에서 수행된 상태로 호출됩니다.
    ///
    /// # Returns
    ///
    /// 생성된 항목 (새로 발급된 고유 ID 포함)
    pub async fn add_item(
        &self,
        owner_id: &ObjectId,
        request: AddItemRequest,
    ) -> Result<ShoppingItem, AppError> {
        let name = validate_required_string(&request.name, "name")?;
        let item = ShoppingItem::new(name, request.completed);

        self.shopping_list_repo.push_item(owner_id, &item).await?;

        Ok(item)
    }

    /// 항목의 완료 플래그 교체
    ///
    /// 상태 전이: `pending → completed`, 역방향도 허용됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 리스트 또는 항목이 존재하지 않음
    pub async fn update_item(
        &self,
        owner_id: &ObjectId,
        item_id: &Uuid,
        completed: bool,
    ) -> Result<(), AppError> {
        let matched = self
            .shopping_list_repo
            .set_item_completed(owner_id, item_id, completed)
            .await?;

        if !matched {
            return Err(AppError::NotFound(
                "쇼핑 항목을 찾을 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }

    /// 항목 제거
    ///
    /// 완료 여부와 무관하게 제거할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 리스트 또는 항목이 존재하지 않음
    pub async fn remove_item(&self, owner_id: &ObjectId, item_id: &Uuid) -> Result<(), AppError> {
        let removed = self.shopping_list_repo.pull_item(owner_id, item_id).await?;

        if !removed {
            return Err(AppError::NotFound(
                "쇼핑 항목을 찾을 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }

    /// 완료된 항목 일괄 제거
    ///
    /// 완료된 항목이 없어도 리스트가 존재하면 성공(no-op)입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 리스트가 존재하지 않음
    pub async fn remove_completed(&self, owner_id: &ObjectId) -> Result<(), AppError> {
        let list_exists = self.shopping_list_repo.pull_completed(owner_id).await?;

        if !list_exists {
            return Err(AppError::NotFound(
                "쇼핑 리스트가 없습니다".to_string(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl Service for ShoppingListService {
    fn name(&self) -> &str {
        "shopping_list"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
