//! Shopping List Entity Implementation
//!
//! 사용자별 쇼핑 리스트 엔티티입니다. 리스트는 첫 항목 추가 시점에
//! 자동 생성되며(upsert), 항목은 UUID로 식별되는 서브 도큐먼트입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 쇼핑 리스트 항목
///
/// 상태 전이: `pending(completed=false) → completed(true)`, 역방향 가능.
/// 항목 제거는 완료 여부와 무관하게 가능합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// 항목 고유 ID
    pub id: Uuid,
    /// 항목 이름
    pub name: String,
    /// 완료(구매) 여부
    pub completed: bool,
}

impl ShoppingItem {
    /// 새 쇼핑 항목 생성 (기본 completed=false)
    pub fn new(name: String, completed: Option<bool>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            completed: completed.unwrap_or(false),
        }
    }
}

/// 사용자별 쇼핑 리스트 (사용자당 하나)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 리스트 소유자 사용자 ID (unique)
    pub owner_id: ObjectId,
    /// 순서가 보존되는 항목 목록
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults_to_pending() {
        let item = ShoppingItem::new("mlijeko".to_string(), None);

        assert!(!item.completed);
        assert_eq!(item.name, "mlijeko");
    }

    #[test]
    fn test_new_item_respects_explicit_completed() {
        let item = ShoppingItem::new("brašno".to_string(), Some(true));

        assert!(item.completed);
    }

    #[test]
    fn test_items_get_unique_ids() {
        let first = ShoppingItem::new("jaja".to_string(), None);
        let second = ShoppingItem::new("jaja".to_string(), None);

        assert_ne!(first.id, second.id);
    }
}
