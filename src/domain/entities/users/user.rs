//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 인증 정보와 함께 즐겨찾기/좋아요 레시피 집합을 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 즐겨찾기와 좋아요는 서로 독립적인 레시피 ID 집합이며,
/// 집합 불변식(중복 없음)은 조건부 배열 연산자로 보장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 즐겨찾기한 레시피 ID 집합 (중복 없음)
    #[serde(default)]
    pub favorite_recipe_ids: Vec<ObjectId>,
    /// 좋아요한 레시피 ID 집합 (중복 없음)
    #[serde(default)]
    pub liked_recipe_ids: Vec<ObjectId>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 가입 시점의 사용자를 생성합니다. 관계 집합은 비어 있는 상태로 시작됩니다.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash,
            favorite_recipe_ids: Vec::new(),
            liked_recipe_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 해당 레시피가 즐겨찾기 집합에 있는지 확인
    pub fn has_favorited(&self, recipe_id: &ObjectId) -> bool {
        self.favorite_recipe_ids.contains(recipe_id)
    }

    /// 해당 레시피가 좋아요 집합에 있는지 확인
    pub fn has_liked(&self, recipe_id: &ObjectId) -> bool {
        self.liked_recipe_ids.contains(recipe_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_with_empty_sets() {
        let user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "hash".to_string(),
        );

        assert!(user.id.is_none());
        assert!(user.favorite_recipe_ids.is_empty());
        assert!(user.liked_recipe_ids.is_empty());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_membership_predicates() {
        let recipe_id = ObjectId::new();
        let other_id = ObjectId::new();

        let mut user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "hash".to_string(),
        );
        user.favorite_recipe_ids.push(recipe_id);

        assert!(user.has_favorited(&recipe_id));
        assert!(!user.has_favorited(&other_id));
        assert!(!user.has_liked(&recipe_id));
    }
}
