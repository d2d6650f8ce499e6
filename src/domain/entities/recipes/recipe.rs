//! Recipe Entity Implementation
//!
//! 레시피 엔티티와 내장 댓글 서브 도큐먼트의 구현체입니다.
//! 소유권은 `owner_id` 단일 필드로 표현되며, 소유자만 수정/삭제할 수 있습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 레시피에 내장되는 댓글 서브 도큐먼트
///
/// 댓글은 별도 컬렉션이 아니라 레시피 도큐먼트 안의 배열 요소입니다.
/// 삭제는 `id`와 `author_id`가 동시에 일치하는 요소의 `$pull`로 수행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// 댓글 고유 ID (배열 내 삭제 대상 식별용)
    pub id: ObjectId,
    /// 작성자 사용자 ID
    pub author_id: ObjectId,
    /// 댓글 본문 (비어 있을 수 없음)
    pub text: String,
    /// 작성 시간
    pub created_at: DateTime,
}

impl Comment {
    /// 새 댓글 생성
    pub fn new(author_id: ObjectId, text: String) -> Self {
        Self {
            id: ObjectId::new(),
            author_id,
            text,
            created_at: DateTime::now(),
        }
    }
}

/// 레시피 엔티티
///
/// 이름, 재료, 조리 순서와 소셜 메타데이터(좋아요 수, 댓글)를 가지는
/// 핵심 도메인 엔티티입니다. 생성 시 재료와 조리 순서는 비어 있을 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 레시피 이름
    pub name: String,
    /// 재료 목록 (순서 보존, 생성 시 비어 있지 않음)
    pub ingredients: Vec<String>,
    /// 조리 순서 목록 (순서 보존, 생성 시 비어 있지 않음)
    pub instructions: Vec<String>,
    /// 이미지 URL (기본값: 빈 문자열)
    #[serde(default)]
    pub image: String,
    /// 인분 수 (1 이상, 기본값 1)
    pub servings: i32,
    /// 좋아요 수 (0 이상)
    #[serde(default)]
    pub like_count: i64,
    /// 내장 댓글 목록
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// 소유자 사용자 ID
    pub owner_id: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Recipe {
    /// 새 레시피 생성
    ///
    /// 생성 기본값: image는 빈 문자열, servings는 1, like_count는 0,
    /// comments는 빈 배열입니다.
    pub fn new(
        owner_id: ObjectId,
        name: String,
        ingredients: Vec<String>,
        instructions: Vec<String>,
        image: Option<String>,
        servings: Option<i32>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            ingredients,
            instructions,
            image: image.unwrap_or_default(),
            servings: servings.unwrap_or(1),
            like_count: 0,
            comments: Vec::new(),
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recipe_creation_defaults() {
        let recipe = Recipe::new(
            ObjectId::new(),
            "Pie".to_string(),
            vec!["flour".to_string()],
            vec!["bake".to_string()],
            None,
            None,
        );

        assert_eq!(recipe.image, "");
        assert_eq!(recipe.servings, 1);
        assert_eq!(recipe.like_count, 0);
        assert!(recipe.comments.is_empty());
        assert!(recipe.id.is_none());
    }

    #[test]
    fn test_new_recipe_keeps_explicit_fields() {
        let recipe = Recipe::new(
            ObjectId::new(),
            "Torta".to_string(),
            vec!["čokolada".to_string(), "jaja".to_string()],
            vec!["miješati".to_string()],
            Some("https://example.com/torta.jpg".to_string()),
            Some(8),
        );

        assert_eq!(recipe.image, "https://example.com/torta.jpg");
        assert_eq!(recipe.servings, 8);
        assert_eq!(recipe.ingredients.len(), 2);
    }

    #[test]
    fn test_comment_gets_unique_id_and_timestamp() {
        let author = ObjectId::new();
        let first = Comment::new(author, "Odlično!".to_string());
        let second = Comment::new(author, "Odlično!".to_string());

        assert_ne!(first.id, second.id);
        assert_eq!(first.author_id, author);
        assert!(!first.text.is_empty());
    }
}
