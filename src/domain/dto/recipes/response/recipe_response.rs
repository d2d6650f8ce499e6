use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::recipes::recipe::{Comment, Recipe};

/// 레시피에 내장된 댓글의 응답 형태
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub author_id: String,
    pub text: String,
    pub created_at: DateTime,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            author_id: comment.author_id.to_hex(),
            text: comment.text.clone(),
            created_at: comment.created_at,
        }
    }
}

/// 작성자 이름이 조인된 댓글 응답
///
/// `GET /api/recepti/{id}/komentari` 전용. 작성자가 더 이상 존재하지
/// 않는 경우 표시 이름은 자리표시자 레이블로 대체됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentWithAuthorResponse {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime,
}

/// 레시피 응답 DTO
///
/// 인증된 컨텍스트에서 조회된 경우 `is_favorite`가 호출자의 즐겨찾기
/// 집합 기준으로 계산되어 포함됩니다. 익명 조회에서는 생략됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: String,
    pub servings: i32,
    pub like_count: i64,
    pub comments: Vec<CommentResponse>,
    pub owner_id: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,

    /// 호출자의 즐겨찾기 여부 (인증된 조회에서만 포함)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl RecipeResponse {
    /// 엔티티를 응답으로 변환하며 즐겨찾기 주석을 붙입니다.
    pub fn with_favorite(recipe: Recipe, is_favorite: Option<bool>) -> Self {
        let comments = recipe.comments.iter().map(CommentResponse::from).collect();

        Self {
            id: recipe.id_string().unwrap_or_default(),
            name: recipe.name,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            image: recipe.image,
            servings: recipe.servings,
            like_count: recipe.like_count,
            comments,
            owner_id: recipe.owner_id.to_hex(),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
            is_favorite,
        }
    }
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self::with_favorite(recipe, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn sample_recipe() -> Recipe {
        let mut recipe = Recipe::new(
            ObjectId::new(),
            "Pie".to_string(),
            vec!["flour".to_string()],
            vec!["bake".to_string()],
            None,
            None,
        );
        recipe.id = Some(ObjectId::new());
        recipe
    }

    #[test]
    fn test_anonymous_response_omits_favorite_flag() {
        let response = RecipeResponse::from(sample_recipe());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("is_favorite").is_none());
    }

    #[test]
    fn test_authenticated_response_includes_favorite_flag() {
        let response = RecipeResponse::with_favorite(sample_recipe(), Some(true));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["is_favorite"], true);
    }

    #[test]
    fn test_comments_are_flattened_to_hex_ids() {
        let mut recipe = sample_recipe();
        let author = ObjectId::new();
        recipe.comments.push(Comment::new(author, "Super!".to_string()));

        let response = RecipeResponse::from(recipe);

        assert_eq!(response.comments.len(), 1);
        assert_eq!(response.comments[0].author_id, author.to_hex());
    }
}
