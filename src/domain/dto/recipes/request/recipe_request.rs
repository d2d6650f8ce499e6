//! 레시피 관련 요청 DTO
//!
//! 레시피 생성/수정과 댓글 작성, 목록/검색 쿼리의 데이터 구조를 정의합니다.
//! 동적인 요청 본문 대신 명시적인 선택 필드 구조체를 사용하고,
//! 필드 검증은 요청 경계에서 한 번만 수행합니다.
use mongodb::bson::{doc, Document, DateTime};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 레시피 생성 요청 DTO
///
/// 생성 시 재료와 조리 순서는 비어 있지 않은 배열이어야 합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    /// 레시피 이름
    #[validate(length(min = 1, message = "레시피 이름은 필수입니다"))]
    pub name: String,

    /// 재료 목록 (비어 있을 수 없음)
    #[validate(length(min = 1, message = "재료 목록은 비어 있을 수 없습니다"))]
    pub ingredients: Vec<String>,

    /// 조리 순서 목록 (비어 있을 수 없음)
    #[validate(length(min = 1, message = "조리 순서 목록은 비어 있을 수 없습니다"))]
    pub instructions: Vec<String>,

    /// 이미지 URL (기본값: 빈 문자열)
    pub image: Option<String>,

    /// 인분 수 (1 이상, 기본값 1)
    #[validate(range(min = 1, message = "인분 수는 1 이상이어야 합니다"))]
    pub servings: Option<i32>,
}

/// 레시피 수정 요청 DTO
///
/// 모든 필드가 선택적이며, 제공된 필드만 얕은 병합(`$set`)으로 교체됩니다.
/// 빈 요청은 ValidationError(400)로 거부됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_partial_arrays"))]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 1, message = "레시피 이름은 비어 있을 수 없습니다"))]
    pub name: Option<String>,

    pub ingredients: Option<Vec<String>>,

    pub instructions: Option<Vec<String>>,

    pub image: Option<String>,

    #[validate(range(min = 1, message = "인분 수는 1 이상이어야 합니다"))]
    pub servings: Option<i32>,
}

impl UpdateRecipeRequest {
    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
            && self.image.is_none()
            && self.servings.is_none()
    }

    /// `$set`에 사용할 업데이트 도큐먼트로 변환
    ///
    /// 제공된 필드만 포함하는 얕은 병합 도큐먼트를 만들고,
    /// `updated_at`을 항상 갱신합니다.
    pub fn into_update_document(self) -> Document {
        let mut update = doc! {};

        if let Some(name) = self.name {
            update.insert("name", name);
        }
        if let Some(ingredients) = self.ingredients {
            update.insert("ingredients", ingredients);
        }
        if let Some(instructions) = self.instructions {
            update.insert("instructions", instructions);
        }
        if let Some(image) = self.image {
            update.insert("image", image);
        }
        if let Some(servings) = self.servings {
            update.insert("servings", servings);
        }

        update.insert("updated_at", DateTime::now());
        update
    }
}

/// 부분 수정에서도 배열 필드는 비어 있을 수 없음을 검증
fn validate_partial_arrays(req: &UpdateRecipeRequest) -> Result<(), ValidationError> {
    if matches!(&req.ingredients, Some(items) if items.is_empty()) {
        return Err(ValidationError::new("empty_ingredients")
            .with_message("재료 목록은 비어 있을 수 없습니다".into()));
    }
    if matches!(&req.instructions, Some(items) if items.is_empty()) {
        return Err(ValidationError::new("empty_instructions")
            .with_message("조리 순서 목록은 비어 있을 수 없습니다".into()));
    }
    Ok(())
}

/// 레시피 목록 조회 쿼리 (`GET /api/recepti?naziv=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeListQuery {
    /// 이름 부분 일치 필터 (대소문자 무시, 선택사항)
    pub naziv: Option<String>,
}

/// 레시피 검색 쿼리 (`GET /api/recepti/pretraga?naziv=...`)
///
/// 목록 조회와 달리 검색어가 없으면 400으로 거부됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeSearchQuery {
    pub naziv: Option<String>,
}

/// 댓글 작성 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    /// 댓글 본문 (공백만으로는 작성 불가)
    #[validate(length(min = 1, message = "댓글 내용을 입력해주세요"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub text: String,
}

/// 공백만으로 이루어진 문자열을 거부
fn validate_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("blank_text")
            .with_message("댓글 내용을 입력해주세요".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_empty_ingredients() {
        let request = CreateRecipeRequest {
            name: "Pie".to_string(),
            ingredients: vec![],
            instructions: vec!["bake".to_string()],
            image: None,
            servings: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_zero_servings() {
        let request = CreateRecipeRequest {
            name: "Pie".to_string(),
            ingredients: vec!["flour".to_string()],
            instructions: vec!["bake".to_string()],
            image: None,
            servings: Some(0),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_minimal_input() {
        let request = CreateRecipeRequest {
            name: "Pie".to_string(),
            ingredients: vec!["flour".to_string()],
            instructions: vec!["bake".to_string()],
            image: None,
            servings: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_empty_detection() {
        let request = UpdateRecipeRequest {
            name: None,
            ingredients: None,
            instructions: None,
            image: None,
            servings: None,
        };

        assert!(request.is_empty());
    }

    #[test]
    fn test_update_request_rejects_empty_array_fields() {
        let request = UpdateRecipeRequest {
            name: None,
            ingredients: Some(vec![]),
            instructions: None,
            image: None,
            servings: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_document_contains_only_provided_fields() {
        let request = UpdateRecipeRequest {
            name: Some("Nova torta".to_string()),
            ingredients: None,
            instructions: None,
            image: None,
            servings: Some(4),
        };

        let update = request.into_update_document();

        assert_eq!(update.get_str("name").unwrap(), "Nova torta");
        assert_eq!(update.get_i32("servings").unwrap(), 4);
        assert!(update.get("ingredients").is_none());
        assert!(update.get("instructions").is_none());
        assert!(update.get("image").is_none());
        assert!(update.get("updated_at").is_some());
    }

    #[test]
    fn test_comment_request_rejects_blank_text() {
        let request = CommentRequest {
            text: "   ".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_comment_request_accepts_text() {
        let request = CommentRequest {
            text: "Izvrsno!".to_string(),
        };

        assert!(request.validate().is_ok());
    }
}
