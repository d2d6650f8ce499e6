//! 쇼핑 리스트 요청 DTO
//!
//! 항목 추가와 완료 상태 변경 요청의 데이터 구조를 정의합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 쇼핑 항목 추가 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddItemRequest {
    /// 항목 이름 (공백만으로는 추가 불가)
    #[validate(length(min = 1, message = "항목 이름은 필수입니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// 완료 여부 (기본값: false)
    pub completed: Option<bool>,
}

/// 쇼핑 항목 완료 상태 변경 요청 DTO
///
/// 상태 전이: `pending → completed`(true), 역방향(false)도 허용됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateItemRequest {
    /// 교체할 완료 플래그
    pub completed: bool,
}

/// 공백만으로 이루어진 문자열을 거부
fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name")
            .with_message("항목 이름은 필수입니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_rejects_blank_name() {
        let request = AddItemRequest {
            name: "  ".to_string(),
            completed: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_add_item_accepts_name() {
        let request = AddItemRequest {
            name: "mlijeko".to_string(),
            completed: Some(false),
        };

        assert!(request.validate().is_ok());
    }
}
