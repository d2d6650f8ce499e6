//! 사용자 계정 관련 요청 DTO
//!
//! 가입, 로그인, 프로필 수정 요청의 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증은 요청 경계에서 한 번만 수행됩니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새 계정 가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// 사용자 이름 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    /// 사용자 이메일 주소 (unique)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 프로필 수정 요청 DTO
///
/// 모든 필드가 선택적입니다. 비밀번호 변경을 요청하는 경우
/// 현재 비밀번호가 반드시 함께 제공되어야 합니다.
/// 이름 변경은 비밀번호와 무관하게 독립적으로 처리됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_password_change"))]
pub struct UpdateProfileRequest {
    /// 변경할 이름 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: Option<String>,

    /// 현재 비밀번호 (비밀번호 변경 시 필수)
    pub current_password: Option<String>,

    /// 새 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub new_password: Option<String>,
}

impl UpdateProfileRequest {
    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.new_password.is_none()
    }
}

/// 비밀번호 변경 요청의 일관성을 검증
fn validate_password_change(req: &UpdateProfileRequest) -> Result<(), ValidationError> {
    if req.new_password.is_some() && req.current_password.is_none() {
        return Err(ValidationError::new("current_password_required")
            .with_message("비밀번호 변경 시 현재 비밀번호가 필요합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_rejects_invalid_email() {
        let request = SignupRequest {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_request_rejects_short_password() {
        let request = SignupRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "abc".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_request_accepts_valid_input() {
        let request = SignupRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_password_change_requires_current_password() {
        let request = UpdateProfileRequest {
            name: None,
            current_password: None,
            new_password: Some("newsecret".to_string()),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_password_change_with_current_password_passes() {
        let request = UpdateProfileRequest {
            name: None,
            current_password: Some("oldsecret".to_string()),
            new_password: Some("newsecret".to_string()),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_name_only_update_is_not_empty() {
        let request = UpdateProfileRequest {
            name: Some("Nova Ana".to_string()),
            current_password: None,
            new_password: None,
        };

        assert!(request.validate().is_ok());
        assert!(!request.is_empty());
    }

    #[test]
    fn test_empty_update_detected() {
        let request = UpdateProfileRequest {
            name: None,
            current_password: Some("whatever".to_string()),
            new_password: None,
        };

        assert!(request.is_empty());
    }
}
