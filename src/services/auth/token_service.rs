//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰의 생성과 검증, Bearer 헤더 파싱을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use async_trait::async_trait;

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceLocator};
use crate::domain::entities::users::user::User;
use crate::domain::token::token::TokenClaims;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 액세스 토큰의 기본 만료 시간은 1시간입니다.
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new() -> Self {
        Self {}
    }

    /// 등록된 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 사용자 정보
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::instance();
    /// let access_token = token_service.generate_access_token(&user)?;
    /// ```
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// 액세스 토큰으로부터 사용자 ID 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 검증 실패
    pub fn extract_user_id(&self, token: &str) -> Result<String, AppError> {
        let claims = self.verify_token(token)?;
        Ok(claims.sub)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// let claims = token_service.verify_token(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Service for TokenService {
    fn name(&self) -> &str {
        "token"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn user_with_id() -> User {
        let mut user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_token_roundtrip_preserves_subject() {
        let service = TokenService::new();
        let user = user_with_id();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_generate_fails_without_user_id() {
        let service = TokenService::new();
        let user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "hash".to_string(),
        );

        assert!(service.generate_access_token(&user).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new();
        let now = Utc::now();

        let claims = TokenClaims {
            sub: ObjectId::new().to_hex(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };

        let secret = JwtConfig::secret();
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }

    #[test]
    fn test_extract_user_id_roundtrip() {
        let service = TokenService::new();
        let user = user_with_id();

        let token = service.generate_access_token(&user).unwrap();
        let user_id = service.extract_user_id(&token).unwrap();

        assert_eq!(user_id, user.id_string().unwrap());
    }
}
