//! # 客户鉴权
//!
//! 基于 JWT 的 [`ClientAuthenticator`] 实现: 校验签名与有效期，
//! 并比对 Token 的 `sub` 与请求中声明的客户号。

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use bourse_core::auth::port::{AuthOutcome, ClientAuthenticator};

/// JWT 载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 客户号
    pub sub: String,
    /// 过期时间 (Unix 秒)
    pub exp: usize,
}

/// # Summary
/// HS256 JWT 客户鉴权器。
///
/// # Invariants
/// - `exp` 与 `sub` 为必填声明，缺失即视为无效 Token。
pub struct JwtClientAuthenticator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtClientAuthenticator {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// 验证 Token 返回强类型 Claims
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "JWT verification failed");
                None
            }
        }
    }
}

#[async_trait]
impl ClientAuthenticator for JwtClientAuthenticator {
    async fn check_auth_with_client(&self, client_id: &str, token: &str) -> AuthOutcome {
        match self.verify(token) {
            Some(claims) => AuthOutcome::valid(claims.sub.eq_ignore_ascii_case(client_id.trim())),
            None => AuthOutcome::INVALID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "unit-test-secret";

    fn token(secret: &str, sub: &str, exp_offset: i64) -> String {
        let exp = chrono::Utc::now().timestamp() + exp_offset;
        let claims = Claims {
            sub: sub.to_string(),
            exp: usize::try_from(exp).unwrap(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_matching_subject_is_case_insensitive() {
        let auth = JwtClientAuthenticator::new(SECRET);
        let outcome = auth
            .check_auth_with_client("ab1234", &token(SECRET, "AB1234", 3600))
            .await;
        assert_eq!(outcome, AuthOutcome::valid(true));
    }

    #[tokio::test]
    async fn test_other_subject_is_a_mismatch() {
        let auth = JwtClientAuthenticator::new(SECRET);
        let outcome = auth
            .check_auth_with_client("ZZ9999", &token(SECRET, "AB1234", 3600))
            .await;
        assert_eq!(outcome, AuthOutcome::valid(false));
    }

    #[tokio::test]
    async fn test_bad_signature_and_expiry_are_invalid() {
        let auth = JwtClientAuthenticator::new(SECRET);
        let forged = token("another-secret", "AB1234", 3600);
        assert_eq!(auth.check_auth_with_client("AB1234", &forged).await, AuthOutcome::INVALID);

        let expired = token(SECRET, "AB1234", -3600);
        assert_eq!(auth.check_auth_with_client("AB1234", &expired).await, AuthOutcome::INVALID);

        assert_eq!(auth.check_auth_with_client("AB1234", "").await, AuthOutcome::INVALID);
    }
}
