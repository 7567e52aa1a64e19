use async_trait::async_trait;

/// # Summary
/// 客户鉴权比对结果。
///
/// # Invariants
/// - `token_valid == false` 时 `client_matches` 没有意义，调用方必须先判断前者。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthOutcome {
    // Token 本身是否有效 (签名、有效期)
    pub token_valid: bool,
    // Token 所属客户是否与请求中的客户号一致
    pub client_matches: bool,
}

impl AuthOutcome {
    pub const INVALID: Self = Self {
        token_valid: false,
        client_matches: false,
    };

    pub fn valid(client_matches: bool) -> Self {
        Self {
            token_valid: true,
            client_matches,
        }
    }
}

/// # Summary
/// 校验 Token 并判断其是否属于请求中声明的客户。
///
/// # Invariants
/// - 实现必须是 `Send + Sync`，被所有请求并发调用。
#[async_trait]
pub trait ClientAuthenticator: Send + Sync {
    /// # Arguments
    /// * `client_id` - 请求体或查询串中的客户号。
    /// * `token` - 已去掉 `Bearer ` 前缀的 Authorization 值。
    async fn check_auth_with_client(&self, client_id: &str, token: &str) -> AuthOutcome;
}
