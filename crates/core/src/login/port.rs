use async_trait::async_trait;

use super::entity::{
    ForgotPasswordRequest, LoginRequest, OAuthAuthorizeRequest, OAuthTokenRequest,
    SetPasswordRequest, TotpRequest,
};
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// 登录、密码管理与 OAuth 授权接口。
///
/// # Invariants
/// - 令牌的签发与吊销完全由实现方负责，本层只做参数校验与转发。
#[async_trait]
pub trait LoginProvider: Send + Sync {
    async fn login(&self, req: LoginRequest, header: RequestHeader) -> Reply;

    async fn validate_totp(&self, req: TotpRequest, header: RequestHeader) -> Reply;

    async fn forgot_password(&self, req: ForgotPasswordRequest, header: RequestHeader) -> Reply;

    async fn set_password(&self, req: SetPasswordRequest, header: RequestHeader) -> Reply;

    async fn logout(&self, req: ClientRequest, header: RequestHeader) -> Reply;

    /// 为第三方应用签发授权码
    async fn authorize(&self, req: OAuthAuthorizeRequest, header: RequestHeader) -> Reply;

    /// 以授权码或刷新令牌换取访问令牌
    async fn token(&self, req: OAuthTokenRequest, header: RequestHeader) -> Reply;
}
