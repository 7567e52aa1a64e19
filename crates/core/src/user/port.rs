use async_trait::async_trait;

use super::entity::UpdateEmailRequest;
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// 客户资料接口: 基本信息、银行账户与联系方式变更。
#[async_trait]
pub trait UserDetailsProvider: Send + Sync {
    async fn user_details(&self, req: ClientRequest, header: RequestHeader) -> Reply;

    async fn bank_details(&self, req: ClientRequest, header: RequestHeader) -> Reply;

    async fn update_email(&self, req: UpdateEmailRequest, header: RequestHeader) -> Reply;
}
