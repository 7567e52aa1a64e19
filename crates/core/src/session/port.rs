use async_trait::async_trait;

use super::entity::TerminateSessionsRequest;
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// 登录会话查询与下线接口
#[async_trait]
pub trait SessionInfoProvider: Send + Sync {
    async fn session_info(&self, req: ClientRequest, header: RequestHeader) -> Reply;

    async fn terminate_sessions(&self, req: TerminateSessionsRequest, header: RequestHeader)
    -> Reply;
}
