use async_trait::async_trait;

use super::entity::{AcknowledgeWarningRequest, ScripWarningRequest};
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// 证券风险提示接口
#[async_trait]
pub trait WarningsProvider: Send + Sync {
    async fn scrip_warnings(&self, req: ScripWarningRequest, header: RequestHeader) -> Reply;

    /// 记录客户已阅读风险提示，之后允许对该证券下单
    async fn acknowledge(&self, req: AcknowledgeWarningRequest, header: RequestHeader) -> Reply;
}
