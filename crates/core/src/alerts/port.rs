use async_trait::async_trait;

use super::entity::{AlertIdRequest, EditAlertRequest, SetAlertRequest};
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// 价格提醒业务接口。
#[async_trait]
pub trait AlertsProvider: Send + Sync {
    async fn set_alert(&self, req: SetAlertRequest, header: RequestHeader) -> Reply;

    async fn edit_alert(&self, req: EditAlertRequest, header: RequestHeader) -> Reply;

    async fn delete_alert(&self, req: AlertIdRequest, header: RequestHeader) -> Reply;

    /// 查询客户全部生效中的提醒
    async fn get_alerts(&self, req: ClientRequest, header: RequestHeader) -> Reply;
}
