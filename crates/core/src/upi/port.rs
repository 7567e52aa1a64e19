use async_trait::async_trait;

use super::entity::UpiPreferenceRequest;
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// UPI 偏好设置接口
#[async_trait]
pub trait UpiPreferenceProvider: Send + Sync {
    async fn set_preference(&self, req: UpiPreferenceRequest, header: RequestHeader) -> Reply;

    async fn get_preference(&self, req: ClientRequest, header: RequestHeader) -> Reply;
}
