use serde::{Deserialize, Serialize};

/// # Summary
/// 单次请求的元数据，由请求头提取中间件在进入 Handler 之前构建，
/// 存放于 request extensions 中。
///
/// # Invariants
/// - 生命周期等同于一次请求，Handler 只读不写。
/// - `authorization` 中已去掉 `Bearer ` 前缀。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeader {
    // 请求追踪 ID (X-Request-Id，缺失时由中间件生成)
    pub request_id: String,
    // 调用方声明的客户号 (ClientId)
    pub client_id: String,
    // 设备类型 (P-DeviceType)，为空时请求被拒绝
    pub device_type: String,
    // 设备 ID (P-DeviceId)
    pub device_id: String,
    // 平台 (P-Platform)
    pub platform: String,
    // 鉴权 Token (Authorization)
    pub authorization: String,
    // 客户端版本 (P-ClientVersion)
    pub client_version: String,
    // 客户端类型 (P-ClientType)
    pub client_type: String,
    // 客户端公网 IP (P-ClientPublicIP)
    pub public_ip: String,
}

impl RequestHeader {
    /// 设备类型是否已声明
    pub fn has_device_type(&self) -> bool {
        !self.device_type.trim().is_empty()
    }
}
