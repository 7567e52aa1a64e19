use std::sync::Once;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use bourse_core::common::header::RequestHeader;
use bourse_core::common::response::{ApiRes, ErrorKind, Reply};
use bourse_core::config::UpstreamConfig;

use crate::error::UpstreamError;

/// # Summary
/// 把每个 Provider 调用转发给业务服务的 HTTP 后端。
///
/// # Invariants
/// - 业务服务的状态码与响应信封原样返回；只有网络或解码失败才改写为 `UPSTREAM SERVICE UNAVAILABLE`。
/// - `base_url` 不以 `/` 结尾。
pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteBackend {
    /// # Summary
    /// 按配置创建后端。
    ///
    /// # Arguments
    /// * `config` - 业务服务地址与请求超时。
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        ensure_crypto_provider();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(UpstreamError::Client)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 转发一次调用，任何失败都折算为 502 信封
    pub(crate) async fn forward<T: Serialize + Sync>(
        &self,
        path: &str,
        req: &T,
        header: &RequestHeader,
    ) -> Reply {
        match self.post(path, req, header).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(
                    path,
                    request_id = %header.request_id,
                    error = %e,
                    "upstream call failed"
                );
                ErrorKind::UpstreamUnavailable.reply()
            }
        }
    }

    async fn post<T: Serialize + Sync>(
        &self,
        path: &str,
        req: &T,
        header: &RequestHeader,
    ) -> Result<Reply, UpstreamError> {
        let res = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .headers(forwarded_headers(header))
            .json(req)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let code = res.status().as_u16();
        let body = res.json::<ApiRes>().await.map_err(UpstreamError::Decode)?;
        Ok((code, body))
    }
}

/// # Summary
/// 把请求头上下文还原为业务服务约定的 HTTP 头。
///
/// # Logic
/// 空值与无法编码为头部的值被跳过；Token 重新加上 `Bearer ` 前缀。
fn forwarded_headers(header: &RequestHeader) -> HeaderMap {
    let authorization = if header.authorization.is_empty() {
        String::new()
    } else {
        format!("Bearer {}", header.authorization)
    };
    let pairs: [(&'static str, &str); 9] = [
        ("x-request-id", &header.request_id),
        ("clientid", &header.client_id),
        ("p-devicetype", &header.device_type),
        ("p-deviceid", &header.device_id),
        ("p-platform", &header.platform),
        ("authorization", &authorization),
        ("p-clientversion", &header.client_version),
        ("p-clienttype", &header.client_type),
        ("p-clientpublicip", &header.public_ip),
    ];

    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        if value.is_empty() {
            continue;
        }
        if let Ok(value) = HeaderValue::from_str(value) {
            map.insert(HeaderName::from_static(name), value);
        }
    }
    map
}

fn ensure_crypto_provider() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if rustls::crypto::CryptoProvider::install_default(rustls::crypto::ring::default_provider())
            .is_err()
        {
            tracing::debug!("rustls crypto provider already installed");
        }
    });
}
