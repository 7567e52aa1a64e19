//! # 请求头提取中间件
//!
//! 在进入任何 Handler 之前把约定的请求头解析为 [`RequestHeader`]，
//! 存入 request extensions。本中间件从不拒绝请求，值是否缺失由守卫链判断。

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use bourse_core::common::header::RequestHeader;

pub const DEVICE_TYPE: &str = "p-devicetype";
pub const AUTHORIZATION: &str = "authorization";
pub const CLIENT_ID: &str = "clientid";
pub const PLATFORM: &str = "p-platform";
pub const DEVICE_ID: &str = "p-deviceid";
pub const CLIENT_PUBLIC_IP: &str = "p-clientpublicip";
pub const CLIENT_VERSION: &str = "p-clientversion";
pub const CLIENT_TYPE: &str = "p-clienttype";
pub const REQUEST_ID: &str = "x-request-id";
pub const FORWARDED_FOR: &str = "x-forwarded-for";

const BEARER_PREFIX: &str = "Bearer ";

/// 解析请求头并注入 [`RequestHeader`]
pub async fn header_middleware(mut req: Request, next: Next) -> Response {
    let header = extract_header(req.headers());
    req.extensions_mut().insert(header);
    next.run(req).await
}

/// # Summary
/// 从原始请求头构建 [`RequestHeader`]。
///
/// # Logic
/// 1. 缺失或非 ASCII 的头部按空串处理，所有值去掉首尾空白。
/// 2. `Authorization` 去掉 `Bearer ` 前缀。
/// 3. `P-ClientPublicIP` 缺失时取 `X-Forwarded-For` 的第一个地址。
/// 4. `X-Request-Id` 缺失时生成 UUIDv4。
pub fn extract_header(headers: &HeaderMap) -> RequestHeader {
    let authorization = text(headers, AUTHORIZATION);
    let authorization = authorization
        .strip_prefix(BEARER_PREFIX)
        .map(|t| t.trim().to_string())
        .unwrap_or(authorization);

    let mut public_ip = text(headers, CLIENT_PUBLIC_IP);
    if public_ip.is_empty() {
        public_ip = text(headers, FORWARDED_FOR)
            .split(',')
            .next()
            .map(|ip| ip.trim().to_string())
            .unwrap_or_default();
    }

    let mut request_id = text(headers, REQUEST_ID);
    if request_id.is_empty() {
        request_id = Uuid::new_v4().to_string();
    }

    RequestHeader {
        request_id,
        client_id: text(headers, CLIENT_ID),
        device_type: text(headers, DEVICE_TYPE),
        device_id: text(headers, DEVICE_ID),
        platform: text(headers, PLATFORM),
        authorization,
        client_version: text(headers, CLIENT_VERSION),
        client_type: text(headers, CLIENT_TYPE),
        public_ip,
    }
}

fn text(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// 在 Handler 中读取中间件注入的请求头上下文；未经过中间件时为 `None`
pub struct HeaderContext(pub Option<RequestHeader>);

impl<S> FromRequestParts<S> for HeaderContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(HeaderContext(parts.extensions.get::<RequestHeader>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            let name = HeaderName::from_bytes(name.as_bytes()).unwrap();
            map.insert(name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_all_advisory_headers_are_mapped() {
        let header = extract_header(&headers(&[
            ("P-DeviceType", "ANDROID"),
            ("Authorization", "Bearer abc.def.ghi"),
            ("ClientId", "AB1234"),
            ("P-Platform", "mobile"),
            ("P-DeviceId", "dev-1"),
            ("P-ClientPublicIP", "203.0.113.7"),
            ("P-ClientVersion", "4.2.0"),
            ("P-ClientType", "RETAIL"),
            ("X-Request-Id", "req-1"),
        ]));

        assert_eq!(
            header,
            RequestHeader {
                request_id: "req-1".into(),
                client_id: "AB1234".into(),
                device_type: "ANDROID".into(),
                device_id: "dev-1".into(),
                platform: "mobile".into(),
                authorization: "abc.def.ghi".into(),
                client_version: "4.2.0".into(),
                client_type: "RETAIL".into(),
                public_ip: "203.0.113.7".into(),
            }
        );
    }

    #[test]
    fn test_fallbacks() {
        let header = extract_header(&headers(&[
            ("Authorization", "raw-token"),
            ("X-Forwarded-For", "198.51.100.1, 10.0.0.1"),
        ]));
        assert_eq!(header.authorization, "raw-token");
        assert_eq!(header.public_ip, "198.51.100.1");
        assert!(Uuid::parse_str(&header.request_id).is_ok());
        assert!(!header.has_device_type());
    }

    #[tokio::test]
    async fn test_middleware_feeds_extractor() {
        async fn echo(HeaderContext(header): HeaderContext) -> String {
            header.map(|h| h.device_type).unwrap_or_else(|| "<none>".into())
        }

        let app = Router::new()
            .route("/echo", get(echo))
            .layer(axum::middleware::from_fn(header_middleware));
        let req = Request::builder()
            .uri("/echo")
            .header("P-DeviceType", "IOS")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"IOS");

        let bare = Router::new().route("/echo", get(echo));
        let res = bare
            .oneshot(Request::builder().uri("/echo").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<none>");
    }
}
