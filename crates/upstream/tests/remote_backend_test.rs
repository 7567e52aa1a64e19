use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use bourse_core::basket::entity::CreateBasketRequest;
use bourse_core::basket::port::BasketProvider;
use bourse_core::common::ClientRequest;
use bourse_core::common::header::RequestHeader;
use bourse_core::config::UpstreamConfig;
use bourse_core::sip::port::SipProvider;
use bourse_core::user::port::UserDetailsProvider;
use bourse_upstream::RemoteBackend;

/// 回显请求体与关键请求头的假业务服务
async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    (
        StatusCode::OK,
        Json(json!({
            "status": true,
            "message": "SUCCESS",
            "errorcode": "",
            "data": {
                "body": body,
                "deviceType": header("p-devicetype"),
                "authorization": header("authorization"),
                "requestId": header("x-request-id"),
            }
        })),
    )
}

async fn rejected() -> (StatusCode, Json<Value>) {
    (
        StatusCode::CONFLICT,
        Json(json!({
            "status": false,
            "message": "SIP ALREADY EXISTS",
            "errorcode": "S409",
            "data": null
        })),
    )
}

async fn not_an_envelope() -> &'static str {
    "<html>maintenance</html>"
}

async fn spawn_test_server() -> String {
    let app = Router::new()
        .route("/basket/createBasket", post(echo))
        .route("/sip/fetchSips", post(rejected))
        .route("/user/getUserDetails", post(not_an_envelope));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}

fn backend(base_url: String) -> RemoteBackend {
    RemoteBackend::new(&UpstreamConfig {
        base_url,
        timeout_ms: 2_000,
    })
    .unwrap()
}

fn header() -> RequestHeader {
    RequestHeader {
        request_id: "req-1".into(),
        device_type: "ANDROID".into(),
        authorization: "tok".into(),
        ..RequestHeader::default()
    }
}

#[tokio::test]
async fn test_body_and_headers_are_forwarded() {
    let backend = backend(spawn_test_server().await);
    let req: CreateBasketRequest = serde_json::from_value(json!({
        "LoginID": "Login1",
        "Name": "XYZ",
        "Type": "NORMAL",
        "ProductType": "ALL",
        "OrderType": "ALL"
    }))
    .unwrap();

    let (code, res) = backend.create_basket(req, header()).await;
    assert_eq!(code, 200);
    assert!(res.status);

    let data = res.data.unwrap();
    assert_eq!(data["body"]["LoginID"], "Login1");
    assert_eq!(data["body"]["Type"], "NORMAL");
    assert_eq!(data["deviceType"], "ANDROID");
    assert_eq!(data["authorization"], "Bearer tok");
    assert_eq!(data["requestId"], "req-1");
}

#[tokio::test]
async fn test_upstream_status_and_envelope_are_relayed() {
    let backend = backend(spawn_test_server().await);
    let req = ClientRequest {
        client_id: "AB1234".into(),
    };

    let (code, res) = backend.fetch_sips(req, header()).await;
    assert_eq!(code, 409);
    assert!(!res.status);
    assert_eq!(res.message, "SIP ALREADY EXISTS");
    assert_eq!(res.errorcode, "S409");
}

#[tokio::test]
async fn test_non_envelope_response_is_upstream_unavailable() {
    let backend = backend(spawn_test_server().await);
    let req = ClientRequest {
        client_id: "AB1234".into(),
    };

    let (code, res) = backend.user_details(req, header()).await;
    assert_eq!(code, 502);
    assert_eq!(res.errorcode, "P10001");
    assert_eq!(res.message, "UPSTREAM SERVICE UNAVAILABLE");
}

#[tokio::test]
async fn test_unreachable_upstream_is_upstream_unavailable() {
    // 先占用再释放一个端口，得到一个无人监听的地址
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let backend = backend(format!("http://127.0.0.1:{port}"));
    let req = ClientRequest {
        client_id: "AB1234".into(),
    };
    let (code, res) = backend.bank_details(req, header()).await;
    assert_eq!(code, 502);
    assert_eq!(res.errorcode, "P10001");
}
