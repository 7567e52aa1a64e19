use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use bourse_api::middleware::auth::{Claims, JwtClientAuthenticator};
use bourse_api::server::{AppState, Providers, app};
use bourse_core::common::response::ApiRes;
use bourse_core::testing::MockBackend;

const SECRET: &str = "workflow-secret";
const DEVICE: &str = "ANDROID";

fn mint(client_id: &str, ttl_secs: i64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let exp = usize::try_from(i64::try_from(now).unwrap() + ttl_secs).unwrap();
    let claims = Claims {
        sub: client_id.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

// 帮助函数：在随机端口启动带真实 JWT 校验的测试服务器
async fn spawn_test_server() -> (String, Arc<MockBackend>) {
    let backend = Arc::new(MockBackend::replying((
        200,
        ApiRes::with_data(json!({"watchlistId": "W1"})),
    )));
    let state = AppState::new(
        Providers::from_backend(backend.clone()),
        Arc::new(JwtClientAuthenticator::new(SECRET)),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    let router = app(state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // 稍微等待服务器启动
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    (addr, backend)
}

#[tokio::test]
async fn test_full_api_workflow() {
    let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();

    let (base_url, backend) = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = mint("AB1234", 3_600);

    // ============================================
    // Case 1: 缺少设备类型
    // ============================================
    let res = client
        .post(format!("{base_url}/watchlist/createWatchlist"))
        .bearer_auth(&token)
        .json(&json!({"clientId": "AB1234", "name": "Banks"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errorcode"], "P11034");

    // ============================================
    // Case 2: 过期 Token
    // ============================================
    let expired = mint("AB1234", -3_600);
    let res = client
        .post(format!("{base_url}/watchlist/createWatchlist"))
        .header("P-DeviceType", DEVICE)
        .bearer_auth(&expired)
        .json(&json!({"clientId": "AB1234", "name": "Banks"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errorcode"], "P11002");

    // ============================================
    // Case 3: Token 属于其他客户
    // ============================================
    let res = client
        .post(format!("{base_url}/watchlist/createWatchlist"))
        .header("P-DeviceType", DEVICE)
        .bearer_auth(mint("ZZ9999", 3_600))
        .json(&json!({"clientId": "AB1234", "name": "Banks"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "CLIENT ID MISMATCH WITH TOKEN");
    assert!(backend.calls().await.is_empty(), "被拒绝的请求不得到达 Provider");

    // ============================================
    // Case 4: 创建自选，客户号大小写不敏感
    // ============================================
    let res = client
        .post(format!("{base_url}/watchlist/createWatchlist"))
        .header("P-DeviceType", DEVICE)
        .header("X-Request-Id", "wf-1")
        .bearer_auth(&token)
        .json(&json!({"clientId": "ab1234", "name": "Banks"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: ApiRes = res.json().await.unwrap();
    assert!(created.status);
    let watchlist_id = created.data.unwrap()["watchlistId"].as_str().unwrap().to_string();

    let call = backend.last_call().await.unwrap();
    assert_eq!(call.function, "create");
    assert_eq!(call.header.request_id, "wf-1");
    assert_eq!(call.header.device_type, DEVICE);
    assert_eq!(call.header.authorization, token);

    // ============================================
    // Case 5: 添加合约
    // ============================================
    let res = client
        .post(format!("{base_url}/watchlist/addScrips"))
        .header("P-DeviceType", DEVICE)
        .bearer_auth(&token)
        .json(&json!({
            "clientId": "AB1234",
            "watchlistId": watchlist_id,
            "scrips": [{"exchange": "NSE", "token": "2885"}, {"exchange": "BSE", "token": "500325"}]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let call = backend.last_call().await.unwrap();
    assert_eq!(call.function, "add_scrips");
    assert_eq!(call.request["watchlistId"], "W1");
    assert_eq!(call.request["scrips"].as_array().unwrap().len(), 2);

    // ============================================
    // Case 6: 业务服务的失败信封原样透传
    // ============================================
    backend
        .set_reply((
            404,
            ApiRes {
                status: false,
                message: "WATCHLIST NOT FOUND".to_string(),
                errorcode: "W404".to_string(),
                data: None,
            },
        ))
        .await;
    let res = client
        .post(format!("{base_url}/watchlist/deleteWatchlist"))
        .header("P-DeviceType", DEVICE)
        .bearer_auth(&token)
        .json(&json!({"clientId": "AB1234", "watchlistId": "missing"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: ApiRes = res.json().await.unwrap();
    assert_eq!(body.errorcode, "W404");
    assert_eq!(backend.calls().await.len(), 3);

    // ============================================
    // Case 7: 自文档
    // ============================================
    let res = client
        .get(format!("{base_url}/api-docs/openapi.json"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc: Value = res.json().await.unwrap();
    assert!(doc["paths"]["/watchlist/addScrips"]["post"].is_object());
}
