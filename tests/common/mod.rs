use storefront::shared::HttpMethod;
use storefront::{HttpClient, HttpRequest, HttpResponse, StoreError, StoreResult, StorefrontApi};

/// Backend origin for the live suite, e.g. `http://localhost:8001`.
pub fn backend_url() -> Option<String> {
    std::env::var("STOREFRONT_BACKEND_URL")
        .ok()
        .filter(|v| !v.is_empty())
}

/// Skip test with message if no backend is configured.
#[macro_export]
macro_rules! require_backend {
    () => {
        match crate::common::backend_url() {
            Some(url) => url,
            None => {
                eprintln!("⚠️  Skipping: STOREFRONT_BACKEND_URL not set");
                return;
            }
        }
    };
}

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> StoreResult<HttpResponse> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &req.url);
        for (k, v) in req.headers {
            builder = builder.header(k, v);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| StoreError::network(format!("Reqwest Error: {}", e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| StoreError::network(format!("Reqwest Body Error: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

pub fn live_api(base_url: &str) -> StorefrontApi<ReqwestHttpClient> {
    StorefrontApi::new(ReqwestHttpClient::new(), base_url)
}

/// Unique address so repeated runs never collide on "Email already registered".
pub fn unique_email() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("testuser_{}@example.com", &id[..8])
}
