use crate::error::{StoreError, StoreResult};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use storefront_shared::HttpMethod;

#[cfg(test)]
use std::cell::RefCell;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    /// 序列化 JSON body 并设置 Content-Type
    pub fn with_json<T: Serialize>(self, body: &T) -> StoreResult<Self> {
        let body = serde_json::to_string(body)
            .map_err(|e| StoreError::decode(format!("请求序列化失败: {}", e)))?;
        let mut req = self.with_header("Content-Type", "application/json");
        req.body = Some(body);
        Ok(req)
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> StoreResult<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| StoreError::decode(format!("响应解析失败: {}", e)))
    }
}

/// HTTP 客户端特性 (Trait)
/// (?Send) 是因为浏览器环境下 fetch 的 Future 不是 Send 的
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> StoreResult<HttpResponse>;
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
pub struct MockHttpClient {
    // (Method, URL) -> (Status, Response Body)
    responses: RefCell<HashMap<(String, String), (u16, String)>>,
    // 发出不可达错误的 URL
    unreachable: RefCell<Vec<String>>,
    // 记录发出的请求 (Method, URL, Body)
    pub requests: RefCell<Vec<(String, String, Option<String>)>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            unreachable: RefCell::new(Vec::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.responses.borrow_mut().insert(
            (method.as_str().to_string(), url.to_string()),
            (status, body.to_string()),
        );
    }

    pub fn mock_unreachable(&self, url: &str) {
        self.unreachable.borrow_mut().push(url.to_string());
    }

    /// 统计某个 method + URL 的请求次数
    pub fn count(&self, method: HttpMethod, url: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|(m, u, _)| m == method.as_str() && u == url)
            .count()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> StoreResult<HttpResponse> {
        let method = req.method.as_str().to_string();
        self.requests
            .borrow_mut()
            .push((method.clone(), req.url.clone(), req.body.clone()));

        if self.unreachable.borrow().contains(&req.url) {
            return Err(StoreError::network("connection refused"));
        }

        let responses = self.responses.borrow();
        if let Some((status, body)) = responses.get(&(method, req.url)) {
            Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            })
        } else {
            Ok(HttpResponse {
                status: 404,
                body: r#"{"detail":"Not Found"}"#.to_string(),
            })
        }
    }
}
