//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现核心层的 `HttpClient`。

use gloo_net::http::{Method, RequestBuilder};
use storefront::shared::HttpMethod;
use storefront::{HttpClient, HttpRequest, HttpResponse, StoreError, StoreResult};

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

/// 浏览器 fetch 客户端
///
/// 超时沿用浏览器默认值，请求发出后不可取消。
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> StoreResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(to_method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| StoreError::network(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::network(format!("网络错误: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::network(format!("响应读取失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
